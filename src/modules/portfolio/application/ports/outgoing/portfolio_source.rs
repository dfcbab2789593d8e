// src/modules/portfolio/application/ports/outgoing/portfolio_source.rs

use async_trait::async_trait;

use crate::modules::portfolio::domain::entities::{Profile, Project};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioSourceError {
    #[error("Request to {endpoint} failed: {message}")]
    Request { endpoint: String, message: String },

    #[error("{endpoint} responded with status {status}")]
    Status { endpoint: String, status: u16 },

    #[error("Could not decode {endpoint} response: {message}")]
    Decode { endpoint: String, message: String },
}

//
// ──────────────────────────────────────────────────────────
// Port (read-only backend)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait PortfolioSource: Send + Sync {
    /// `GET {base}/profile`. A JSON `null` body yields `Ok(None)`.
    async fn fetch_profile(&self) -> Result<Option<Profile>, PortfolioSourceError>;

    /// `GET {base}/projects`, order preserved.
    async fn fetch_projects(&self) -> Result<Vec<Project>, PortfolioSourceError>;
}
