// src/modules/portfolio/adapter/outgoing/portfolio_source_http.rs

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::modules::portfolio::application::ports::outgoing::{
    PortfolioSource, PortfolioSourceError,
};
use crate::modules::portfolio::domain::entities::{Profile, Project};

const PROFILE_PATH: &str = "/profile";
const PROJECTS_PATH: &str = "/projects";

/// Reads profile and projects from the backend REST API.
#[derive(Clone)]
pub struct PortfolioSourceHttp {
    client: reqwest::Client,
    base_url: String,
}

impl PortfolioSourceHttp {
    pub fn new(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, PortfolioSourceError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {}", url);

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| PortfolioSourceError::Request {
                    endpoint: path.to_string(),
                    message: e.to_string(),
                })?;

        let status = response.status();
        if !status.is_success() {
            return Err(PortfolioSourceError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| PortfolioSourceError::Request {
                endpoint: path.to_string(),
                message: e.to_string(),
            })?;

        serde_json::from_slice(&body).map_err(|e| PortfolioSourceError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl PortfolioSource for PortfolioSourceHttp {
    async fn fetch_profile(&self) -> Result<Option<Profile>, PortfolioSourceError> {
        self.get_json(PROFILE_PATH).await
    }

    async fn fetch_projects(&self) -> Result<Vec<Project>, PortfolioSourceError> {
        self.get_json(PROJECTS_PATH).await
    }
}
