use std::str::FromStr;

use async_trait::async_trait;
use tracing::{debug, error};

use crate::modules::portfolio::application::ports::incoming::use_cases::LoadPortfolioUseCase;
use crate::modules::portfolio::application::ports::outgoing::PortfolioSource;
use crate::modules::portfolio::domain::entities::PortfolioSnapshot;

// ============================================================================
// Policy
// ============================================================================

/// How the two independently captured read outcomes are applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Any failure discards both results.
    #[default]
    AllOrNothing,
    /// Each successful read is applied on its own.
    BestEffort,
}

impl FromStr for LoadPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all_or_nothing" => Ok(LoadPolicy::AllOrNothing),
            "best_effort" => Ok(LoadPolicy::BestEffort),
            other => Err(format!("unknown load policy: {other}")),
        }
    }
}

// ============================================================================
// Service Implementation
// ============================================================================

pub struct LoadPortfolioService<S>
where
    S: PortfolioSource,
{
    source: S,
    policy: LoadPolicy,
}

impl<S> LoadPortfolioService<S>
where
    S: PortfolioSource,
{
    pub fn new(source: S, policy: LoadPolicy) -> Self {
        Self { source, policy }
    }
}

#[async_trait]
impl<S> LoadPortfolioUseCase for LoadPortfolioService<S>
where
    S: PortfolioSource + Send + Sync,
{
    async fn execute(&self) -> PortfolioSnapshot {
        // Both reads are in flight together; neither outcome short-circuits the other.
        let (profile, projects) =
            futures::join!(self.source.fetch_profile(), self.source.fetch_projects());

        if let Err(e) = &profile {
            error!("Failed to load profile: {}", e);
        }
        if let Err(e) = &projects {
            error!("Failed to load projects: {}", e);
        }

        let snapshot = match self.policy {
            LoadPolicy::AllOrNothing => match (profile, projects) {
                (Ok(profile), Ok(projects)) => PortfolioSnapshot { profile, projects },
                _ => PortfolioSnapshot::default(),
            },
            LoadPolicy::BestEffort => PortfolioSnapshot {
                profile: profile.ok().flatten(),
                projects: projects.unwrap_or_default(),
            },
        };

        debug!(
            has_profile = snapshot.profile.is_some(),
            projects = snapshot.projects.len(),
            "Portfolio loaded"
        );

        snapshot
    }
}
