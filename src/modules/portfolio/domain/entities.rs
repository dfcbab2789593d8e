// src/modules/portfolio/domain/entities.rs
use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLinks {
    pub github: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

/// Profile as served by `GET /profile`. Every field may be absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub name: Option<String>,
    pub title: Option<String>,
    pub bio: Option<String>,
    pub years_experience: Option<serde_json::Number>,
    pub skills: Option<Vec<String>>,
    pub social: Option<SocialLinks>,
}

/// One item of `GET /projects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tech_stack: Vec<String>,
    pub image_url: Option<String>,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
}

impl Project {
    pub fn placeholder(name: &str, description: &str, tech_stack: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            tech_stack: tech_stack.iter().map(|t| t.to_string()).collect(),
            image_url: None,
            repo_url: None,
            live_url: None,
        }
    }
}

/// What one load leaves in view state. Replaced wholesale, never patched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PortfolioSnapshot {
    pub profile: Option<Profile>,
    pub projects: Vec<Project>,
}
