use crate::modules::portfolio::domain::entities::{
    PortfolioSnapshot, Profile, Project, SocialLinks,
};

pub fn sample_profile() -> Profile {
    Profile {
        name: Some("Ada Lovelace".to_string()),
        title: Some("Systems Engineer".to_string()),
        bio: Some("Builds analytical engines.".to_string()),
        years_experience: Some(serde_json::Number::from(9u32)),
        skills: Some(vec!["Rust".to_string(), "Actix".to_string()]),
        social: Some(SocialLinks {
            github: Some("https://github.com/ada".to_string()),
            linkedin: None,
            website: None,
        }),
    }
}

pub fn sample_project(name: &str) -> Project {
    Project {
        name: name.to_string(),
        description: format!("{name} description"),
        tech_stack: vec!["Rust".to_string()],
        image_url: None,
        repo_url: Some(format!("https://github.com/ada/{}", name.to_lowercase())),
        live_url: None,
    }
}

pub fn loaded_snapshot() -> PortfolioSnapshot {
    PortfolioSnapshot {
        profile: Some(sample_profile()),
        projects: vec![sample_project("Engine"), sample_project("Notes")],
    }
}
