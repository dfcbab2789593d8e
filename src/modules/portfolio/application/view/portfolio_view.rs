// src/modules/portfolio/application/view/portfolio_view.rs
//
// Fallbacks are applied here, at the render boundary, never to the loaded data.

use serde::Serialize;

use crate::modules::portfolio::domain::defaults::{
    non_empty, placeholder_projects, DEFAULT_BIO, DEFAULT_CORE_SKILLS, DEFAULT_HEADER_SKILLS,
    DEFAULT_NAME, DEFAULT_STACK_SIZE, DEFAULT_TITLE, DEFAULT_YEARS, HEADER_SKILL_LIMIT,
    MIN_PROJECT_COUNT, MONOGRAM,
};
use crate::modules::portfolio::domain::entities::{PortfolioSnapshot, Project, SocialLinks};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatView {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SocialLinkView {
    pub label: &'static str,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectCardView {
    pub name: String,
    pub description: String,
    pub tech_stack: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_url: Option<String>,
}

impl From<&Project> for ProjectCardView {
    fn from(project: &Project) -> Self {
        let link = |v: &Option<String>| non_empty(v.as_deref()).map(str::to_string);

        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            tech_stack: project.tech_stack.clone(),
            image_url: link(&project.image_url),
            repo_url: link(&project.repo_url),
            live_url: link(&project.live_url),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PortfolioView {
    pub monogram: &'static str,
    pub name: String,
    pub title: String,
    pub bio: String,
    pub header_skills: Vec<String>,
    pub core_skills: Vec<String>,
    /// `None` when the profile carries no social block at all.
    pub social: Option<Vec<SocialLinkView>>,
    pub stats: Vec<StatView>,
    pub projects: Vec<ProjectCardView>,
    pub placeholder_projects: bool,
}

fn text_or(value: Option<&String>, default: &str) -> String {
    non_empty(value.map(String::as_str))
        .unwrap_or(default)
        .to_string()
}

/// Whole floats print without a fraction (`7.0` shows as `7`).
fn display_number(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 => {
            (f as i64).to_string()
        }
        _ => n.to_string(),
    }
}

fn defaults_to_owned(defaults: &[&str]) -> Vec<String> {
    defaults.iter().map(|s| s.to_string()).collect()
}

fn social_links(social: &SocialLinks) -> Vec<SocialLinkView> {
    [
        ("GitHub", &social.github),
        ("LinkedIn", &social.linkedin),
        ("Website", &social.website),
    ]
    .into_iter()
    .filter_map(|(label, url)| {
        non_empty(url.as_deref()).map(|url| SocialLinkView {
            label,
            url: url.to_string(),
        })
    })
    .collect()
}

impl PortfolioView {
    pub fn from_snapshot(snapshot: &PortfolioSnapshot) -> Self {
        let profile = snapshot.profile.as_ref();
        // A present-but-empty list is still "present": no badges, no defaults.
        let skills = profile.and_then(|p| p.skills.as_ref());

        let header_skills = match skills {
            Some(skills) => skills.iter().take(HEADER_SKILL_LIMIT).cloned().collect(),
            None => defaults_to_owned(&DEFAULT_HEADER_SKILLS),
        };
        let core_skills = match skills {
            Some(skills) => skills.clone(),
            None => defaults_to_owned(&DEFAULT_CORE_SKILLS),
        };

        let years = profile
            .and_then(|p| p.years_experience.as_ref())
            .map(display_number)
            .unwrap_or_else(|| DEFAULT_YEARS.to_string());
        let stack = match skills.map(Vec::len) {
            Some(n) if n > 0 => n,
            _ => DEFAULT_STACK_SIZE,
        };

        let placeholder_projects_used = snapshot.projects.is_empty();
        let projects = if placeholder_projects_used {
            placeholder_projects()
        } else {
            snapshot.projects.clone()
        };

        Self {
            monogram: MONOGRAM,
            name: text_or(profile.and_then(|p| p.name.as_ref()), DEFAULT_NAME),
            title: text_or(profile.and_then(|p| p.title.as_ref()), DEFAULT_TITLE),
            bio: text_or(profile.and_then(|p| p.bio.as_ref()), DEFAULT_BIO),
            header_skills,
            core_skills,
            social: profile.and_then(|p| p.social.as_ref()).map(social_links),
            stats: vec![
                StatView {
                    label: "Years",
                    value: years,
                },
                StatView {
                    label: "Projects",
                    value: snapshot.projects.len().max(MIN_PROJECT_COUNT).to_string(),
                },
                StatView {
                    label: "Stack",
                    value: stack.to_string(),
                },
            ],
            projects: projects.iter().map(ProjectCardView::from).collect(),
            placeholder_projects: placeholder_projects_used,
        }
    }

    pub fn stat(&self, label: &str) -> Option<&str> {
        self.stats
            .iter()
            .find(|s| s.label == label)
            .map(|s| s.value.as_str())
    }
}
