// src/modules/portfolio/domain/defaults.rs
//
// Placeholder content shown whenever the backend has nothing better.

use super::entities::Project;

pub const DEFAULT_NAME: &str = "Django Developer";
pub const DEFAULT_TITLE: &str = "Backend Engineer • Python";
pub const DEFAULT_BIO: &str =
    "Passionate Django developer focused on scalable APIs, clean architecture, and DevOps.";
pub const DEFAULT_YEARS: u32 = 5;
pub const DEFAULT_STACK_SIZE: usize = 6;
pub const MIN_PROJECT_COUNT: usize = 3;
pub const HEADER_SKILL_LIMIT: usize = 4;
pub const MONOGRAM: &str = "DJ";

pub const DEFAULT_HEADER_SKILLS: [&str; 3] = ["Python", "Django", "DRF"];
pub const DEFAULT_CORE_SKILLS: [&str; 7] = [
    "Python",
    "Django",
    "DRF",
    "PostgreSQL",
    "Redis",
    "Celery",
    "Docker",
];

pub fn placeholder_projects() -> Vec<Project> {
    vec![
        Project::placeholder(
            "SaaS Platform",
            "Multi-tenant billing with Stripe",
            &["Django", "DRF", "Stripe"],
        ),
        Project::placeholder(
            "Analytics Dashboard",
            "Kafka + WebSockets for realtime metrics",
            &["Django", "Channels", "Kafka"],
        ),
        Project::placeholder(
            "Headless CMS",
            "GraphQL API with permissions",
            &["Django", "GraphQL"],
        ),
    ]
}

/// `Some` only when the field is present and not the empty string.
///
/// Whitespace-only strings count as present.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
