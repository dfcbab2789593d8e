// src/modules/portfolio/adapter/incoming/web/pages/components.rs
//
// Stateless fragments. Same input, same markup.

use crate::modules::portfolio::application::view::ProjectCardView;
use crate::shared::html::html_escape;

pub fn badge(label: &str) -> String {
    format!(
        r#"<span class="px-2 py-1 text-xs rounded-full bg-blue-100 text-blue-700 border border-blue-200">{}</span>"#,
        html_escape(label)
    )
}

pub fn stat(label: &str, value: &str) -> String {
    format!(
        r#"<div class="p-4 bg-white/70 rounded-lg border shadow-sm">
  <div class="text-xs uppercase tracking-wider text-gray-500">{label}</div>
  <div class="text-2xl font-semibold text-gray-800">{value}</div>
</div>"#,
        label = html_escape(label),
        value = html_escape(value),
    )
}

fn external_link(url: &str, text: &str) -> String {
    format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="text-blue-600 hover:underline">{}</a>"#,
        html_escape(url),
        html_escape(text)
    )
}

pub fn project_card(card: &ProjectCardView) -> String {
    let image = card
        .image_url
        .as_deref()
        .map(|src| {
            format!(
                r#"<img src="{}" alt="{}" class="w-full h-40 object-cover" />"#,
                html_escape(src),
                html_escape(&card.name)
            )
        })
        .unwrap_or_default();

    let badges: String = card.tech_stack.iter().map(|t| badge(t)).collect();

    let links: String = [
        card.repo_url.as_deref().map(|u| external_link(u, "Code")),
        card.live_url.as_deref().map(|u| external_link(u, "Live")),
    ]
    .into_iter()
    .flatten()
    .collect();

    format!(
        r#"<div class="group bg-white/80 hover:bg-white transition-colors border rounded-xl overflow-hidden shadow-sm">
  {image}
  <div class="p-5">
    <h3 class="text-xl font-semibold text-gray-900 mb-1">{name}</h3>
    <p class="text-gray-600 text-sm mb-3">{description}</p>
    <div class="flex flex-wrap gap-2 mb-4">{badges}</div>
    <div class="flex items-center gap-3 text-sm">{links}</div>
  </div>
</div>"#,
        name = html_escape(&card.name),
        description = html_escape(&card.description),
    )
}
