// src/modules/portfolio/adapter/incoming/web/pages/home_page.rs

use actix_web::http::header::ContentType;
use actix_web::HttpResponse;
use chrono::Datelike;

use super::components::{badge, project_card, stat};
use crate::modules::portfolio::application::view::PortfolioView;
use crate::shared::html::html_escape;

fn social_html(view: &PortfolioView) -> String {
    let Some(links) = &view.social else {
        return String::new();
    };

    let anchors: String = links
        .iter()
        .map(|link| {
            format!(
                r#"<a href="{}" target="_blank" rel="noopener noreferrer" class="hover:underline">{}</a>"#,
                html_escape(&link.url),
                html_escape(link.label)
            )
        })
        .collect();

    format!(r#"<div class="flex gap-4 mt-4 text-blue-600 text-sm">{anchors}</div>"#)
}

/// Renders the whole page. `contact_form_html` is inserted verbatim.
pub fn render_home_page(view: &PortfolioView, contact_form_html: &str, year: i32) -> String {
    let header_badges: String = view.header_skills.iter().map(|s| badge(s)).collect();
    let core_badges: String = view.core_skills.iter().map(|s| badge(s)).collect();
    let stats: String = view.stats.iter().map(|s| stat(s.label, &s.value)).collect();
    let cards: String = view.projects.iter().map(project_card).collect();
    let name = html_escape(&view.name);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>{name}</title>
  <script src="https://cdn.tailwindcss.com"></script>
</head>
<body>
<div class="min-h-screen bg-gradient-to-br from-slate-50 to-blue-50">
  <header class="max-w-6xl mx-auto px-6 py-10 flex items-center justify-between">
    <div class="flex items-center gap-4">
      <div class="h-12 w-12 rounded-xl bg-blue-600 text-white grid place-items-center font-bold">{monogram}</div>
      <div>
        <h1 class="text-2xl font-bold text-gray-900">{name}</h1>
        <p class="text-gray-600">{title}</p>
      </div>
    </div>
    <div class="hidden sm:flex gap-2">{header_badges}</div>
  </header>

  <main class="max-w-6xl mx-auto px-6 pb-16">
    <section class="grid lg:grid-cols-3 gap-6 mb-10">
      <div class="lg:col-span-2 p-6 bg-white/80 rounded-2xl border">
        <h2 class="text-xl font-semibold text-gray-900 mb-3">About</h2>
        <p class="text-gray-700 leading-relaxed">{bio}</p>
        {social}
      </div>
      <div class="grid sm:grid-cols-3 gap-4">{stats}</div>
    </section>

    <section class="mb-12">
      <div class="flex items-center justify-between mb-4">
        <h2 class="text-xl font-semibold text-gray-900">Featured Projects</h2>
        <a href="/test" class="text-sm text-gray-500 hover:text-gray-700">Backend test</a>
      </div>
      <div class="grid sm:grid-cols-2 lg:grid-cols-3 gap-6">{cards}</div>
    </section>

    <section class="grid lg:grid-cols-3 gap-6">
      <div class="lg:col-span-2 p-6 bg-white/80 rounded-2xl border">
        <h2 class="text-xl font-semibold text-gray-900 mb-4">Contact</h2>
        {contact_form_html}
      </div>
      <div class="p-6 bg-white/80 rounded-2xl border">
        <h3 class="text-lg font-semibold mb-2 text-gray-900">Core Skills</h3>
        <div class="flex flex-wrap gap-2">{core_badges}</div>
      </div>
    </section>
  </main>

  <footer class="text-center text-xs text-gray-500 py-8">&copy; {year} {name}. Built with love for Python.</footer>
</div>
</body>
</html>"#,
        monogram = view.monogram,
        title = html_escape(&view.title),
        bio = html_escape(&view.bio),
        social = social_html(view),
    )
}

pub fn home_page_response(view: &PortfolioView, contact_form_html: &str) -> HttpResponse {
    let year = chrono::Utc::now().year();
    HttpResponse::Ok()
        .content_type(ContentType::html())
        .body(render_home_page(view, contact_form_html, year))
}
