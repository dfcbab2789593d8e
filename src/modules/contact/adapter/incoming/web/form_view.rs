use crate::modules::contact::domain::entities::{ContactForm, SubmissionStatus};
use crate::shared::html::html_escape;

fn status_tone(status: &SubmissionStatus) -> &'static str {
    match status {
        SubmissionStatus::Error(_) => "text-red-600",
        SubmissionStatus::Success => "text-green-600",
        SubmissionStatus::Idle | SubmissionStatus::Loading => "text-gray-600",
    }
}

/// Contact form fragment. The status line is omitted while idle.
pub fn render_contact_form(form: &ContactForm, status: &SubmissionStatus) -> String {
    let status_line = match status {
        SubmissionStatus::Idle => String::new(),
        other => format!(
            r#"<p class="text-sm {}" data-status="{}">{}</p>"#,
            status_tone(other),
            other.kind(),
            html_escape(other.message())
        ),
    };

    format!(
        r#"<form method="post" action="/contact" class="space-y-3">
  <div class="grid sm:grid-cols-2 gap-3">
    <input class="border rounded-lg p-3" name="name" placeholder="Your name" value="{name}" required />
    <input class="border rounded-lg p-3" name="email" placeholder="Email" type="email" value="{email}" required />
  </div>
  <textarea class="border rounded-lg p-3 w-full" name="message" rows="4" placeholder="Message" required>{message}</textarea>
  <button class="bg-blue-600 text-white px-5 py-3 rounded-lg font-medium hover:bg-blue-700">Send message</button>
  {status_line}
</form>"#,
        name = html_escape(&form.name),
        email = html_escape(&form.email),
        message = html_escape(&form.message),
    )
}
