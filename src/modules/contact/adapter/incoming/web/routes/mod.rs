mod submit_contact_form;
mod submit_contact_json;

pub use submit_contact_form::submit_contact_form_handler;
pub use submit_contact_json::submit_contact_json_handler;
