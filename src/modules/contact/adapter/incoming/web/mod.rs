pub mod form_view;
pub mod routes;

pub use form_view::render_contact_form;
