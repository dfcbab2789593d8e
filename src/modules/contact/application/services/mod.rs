mod contact_submitter;
mod submit_contact_service;

pub use contact_submitter::ContactSubmitter;
pub use submit_contact_service::SubmitContactService;
