mod submit_contact;

pub use submit_contact::{ContactSubmission, SubmitContactUseCase};
