use async_trait::async_trait;

use crate::modules::contact::domain::entities::{ContactForm, SubmissionStatus};

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

/// Settled status plus the form as it should be shown afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub status: SubmissionStatus,
    pub form: ContactForm,
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

/// One submission per call. Never fails: gateway errors come back as
/// `SubmissionStatus::Error` with the form left intact.
#[async_trait]
pub trait SubmitContactUseCase: Send + Sync {
    async fn execute(&self, form: ContactForm) -> ContactSubmission;
}
