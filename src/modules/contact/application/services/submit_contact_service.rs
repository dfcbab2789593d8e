use std::sync::Arc;

use async_trait::async_trait;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactSubmission, SubmitContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::ContactGateway;
use crate::modules::contact::application::services::ContactSubmitter;
use crate::modules::contact::domain::entities::ContactForm;

/// Fills a fresh submitter with the posted fields, then submits once.
pub struct SubmitContactService {
    gateway: Arc<dyn ContactGateway + Send + Sync>,
}

impl SubmitContactService {
    pub fn new(gateway: Arc<dyn ContactGateway + Send + Sync>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl SubmitContactUseCase for SubmitContactService {
    async fn execute(&self, form: ContactForm) -> ContactSubmission {
        let submitter = ContactSubmitter::new(Arc::clone(&self.gateway));
        submitter.set_name(form.name);
        submitter.set_email(form.email);
        submitter.set_message(form.message);

        let status = submitter.submit().await;

        ContactSubmission {
            status,
            form: submitter.form(),
        }
    }
}
