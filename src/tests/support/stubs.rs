use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::modules::contact::application::ports::incoming::use_cases::{
    ContactSubmission, SubmitContactUseCase,
};
use crate::modules::contact::application::ports::outgoing::{
    ContactGateway, ContactGatewayError,
};
use crate::modules::contact::domain::entities::{ContactForm, SubmissionStatus};
use crate::modules::portfolio::application::ports::incoming::use_cases::LoadPortfolioUseCase;
use crate::modules::portfolio::domain::entities::PortfolioSnapshot;

#[derive(Default, Clone)]
pub struct StubLoadPortfolioUseCase {
    snapshot: PortfolioSnapshot,
}

impl StubLoadPortfolioUseCase {
    pub fn returning(snapshot: PortfolioSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl LoadPortfolioUseCase for StubLoadPortfolioUseCase {
    async fn execute(&self) -> PortfolioSnapshot {
        self.snapshot.clone()
    }
}

/// Answers every send with the same result and records what it was given.
#[derive(Clone)]
pub struct StubContactGateway {
    result: Result<(), ContactGatewayError>,
    sent: Arc<Mutex<Vec<ContactForm>>>,
}

impl StubContactGateway {
    pub fn success() -> Self {
        Self {
            result: Ok(()),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn error(err: ContactGatewayError) -> Self {
        Self {
            result: Err(err),
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sent_forms(&self) -> Vec<ContactForm> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactGateway for StubContactGateway {
    async fn send(&self, form: ContactForm) -> Result<(), ContactGatewayError> {
        self.sent.lock().unwrap().push(form);
        self.result.clone()
    }
}

/// Settles every submission with a fixed status. Success clears the form,
/// anything else hands the posted form back.
#[derive(Clone)]
pub struct StubSubmitContactUseCase {
    status: SubmissionStatus,
    received: Arc<Mutex<Vec<ContactForm>>>,
}

impl StubSubmitContactUseCase {
    pub fn success() -> Self {
        Self::settling_with(SubmissionStatus::Success)
    }

    pub fn error(message: &str) -> Self {
        Self::settling_with(SubmissionStatus::Error(message.to_string()))
    }

    fn settling_with(status: SubmissionStatus) -> Self {
        Self {
            status,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn received_forms(&self) -> Vec<ContactForm> {
        self.received.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubmitContactUseCase for StubSubmitContactUseCase {
    async fn execute(&self, form: ContactForm) -> ContactSubmission {
        self.received.lock().unwrap().push(form.clone());
        let form = match self.status {
            SubmissionStatus::Success => ContactForm::default(),
            _ => form,
        };
        ContactSubmission {
            status: self.status.clone(),
            form,
        }
    }
}
