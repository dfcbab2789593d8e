use async_trait::async_trait;

use crate::modules::contact::domain::entities::ContactForm;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactGatewayError {
    /// Backend answered with a non-2xx status.
    #[error("Failed to send")]
    Rejected { status: u16 },

    /// The request never produced a response; carries the client's own error text.
    #[error("{0}")]
    Transport(String),
}

#[async_trait]
pub trait ContactGateway: Send + Sync {
    async fn send(&self, form: ContactForm) -> Result<(), ContactGatewayError>;
}
