// src/modules/contact/domain/entities.rs
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

pub const SENDING_MESSAGE: &str = "Sending...";
pub const SENT_MESSAGE: &str = "Sent! I will get back to you shortly.";

/// The three controlled fields of the contact form. Serialized as the POST body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }
}

/// Outcome of the most recently settled submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl SubmissionStatus {
    pub fn kind(&self) -> &'static str {
        match self {
            SubmissionStatus::Idle => "idle",
            SubmissionStatus::Loading => "loading",
            SubmissionStatus::Success => "success",
            SubmissionStatus::Error(_) => "error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            SubmissionStatus::Idle => "",
            SubmissionStatus::Loading => SENDING_MESSAGE,
            SubmissionStatus::Success => SENT_MESSAGE,
            SubmissionStatus::Error(msg) => msg,
        }
    }
}

impl Serialize for SubmissionStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("SubmissionStatus", 2)?;
        state.serialize_field("type", self.kind())?;
        state.serialize_field("message", self.message())?;
        state.end()
    }
}
