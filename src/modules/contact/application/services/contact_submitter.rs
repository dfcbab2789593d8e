use std::fmt;
use std::sync::Arc;

use tokio::sync::watch;
use tracing::{info, warn};

use crate::modules::contact::application::ports::outgoing::ContactGateway;
use crate::modules::contact::domain::entities::{ContactForm, SubmissionStatus};

/// Owns one contact form's state and drives its submissions.
///
/// Status moves `Loading` → `Success | Error` on every submit and is never
/// reset to `Idle`. Overlapping submits are not serialized: whichever
/// response settles last decides the visible status.
pub struct ContactSubmitter {
    gateway: Arc<dyn ContactGateway + Send + Sync>,
    form: watch::Sender<ContactForm>,
    status: watch::Sender<SubmissionStatus>,
}

impl fmt::Debug for ContactSubmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContactSubmitter")
            .field("gateway", &"<dyn ContactGateway>")
            .field("form", &*self.form.borrow())
            .field("status", &*self.status.borrow())
            .finish()
    }
}

impl ContactSubmitter {
    pub fn new(gateway: Arc<dyn ContactGateway + Send + Sync>) -> Self {
        let (form, _) = watch::channel(ContactForm::default());
        let (status, _) = watch::channel(SubmissionStatus::Idle);
        Self {
            gateway,
            form,
            status,
        }
    }

    pub fn set_name(&self, name: impl Into<String>) {
        let name = name.into();
        self.form.send_modify(|f| f.name = name);
    }

    pub fn set_email(&self, email: impl Into<String>) {
        let email = email.into();
        self.form.send_modify(|f| f.email = email);
    }

    pub fn set_message(&self, message: impl Into<String>) {
        let message = message.into();
        self.form.send_modify(|f| f.message = message);
    }

    pub fn form(&self) -> ContactForm {
        self.form.borrow().clone()
    }

    pub async fn submit(&self) -> SubmissionStatus {
        let form = self.form();

        // Must be visible before the request leaves.
        self.status.send_replace(SubmissionStatus::Loading);

        let settled = match self.gateway.send(form).await {
            Ok(()) => {
                info!("Contact message delivered");
                self.form.send_replace(ContactForm::default());
                SubmissionStatus::Success
            }
            Err(e) => {
                warn!("Contact submission failed: {}", e);
                SubmissionStatus::Error(e.to_string())
            }
        };

        self.status.send_replace(settled.clone());
        settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use mockall::{mock, predicate::*};
    use tokio::sync::oneshot;

    use crate::modules::contact::application::ports::outgoing::ContactGatewayError;

    mock! {
        pub Gateway {}
        #[async_trait]
        impl ContactGateway for Gateway {
            async fn send(&self, form: ContactForm) -> Result<(), ContactGatewayError>;
        }
    }

    /// Holds each request open until the test releases it, keyed by message text.
    struct ScriptedGateway {
        pending: Mutex<HashMap<String, oneshot::Receiver<Result<(), ContactGatewayError>>>>,
    }

    #[async_trait]
    impl ContactGateway for ScriptedGateway {
        async fn send(&self, form: ContactForm) -> Result<(), ContactGatewayError> {
            let rx = self.pending.lock().unwrap().remove(&form.message).unwrap();
            rx.await.unwrap()
        }
    }

    fn current_status(submitter: &ContactSubmitter) -> SubmissionStatus {
        submitter.status.borrow().clone()
    }

    fn filled_submitter(gateway: MockGateway) -> ContactSubmitter {
        let submitter = ContactSubmitter::new(Arc::new(gateway));
        submitter.set_name("Ada");
        submitter.set_email("ada@example.com");
        submitter.set_message("Hello there");
        submitter
    }

    #[test]
    fn starts_idle_with_empty_form() {
        let submitter = ContactSubmitter::new(Arc::new(MockGateway::new()));

        assert_eq!(current_status(&submitter), SubmissionStatus::Idle);
        assert_eq!(submitter.form(), ContactForm::default());
    }

    #[tokio::test]
    async fn success_sends_form_and_clears_it() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_send()
            .with(eq(ContactForm::new("Ada", "ada@example.com", "Hello there")))
            .times(1)
            .returning(|_| Ok(()));

        let submitter = filled_submitter(gateway);

        let settled = submitter.submit().await;

        assert_eq!(settled, SubmissionStatus::Success);
        assert_eq!(
            current_status(&submitter).message(),
            "Sent! I will get back to you shortly."
        );
        assert_eq!(submitter.form(), ContactForm::default());
    }

    #[tokio::test]
    async fn loading_is_published_before_the_request() {
        let submitter_status: Arc<Mutex<Option<watch::Receiver<SubmissionStatus>>>> =
            Arc::new(Mutex::new(None));
        let observed = Arc::clone(&submitter_status);

        let mut gateway = MockGateway::new();
        gateway.expect_send().times(1).returning(move |_| {
            let rx = observed.lock().unwrap().clone().unwrap();
            assert_eq!(*rx.borrow(), SubmissionStatus::Loading);
            assert_eq!(rx.borrow().message(), "Sending...");
            Ok(())
        });

        let submitter = filled_submitter(gateway);
        *submitter_status.lock().unwrap() = Some(submitter.status.subscribe());

        assert_eq!(submitter.submit().await, SubmissionStatus::Success);
    }

    #[tokio::test]
    async fn rejected_response_reports_failed_to_send_and_keeps_form() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_send()
            .times(1)
            .returning(|_| Err(ContactGatewayError::Rejected { status: 500 }));

        let submitter = filled_submitter(gateway);

        let settled = submitter.submit().await;

        assert_eq!(settled, SubmissionStatus::Error("Failed to send".to_string()));
        assert_eq!(
            submitter.form(),
            ContactForm::new("Ada", "ada@example.com", "Hello there")
        );
    }

    #[tokio::test]
    async fn transport_failure_surfaces_the_underlying_text() {
        let mut gateway = MockGateway::new();
        gateway.expect_send().times(1).returning(|_| {
            Err(ContactGatewayError::Transport(
                "error sending request: connection refused".to_string(),
            ))
        });

        let submitter = filled_submitter(gateway);

        let settled = submitter.submit().await;

        assert_eq!(settled.kind(), "error");
        assert_eq!(settled.message(), "error sending request: connection refused");
    }

    #[tokio::test]
    async fn status_persists_until_the_next_submit() {
        let mut gateway = MockGateway::new();
        let mut seq = mockall::Sequence::new();
        gateway
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(ContactGatewayError::Rejected { status: 502 }));
        gateway
            .expect_send()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let submitter = filled_submitter(gateway);

        submitter.submit().await;
        submitter.set_message("Edited after failure");
        assert_eq!(current_status(&submitter).kind(), "error");

        assert_eq!(submitter.submit().await, SubmissionStatus::Success);
        assert_eq!(current_status(&submitter), SubmissionStatus::Success);
    }

    #[tokio::test]
    async fn overlapping_submits_last_settled_wins() {
        let (first_tx, first_rx) = oneshot::channel();
        let (second_tx, second_rx) = oneshot::channel();
        let mut pending = HashMap::new();
        pending.insert("first".to_string(), first_rx);
        pending.insert("second".to_string(), second_rx);

        let submitter = ContactSubmitter::new(Arc::new(ScriptedGateway {
            pending: Mutex::new(pending),
        }));
        submitter.set_name("Ada");
        submitter.set_email("ada@example.com");
        submitter.set_message("first");
        let mut status_rx = submitter.status.subscribe();

        // First attempt snapshots its form and parks inside the gateway.
        let first = submitter.submit();
        tokio::pin!(first);
        assert!(futures::poll!(&mut first).is_pending());

        let second = async {
            submitter.set_message("second");
            submitter.submit().await
        };
        let driver = async {
            second_tx.send(Ok(())).unwrap();
            status_rx
                .wait_for(|s| *s == SubmissionStatus::Success)
                .await
                .unwrap();
            first_tx
                .send(Err(ContactGatewayError::Rejected { status: 500 }))
                .unwrap();
        };

        let (first_status, second_status, ()) = tokio::join!(first, second, driver);

        assert_eq!(second_status, SubmissionStatus::Success);
        assert_eq!(first_status.message(), "Failed to send");
        assert_eq!(current_status(&submitter), first_status);
        // The successful attempt already cleared the form.
        assert_eq!(submitter.form(), ContactForm::default());
    }
}
