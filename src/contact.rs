use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::config::{ConfigError, RelayConfig};

pub const EMAILJS_SEND_URL: &str = "https://api.emailjs.com/api/v1.0/email/send";

pub const SUCCESS_MESSAGE: &str =
    "Message sent! Thanks for reaching out. I'll get back to you soon.";
pub const FAILURE_MESSAGE: &str =
    "Failed to send message. Please try again or contact me directly.";

/// Raw contents of the contact form, named as the email template expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactFields {
    pub from_name: String,
    pub from_email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

impl SubmissionState {
    pub fn is_submitting(self) -> bool {
        self == Self::Submitting
    }

    pub fn button_label(self) -> &'static str {
        if self.is_submitting() {
            "Sending..."
        } else {
            "Send Message"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: &'static str,
}

impl Notification {
    pub fn success() -> Self {
        Self {
            level: NotificationLevel::Success,
            message: SUCCESS_MESSAGE,
        }
    }

    pub fn failure() -> Self {
        Self {
            level: NotificationLevel::Error,
            message: FAILURE_MESSAGE,
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("email relay is not configured: {0}")]
    Config(#[from] ConfigError),
    #[error("couldn't reach email relay: {0}")]
    Transport(String),
    #[error("email relay rejected the message with status {0}")]
    Rejected(StatusCode),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("a message is already being sent")]
    InFlight,
}

/// Service that delivers a contact message and reports the reply status.
#[allow(async_fn_in_trait)]
pub trait EmailRelay {
    async fn send(&self, fields: &ContactFields) -> Result<StatusCode, RelayError>;
}

/// The form a submission belongs to: it shows progress and notifications
/// and owns the field values.
pub trait FormSurface {
    fn state(&self) -> SubmissionState;
    fn set_state(&self, state: SubmissionState);
    fn notify(&self, notification: Notification);
    fn reset_fields(&self);
}

// Returns the form to idle however the submission ends, including when the
// future is dropped mid-flight.
struct IdleOnDrop<'a, F: FormSurface>(&'a F);

impl<F: FormSurface> Drop for IdleOnDrop<'_, F> {
    fn drop(&mut self) {
        self.0.set_state(SubmissionState::Idle);
    }
}

/// Relays `fields` and reports the outcome on `form`.
///
/// Delivery problems are reported to the user and returned as the inner
/// error; the outer error only signals that another submission is pending.
pub async fn submit_contact<R, F>(
    relay: &R,
    form: &F,
    fields: ContactFields,
) -> Result<Result<(), RelayError>, ContactError>
where
    R: EmailRelay,
    F: FormSurface,
{
    if form.state().is_submitting() {
        return Err(ContactError::InFlight);
    }
    form.set_state(SubmissionState::Submitting);
    let _idle = IdleOnDrop(form);

    let delivery = match relay.send(&fields).await {
        Ok(status) if status == StatusCode::OK => Ok(()),
        Ok(status) => Err(RelayError::Rejected(status)),
        Err(e) => Err(e),
    };

    match &delivery {
        Ok(()) => {
            form.set_state(SubmissionState::Succeeded);
            form.notify(Notification::success());
            form.reset_fields();
        }
        Err(e) => {
            log::warn!("contact message not delivered: {}", e);
            form.set_state(SubmissionState::Failed);
            form.notify(Notification::failure());
        }
    }
    Ok(delivery)
}

#[derive(Serialize)]
struct EmailJsRequest<'a> {
    service_id: &'a str,
    template_id: &'a str,
    user_id: &'a str,
    template_params: &'a ContactFields,
}

/// Delivers contact messages through the EmailJS REST API.
#[derive(Debug, Clone)]
pub struct EmailJsRelay {
    client: reqwest::Client,
    config: Result<RelayConfig, ConfigError>,
}

impl EmailJsRelay {
    pub fn new(config: RelayConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config: Ok(config),
        }
    }

    /// Uses the identifiers baked in at build time. A missing identifier
    /// makes every send fail rather than the page.
    pub fn from_build_env() -> Self {
        Self {
            client: reqwest::Client::new(),
            config: RelayConfig::from_build_env(),
        }
    }
}

impl EmailRelay for EmailJsRelay {
    async fn send(&self, fields: &ContactFields) -> Result<StatusCode, RelayError> {
        let config = self.config.as_ref().map_err(|e| e.clone())?;
        let body = EmailJsRequest {
            service_id: &config.service_id,
            template_id: &config.template_id,
            user_id: &config.public_key,
            template_params: fields,
        };
        let res = self
            .client
            .post(EMAILJS_SEND_URL)
            .json(&body)
            .send()
            .await
            .map_err(|e| RelayError::Transport(e.to_string()))?;
        Ok(res.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    enum Reply {
        Status(StatusCode),
        Fail,
    }

    struct FakeRelay {
        reply: Reply,
        sent: RefCell<Vec<ContactFields>>,
    }

    impl FakeRelay {
        fn replying(reply: Reply) -> Self {
            Self {
                reply,
                sent: RefCell::new(Vec::new()),
            }
        }
    }

    impl EmailRelay for FakeRelay {
        async fn send(&self, fields: &ContactFields) -> Result<StatusCode, RelayError> {
            self.sent.borrow_mut().push(fields.clone());
            match self.reply {
                Reply::Status(status) => Ok(status),
                Reply::Fail => Err(RelayError::Transport("connection reset".to_string())),
            }
        }
    }

    #[derive(Default)]
    struct FakeForm {
        state: Cell<SubmissionState>,
        history: RefCell<Vec<SubmissionState>>,
        notifications: RefCell<Vec<Notification>>,
        resets: Cell<usize>,
    }

    impl FormSurface for FakeForm {
        fn state(&self) -> SubmissionState {
            self.state.get()
        }

        fn set_state(&self, state: SubmissionState) {
            self.state.set(state);
            self.history.borrow_mut().push(state);
        }

        fn notify(&self, notification: Notification) {
            self.notifications.borrow_mut().push(notification);
        }

        fn reset_fields(&self) {
            self.resets.set(self.resets.get() + 1);
        }
    }

    fn fields() -> ContactFields {
        ContactFields {
            from_name: "Ada".to_string(),
            from_email: "ada@example.com".to_string(),
            message: "Hello there".to_string(),
        }
    }

    #[tokio::test]
    async fn test_successful_delivery() {
        let relay = FakeRelay::replying(Reply::Status(StatusCode::OK));
        let form = FakeForm::default();

        let res = submit_contact(&relay, &form, fields()).await;
        assert_eq!(res, Ok(Ok(())));
        assert_eq!(*relay.sent.borrow(), vec![fields()]);
        assert_eq!(*form.notifications.borrow(), vec![Notification::success()]);
        assert_eq!(form.resets.get(), 1);
        assert_eq!(
            *form.history.borrow(),
            vec![
                SubmissionState::Submitting,
                SubmissionState::Succeeded,
                SubmissionState::Idle
            ]
        );
    }

    #[tokio::test]
    async fn test_rejected_status_is_failure() {
        let relay = FakeRelay::replying(Reply::Status(StatusCode::BAD_REQUEST));
        let form = FakeForm::default();

        let res = submit_contact(&relay, &form, fields()).await;
        assert_eq!(
            res,
            Ok(Err(RelayError::Rejected(StatusCode::BAD_REQUEST)))
        );
        assert_eq!(*form.notifications.borrow(), vec![Notification::failure()]);
        assert_eq!(form.resets.get(), 0);
        assert_eq!(form.state(), SubmissionState::Idle);
    }

    #[tokio::test]
    async fn test_non_ok_success_codes_are_failures() {
        let relay = FakeRelay::replying(Reply::Status(StatusCode::ACCEPTED));
        let form = FakeForm::default();

        let res = submit_contact(&relay, &form, fields()).await;
        assert!(matches!(res, Ok(Err(RelayError::Rejected(_)))));
        assert_eq!(form.notifications.borrow().len(), 1);
        assert_eq!(form.resets.get(), 0);
    }

    #[tokio::test]
    async fn test_transport_error_matches_rejection() {
        let relay = FakeRelay::replying(Reply::Fail);
        let form = FakeForm::default();

        let res = submit_contact(&relay, &form, fields()).await;
        assert!(matches!(res, Ok(Err(RelayError::Transport(_)))));
        assert_eq!(*form.notifications.borrow(), vec![Notification::failure()]);
        assert_eq!(form.resets.get(), 0);
        assert_eq!(
            *form.history.borrow(),
            vec![
                SubmissionState::Submitting,
                SubmissionState::Failed,
                SubmissionState::Idle
            ]
        );
    }

    #[tokio::test]
    async fn test_second_submission_rejected_while_pending() {
        let relay = FakeRelay::replying(Reply::Status(StatusCode::OK));
        let form = FakeForm::default();
        form.state.set(SubmissionState::Submitting);

        let res = submit_contact(&relay, &form, fields()).await;
        assert_eq!(res, Err(ContactError::InFlight));
        assert!(relay.sent.borrow().is_empty());
        assert!(form.notifications.borrow().is_empty());
        assert_eq!(form.state(), SubmissionState::Submitting);
    }

    #[test]
    fn test_dropped_submission_returns_to_idle() {
        use std::future::Future;

        struct PendingRelay;
        impl EmailRelay for PendingRelay {
            async fn send(&self, _fields: &ContactFields) -> Result<StatusCode, RelayError> {
                std::future::pending().await
            }
        }

        let form = FakeForm::default();
        {
            let submission = submit_contact(&PendingRelay, &form, fields());
            let mut submission = std::pin::pin!(submission);
            let waker = std::task::Waker::noop();
            let mut cx = std::task::Context::from_waker(waker);
            assert!(submission.as_mut().poll(&mut cx).is_pending());
            assert_eq!(form.state(), SubmissionState::Submitting);
        }
        assert_eq!(form.state(), SubmissionState::Idle);
        assert!(form.notifications.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_unconfigured_relay_fails_without_request() {
        let relay = EmailJsRelay {
            client: reqwest::Client::new(),
            config: Err(ConfigError::Missing("EMAILJS_SERVICE_ID")),
        };
        let res = relay.send(&fields()).await;
        assert_eq!(
            res,
            Err(RelayError::Config(ConfigError::Missing("EMAILJS_SERVICE_ID")))
        );
    }

    #[test]
    fn test_emailjs_payload_shape() {
        let fields = fields();
        let body = EmailJsRequest {
            service_id: "svc",
            template_id: "tpl",
            user_id: "key",
            template_params: &fields,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "service_id": "svc",
                "template_id": "tpl",
                "user_id": "key",
                "template_params": {
                    "from_name": "Ada",
                    "from_email": "ada@example.com",
                    "message": "Hello there",
                }
            })
        );
    }

    #[test]
    fn test_button_label() {
        assert_eq!(SubmissionState::Submitting.button_label(), "Sending...");
        assert_eq!(SubmissionState::Idle.button_label(), "Send Message");
        assert_eq!(SubmissionState::Failed.button_label(), "Send Message");
    }
}
