use crate::core::collector::collect_form_data;
use crate::core::number::parse_destination;
use crate::core::response::parse_remote_status;
use crate::core::status::{show_status, ERROR_MESSAGE, SUCCESS_MESSAGE};
use crate::core::validation::ValidationPolicy;
use crate::domain::model::{
    AbortReason, StatusKind, SubmissionPayload, SubmitOutcome, DESTINATION_FIELD,
};
use crate::domain::ports::{Page, Transport};
use crate::utils::error::SenderError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitState {
    Idle,
    Collecting,
    Validating,
    Sending,
    Resolved { success: bool },
}

/// Runs one form submission: collect, parse, send, then report on the page.
pub struct SubmitController<T: Transport> {
    transport: T,
    policy: ValidationPolicy,
}

impl<T: Transport> SubmitController<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            policy: ValidationPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Failures are resolved into the returned outcome and the page banner;
    /// an aborted submission leaves the page untouched.
    pub async fn submit<P: Page + ?Sized>(&self, page: &mut P) -> SubmitOutcome {
        let mut state = SubmitState::Idle;

        transition(&mut state, SubmitState::Collecting);
        let data = collect_form_data(page.controls());
        tracing::debug!("Collected {} form fields", data.len());

        transition(&mut state, SubmitState::Validating);
        let raw_destination = data.get(DESTINATION_FIELD).map(String::as_str);
        let destination = match parse_destination(raw_destination) {
            Some(destination) => destination,
            None => {
                tracing::debug!("Destination missing or unparsable, not submitting");
                transition(&mut state, SubmitState::Idle);
                return SubmitOutcome::Aborted(AbortReason::UnparsableDestination);
            }
        };
        if !destination.name.is_empty() {
            tracing::debug!("Destination label: {}", destination.name);
        }

        let payload = SubmissionPayload::new(data, &destination);
        if let Err(e) = self.policy.check(&payload) {
            tracing::warn!("Submission blocked: {}", e);
            transition(&mut state, SubmitState::Idle);
            return SubmitOutcome::Aborted(AbortReason::InvalidPayload);
        }
        tracing::debug!("Payload: {:?}", payload);

        transition(&mut state, SubmitState::Sending);
        page.set_busy(true);
        let result = self.transport.send(&payload).await;
        page.set_busy(false);

        let outcome = match result.and_then(|body| parse_remote_status(&body)) {
            Ok(status) if status.is_ok() => {
                tracing::info!("Message to {} sent", destination.number);
                show_status(page, StatusKind::Success, Some(SUCCESS_MESSAGE));
                page.clear_message();
                SubmitOutcome::Sent
            }
            Ok(status) => {
                tracing::warn!("Message service rejected the message: {:?}", status);
                show_status(page, StatusKind::Error, Some(ERROR_MESSAGE));
                SubmitOutcome::Rejected(status)
            }
            Err(e) => {
                log_failure(&e);
                show_status(page, StatusKind::Error, Some(ERROR_MESSAGE));
                SubmitOutcome::Failed(e)
            }
        };

        transition(
            &mut state,
            SubmitState::Resolved {
                success: outcome.is_sent(),
            },
        );
        transition(&mut state, SubmitState::Idle);
        outcome
    }
}

fn transition(state: &mut SubmitState, next: SubmitState) {
    tracing::debug!("Submit state {:?} -> {:?}", state, next);
    *state = next;
}

fn log_failure(e: &SenderError) {
    tracing::error!(
        "Submission failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{FormControl, StatusBanner};
    use crate::utils::error::Result;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct FakePage {
        controls: Vec<FormControl>,
        busy_log: Vec<bool>,
        banner: Option<StatusBanner>,
        message_cleared: bool,
    }

    impl Page for FakePage {
        fn controls(&self) -> Vec<FormControl> {
            self.controls.clone()
        }

        fn set_busy(&mut self, busy: bool) {
            self.busy_log.push(busy);
        }

        fn clear_message(&mut self) {
            self.message_cleared = true;
        }

        fn show_status(&mut self, banner: &StatusBanner) {
            self.banner = Some(banner.clone());
        }

        fn hide_status(&mut self) {
            self.banner = None;
        }
    }

    #[derive(Clone)]
    struct FakeTransport {
        reply: Arc<dyn Fn() -> Result<String> + Send + Sync>,
        sent: Arc<Mutex<Vec<String>>>,
    }

    impl FakeTransport {
        fn replying(body: &'static str) -> Self {
            Self {
                reply: Arc::new(move || Ok(body.to_string())),
                sent: Arc::new(Mutex::new(Vec::new())),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Arc::new(|| {
                    Err(SenderError::HttpStatus {
                        status: 502,
                        body: String::new(),
                    })
                }),
                sent: Arc::new(Mutex::new(Vec::new())),
            }
        }
    }

    #[async_trait]
    impl Transport for FakeTransport {
        async fn send(&self, payload: &SubmissionPayload) -> Result<String> {
            self.sent.lock().unwrap().push(payload.to_json()?);
            (self.reply)()
        }
    }

    fn form(destination: &str) -> FakePage {
        FakePage {
            controls: vec![
                FormControl::named("username", "u"),
                FormControl::named("destination", destination),
                FormControl::named("password", "p"),
                FormControl::named("msg", "hi"),
            ],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_submit_success_clears_message() {
        let transport = FakeTransport::replying("log line\n{\"status\":\"ok\"}\n");
        let controller = SubmitController::new(transport.clone());
        let mut page = form("123456789 - Alice");

        let outcome = controller.submit(&mut page).await;

        assert!(outcome.is_sent());
        assert_eq!(page.busy_log, vec![true, false]);
        assert!(page.message_cleared);
        assert_eq!(page.banner.unwrap().kind, StatusKind::Success);

        let sent = transport.sent.lock().unwrap();
        assert_eq!(
            sent[0],
            r#"{"destnumber":"123456789","msg":"hi","password":"p","username":"u"}"#
        );
    }

    #[tokio::test]
    async fn test_submit_rejected_keeps_message() {
        let controller = SubmitController::new(FakeTransport::replying("{\"status\":\"fail\"}"));
        let mut page = form("123456789");

        let outcome = controller.submit(&mut page).await;

        assert!(matches!(outcome, SubmitOutcome::Rejected(_)));
        assert!(!page.message_cleared);
        assert_eq!(page.banner.unwrap().text, ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_submit_transport_failure_resets_busy() {
        let controller = SubmitController::new(FakeTransport::failing());
        let mut page = form("123456789");

        let outcome = controller.submit(&mut page).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Failed(SenderError::HttpStatus { status: 502, .. })
        ));
        assert_eq!(page.busy_log, vec![true, false]);
        assert_eq!(page.banner.unwrap().kind, StatusKind::Error);
    }

    #[tokio::test]
    async fn test_submit_unparsable_destination_is_silent() {
        let transport = FakeTransport::replying("{\"status\":\"ok\"}");
        let controller = SubmitController::new(transport.clone());
        let mut page = form("abc");

        let outcome = controller.submit(&mut page).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Aborted(AbortReason::UnparsableDestination)
        ));
        assert!(page.busy_log.is_empty());
        assert!(page.banner.is_none());
        assert!(transport.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_strict_policy_blocks_invalid_username() {
        let transport = FakeTransport::replying("{\"status\":\"ok\"}");
        let controller =
            SubmitController::new(transport.clone()).with_policy(ValidationPolicy::Strict);
        let mut page = form("123456789");

        let outcome = controller.submit(&mut page).await;

        assert!(matches!(
            outcome,
            SubmitOutcome::Aborted(AbortReason::InvalidPayload)
        ));
        assert!(transport.sent.lock().unwrap().is_empty());
    }
}
