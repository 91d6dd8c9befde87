use futures::future::{FutureExt, LocalBoxFuture};
use gloo_net::http::Request;
use serde::{Deserialize, Serialize};
use std::rc::Rc;
use thiserror::Error;

use crate::config;

/// Normalized body handed to whatever delivers the inquiry.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
pub struct NotificationPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub country: String,
    pub service: String,
    pub message: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct SubmissionResult {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

impl SubmissionResult {
    pub fn ok() -> Self {
        Self { success: true, error: None }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransportError {
    #[error("notification was rejected: {0}")]
    Rejected(String),
    #[error("notification request failed: {0}")]
    Failed(String),
}

pub trait NotificationTransport {
    fn send(
        &self,
        payload: NotificationPayload,
    ) -> LocalBoxFuture<'static, Result<SubmissionResult, TransportError>>;
}

impl<T: NotificationTransport + ?Sized> NotificationTransport for Rc<T> {
    fn send(
        &self,
        payload: NotificationPayload,
    ) -> LocalBoxFuture<'static, Result<SubmissionResult, TransportError>> {
        (**self).send(payload)
    }
}

/// Posts the payload as JSON to a configured endpoint.
pub struct HttpTransport {
    endpoint: String,
}

impl HttpTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self { endpoint: endpoint.into() }
    }
}

impl NotificationTransport for HttpTransport {
    fn send(
        &self,
        payload: NotificationPayload,
    ) -> LocalBoxFuture<'static, Result<SubmissionResult, TransportError>> {
        let endpoint = self.endpoint.clone();
        async move {
            log::info!("posting lead for {} to {}", payload.email, endpoint);
            let request = Request::post(&endpoint)
                .json(&payload)
                .map_err(|e| TransportError::Failed(e.to_string()))?;

            let response = request
                .send()
                .await
                .map_err(|e| TransportError::Failed(format!("Request failed: {}", e)))?;

            let status = response.status();
            let body = response
                .text()
                .await
                .map_err(|e| TransportError::Failed(format!("Failed to read response: {}", e)))?;
            interpret_response(status, &body)
        }
        .boxed_local()
    }
}

/// Maps an endpoint reply onto the transport's result.
fn interpret_response(status: u16, body: &str) -> Result<SubmissionResult, TransportError> {
    if !(200..300).contains(&status) {
        log::warn!("lead endpoint answered with status {}", status);
        return Err(TransportError::Failed(format!("unexpected status {}", status)));
    }
    serde_json::from_str::<SubmissionResult>(body)
        .map_err(|e| TransportError::Failed(format!("Failed to parse response: {}", e)))
}

/// Stand-in used until a delivery backend is configured: nothing leaves the
/// browser.
pub struct LogOnlyTransport;

impl NotificationTransport for LogOnlyTransport {
    fn send(
        &self,
        payload: NotificationPayload,
    ) -> LocalBoxFuture<'static, Result<SubmissionResult, TransportError>> {
        log::info!(
            "no lead endpoint configured, dropping inquiry: {}",
            serde_json::to_string(&payload).unwrap_or_default()
        );
        futures::future::ready(Ok(SubmissionResult::ok())).boxed_local()
    }
}

pub fn transport_from_config() -> Rc<dyn NotificationTransport> {
    match config::lead_endpoint() {
        Some(endpoint) => Rc::new(HttpTransport::new(endpoint)),
        None => Rc::new(LogOnlyTransport),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    #[test]
    fn log_only_transport_always_succeeds() {
        let result = block_on(LogOnlyTransport.send(NotificationPayload::default()));
        assert_eq!(result, Ok(SubmissionResult::ok()));
    }

    #[test]
    fn submission_result_error_is_optional() {
        let parsed: SubmissionResult = serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert_eq!(parsed, SubmissionResult::ok());

        let parsed: SubmissionResult =
            serde_json::from_str(r#"{"success":false,"error":"mailbox full"}"#).unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.error.as_deref(), Some("mailbox full"));
    }

    #[test]
    fn non_success_status_is_a_failure() {
        for status in [199, 302, 404, 500, 503] {
            assert_eq!(
                interpret_response(status, r#"{"success":true}"#),
                Err(TransportError::Failed(format!("unexpected status {}", status)))
            );
        }
    }

    #[test]
    fn malformed_body_is_a_failure() {
        for body in ["", "<html>oops</html>", r#"{"ok":true}"#] {
            match interpret_response(200, body) {
                Err(TransportError::Failed(reason)) => {
                    assert!(reason.starts_with("Failed to parse response"), "{reason}")
                }
                other => panic!("expected a parse failure for {body:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn success_status_passes_the_reply_through() {
        assert_eq!(
            interpret_response(201, r#"{"success":false,"error":"spam filter"}"#),
            Ok(SubmissionResult {
                success: false,
                error: Some("spam filter".into()),
            })
        );
        assert_eq!(interpret_response(200, r#"{"success":true}"#), Ok(SubmissionResult::ok()));
    }

    #[test]
    fn payload_serializes_flat() {
        let payload = NotificationPayload {
            name: "Jane Doe".into(),
            email: "jane@x.com".into(),
            ..Default::default()
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["name"], "Jane Doe");
        assert_eq!(value["email"], "jane@x.com");
        assert_eq!(value["message"], "");
    }
}
