//! RSVP submission dispatch.
//!
//! A single JSON POST to a configured endpoint with fire-and-forget
//! semantics: the response body is never inspected, so [`Dispatched`] means
//! "the request left without a transport error", not "the server confirmed
//! receipt". This is a deliberate reduced guarantee carried over from the
//! endpoint's contract (an opaque form-collector that does not expose a
//! readable response).

use serde::Serialize;

use crate::error::SiteError;
use crate::rsvp::RsvpDraft;

/// Proof that a submission left the client without a transport error.
///
/// Intentionally does not imply server-side acceptance; there is no
/// readable response to confirm it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched;

/// Wire payload for the submission endpoint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RsvpPayload {
    pub name: String,
    /// Guest count as the select's wire value ("1".."4", "5+")
    pub guests: String,
    pub attending: bool,
    pub message: String,
}

impl RsvpPayload {
    /// Snapshot a draft into the wire shape.
    pub fn from_draft(draft: &RsvpDraft) -> Self {
        Self {
            name: draft.name.clone(),
            guests: draft.guests.as_str().to_string(),
            attending: draft.attending,
            message: draft.message.clone(),
        }
    }
}

/// HTTP client for the submission endpoint.
///
/// The endpoint address is environment configuration; a client without one
/// rejects every dispatch with [`SiteError::EndpointMissing`] so the form
/// surfaces a retry-able failure instead of silently dropping the RSVP.
#[derive(Debug, Clone)]
pub struct RsvpClient {
    endpoint: Option<String>,
    http: reqwest::Client,
}

impl RsvpClient {
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            endpoint,
            http: reqwest::Client::new(),
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    /// POST the payload to the configured endpoint.
    ///
    /// Does not await or parse a response body; any HTTP status counts as
    /// dispatched. The only observable error is a transport-level failure.
    pub async fn dispatch(&self, payload: &RsvpPayload) -> Result<Dispatched, SiteError> {
        let endpoint = self.endpoint.as_deref().ok_or(SiteError::EndpointMissing)?;

        self.http
            .post(endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| SiteError::Dispatch(format!("Failed to reach {}: {}", endpoint, e)))?;

        tracing::info!("RSVP dispatched to {}", endpoint);
        Ok(Dispatched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rsvp::GuestCount;

    #[test]
    fn test_payload_json_shape() {
        let mut draft = RsvpDraft::empty();
        draft.name = "An".to_string();
        draft.guests = GuestCount::Two;
        draft.attending = true;
        draft.message = String::new();

        let json = serde_json::to_value(RsvpPayload::from_draft(&draft)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "An",
                "guests": "2",
                "attending": true,
                "message": "",
            })
        );
    }

    #[tokio::test]
    async fn test_dispatch_without_endpoint_fails() {
        let client = RsvpClient::new(None);
        let payload = RsvpPayload::from_draft(&RsvpDraft::empty());
        let outcome = client.dispatch(&payload).await;
        assert!(matches!(outcome, Err(SiteError::EndpointMissing)));
    }
}
