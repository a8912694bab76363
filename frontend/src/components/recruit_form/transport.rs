use common::api::SubmitResponse;
use common::form::{SubmissionTransport, TransportError};
use common::model::application::ApplicationDraft;
use gloo_net::http::Request;

pub const SUBMIT_ENDPOINT: &str = "/api/recruit";

/// Posts drafts to the recruitment endpoint.
///
/// Non-2xx responses still carry the JSON envelope, so only connection and
/// decode failures become [`TransportError`]s.
pub struct HttpTransport;

impl SubmissionTransport for HttpTransport {
    async fn send(&self, draft: ApplicationDraft) -> Result<SubmitResponse, TransportError> {
        let response = Request::post(SUBMIT_ENDPOINT)
            .json(&draft)
            .map_err(|err| TransportError::Network(err.to_string()))?
            .send()
            .await
            .map_err(|err| TransportError::Network(err.to_string()))?;

        response
            .json::<SubmitResponse>()
            .await
            .map_err(|err| TransportError::Decode(format!("status {}: {err}", response.status())))
    }
}
