//! Single-shot translation client.

use std::time::Instant;

use crate::error::{ClientError, ClientResult};
use crate::http::{ApiClient, RequestId, RequestIdExt};
use crate::observability::metrics;
use crate::translation::types::{TranslateBody, TranslationRequest, TranslationResponse};

/// Backend path for translation.
pub const TRANSLATE_PATH: &str = "/translate";

/// Calls `POST {api}/translate`. One attempt, no retry.
#[derive(Debug, Clone)]
pub struct TranslationClient {
    api: ApiClient,
}

impl TranslationClient {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Translate `request`.
    ///
    /// Any transport failure, non-2xx status, or incomplete body becomes
    /// [`ClientError::TranslationFailed`]; the cause is only logged.
    pub async fn translate(&self, request: &TranslationRequest) -> ClientResult<TranslationResponse> {
        let start = Instant::now();
        let request_id = RequestId::new();
        let result = self.send(request, request_id).await;
        metrics::record_duration("translate", start);

        match result {
            Ok(response) => {
                metrics::record_translate("ok");
                Ok(response)
            }
            Err(cause) => {
                tracing::error!(request_id = %request_id, cause = %cause, "Translation error");
                metrics::record_translate("failed");
                Err(ClientError::TranslationFailed)
            }
        }
    }

    async fn send(
        &self,
        request: &TranslationRequest,
        request_id: RequestId,
    ) -> Result<TranslationResponse, String> {
        tracing::debug!(
            request_id = %request_id,
            base_url = %self.api.base_url(),
            target = %request.target_language,
            source = %request.source_or_default(),
            "Making translation request"
        );

        let response = self
            .api
            .post(TRANSLATE_PATH)
            .request_id(request_id)
            .json(&TranslateBody::from(request))
            .send()
            .await
            .map_err(|e| format!("request error: {}", e))?;

        let status = response.status();
        tracing::debug!(request_id = %request_id, status = %status, "Translation response received");

        if !status.is_success() {
            return Err(format!("upstream returned {}", status));
        }

        response
            .json::<TranslationResponse>()
            .await
            .map_err(|e| format!("invalid response: {}", e))
    }
}
