use super::{GatewayError, RagGateway};
use crate::shared::api_utils::{api_base, join_url};
use contracts::domain::a001_rag_chat::aggregate::{ChatRequest, ChatResponse};
use contracts::domain::a002_rag_document::aggregate::{DeleteQuery, MessageResponse};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Gateway over `fetch` (gloo-net)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRagGateway {
    base: String,
}

impl HttpRagGateway {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base, path)
    }

    fn delete_url(&self, filename: &str) -> Result<String, GatewayError> {
        let query = serde_qs::to_string(&DeleteQuery {
            filename: filename.to_string(),
        })
        .map_err(|e| GatewayError::Encode(e.to_string()))?;
        Ok(format!("{}?{}", self.url("/api/delete"), query))
    }
}

impl Default for HttpRagGateway {
    fn default() -> Self {
        Self::new(api_base())
    }
}

impl RagGateway for HttpRagGateway {
    type File = web_sys::File;

    async fn upload_file(&self, file: web_sys::File) -> Result<MessageResponse, GatewayError> {
        let form_data = web_sys::FormData::new().map_err(|e| GatewayError::Encode(format!("{e:?}")))?;
        form_data
            .append_with_blob("file", &file)
            .map_err(|e| GatewayError::Encode(format!("{e:?}")))?;

        let response = Request::post(&self.url("/api/upload"))
            .body(form_data)
            .map_err(|e| GatewayError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        read_json::<MessageResponse>(response).await
    }

    async fn delete_file(&self, filename: &str) -> Result<MessageResponse, GatewayError> {
        let response = Request::delete(&self.delete_url(filename)?)
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        read_json::<MessageResponse>(response).await
    }

    async fn chat(&self, query: &str) -> Result<String, GatewayError> {
        let request = ChatRequest {
            query: query.to_string(),
        };

        let response = Request::post(&self.url("/api/chat"))
            .json(&request)
            .map_err(|e| GatewayError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        read_json::<ChatResponse>(response)
            .await
            .map(|body| body.answer)
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, GatewayError> {
    if !response.ok() {
        return Err(GatewayError::Status(response.status()));
    }
    response
        .json::<T>()
        .await
        .map_err(|e| GatewayError::Decode(e.to_string()))
}
