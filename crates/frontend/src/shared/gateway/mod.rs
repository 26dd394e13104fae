//! Gateway to the RAG backend
//!
//! Three calls, one round trip each: no retry, no queueing, no caching.
//! View models are generic over [`RagGateway`] so they can run against
//! [`HttpRagGateway`] in the browser and against an in-memory fake in tests.

mod http;

#[cfg(test)]
pub mod fake;

pub use http::HttpRagGateway;

use contracts::domain::a002_rag_document::aggregate::MessageResponse;

/// Ошибка обращения к бэкенду.
///
/// Views treat every variant the same way; the variant only ends up in logs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GatewayError {
    #[error("failed to build request: {0}")]
    Encode(String),
    #[error("failed to send request: {0}")]
    Transport(String),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("failed to parse response: {0}")]
    Decode(String),
}

/// Something that can be uploaded: a browser `File` or a test double.
pub trait UploadSource {
    fn file_name(&self) -> String;
    fn file_size(&self) -> u64;
}

impl UploadSource for web_sys::File {
    fn file_name(&self) -> String {
        self.name()
    }

    fn file_size(&self) -> u64 {
        self.size() as u64
    }
}

#[allow(async_fn_in_trait)]
pub trait RagGateway: Clone + 'static {
    type File: UploadSource + 'static;

    /// `POST /api/upload`, multipart field `file`
    async fn upload_file(&self, file: Self::File) -> Result<MessageResponse, GatewayError>;

    /// `DELETE /api/delete?filename=<name>`
    async fn delete_file(&self, filename: &str) -> Result<MessageResponse, GatewayError>;

    /// `POST /api/chat`, returns only the `answer` field
    async fn chat(&self, query: &str) -> Result<String, GatewayError>;
}
