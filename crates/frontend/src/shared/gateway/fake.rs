//! In-memory gateway for view model tests.
//!
//! Every call is recorded. Chat and upload calls stay pending until the test
//! resolves them, so tests decide the completion order.

use super::{GatewayError, RagGateway, UploadSource};
use contracts::domain::a002_rag_document::aggregate::MessageResponse;
use futures::channel::oneshot;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct FakeFile {
    pub name: String,
    pub size: u64,
}

impl FakeFile {
    pub fn new(name: &str, size: u64) -> Self {
        Self {
            name: name.to_string(),
            size,
        }
    }
}

impl UploadSource for FakeFile {
    fn file_name(&self) -> String {
        self.name.clone()
    }

    fn file_size(&self) -> u64 {
        self.size
    }
}

type Reply<T> = oneshot::Sender<Result<T, GatewayError>>;

#[derive(Default)]
struct FakeState {
    chat_calls: Vec<String>,
    upload_calls: Vec<String>,
    delete_calls: Vec<String>,
    pending_chats: VecDeque<Reply<String>>,
    pending_uploads: Vec<(String, Reply<MessageResponse>)>,
    delete_error: Option<GatewayError>,
}

#[derive(Clone, Default)]
pub struct FakeGateway {
    state: Rc<RefCell<FakeState>>,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn chat_calls(&self) -> Vec<String> {
        self.state.borrow().chat_calls.clone()
    }

    pub fn upload_calls(&self) -> Vec<String> {
        self.state.borrow().upload_calls.clone()
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.state.borrow().delete_calls.clone()
    }

    /// Makes every following delete fail with `error`
    pub fn fail_deletes(&self, error: GatewayError) {
        self.state.borrow_mut().delete_error = Some(error);
    }

    /// Resolves the oldest pending chat call
    pub fn resolve_chat(&self, result: Result<String, GatewayError>) {
        let reply = self
            .state
            .borrow_mut()
            .pending_chats
            .pop_front()
            .expect("no pending chat call");
        let _ = reply.send(result);
    }

    /// Resolves the oldest pending upload of `name`
    pub fn resolve_upload(&self, name: &str, result: Result<(), GatewayError>) {
        let reply = {
            let mut state = self.state.borrow_mut();
            let pos = state
                .pending_uploads
                .iter()
                .position(|(n, _)| n == name)
                .unwrap_or_else(|| panic!("no pending upload for {name}"));
            state.pending_uploads.remove(pos).1
        };
        let _ = reply.send(result.map(|_| MessageResponse {
            message: "File processed successfully".to_string(),
        }));
    }
}

impl RagGateway for FakeGateway {
    type File = FakeFile;

    async fn upload_file(&self, file: FakeFile) -> Result<MessageResponse, GatewayError> {
        let (tx, rx) = oneshot::channel();
        {
            let mut state = self.state.borrow_mut();
            state.upload_calls.push(file.name.clone());
            state.pending_uploads.push((file.name, tx));
        }
        rx.await
            .unwrap_or_else(|_| Err(GatewayError::Transport("dropped".into())))
    }

    async fn delete_file(&self, filename: &str) -> Result<MessageResponse, GatewayError> {
        let mut state = self.state.borrow_mut();
        state.delete_calls.push(filename.to_string());
        match state.delete_error.clone() {
            Some(e) => Err(e),
            None => Ok(MessageResponse {
                message: format!("File deleted from context: {filename}"),
            }),
        }
    }

    async fn chat(&self, query: &str) -> Result<String, GatewayError> {
        let (tx, rx) = oneshot::channel();
        {
            let mut state = self.state.borrow_mut();
            state.chat_calls.push(query.to_string());
            state.pending_chats.push_back(tx);
        }
        rx.await
            .unwrap_or_else(|_| Err(GatewayError::Transport("dropped".into())))
    }
}
