//! RAG Chat Panel - View Model

use crate::shared::gateway::RagGateway;
use contracts::domain::a001_rag_chat::aggregate::ChatThread;
use leptos::prelude::*;
use std::future::Future;

#[derive(Clone, Copy)]
pub struct RagChatVm {
    pub thread: RwSignal<ChatThread>,
    pub input: RwSignal<String>,
}

impl RagChatVm {
    pub fn new() -> Self {
        Self {
            thread: RwSignal::new(ChatThread::with_greeting()),
            input: RwSignal::new(String::new()),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.thread.with(|t| t.busy)
    }

    /// Отправить текущий ввод.
    ///
    /// The user turn is appended and the input cleared before this returns.
    /// The returned future performs the request and appends the ai turn; the
    /// caller spawns it. `None` means nothing was sent (blank input or a
    /// request already in flight).
    pub fn send_message<G: RagGateway>(
        &self,
        gateway: &G,
    ) -> Option<impl Future<Output = ()> + 'static> {
        let input = self.input.get_untracked();
        let mut query = None;
        self.thread.update(|t| query = t.begin_send(&input));
        let query = query?;
        self.input.set(String::new());

        let gateway = gateway.clone();
        let thread = self.thread;
        Some(async move {
            let result = gateway.chat(&query).await;
            if let Err(e) = &result {
                log::error!("Chat request failed: {}", e);
            }
            thread.update(|t| t.finish_send(result));
        })
    }
}

impl Default for RagChatVm {
    fn default() -> Self {
        Self::new()
    }
}
