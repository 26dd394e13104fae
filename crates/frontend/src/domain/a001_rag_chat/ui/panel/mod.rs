//! RAG Chat Panel UI Module (MVVM Standard)
//!
//! Structure:
//! - view_model.rs: RagChatVm with RwSignals and the send flow
//! - view.rs: Main component RagChatPanel

mod view;
mod view_model;

pub use view::RagChatPanel;
pub use view_model::RagChatVm;
