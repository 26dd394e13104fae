//! RAG Document Panel UI Module (MVVM Standard)
//!
//! Structure:
//! - view_model.rs: RagDocumentsVm (upload list, drag state, upload/remove flows)
//! - view.rs: Main component RagDocumentsPanel with drop zone and file list

mod view;
mod view_model;

pub use view::RagDocumentsPanel;
pub use view_model::RagDocumentsVm;
