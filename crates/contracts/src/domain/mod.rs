pub mod a001_rag_chat;
pub mod a002_rag_document;
