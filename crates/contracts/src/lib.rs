//! Типы, общие для фронтенда и HTTP-контракта RAG-бэкенда.
//!
//! Only plain data and pure state transitions live here so everything can be
//! tested natively without a browser.

pub mod domain;
