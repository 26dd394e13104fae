use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Приветствие, с которого начинается каждая сессия чата
pub const GREETING_TEXT: &str =
    "Hello! I am your document assistant. Upload a file on the right to get started.";

/// Текст ответа, который показывается при любой ошибке запроса к бэкенду
pub const CHAT_ERROR_TEXT: &str = "Error connecting to the brain. Is the backend running?";

/// Автор реплики
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Ai,
}

impl ChatRole {
    pub fn as_str(&self) -> &str {
        match self {
            ChatRole::User => "user",
            ChatRole::Ai => "ai",
        }
    }
}

/// Одна реплика в ленте чата.
///
/// `id` is a client-side render key; the backend never sees it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatTurn {
    pub id: Uuid,
    pub role: ChatRole,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl ChatTurn {
    pub fn new(role: ChatRole, text: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role,
            text: text.into(),
            created_at: Utc::now(),
        }
    }

    /// Реплика пользователя
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ChatRole::User, text)
    }

    /// Реплика ассистента
    pub fn ai(text: impl Into<String>) -> Self {
        Self::new(ChatRole::Ai, text)
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// Лента чата и флаг "запрос в полёте".
///
/// Turns are append-only. At most one chat request may be outstanding, which
/// is enforced by `busy` rather than by cancelling anything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatThread {
    pub turns: Vec<ChatTurn>,
    pub busy: bool,
}

impl ChatThread {
    pub fn new() -> Self {
        Self::default()
    }

    /// Thread seeded with the assistant greeting
    pub fn with_greeting() -> Self {
        Self {
            turns: vec![ChatTurn::ai(GREETING_TEXT)],
            busy: false,
        }
    }

    /// Checks the send preconditions and, if they hold, appends the user turn
    /// and marks the thread busy. Returns the raw text to send.
    pub fn begin_send(&mut self, input: &str) -> Option<String> {
        if input.trim().is_empty() || self.busy {
            return None;
        }
        self.turns.push(ChatTurn::user(input));
        self.busy = true;
        Some(input.to_string())
    }

    /// Appends the ai turn for a finished request and clears `busy`.
    ///
    /// Any error collapses into [`CHAT_ERROR_TEXT`]; the caller logs the detail.
    pub fn finish_send<E>(&mut self, result: Result<String, E>) {
        let text = match result {
            Ok(answer) => answer,
            Err(_) => CHAT_ERROR_TEXT.to_string(),
        };
        self.turns.push(ChatTurn::ai(text));
        self.busy = false;
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&ChatTurn> {
        self.turns.last()
    }
}

/// Тело запроса `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatRequest {
    pub query: String,
}

/// Ответ `POST /api/chat`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ChatResponse {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greeting_seed() {
        let thread = ChatThread::with_greeting();
        assert_eq!(thread.len(), 1);
        assert_eq!(thread.turns[0].role, ChatRole::Ai);
        assert_eq!(thread.turns[0].text, GREETING_TEXT);
        assert!(!thread.busy);
    }

    #[test]
    fn test_begin_send_appends_user_turn() {
        let mut thread = ChatThread::new();
        let query = thread.begin_send("Hello");
        assert_eq!(query.as_deref(), Some("Hello"));
        assert_eq!(thread.len(), 1);
        assert_eq!(thread.turns[0].role, ChatRole::User);
        assert_eq!(thread.turns[0].text, "Hello");
        assert!(thread.busy);
    }

    #[test]
    fn test_begin_send_keeps_raw_text() {
        let mut thread = ChatThread::new();
        let query = thread.begin_send("  what is in the report?  ");
        assert_eq!(query.as_deref(), Some("  what is in the report?  "));
        assert_eq!(thread.turns[0].text, "  what is in the report?  ");
    }

    #[test]
    fn test_begin_send_rejects_blank_input() {
        let mut thread = ChatThread::new();
        assert_eq!(thread.begin_send(""), None);
        assert_eq!(thread.begin_send("   \n\t"), None);
        assert!(thread.is_empty());
        assert!(!thread.busy);
    }

    #[test]
    fn test_begin_send_rejects_while_busy() {
        let mut thread = ChatThread::new();
        thread.begin_send("first");
        assert_eq!(thread.begin_send("second"), None);
        assert_eq!(thread.len(), 1);
        assert!(thread.busy);
    }

    #[test]
    fn test_finish_send_success() {
        let mut thread = ChatThread::new();
        thread.begin_send("Hello");
        thread.finish_send::<String>(Ok("Hi there".to_string()));

        assert_eq!(thread.len(), 2);
        let last = thread.last().unwrap();
        assert_eq!(last.role, ChatRole::Ai);
        assert_eq!(last.text, "Hi there");
        assert!(!thread.busy);
    }

    #[test]
    fn test_finish_send_error_uses_fixed_text() {
        let mut thread = ChatThread::new();
        thread.begin_send("Hello");
        thread.finish_send(Err("HTTP 500"));

        assert_eq!(thread.len(), 2);
        assert_eq!(thread.last().unwrap().text, CHAT_ERROR_TEXT);
        assert!(!thread.busy);
    }

    #[test]
    fn test_turn_ids_are_distinct() {
        let a = ChatTurn::user("same");
        let b = ChatTurn::user("same");
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_role_wire_names() {
        assert_eq!(serde_json::to_string(&ChatRole::User).unwrap(), "\"user\"");
        assert_eq!(serde_json::to_string(&ChatRole::Ai).unwrap(), "\"ai\"");
        assert_eq!(ChatRole::Ai.as_str(), "ai");
    }

    #[test]
    fn test_chat_dto_shapes() {
        let body = serde_json::to_value(ChatRequest {
            query: "Hello".to_string(),
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "query": "Hello" }));

        let resp: ChatResponse = serde_json::from_str(r#"{"answer":"Hi there"}"#).unwrap();
        assert_eq!(resp.answer, "Hi there");
    }
}
