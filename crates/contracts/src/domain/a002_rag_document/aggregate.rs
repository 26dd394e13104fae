use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Статус загрузки файла.
///
/// `Pending` exists in the model but records are created directly in
/// `Uploading`. `Done` and `Error` are terminal.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum UploadStatus {
    Pending,
    Uploading,
    Done,
    Error,
}

impl UploadStatus {
    pub fn as_str(&self) -> &str {
        match self {
            UploadStatus::Pending => "pending",
            UploadStatus::Uploading => "uploading",
            UploadStatus::Done => "done",
            UploadStatus::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, UploadStatus::Done | UploadStatus::Error)
    }
}

/// Файл в списке загрузок.
///
/// `key` only identifies the row for rendering. Responses and deletes are
/// correlated by `name`, so two records with the same name are
/// indistinguishable to the backend.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadRecord {
    pub key: Uuid,
    pub name: String,
    pub size: u64,
    pub status: UploadStatus,
}

impl UploadRecord {
    pub fn uploading(name: impl Into<String>, size: u64) -> Self {
        Self {
            key: Uuid::new_v4(),
            name: name.into(),
            size,
            status: UploadStatus::Uploading,
        }
    }
}

/// Список загрузок в порядке выбора файлов
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadList {
    pub records: Vec<UploadRecord>,
}

impl UploadList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record in `Uploading` and returns its render key.
    pub fn begin_upload(&mut self, name: impl Into<String>, size: u64) -> Uuid {
        let record = UploadRecord::uploading(name, size);
        let key = record.key;
        self.records.push(record);
        key
    }

    /// Moves every still-uploading record named `name` to `status`.
    ///
    /// Returns the number of records changed. Zero means the record was
    /// removed (or already resolved) before the response arrived.
    pub fn resolve(&mut self, name: &str, status: UploadStatus) -> usize {
        debug_assert!(status.is_terminal());
        let mut changed = 0;
        for record in self
            .records
            .iter_mut()
            .filter(|r| r.name == name && r.status == UploadStatus::Uploading)
        {
            record.status = status;
            changed += 1;
        }
        changed
    }

    /// Removes the record at `index`. Out of range is a no-op.
    pub fn remove(&mut self, index: usize) -> Option<UploadRecord> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    pub fn get(&self, index: usize) -> Option<&UploadRecord> {
        self.records.get(index)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn status_of(&self, name: &str) -> Option<UploadStatus> {
        self.records.iter().find(|r| r.name == name).map(|r| r.status)
    }
}

/// Ответ `POST /api/upload` и `DELETE /api/delete`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageResponse {
    pub message: String,
}

/// Query string для `DELETE /api/delete`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeleteQuery {
    pub filename: String,
}

/// Форматирует размер файла: `512 B`, `1.5 KB`, `2.0 MB`
pub fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    if bytes < KB {
        format!("{} B", bytes)
    } else if bytes < MB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    }
}
