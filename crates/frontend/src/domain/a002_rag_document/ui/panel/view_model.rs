//! RAG Document Panel - View Model

use crate::shared::gateway::{RagGateway, UploadSource};
use contracts::domain::a002_rag_document::aggregate::{UploadList, UploadStatus};
use leptos::prelude::*;
use std::future::Future;

#[derive(Clone, Copy)]
pub struct RagDocumentsVm {
    pub files: RwSignal<UploadList>,
    pub is_dragging: RwSignal<bool>,
}

impl RagDocumentsVm {
    pub fn new() -> Self {
        Self {
            files: RwSignal::new(UploadList::new()),
            is_dragging: RwSignal::new(false),
        }
    }

    /// Загрузить файлы.
    ///
    /// One `Uploading` record per file is appended before this returns. Each
    /// returned future uploads its file and settles the record by name; the
    /// futures are independent and may finish in any order.
    pub fn handle_files<G: RagGateway>(
        &self,
        gateway: &G,
        files: Vec<G::File>,
    ) -> Vec<impl Future<Output = ()> + 'static> {
        files
            .into_iter()
            .map(|file| {
                let name = file.file_name();
                let size = file.file_size();
                self.files.update(|list| {
                    list.begin_upload(name.clone(), size);
                });

                let gateway = gateway.clone();
                let records = self.files;
                async move {
                    let status = match gateway.upload_file(file).await {
                        Ok(response) => {
                            log::info!("Uploaded {}: {}", name, response.message);
                            UploadStatus::Done
                        }
                        Err(e) => {
                            log::error!("Upload failed for {}: {}", name, e);
                            UploadStatus::Error
                        }
                    };

                    let mut changed = 0;
                    records.update(|list| changed = list.resolve(&name, status));
                    if changed == 0 {
                        log::warn!("Upload of {} finished after its record was removed", name);
                    }
                }
            })
            .collect()
    }

    /// Убрать файл из списка.
    ///
    /// The record at `index` is removed immediately whatever its status. If it
    /// had finished uploading, the returned future asks the backend to drop
    /// it from context; the outcome is only logged.
    pub fn remove_file<G: RagGateway>(
        &self,
        gateway: &G,
        index: usize,
    ) -> Option<impl Future<Output = ()> + 'static> {
        let mut removed = None;
        self.files.update(|list| removed = list.remove(index));
        let Some(record) = removed else {
            log::warn!("No file at position {}", index);
            return None;
        };

        if record.status != UploadStatus::Done {
            return None;
        }

        let gateway = gateway.clone();
        Some(async move {
            match gateway.delete_file(&record.name).await {
                Ok(_) => log::info!("Deleted {} from context", record.name),
                Err(e) => log::error!("Failed to delete {} from backend: {}", record.name, e),
            }
        })
    }

    /// Current position of the row rendered under `key`
    pub fn position_of(&self, key: uuid::Uuid) -> Option<usize> {
        self.files
            .with_untracked(|list| list.records.iter().position(|r| r.key == key))
    }

    pub fn on_drag_over(&self) {
        self.is_dragging.set(true);
    }

    pub fn on_drag_leave(&self) {
        self.is_dragging.set(false);
    }

    pub fn on_drop<G: RagGateway>(
        &self,
        gateway: &G,
        files: Vec<G::File>,
    ) -> Vec<impl Future<Output = ()> + 'static> {
        self.is_dragging.set(false);
        self.handle_files(gateway, files)
    }
}

impl Default for RagDocumentsVm {
    fn default() -> Self {
        Self::new()
    }
}
