//! RAG Document Panel - View Component

use super::view_model::RagDocumentsVm;
use crate::shared::gateway::HttpRagGateway;
use crate::shared::icons::icon;
use contracts::domain::a002_rag_document::aggregate::{format_size, UploadRecord, UploadStatus};
use leptos::prelude::*;
use std::future::Future;
use thaw::*;
use wasm_bindgen::JsCast;

const FILE_INPUT_ID: &str = "rag-file-input";

fn files_from_list(list: web_sys::FileList) -> Vec<web_sys::File> {
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

fn spawn_all<F: Future<Output = ()> + 'static>(tasks: Vec<F>) {
    for task in tasks {
        wasm_bindgen_futures::spawn_local(task);
    }
}

fn open_file_dialog() {
    let input = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(FILE_INPUT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());
    if let Some(input) = input {
        input.click();
    }
}

fn drop_zone_style(dragging: bool) -> &'static str {
    if dragging {
        "padding: 32px 16px; text-align: center; cursor: pointer; border: 2px dashed var(--colorBrandStroke1); border-radius: 8px; background: var(--colorBrandBackground2);"
    } else {
        "padding: 32px 16px; text-align: center; cursor: pointer; border: 2px dashed var(--colorNeutralStroke1); border-radius: 8px; background: var(--colorNeutralBackground2);"
    }
}

#[component]
#[allow(non_snake_case)]
pub fn RagDocumentsPanel() -> impl IntoView {
    let gateway = use_context::<HttpRagGateway>().expect("HttpRagGateway context not found");
    let vm = RagDocumentsVm::new();

    let on_drop = {
        let gateway = gateway.clone();
        move |ev: web_sys::DragEvent| {
            ev.prevent_default();
            ev.stop_propagation();
            let files = ev
                .data_transfer()
                .and_then(|dt| dt.files())
                .map(files_from_list)
                .unwrap_or_default();
            spawn_all(vm.on_drop(&gateway, files));
        }
    };

    let on_file_selected = {
        let gateway = gateway.clone();
        move |ev: web_sys::Event| {
            let Some(input) = ev
                .target()
                .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
            else {
                return;
            };
            if let Some(list) = input.files() {
                spawn_all(vm.handle_files(&gateway, files_from_list(list)));
            }
            // allow picking the same file again
            input.set_value("");
        }
    };

    let on_remove = Callback::new(move |key: uuid::Uuid| {
        let Some(index) = vm.position_of(key) else {
            return;
        };
        if let Some(task) = vm.remove_file(&gateway, index) {
            wasm_bindgen_futures::spawn_local(task);
        }
    });

    view! {
        <div style="height: 100%; display: flex; flex-direction: column; gap: 16px; padding: 20px; box-sizing: border-box;">
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="padding-bottom: 12px; border-bottom: 1px solid var(--colorNeutralStroke2);"
            >
                <h2 style="font-size: 18px; font-weight: bold; margin: 0;">"Documents"</h2>
                <span style="color: var(--colorNeutralForeground3); font-size: 14px;">
                    {move || format!("Files: {}", vm.files.with(|l| l.len()))}
                </span>
            </Flex>

            <input
                type="file"
                multiple=true
                style="display: none;"
                id=FILE_INPUT_ID
                on:change=on_file_selected
            />

            <div
                style=move || drop_zone_style(vm.is_dragging.get())
                on:dragover=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    vm.on_drag_over();
                }
                on:dragleave=move |ev: web_sys::DragEvent| {
                    ev.prevent_default();
                    ev.stop_propagation();
                    vm.on_drag_leave();
                }
                on:drop=on_drop
                on:click=move |_| open_file_dialog()
            >
                <div>{icon("upload")}</div>
                <div style="margin-top: 8px;">"Drag & drop files here, or click to browse"</div>
            </div>

            <div style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 8px;">
                <For
                    each=move || vm.files.with(|l| l.records.clone())
                    key=|record| (record.key, record.status)
                    let:record
                >
                    <UploadRow record=record on_remove=on_remove />
                </For>
            </div>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn UploadRow(record: UploadRecord, on_remove: Callback<uuid::Uuid>) -> impl IntoView {
    let key = record.key;
    let badge = match record.status {
        UploadStatus::Pending => view! {
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Subtle>"Pending"</Badge>
        }
        .into_any(),
        UploadStatus::Uploading => view! {
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Informative>"Uploading..."</Badge>
        }
        .into_any(),
        UploadStatus::Done => view! {
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Success>"Ready"</Badge>
        }
        .into_any(),
        UploadStatus::Error => view! {
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Danger>"Failed"</Badge>
        }
        .into_any(),
    };

    view! {
        <div style="padding: 8px 12px; background: var(--colorNeutralBackground2); border: 1px solid var(--colorNeutralStroke2); border-radius: 6px; display: flex; align-items: center; gap: 8px;">
            {icon("document")}
            <div style="flex: 1; min-width: 0;">
                <div style="font-size: 14px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                    {record.name}
                </div>
                <div style="font-size: 12px; color: var(--colorNeutralForeground3);">
                    {format_size(record.size)}
                </div>
            </div>
            {badge}
            <button
                style="background: none; border: none; cursor: pointer; padding: 2px; color: var(--colorNeutralForeground3);"
                title="Remove"
                on:click=move |_| on_remove.run(key)
            >
                {icon("close")}
            </button>
        </div>
    }
}
