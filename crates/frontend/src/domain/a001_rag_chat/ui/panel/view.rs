//! RAG Chat Panel - View Component

use super::view_model::RagChatVm;
use crate::shared::gateway::HttpRagGateway;
use crate::shared::icons::icon;
use contracts::domain::a001_rag_chat::aggregate::ChatTurn;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn RagChatPanel() -> impl IntoView {
    let gateway = use_context::<HttpRagGateway>().expect("HttpRagGateway context not found");
    let vm = RagChatVm::new();
    let messages_container_ref = NodeRef::<leptos::html::Div>::new();
    let busy = Signal::derive(move || vm.is_busy());

    // Scroll to the newest turn whenever the thread changes
    Effect::new(move |_| {
        vm.thread.track();
        if let Some(container) = messages_container_ref.get() {
            request_animation_frame(move || {
                container.set_scroll_top(container.scroll_height());
            });
        }
    });

    let handle_send = Callback::new(move |_: ()| {
        if let Some(task) = vm.send_message(&gateway) {
            wasm_bindgen_futures::spawn_local(task);
        }
    });

    view! {
        <div style="height: 100%; display: flex; flex-direction: column; padding: 20px; box-sizing: border-box;">
            <Flex
                justify=FlexJustify::SpaceBetween
                align=FlexAlign::Center
                style="margin-bottom: 16px; padding-bottom: 12px; border-bottom: 1px solid var(--colorNeutralStroke2);"
            >
                <h2 style="font-size: 18px; font-weight: bold; margin: 0;">"Document Assistant"</h2>
                <span style="color: var(--colorNeutralForeground3); font-size: 14px;">
                    {move || format!("Messages: {}", vm.thread.with(|t| t.len()))}
                </span>
            </Flex>

            <div
                node_ref=messages_container_ref
                style="flex: 1; overflow-y: auto; display: flex; flex-direction: column; gap: 12px; margin-bottom: 16px; padding: 12px; background: var(--colorNeutralBackground1); border: 1px solid var(--colorNeutralStroke2); border-radius: 8px;"
            >
                <For
                    each=move || vm.thread.with(|t| t.turns.clone())
                    key=|turn| turn.id
                    let:turn
                >
                    <ChatBubble turn=turn />
                </For>

                <Show when=move || busy.get()>
                    <div style="align-self: flex-start; color: var(--colorNeutralForeground3); font-size: 13px;">
                        "Thinking..."
                    </div>
                </Show>
            </div>

            <Flex style="gap: 8px; align-items: flex-end;">
                <div style="flex: 1;">
                    <Textarea
                        value=vm.input
                        placeholder="Ask something about your documents... (Enter to send, Shift+Enter for a new line)"
                        attr:style="width: 100%; min-height: 60px; max-height: 200px; resize: vertical;"
                        disabled=busy
                        on:keydown=move |ev: web_sys::KeyboardEvent| {
                            if ev.key() == "Enter" && !ev.shift_key() {
                                ev.prevent_default();
                                handle_send.run(());
                            }
                        }
                    />
                </div>

                <Button
                    appearance=ButtonAppearance::Primary
                    disabled=busy
                    on_click=move |_| handle_send.run(())
                >
                    {icon("send")}
                    {move || if busy.get() { " Sending..." } else { " Send" }}
                </Button>
            </Flex>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
fn ChatBubble(turn: ChatTurn) -> impl IntoView {
    let is_user = turn.is_user();
    let time = turn
        .created_at
        .with_timezone(&chrono::Local)
        .format("%H:%M")
        .to_string();

    view! {
        <div style=if is_user {
            "align-self: flex-end; max-width: 70%;"
        } else {
            "align-self: flex-start; max-width: 70%;"
        }>
            <div style=if is_user {
                "background: var(--colorBrandBackground2); padding: 10px 14px; border-radius: 12px;"
            } else {
                "background: var(--colorNeutralBackground2); padding: 10px 14px; border-radius: 12px;"
            }>
                <div style="white-space: pre-wrap;">{turn.text}</div>
                <div style="font-size: 11px; opacity: 0.7; margin-top: 6px;">
                    {if is_user { "You" } else { "Assistant" }}
                    " • "
                    {time}
                </div>
            </div>
        </div>
    }
}
