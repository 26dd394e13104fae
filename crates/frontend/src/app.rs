use crate::domain::a001_rag_chat::ui::panel::RagChatPanel;
use crate::domain::a002_rag_document::ui::panel::RagDocumentsPanel;
use crate::layout::Shell;
use crate::shared::gateway::HttpRagGateway;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // One gateway for both panels, pointed at the configured backend.
    let gateway = HttpRagGateway::default();
    log::info!("RAG backend: {}", gateway.base());
    provide_context(gateway);

    view! {
        <ConfigProvider>
            <Shell
                left=|| view! { <RagChatPanel /> }.into_any()
                right=|| view! { <RagDocumentsPanel /> }.into_any()
            />
        </ConfigProvider>
    }
}
