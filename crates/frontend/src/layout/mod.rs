use leptos::prelude::*;

/// Main application shell.
///
/// Layout structure:
/// ```text
/// +------------------------------------------+
/// |              Header                       |
/// +------------------------------------------+
/// |        Chat (Left)      |  Docs (Right)  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell<L, R>(left: L, right: R) -> impl IntoView
where
    L: Fn() -> AnyView + 'static + Send,
    R: Fn() -> AnyView + 'static + Send,
{
    view! {
        <div class="app-layout" style="height: 100vh; display: flex; flex-direction: column; font-family: sans-serif;">
            <header style="padding: 12px 20px; border-bottom: 1px solid var(--colorNeutralStroke2); font-weight: bold;">
                "RAG Assistant"
            </header>

            <div class="app-body" style="flex: 1; display: flex; min-height: 0;">
                <div data-zone="left" style="flex: 2; min-width: 0; border-right: 1px solid var(--colorNeutralStroke2);">
                    {left()}
                </div>
                <div data-zone="right" style="flex: 1; min-width: 280px;">
                    {right()}
                </div>
            </div>
        </div>
    }
}
