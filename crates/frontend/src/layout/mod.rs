pub mod header;

use leptos::prelude::*;

/// Page shell: header on top, content below.
///
/// ```text
/// +------------------------------------------+
/// |                 Header                   |
/// +------------------------------------------+
/// |                 Content                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(#[prop(into)] title: String, children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <header::Header title=title />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
