use leptos::html::Div;
use leptos::prelude::*;

/// Modal frame container (overlay + positioned surface).
///
/// The frame itself never closes anything: dismissal is driven by document
/// listeners that compare the pointer target against `surface_ref`.
#[component]
pub fn ModalFrame(
    /// Bound to the surface (`div.modal`); everything outside it counts as "outside".
    surface_ref: NodeRef<Div>,
    /// Extra class for the modal surface (`div.modal`).
    #[prop(optional, into)]
    modal_class: Option<String>,
    children: Children,
) -> impl IntoView {
    let surface_class = match modal_class {
        Some(cls) => format!("modal {cls}"),
        None => "modal".to_string(),
    };

    view! {
        <div class="modal-overlay">
            <div
                node_ref=surface_ref
                class=surface_class
                role="dialog"
                aria-modal="true"
            >
                {children()}
            </div>
        </div>
    }
}
