use crate::domain::a001_product::ui::list::state::CatalogPageState;
use crate::shared::icons::icon;
use crate::shared::modal_frame::ModalFrame;
use crate::shared::outside_click::{DismissListeners, ListenerSlot, SlotChange};
use contracts::domain::a001_product::dialog::PointerTarget;
use leptos::html::Div;
use leptos::prelude::*;

/// Диалог с описанием товара и раскрывающейся панелью "Mais informações".
///
/// Слушатели закрытия (клик вне диалога, Escape) подключены только пока диалог открыт.
#[component]
pub fn ProductDetails() -> impl IntoView {
    let state = use_context::<CatalogPageState>().expect("CatalogPageState not provided in context");
    let dialog = state.dialog;
    let surface_ref = NodeRef::<Div>::new();

    let on_pointer_down = Callback::new(move |target: PointerTarget| state.details_pointer_down(target));
    let on_escape = Callback::new(move |_: ()| state.close_details());

    let listeners = StoredValue::new_local(ListenerSlot::<DismissListeners>::default());

    Effect::new(move |_| {
        let wanted = dialog.with(|d| d.wants_outside_listener());
        listeners.update_value(|slot| {
            let change = slot.sync(wanted, || {
                DismissListeners::attach(surface_ref, on_pointer_down, on_escape)
            });
            match change {
                SlotChange::Acquired => log::debug!("detail dialog: dismiss listeners attached"),
                SlotChange::Released => log::debug!("detail dialog: dismiss listeners removed"),
                SlotChange::Unchanged => {}
            }
        });
    });

    on_cleanup(move || {
        listeners.try_update_value(|slot| slot.release());
    });

    let is_open = move || dialog.with(|d| d.is_open());
    let is_expanded = move || dialog.with(|d| d.is_expanded());
    let description = move || dialog.with(|d| d.description().to_string());
    let more_info = move || dialog.with(|d| d.more_info().to_string());

    view! {
        <Show when=is_open>
            <ModalFrame surface_ref=surface_ref modal_class="product-details">
                <h2 class="product-details__title">"Descrição"</h2>
                <p class="product-details__description">{description}</p>
                <div class="product-details__toggle">
                    <span class="product-details__toggle-label">"Mais informações"</span>
                    <button
                        class=move || {
                            if is_expanded() {
                                "button button--icon product-details__chevron product-details__chevron--expanded"
                            } else {
                                "button button--icon product-details__chevron"
                            }
                        }
                        aria-expanded=move || is_expanded().to_string()
                        on:click=move |_| state.toggle_details_expanded()
                    >
                        {icon("circle-chevron-down")}
                    </button>
                </div>
                <Show when=is_expanded>
                    <div class="product-details__more-info">
                        <p>{more_info}</p>
                    </div>
                </Show>
            </ModalFrame>
        </Show>
    }
}
