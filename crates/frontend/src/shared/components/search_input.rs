use crate::shared::icons::icon;
use leptos::prelude::*;

/// Поле поиска с кнопкой.
///
/// Каждое изменение сразу уходит в `on_change`, текст передаётся как есть.
#[component]
pub fn SearchInput(
    /// Текущее значение фильтра
    #[prop(into)]
    value: Signal<String>,
    /// Callback для обновления значения фильтра
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder текст
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "O que está procurando?".to_string()
    } else {
        placeholder
    };

    // Кнопка повторно применяет текущий текст
    let resubmit = move |_| {
        on_change.run(value.get_untracked());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <button class="button button--icon search-input__button" on:click=resubmit>
                {icon("search")}
            </button>
        </div>
    }
}
