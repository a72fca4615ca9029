use crate::shared::icons::icon;
use contracts::enums::category::{Category, CategoryFilter};
use leptos::prelude::*;

/// Кнопки фильтра: "Todos" (иконкой) и по одной на каждую категорию
#[component]
pub fn CategoryBar(
    #[prop(into)] selected: Signal<CategoryFilter>,
    #[prop(into)] on_select: Callback<CategoryFilter>,
) -> impl IntoView {
    let button = move |filter: CategoryFilter, label: AnyView, title: &'static str| {
        let is_active = {
            let filter = filter.clone();
            move || selected.with(|s| *s == filter)
        };
        view! {
            <button
                class="button category-bar__button"
                class:category-bar__button--active=is_active
                title=title
                on:click=move |_| on_select.run(filter.clone())
            >
                {label}
            </button>
        }
    };

    let category_buttons = Category::all()
        .into_iter()
        .map(|category| {
            button(
                CategoryFilter::Only(category),
                category.display_name().into_any(),
                category.display_name(),
            )
        })
        .collect_view();

    view! {
        <nav class="category-bar">
            {button(CategoryFilter::All, icon("grid"), "Todos")}
            {category_buttons}
        </nav>
    }
}
