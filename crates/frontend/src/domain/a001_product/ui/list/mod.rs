pub mod category_bar;
pub mod state;

use crate::domain::a001_product::ui::details::ProductDetails;
use crate::shared::components::search_input::SearchInput;
use crate::shared::icons::icon;
use crate::shared::number_format::format_price;
use category_bar::CategoryBar;
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::a001_product::catalog::EmptyReason;
use contracts::enums::category::CategoryFilter;
use leptos::prelude::*;
use state::CatalogPageState;

#[component]
fn ProductCard(product: Product, #[prop(into)] on_info: Callback<ProductId>) -> impl IntoView {
    let Product { id, name, image, price, .. } = product;
    let price = format_price(price);

    view! {
        <li class="product-card">
            <div class="product-card__body">
                <h2 class="product-card__name">{name.clone()}</h2>
                <img class="product-card__image" src=image alt=name />
            </div>
            <div class="product-card__footer">
                <span class="product-card__price">"Preço: " {price}</span>
                <button
                    class="button button--icon"
                    aria-label="Mais informações"
                    on:click=move |_| on_info.run(id)
                >
                    {icon("info")}
                </button>
            </div>
        </li>
    }
}

/// Страница каталога: поиск, категории, сетка товаров и диалог подробностей
#[component]
pub fn CatalogPage() -> impl IntoView {
    let state = use_context::<CatalogPageState>().expect("CatalogPageState not provided in context");
    let visible = state.visible_products();

    let search_text = Signal::derive(move || state.catalog.with(|c| c.search_text().to_string()));
    let selected = Signal::derive(move || state.catalog.with(|c| c.selected_category().clone()));
    let empty_reason = Memo::new(move |_| state.catalog.with(|c| c.empty_reason()));

    let on_search = Callback::new(move |text: String| state.set_search_text(text));
    let on_select = Callback::new(move |filter: CategoryFilter| state.set_category(filter));
    let on_info = Callback::new(move |id: ProductId| state.open_details(id));

    let count_label = move || {
        let total = state.catalog.with(|c| c.products().len());
        match visible.with(|v| v.len()) {
            1 => format!("1 de {total} itens"),
            n => format!("{n} de {total} itens"),
        }
    };

    view! {
        <div class="catalog-page">
            <div class="catalog-page__search">
                <SearchInput value=search_text on_change=on_search />
            </div>

            <CategoryBar selected=selected on_select=on_select />

            <section class="catalog-page__grid">
                <div class="catalog-page__count">{count_label}</div>
                <ul class="product-grid">
                    {move || match empty_reason.get() {
                        Some(EmptyReason::NoProducts) => view! {
                            <p class="product-grid__empty">"Nenhum produto disponível."</p>
                        }.into_any(),
                        Some(EmptyReason::NoMatches) => view! {
                            <p class="product-grid__empty">"Nenhum item encontrado."</p>
                        }.into_any(),
                        None => view! {
                            <For
                                each=move || visible.get()
                                key=|product| product.id
                                let:product
                            >
                                <ProductCard product=product on_info=on_info />
                            </For>
                        }.into_any(),
                    }}
                </ul>
            </section>

            <ProductDetails />
        </div>
    }
}
