use crate::domain::a001_product::ui::list::state::create_state;
use crate::domain::a001_product::ui::list::CatalogPage;
use crate::layout::Shell;
use crate::shared::config::CatalogConfig;
use contracts::domain::a001_product::loader::load_products;
use leptos::prelude::*;

/// Встроенный каталог товаров
const PRODUCTS_JSON: &str = include_str!("../data/products.json");

#[component]
pub fn App(config: CatalogConfig) -> impl IntoView {
    let products = load_products(PRODUCTS_JSON).unwrap_or_else(|err| {
        log::error!("failed to load catalog data: {:#}", err);
        Vec::new()
    });

    // Provide the catalog page state to the whole app via context.
    provide_context(create_state(products, config.initial_criteria));

    view! {
        <Shell title="Página de Produtos">
            <CatalogPage />
        </Shell>
    }
}
