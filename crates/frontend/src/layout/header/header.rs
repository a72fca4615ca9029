use crate::shared::icons::icon;
use leptos::prelude::*;

/// Шапка страницы: меню и корзина пока без действий
#[component]
pub fn Header(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <header data-zone="header" class="header">
            <button class="button button--accent" aria-label="Menu">{icon("menu")}</button>
            <h1 class="header__title">{title}</h1>
            <button class="button button--accent" aria-label="Carrinho">{icon("cart")}</button>
        </header>
    }
}
