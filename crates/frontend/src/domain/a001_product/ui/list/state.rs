use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::a001_product::catalog::{CatalogStore, FilterCriteria};
use contracts::domain::a001_product::dialog::{DetailDialog, PointerTarget};
use contracts::enums::category::CategoryFilter;
use leptos::prelude::*;

/// Состояние страницы каталога: фильтр и диалог подробностей
#[derive(Clone, Copy)]
pub struct CatalogPageState {
    pub catalog: RwSignal<CatalogStore>,
    pub dialog: RwSignal<DetailDialog>,
}

impl CatalogPageState {
    pub fn new(products: Vec<Product>, criteria: FilterCriteria) -> Self {
        let mut catalog = CatalogStore::new(products);
        catalog.set_category(criteria.category);
        catalog.set_search_text(criteria.search_text);

        Self {
            catalog: RwSignal::new(catalog),
            dialog: RwSignal::new(DetailDialog::new()),
        }
    }

    pub fn set_category(&self, filter: CategoryFilter) {
        log::debug!("catalog: category -> {}", filter.code());
        self.catalog.update(|c| c.set_category(filter));
    }

    pub fn set_search_text(&self, text: String) {
        self.catalog.update(|c| c.set_search_text(text));
    }

    /// Видимые товары пересчитываются при любом изменении критериев
    pub fn visible_products(&self) -> Memo<Vec<Product>> {
        let catalog = self.catalog;
        Memo::new(move |_| {
            catalog.with(|c| c.visible_products().into_iter().cloned().collect())
        })
    }

    pub fn open_details(&self, id: ProductId) {
        let dialog = self.dialog;
        self.catalog
            .with_untracked(|catalog| dialog.maybe_update(|d| d.open(catalog, id)));
    }

    pub fn close_details(&self) {
        self.dialog.maybe_update(|d| {
            let was_open = d.is_open();
            d.close();
            was_open
        });
    }

    pub fn toggle_details_expanded(&self) {
        self.dialog.update(|d| d.toggle_expanded());
    }

    pub fn details_pointer_down(&self, target: PointerTarget) {
        self.dialog.maybe_update(|d| d.handle_pointer_down(target));
    }
}

pub fn create_state(products: Vec<Product>, criteria: FilterCriteria) -> CatalogPageState {
    CatalogPageState::new(products, criteria)
}
