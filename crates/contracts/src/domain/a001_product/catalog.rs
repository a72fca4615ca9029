//! Каталог: неизменяемый список товаров плюс текущие критерии фильтра.
//!
//! Видимый список не хранится, а вычисляется при каждом чтении.

use super::aggregate::{Product, ProductId, ProductLookup};
use crate::enums::category::CategoryFilter;

/// Критерии фильтрации каталога
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub category: CategoryFilter,
    /// Хранится как ввёл пользователь, регистр учитывается только при сравнении
    pub search_text: String,
}

impl FilterCriteria {
    pub fn matches(&self, product: &Product) -> bool {
        self.category.matches(product.category) && product.matches_search(&self.search_text)
    }
}

/// Почему видимый список пуст
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyReason {
    /// В каталоге нет ни одного товара
    NoProducts,
    /// Товары есть, но критерии исключили все
    NoMatches,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogStore {
    products: Vec<Product>,
    criteria: FilterCriteria,
}

impl CatalogStore {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products,
            criteria: FilterCriteria::default(),
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn selected_category(&self) -> &CategoryFilter {
        &self.criteria.category
    }

    pub fn search_text(&self) -> &str {
        &self.criteria.search_text
    }

    pub fn set_category(&mut self, category: impl Into<CategoryFilter>) {
        self.criteria.category = category.into();
    }

    pub fn set_search_text(&mut self, text: impl Into<String>) {
        self.criteria.search_text = text.into();
    }

    /// Стабильный фильтр: порядок исходного списка сохраняется
    pub fn visible_products(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|p| self.criteria.matches(p))
            .collect()
    }

    pub fn visible_count(&self) -> usize {
        self.products
            .iter()
            .filter(|p| self.criteria.matches(p))
            .count()
    }

    pub fn empty_reason(&self) -> Option<EmptyReason> {
        if self.products.is_empty() {
            Some(EmptyReason::NoProducts)
        } else if self.visible_count() == 0 {
            Some(EmptyReason::NoMatches)
        } else {
            None
        }
    }
}

impl ProductLookup for CatalogStore {
    fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.products.find_product(id)
    }
}
