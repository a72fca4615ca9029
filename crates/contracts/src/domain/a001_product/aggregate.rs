use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::category::Category;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара каталога
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Товар каталога. Загружается один раз при старте и больше не меняется.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: f64,
    pub image: String,

    /// Ключевые слова для поиска (в нижнем регистре)
    #[serde(default)]
    pub keywords: Vec<String>,

    pub description: String,

    /// Расширенное описание, видно только в раскрытой панели диалога
    #[serde(rename = "moreInfo", alias = "moreinfo")]
    pub more_info: String,
}

impl Product {
    /// Пустой запрос подходит всегда; иначе нужно хотя бы одно ключевое слово,
    /// содержащее запрос как подстроку без учёта регистра.
    pub fn matches_search(&self, search_text: &str) -> bool {
        if search_text.is_empty() {
            return true;
        }
        let needle = search_text.to_lowercase();
        self.keywords
            .iter()
            .any(|keyword| keyword.to_lowercase().contains(&needle))
    }
}

/// Поиск товара по идентификатору
pub trait ProductLookup {
    fn find_product(&self, id: ProductId) -> Option<&Product>;
}

impl ProductLookup for [Product] {
    fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.iter().find(|p| p.id == id)
    }
}

impl ProductLookup for Vec<Product> {
    fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.as_slice().find_product(id)
    }
}
