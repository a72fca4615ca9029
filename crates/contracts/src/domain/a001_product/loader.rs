//! Загрузка статического списка товаров из JSON.
//!
//! Некорректные записи пропускаются и попадают в отчёт, страница при этом не падает.
//! Обязательны все поля товара, кроме `keywords` (по умолчанию пустой список).

use std::collections::HashSet;

use serde_json::Value;
use thiserror::Error;

use super::aggregate::{Product, ProductId};

/// Ошибка загрузки всего документа
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog data is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("catalog data must be a JSON array of products, got {0}")]
    NotAnArray(&'static str),
}

/// Причина, по которой отдельная запись отброшена
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid record: {0}")]
    Invalid(#[source] serde_json::Error),

    #[error("price must be a finite non-negative number, got {0}")]
    InvalidPrice(f64),

    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
}

#[derive(Debug)]
pub struct RejectedRecord {
    /// Позиция записи в исходном массиве
    pub index: usize,
    pub error: RecordError,
}

/// Результат загрузки: принятые товары в исходном порядке и отброшенные записи
#[derive(Debug, Default)]
pub struct CatalogLoad {
    pub products: Vec<Product>,
    pub rejected: Vec<RejectedRecord>,
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn validate(record: Value, seen: &HashSet<ProductId>) -> Result<Product, RecordError> {
    let mut product: Product = serde_json::from_value(record).map_err(RecordError::Invalid)?;
    if !product.price.is_finite() || product.price < 0.0 {
        return Err(RecordError::InvalidPrice(product.price));
    }
    // -0.0 проходит проверку выше, но отображался бы со знаком минус
    if product.price == 0.0 {
        product.price = 0.0;
    }
    if seen.contains(&product.id) {
        return Err(RecordError::DuplicateId(product.id));
    }
    Ok(product)
}

/// Разбирает JSON-массив товаров.
///
/// Ошибка возвращается только если сам документ не является массивом.
pub fn parse_products(json: &str) -> Result<CatalogLoad, CatalogError> {
    let document: Value = serde_json::from_str(json)?;
    let records = match document {
        Value::Array(records) => records,
        other => return Err(CatalogError::NotAnArray(json_kind(&other))),
    };

    let mut load = CatalogLoad::default();
    let mut seen = HashSet::new();

    for (index, record) in records.into_iter().enumerate() {
        match validate(record, &seen) {
            Ok(product) => {
                seen.insert(product.id);
                load.products.push(product);
            }
            Err(error) => {
                log::warn!("catalog: skipping record #{}: {}", index, error);
                load.rejected.push(RejectedRecord { index, error });
            }
        }
    }

    log::info!(
        "catalog: loaded {} products ({} rejected)",
        load.products.len(),
        load.rejected.len()
    );
    Ok(load)
}

/// Загрузка встроенного каталога для страницы
pub fn load_products(json: &str) -> anyhow::Result<Vec<Product>> {
    Ok(parse_products(json)?.products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::category::Category;

    fn record(id: u32, category: &str, price: &str) -> String {
        format!(
            r#"{{"id": {id}, "name": "P{id}", "category": "{category}", "price": {price},
                "image": "/img/{id}.png", "keywords": ["p{id}"],
                "description": "d{id}", "moreInfo": "m{id}"}}"#
        )
    }

    #[test]
    fn test_parse_valid_records_in_order() {
        let json = format!(
            "[{}, {}]",
            record(2, "pokemon", "9.5"),
            record(1, "naruto", "19.9")
        );
        let load = parse_products(&json).unwrap();
        assert!(load.rejected.is_empty());
        let ids: Vec<u32> = load.products.iter().map(|p| p.id.0).collect();
        assert_eq!(ids, vec![2, 1]);
        assert_eq!(load.products[1].category, Category::Naruto);
    }

    #[test]
    fn test_skips_malformed_records() {
        let json = format!(
            "[{}, {}, {}, {}, {}]",
            record(1, "naruto", "19.9"),
            record(2, "All", "5"),
            record(3, "pokemon", "-1"),
            r#"{"id": 4, "name": "no price"}"#,
            record(1, "pokemon", "3"),
        );
        let load = parse_products(&json).unwrap();
        assert_eq!(load.products.len(), 1);

        let rejected: Vec<usize> = load.rejected.iter().map(|r| r.index).collect();
        assert_eq!(rejected, vec![1, 2, 3, 4]);
        assert!(matches!(load.rejected[0].error, RecordError::Invalid(_)));
        assert!(matches!(load.rejected[1].error, RecordError::InvalidPrice(p) if p == -1.0));
        assert!(matches!(load.rejected[2].error, RecordError::Invalid(_)));
        assert!(matches!(
            load.rejected[3].error,
            RecordError::DuplicateId(ProductId(1))
        ));
    }

    #[test]
    fn test_top_level_must_be_array() {
        assert!(matches!(
            parse_products(r#"{"products": []}"#),
            Err(CatalogError::NotAnArray("object"))
        ));
        assert!(matches!(parse_products("not json"), Err(CatalogError::Json(_))));
    }

    #[test]
    fn test_negative_zero_price_is_normalised() {
        let load = parse_products(&format!("[{}]", record(1, "naruto", "-0.0"))).unwrap();
        assert!(load.rejected.is_empty());
        assert!(load.products[0].price.is_sign_positive());
    }

    #[test]
    fn test_description_and_more_info_are_both_required() {
        let json = r#"[
            {"id": 1, "name": "A", "category": "naruto", "price": 1, "image": "/a.png",
             "keywords": ["a"], "description": "d"},
            {"id": 2, "name": "B", "category": "naruto", "price": 1, "image": "/b.png",
             "keywords": ["b"], "moreInfo": "m"},
            {"id": 3, "name": "C", "category": "naruto", "price": 1, "image": "/c.png",
             "description": "d", "moreinfo": "m"}
        ]"#;
        let load = parse_products(json).unwrap();
        let rejected: Vec<usize> = load.rejected.iter().map(|r| r.index).collect();
        assert_eq!(rejected, vec![0, 1]);
        assert_eq!(load.products.len(), 1);
        assert!(load.products[0].keywords.is_empty());
    }

    #[test]
    fn test_empty_array_is_valid() {
        let load = parse_products("[]").unwrap();
        assert!(load.products.is_empty());
        assert!(load.rejected.is_empty());
    }

    #[test]
    fn test_load_products_propagates_document_errors() {
        assert!(load_products("42").is_err());
        assert_eq!(load_products(&format!("[{}]", record(5, "one-piece", "0"))).unwrap().len(), 1);
    }
}
