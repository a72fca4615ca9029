//! Настройки страницы из query-строки URL.
//!
//! `?log=info&category=naruto&q=sasuke`

use contracts::domain::a001_product::catalog::FilterCriteria;
use contracts::enums::category::CategoryFilter;
use serde::Deserialize;
use std::str::FromStr;
use web_sys::window;

/// Префикс валюты перед ценой
pub const CURRENCY_PREFIX: &str = "R$";

#[derive(Debug, Default, Deserialize)]
struct QueryParams {
    log: Option<String>,
    category: Option<String>,
    q: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    pub log_level: log::Level,
    pub initial_criteria: FilterCriteria,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            log_level: if cfg!(debug_assertions) {
                log::Level::Debug
            } else {
                log::Level::Info
            },
            initial_criteria: FilterCriteria::default(),
        }
    }
}

impl CatalogConfig {
    /// Разбор query-строки; неизвестные и битые значения заменяются значениями по умолчанию
    pub fn from_query(query: &str) -> Self {
        let params: QueryParams =
            serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default();
        let mut config = Self::default();

        if let Some(level) = params.log.as_deref().and_then(|l| log::Level::from_str(l).ok()) {
            config.log_level = level;
        }
        if let Some(code) = params.category {
            config.initial_criteria.category = CategoryFilter::from_code(&code);
        }
        if let Some(q) = params.q {
            config.initial_criteria.search_text = q;
        }
        config
    }

    /// Настройки из адресной строки текущего окна
    pub fn from_location() -> Self {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        Self::from_query(&search)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::enums::category::Category;

    #[test]
    fn test_empty_query_gives_defaults() {
        assert_eq!(CatalogConfig::from_query(""), CatalogConfig::default());
        assert_eq!(CatalogConfig::from_query("?"), CatalogConfig::default());
    }

    #[test]
    fn test_full_query() {
        let config = CatalogConfig::from_query("?log=warn&category=naruto&q=Sasuke");
        assert_eq!(config.log_level, log::Level::Warn);
        assert_eq!(
            config.initial_criteria.category,
            CategoryFilter::Only(Category::Naruto)
        );
        assert_eq!(config.initial_criteria.search_text, "Sasuke");
    }

    #[test]
    fn test_invalid_log_level_falls_back() {
        let config = CatalogConfig::from_query("log=loud");
        assert_eq!(config.log_level, CatalogConfig::default().log_level);
    }

    #[test]
    fn test_unknown_category_is_kept_as_unrecognized() {
        let config = CatalogConfig::from_query("category=bleach");
        assert_eq!(
            config.initial_criteria.category,
            CategoryFilter::Unrecognized("bleach".to_string())
        );
    }

    #[test]
    fn test_search_text_is_url_decoded() {
        let config = CatalogConfig::from_query("q=one%20piece");
        assert_eq!(config.initial_criteria.search_text, "one piece");
    }
}
