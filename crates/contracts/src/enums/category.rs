use serde::{Deserialize, Serialize};
use std::fmt;

/// Категория товара каталога (франшиза)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "one-piece")]
    OnePiece,
    #[serde(rename = "naruto")]
    Naruto,
    #[serde(rename = "jujutsu-kaisen")]
    JujutsuKaisen,
    #[serde(rename = "hunter-x-hunter")]
    HunterXHunter,
    #[serde(rename = "pokemon")]
    Pokemon,
}

impl Category {
    /// Код категории, как он хранится в данных
    pub fn code(&self) -> &'static str {
        match self {
            Category::OnePiece => "one-piece",
            Category::Naruto => "naruto",
            Category::JujutsuKaisen => "jujutsu-kaisen",
            Category::HunterXHunter => "hunter-x-hunter",
            Category::Pokemon => "pokemon",
        }
    }

    /// Человекочитаемое название для кнопок фильтра
    pub fn display_name(&self) -> &'static str {
        match self {
            Category::OnePiece => "One Piece",
            Category::Naruto => "Naruto",
            Category::JujutsuKaisen => "Jujutsu Kaisen",
            Category::HunterXHunter => "Hunter x Hunter",
            Category::Pokemon => "Pokemon",
        }
    }

    /// Все категории в порядке отображения
    pub fn all() -> Vec<Category> {
        vec![
            Category::OnePiece,
            Category::Naruto,
            Category::JujutsuKaisen,
            Category::HunterXHunter,
            Category::Pokemon,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "one-piece" => Some(Category::OnePiece),
            "naruto" => Some(Category::Naruto),
            "jujutsu-kaisen" => Some(Category::JujutsuKaisen),
            "hunter-x-hunter" => Some(Category::HunterXHunter),
            "pokemon" => Some(Category::Pokemon),
            _ => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Значение фильтра по категории.
///
/// `All` существует только как фильтр и никогда не хранится в товаре.
/// Неизвестный код не считается ошибкой: такой фильтр просто ничего не находит.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    Unrecognized(String),
}

impl CategoryFilter {
    pub const ALL_CODE: &'static str = "all";

    /// Разбор кода фильтра. Пустая строка и `all` (в любом регистре) дают `All`.
    pub fn from_code(code: &str) -> Self {
        if code.is_empty() || code.eq_ignore_ascii_case(Self::ALL_CODE) {
            return CategoryFilter::All;
        }
        match Category::from_code(code) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::Unrecognized(code.to_string()),
        }
    }

    pub fn code(&self) -> &str {
        match self {
            CategoryFilter::All => Self::ALL_CODE,
            CategoryFilter::Only(category) => category.code(),
            CategoryFilter::Unrecognized(code) => code,
        }
    }

    /// Подходит ли категория товара под фильтр
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
            CategoryFilter::Unrecognized(_) => false,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}
