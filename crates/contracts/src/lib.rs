//! Общие типы каталога: товары, категории, состояние фильтра и диалога.

pub mod domain;
pub mod enums;
