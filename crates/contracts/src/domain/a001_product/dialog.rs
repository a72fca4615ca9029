//! Состояние диалога с подробностями товара.
//!
//! Closed --open(id)--> OpenCollapsed <--toggle--> OpenExpanded --close--> Closed

use super::aggregate::{ProductId, ProductLookup};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DialogPhase {
    #[default]
    Closed,
    OpenCollapsed,
    OpenExpanded,
}

/// Где произошло нажатие указателя относительно границ диалога
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    Inside,
    Outside,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetailDialog {
    phase: DialogPhase,
    description: String,
    more_info: String,
}

impl DetailDialog {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn phase(&self) -> DialogPhase {
        self.phase
    }

    pub fn is_open(&self) -> bool {
        self.phase != DialogPhase::Closed
    }

    pub fn is_expanded(&self) -> bool {
        self.phase == DialogPhase::OpenExpanded
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn more_info(&self) -> &str {
        &self.more_info
    }

    /// Открывает диалог для товара. Неизвестный id ничего не меняет.
    ///
    /// Возвращает `true`, если товар найден.
    pub fn open<L>(&mut self, lookup: &L, id: ProductId) -> bool
    where
        L: ProductLookup + ?Sized,
    {
        let Some(product) = lookup.find_product(id) else {
            log::debug!("detail dialog: product {} not found, ignoring", id);
            return false;
        };

        self.description = product.description.clone();
        self.more_info = product.more_info.clone();
        self.phase = DialogPhase::OpenCollapsed;
        true
    }

    /// Закрытие всегда сворачивает панель "Mais informações"
    pub fn close(&mut self) {
        self.phase = DialogPhase::Closed;
    }

    /// Переключает дополнительную панель; пока диалог закрыт, ничего не делает
    pub fn toggle_expanded(&mut self) {
        self.phase = match self.phase {
            DialogPhase::Closed => DialogPhase::Closed,
            DialogPhase::OpenCollapsed => DialogPhase::OpenExpanded,
            DialogPhase::OpenExpanded => DialogPhase::OpenCollapsed,
        };
    }

    /// Нажатие вне границ открытого диалога закрывает его.
    ///
    /// Возвращает `true`, если диалог был закрыт этим нажатием.
    pub fn handle_pointer_down(&mut self, target: PointerTarget) -> bool {
        if self.is_open() && target == PointerTarget::Outside {
            self.close();
            return true;
        }
        false
    }

    /// Нужен ли сейчас глобальный слушатель нажатий вне диалога
    pub fn wants_outside_listener(&self) -> bool {
        self.is_open()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::aggregate::fixtures::naruto_and_pokemon;
    use crate::domain::a001_product::catalog::CatalogStore;

    fn opened(phase: DialogPhase) -> DetailDialog {
        let products = naruto_and_pokemon();
        let mut dialog = DetailDialog::new();
        if phase != DialogPhase::Closed {
            assert!(dialog.open(&products, ProductId(1)));
        }
        if phase == DialogPhase::OpenExpanded {
            dialog.toggle_expanded();
        }
        assert_eq!(dialog.phase(), phase);
        dialog
    }

    #[test]
    fn test_initial_state_is_closed() {
        let dialog = DetailDialog::new();
        assert!(!dialog.is_open());
        assert!(!dialog.is_expanded());
        assert!(!dialog.wants_outside_listener());
    }

    #[test]
    fn test_open_copies_product_texts() {
        let store = CatalogStore::new(naruto_and_pokemon());
        let mut dialog = DetailDialog::new();

        assert!(dialog.open(&store, ProductId(2)));
        assert_eq!(dialog.phase(), DialogPhase::OpenCollapsed);
        assert_eq!(dialog.description(), "Descrição 2");
        assert_eq!(dialog.more_info(), "Mais informações 2");
        assert!(dialog.wants_outside_listener());
    }

    #[test]
    fn test_close_always_collapses() {
        for phase in [
            DialogPhase::Closed,
            DialogPhase::OpenCollapsed,
            DialogPhase::OpenExpanded,
        ] {
            let mut dialog = opened(phase);
            dialog.close();
            assert!(!dialog.is_open());
            assert!(!dialog.is_expanded());
        }
    }

    #[test]
    fn test_double_toggle_returns_to_collapsed() {
        let mut dialog = opened(DialogPhase::OpenCollapsed);
        dialog.toggle_expanded();
        assert_eq!(dialog.phase(), DialogPhase::OpenExpanded);
        dialog.toggle_expanded();
        assert_eq!(dialog.phase(), DialogPhase::OpenCollapsed);
    }

    #[test]
    fn test_toggle_while_closed_is_inert() {
        let products = naruto_and_pokemon();
        let mut dialog = DetailDialog::new();
        dialog.toggle_expanded();
        assert_eq!(dialog.phase(), DialogPhase::Closed);

        dialog.open(&products, ProductId(1));
        assert_eq!(dialog.phase(), DialogPhase::OpenCollapsed);
    }

    #[test]
    fn test_open_unknown_id_is_noop() {
        let products = naruto_and_pokemon();
        for phase in [
            DialogPhase::Closed,
            DialogPhase::OpenCollapsed,
            DialogPhase::OpenExpanded,
        ] {
            let mut dialog = opened(phase);
            let before = dialog.clone();
            assert!(!dialog.open(&products, ProductId(42)));
            assert_eq!(dialog, before);
        }
    }

    #[test]
    fn test_reopen_starts_collapsed() {
        let products = naruto_and_pokemon();
        let mut dialog = opened(DialogPhase::OpenExpanded);
        dialog.close();
        dialog.open(&products, ProductId(2));
        assert_eq!(dialog.phase(), DialogPhase::OpenCollapsed);
        assert_eq!(dialog.description(), "Descrição 2");
    }

    #[test]
    fn test_open_toggle_then_outside_click_closes() {
        let store = CatalogStore::new(naruto_and_pokemon());
        let mut dialog = DetailDialog::new();
        dialog.open(&store, ProductId(2));
        dialog.toggle_expanded();

        assert!(dialog.handle_pointer_down(PointerTarget::Outside));
        assert_eq!(dialog.phase(), DialogPhase::Closed);
        assert!(!dialog.is_expanded());
        assert!(!dialog.wants_outside_listener());
    }

    #[test]
    fn test_inside_click_keeps_dialog_open() {
        let mut dialog = opened(DialogPhase::OpenExpanded);
        assert!(!dialog.handle_pointer_down(PointerTarget::Inside));
        assert_eq!(dialog.phase(), DialogPhase::OpenExpanded);
    }

    #[test]
    fn test_pointer_down_while_closed_does_nothing() {
        let mut dialog = DetailDialog::new();
        assert!(!dialog.handle_pointer_down(PointerTarget::Outside));
        assert_eq!(dialog, DetailDialog::new());
    }
}
