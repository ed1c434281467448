//! Menu selector - which category is showing and what it contains

use std::sync::Arc;

use crate::models::{MenuCatalog, MenuItem};

/// Currently selected menu category.
///
/// The selection always names a category from the catalog: it starts at the
/// first declared category and unknown names are refused.
#[derive(Clone, Debug)]
pub struct MenuSelection {
    catalog: Arc<MenuCatalog>,
    selected: String,
}

impl MenuSelection {
    pub fn new(catalog: Arc<MenuCatalog>) -> Self {
        let selected = catalog
            .first_category()
            .map(|c| c.name.clone())
            .unwrap_or_default();
        MenuSelection { catalog, selected }
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    pub fn selected_category(&self) -> &str {
        &self.selected
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.catalog.position(&self.selected)
    }

    /// Select a category by name. Returns false (and changes nothing) when the
    /// name is not in the catalog.
    pub fn select_category(&mut self, name: &str) -> bool {
        if !self.catalog.contains(name) {
            tracing::debug!(category = name, "Ignoring unknown category");
            return false;
        }
        if self.selected != name {
            tracing::info!(category = name, "Category selected");
            self.selected = name.to_string();
        }
        true
    }

    /// Select the category at `index` in declaration order
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.catalog.categories.get(index) {
            Some(category) => {
                let name = category.name.clone();
                self.select_category(&name)
            }
            None => false,
        }
    }

    pub fn next_category(&mut self) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        let next = self.selected_index().map(|i| (i + 1) % len).unwrap_or(0);
        self.select_index(next);
    }

    pub fn prev_category(&mut self) {
        let len = self.catalog.len();
        if len == 0 {
            return;
        }
        let prev = self
            .selected_index()
            .map(|i| i.checked_sub(1).unwrap_or(len - 1))
            .unwrap_or(0);
        self.select_index(prev);
    }

    /// Items of the selected category, in catalog order. Empty if the lookup
    /// misses.
    pub fn visible_items(&self) -> &[MenuItem] {
        self.catalog
            .category(&self.selected)
            .map(|c| c.items.as_slice())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn selection() -> MenuSelection {
        MenuSelection::new(Arc::new(catalog::built_in().unwrap()))
    }

    #[test]
    fn test_initial_selection_is_first_category() {
        let menu = selection();
        assert_eq!(menu.selected_category(), "Bread");
        let names: Vec<&str> = menu.visible_items().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Sourdough Boule", "Rustic Baguette", "Multigrain Loaf"]);
    }

    #[test]
    fn test_every_category_shows_its_items_in_order() {
        let mut menu = selection();
        let catalog = menu.catalog().clone();
        for category in &catalog.categories {
            assert!(menu.select_category(&category.name));
            assert_eq!(menu.selected_category(), category.name);
            assert_eq!(menu.visible_items(), category.items.as_slice());
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let mut menu = selection();
        menu.select_category("Cakes");
        assert!(!menu.select_category("Pizza"));
        assert_eq!(menu.selected_category(), "Cakes");
        assert_eq!(menu.visible_items().len(), 3);
        assert_eq!(menu.visible_items()[0].name, "Classic Chocolate");
    }

    #[test]
    fn test_next_and_prev_wrap() {
        let mut menu = selection();
        menu.prev_category();
        assert_eq!(menu.selected_category(), "Beverages");
        menu.next_category();
        assert_eq!(menu.selected_category(), "Bread");
        menu.next_category();
        assert_eq!(menu.selected_category(), "Croissant");
    }

    #[test]
    fn test_select_index_out_of_range() {
        let mut menu = selection();
        assert!(menu.select_index(2));
        assert!(!menu.select_index(9));
        assert_eq!(menu.selected_category(), "Cakes");
    }

    #[test]
    fn test_empty_catalog_shows_nothing() {
        let mut menu = MenuSelection::new(Arc::new(MenuCatalog { categories: vec![] }));
        menu.next_category();
        assert_eq!(menu.selected_category(), "");
        assert!(menu.visible_items().is_empty());
    }
}
