use serde::{Deserialize, Serialize};

use crate::constants::CURRENCY_PREFIX;

/// A single item on the menu
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    /// Listed price as a whole amount, printed as `Rs. <price>`
    pub price: u32,
    pub description: String,
    /// Image reference as published on the storefront (opaque path)
    #[serde(default)]
    pub image: String,
}

impl MenuItem {
    pub fn new(
        name: impl Into<String>,
        price: u32,
        description: impl Into<String>,
        image: impl Into<String>,
    ) -> Self {
        MenuItem {
            name: name.into(),
            price,
            description: description.into(),
            image: image.into(),
        }
    }

    pub fn display_price(&self) -> String {
        format!("{} {}", CURRENCY_PREFIX, self.price)
    }
}

/// A named group of menu items, used as the filter key in the menu browser
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub name: String,
    pub items: Vec<MenuItem>,
}

impl Category {
    pub fn new(name: impl Into<String>, items: Vec<MenuItem>) -> Self {
        Category {
            name: name.into(),
            items,
        }
    }
}

/// The full, read-only menu. Built once at startup; see `catalog` for loading
/// and validation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCatalog {
    pub categories: Vec<Category>,
}

impl MenuCatalog {
    /// Look up a category by its name
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Position of a category in declaration order
    pub fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.category(name).is_some()
    }

    pub fn category_names(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.name.clone()).collect()
    }

    pub fn first_category(&self) -> Option<&Category> {
        self.categories.first()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_price() {
        let item = MenuItem::new(
            "Espresso",
            149,
            "Rich, bold single-origin espresso shot",
            "/espresso.jpeg",
        );
        assert_eq!(item.display_price(), "Rs. 149");
    }

    #[test]
    fn test_category_lookup() {
        let catalog = MenuCatalog {
            categories: vec![
                Category::new("Bread", vec![MenuItem::new("Baguette", 649, "", "")]),
                Category::new("Cakes", vec![MenuItem::new("Red Velvet", 1999, "", "")]),
            ],
        };
        assert_eq!(catalog.position("Cakes"), Some(1));
        assert!(catalog.contains("Bread"));
        assert!(catalog.category("Pizza").is_none());
        assert_eq!(catalog.category_names(), vec!["Bread", "Cakes"]);
    }
}
