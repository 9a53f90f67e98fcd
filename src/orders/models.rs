use serde::{Deserialize, Serialize};

const BUNDLED_MENU: &str = include_str!("../../content/menu.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    /// Whole dollars
    pub price: u32,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// Room-service menu
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Menu {
    pub categories: Vec<MenuCategory>,
}

impl Menu {
    pub fn bundled() -> Result<Self, serde_json::Error> {
        Self::from_json(BUNDLED_MENU)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn find_item(&self, item_id: &str) -> Option<&MenuItem> {
        self.categories
            .iter()
            .flat_map(|category| category.items.iter())
            .find(|item| item.id == item_id)
    }
}
