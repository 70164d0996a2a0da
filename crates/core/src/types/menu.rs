//! Menu catalog domain types.
//!
//! The catalog is owned by the server and mutated only through the
//! admin-gated CRUD endpoints; clients treat [`MenuItem`] as read-only data.

use serde::{Deserialize, Serialize};

use super::id::MenuItemId;
use super::price::Price;
use super::status::Category;

/// One dish or drink on the menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    /// Unique catalog ID.
    pub id: MenuItemId,
    /// Display name.
    pub name: String,
    /// Short description shown on the menu card.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image URL.
    pub image: String,
    /// Menu category.
    pub category: Category,
    /// Whether the item can currently be ordered.
    #[serde(default = "default_available")]
    pub available: bool,
}

const fn default_available() -> bool {
    true
}

/// Payload for creating a menu item (`POST /api/menu`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewMenuItem {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
    pub category: Category,
    /// Defaults to `true` when omitted.
    #[serde(default = "default_available")]
    pub available: bool,
}

/// Partial update for a menu item (`PUT /api/menu/:id`).
///
/// Absent fields keep their current value. `Option` fields make `price: 0`
/// and `available: false` representable, which a presence-by-truthiness
/// update cannot do.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuItemPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<bool>,
}

impl MenuItem {
    /// Apply a partial update in place.
    pub fn apply(&mut self, patch: MenuItemPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(available) = patch.available {
            self.available = available;
        }
    }
}
