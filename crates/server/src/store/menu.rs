//! Menu catalog collection.

use std::sync::RwLock;

use moma_core::{Category, MenuItem, MenuItemId, MenuItemPatch, NewMenuItem, Price};

use super::StoreError;

/// The menu catalog: one document per dish, sequential IDs.
#[derive(Debug)]
pub struct MenuStore {
    inner: RwLock<Table>,
}

#[derive(Debug)]
struct Table {
    items: Vec<MenuItem>,
    next_id: i32,
}

impl Default for MenuStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuStore {
    /// Create an empty catalog.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            inner: RwLock::new(Table {
                items: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a catalog preloaded with the starter menu.
    #[must_use]
    pub fn seeded() -> Self {
        let store = Self::new();
        for (name, description, price, image, category) in SEED_MENU {
            // Seeding an empty freshly-created store cannot fail.
            let _ = store.insert(NewMenuItem {
                name: (*name).to_string(),
                description: (*description).to_string(),
                price: Price::from_major(*price),
                image: (*image).to_string(),
                category: *category,
                available: true,
            });
        }
        store
    }

    /// List the whole catalog in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a storage fault.
    pub fn list(&self) -> Result<Vec<MenuItem>, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.items.clone())
    }

    /// Fetch one item by ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a storage fault.
    pub fn get(&self, id: MenuItemId) -> Result<Option<MenuItem>, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table.items.iter().find(|i| i.id == id).cloned())
    }

    /// List the items in one category.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a storage fault.
    pub fn list_by_category(&self, category: Category) -> Result<Vec<MenuItem>, StoreError> {
        let table = self.inner.read().map_err(|_| StoreError::Poisoned)?;
        Ok(table
            .items
            .iter()
            .filter(|i| i.category == category)
            .cloned()
            .collect())
    }

    /// Insert a new item, assigning the next sequential ID.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a storage fault.
    pub fn insert(&self, new: NewMenuItem) -> Result<MenuItem, StoreError> {
        let mut table = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let item = MenuItem {
            id: MenuItemId::new(table.next_id),
            name: new.name,
            description: new.description,
            price: new.price,
            image: new.image,
            category: new.category,
            available: new.available,
        };
        table.next_id += 1;
        table.items.push(item.clone());
        Ok(item)
    }

    /// Apply a partial update. `Ok(None)` when the item does not exist.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a storage fault.
    pub fn update(
        &self,
        id: MenuItemId,
        patch: MenuItemPatch,
    ) -> Result<Option<MenuItem>, StoreError> {
        let mut table = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let Some(item) = table.items.iter_mut().find(|i| i.id == id) else {
            return Ok(None);
        };
        item.apply(patch);
        Ok(Some(item.clone()))
    }

    /// Delete one item. Returns whether a document was removed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] on a storage fault.
    pub fn delete(&self, id: MenuItemId) -> Result<bool, StoreError> {
        let mut table = self.inner.write().map_err(|_| StoreError::Poisoned)?;
        let before = table.items.len();
        table.items.retain(|i| i.id != id);
        Ok(table.items.len() < before)
    }
}

/// Starter catalog, loaded when the server boots.
const SEED_MENU: &[(&str, &str, u32, &str, Category)] = &[
    (
        "Paneer Tikka",
        "Marinated cottage cheese cubes grilled with Indian spices",
        299,
        "https://images.example.com/menu/paneer-tikka.jpg",
        Category::Appetizer,
    ),
    (
        "Samosa Platter",
        "Crispy pastry filled with spiced potatoes, served with mint chutney",
        149,
        "https://images.example.com/menu/samosa-platter.jpg",
        Category::Appetizer,
    ),
    (
        "Dahi Puri",
        "Crispy puris filled with spiced potatoes, yogurt, and tangy chutneys",
        199,
        "https://images.example.com/menu/dahi-puri.jpg",
        Category::Appetizer,
    ),
    (
        "Butter Chicken",
        "Tender chicken pieces in rich tomato and butter gravy",
        449,
        "https://images.example.com/menu/butter-chicken.jpg",
        Category::Main,
    ),
    (
        "Paneer Butter Masala",
        "Cottage cheese cubes in creamy tomato gravy",
        399,
        "https://images.example.com/menu/paneer-butter-masala.jpg",
        Category::Main,
    ),
    (
        "Dal Makhani",
        "Black lentils slow-cooked with cream and butter",
        349,
        "https://images.example.com/menu/dal-makhani.jpg",
        Category::Main,
    ),
    (
        "Biryani",
        "Fragrant rice with tender meat, aromatic spices, and caramelized onions",
        449,
        "https://images.example.com/menu/biryani.jpg",
        Category::Main,
    ),
    (
        "Gulab Jamun",
        "Deep-fried milk dumplings soaked in sugar syrup",
        199,
        "https://images.example.com/menu/gulab-jamun.jpg",
        Category::Dessert,
    ),
    (
        "Rasmalai",
        "Soft cottage cheese patties in saffron milk with pistachios",
        249,
        "https://images.example.com/menu/rasmalai.jpg",
        Category::Dessert,
    ),
    (
        "Masala Chai",
        "Indian spiced tea with milk",
        79,
        "https://images.example.com/menu/masala-chai.jpg",
        Category::Drink,
    ),
    (
        "Lassi",
        "Traditional yogurt-based sweet drink",
        129,
        "https://images.example.com/menu/lassi.jpg",
        Category::Drink,
    ),
    (
        "Fresh Lime Soda",
        "Refreshing lime drink, sweet or salted",
        99,
        "https://images.example.com/menu/fresh-lime-soda.jpg",
        Category::Drink,
    ),
];
