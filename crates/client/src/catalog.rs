//! Catalog REST client and menu filtering.
//!
//! The catalog is served by the backend's `/api/menu` surface; this client
//! covers the public read endpoints. Admin mutations go through the same
//! surface but are not part of the ordering client.

use std::ops::RangeInclusive;

use reqwest::StatusCode;
use rust_decimal::Decimal;
use thiserror::Error;
use url::Url;

use moma_core::{Category, MenuItem, MenuItemId};

/// Errors from the catalog surface.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The endpoint path could not be joined onto the base URL.
    #[error("invalid catalog URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The request could not be sent or the body could not be decoded.
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("catalog server fault: {0}")]
    ServerFault(StatusCode),
}

/// Typed client for the public menu endpoints.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: Url,
}

impl CatalogClient {
    /// Create a client against the given API base URL.
    #[must_use]
    pub fn new(base_url: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn endpoint(&self, path: &str) -> Result<Url, CatalogError> {
        Ok(self.base_url.join(path)?)
    }

    async fn fetch_items(&self, path: &str) -> Result<Vec<MenuItem>, CatalogError> {
        let url = self.endpoint(path)?;
        let response = self.http.get(url).send().await?;
        if !response.status().is_success() {
            return Err(CatalogError::ServerFault(response.status()));
        }
        Ok(response.json().await?)
    }

    /// List the whole catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure or a server fault.
    pub async fn list(&self) -> Result<Vec<MenuItem>, CatalogError> {
        self.fetch_items("/api/menu").await
    }

    /// List the items in one category.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure or a server fault.
    pub async fn list_by_category(
        &self,
        category: Category,
    ) -> Result<Vec<MenuItem>, CatalogError> {
        self.fetch_items(&format!("/api/menu/category/{category}"))
            .await
    }

    /// Fetch one item. Absent items yield `Ok(None)`, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on transport failure or a server fault.
    pub async fn get(&self, id: MenuItemId) -> Result<Option<MenuItem>, CatalogError> {
        let url = self.endpoint(&format!("/api/menu/{id}"))?;
        let response = self.http.get(url).send().await?;
        match response.status() {
            StatusCode::NOT_FOUND => Ok(None),
            status if status.is_success() => Ok(Some(response.json().await?)),
            status => Err(CatalogError::ServerFault(status)),
        }
    }
}

/// Menu browse filter: free-text search, category checkboxes, price slider.
///
/// An item matches when the query appears case-insensitively in its name or
/// description, its category is among the selected ones (an empty selection
/// means all categories), and its price lies inside the inclusive range.
#[derive(Debug, Clone, Default)]
pub struct MenuFilter {
    /// Free-text search over name and description.
    pub query: String,
    /// Selected categories; empty means no category restriction.
    pub categories: Vec<Category>,
    /// Inclusive price bounds; `None` means no price restriction.
    pub price_range: Option<RangeInclusive<Decimal>>,
}

impl MenuFilter {
    /// Whether a single item passes the filter.
    #[must_use]
    pub fn matches(&self, item: &MenuItem) -> bool {
        let query = self.query.to_lowercase();
        let matches_search = query.is_empty()
            || item.name.to_lowercase().contains(&query)
            || item.description.to_lowercase().contains(&query);
        let matches_category =
            self.categories.is_empty() || self.categories.contains(&item.category);
        let matches_price = self
            .price_range
            .as_ref()
            .is_none_or(|range| range.contains(&item.price.amount()));
        matches_search && matches_category && matches_price
    }

    /// Filter a catalog listing, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, items: &'a [MenuItem]) -> Vec<&'a MenuItem> {
        items.iter().filter(|item| self.matches(item)).collect()
    }

    /// Add or remove a category from the selection.
    pub fn toggle_category(&mut self, category: Category) {
        if let Some(pos) = self.categories.iter().position(|c| *c == category) {
            self.categories.remove(pos);
        } else {
            self.categories.push(category);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use moma_core::Price;

    use super::*;

    fn item(id: i32, name: &str, description: &str, price: i64, category: Category) -> MenuItem {
        MenuItem {
            id: MenuItemId::new(id),
            name: name.to_string(),
            description: description.to_string(),
            price: Price::new(Decimal::from(price)).unwrap(),
            image: String::new(),
            category,
            available: true,
        }
    }

    fn catalog() -> Vec<MenuItem> {
        vec![
            item(1, "Paneer Tikka", "Grilled cottage cheese", 299, Category::Appetizer),
            item(2, "Butter Chicken", "Chicken in tomato gravy", 449, Category::Main),
            item(3, "Gulab Jamun", "Milk dumplings in syrup", 199, Category::Dessert),
            item(4, "Masala Chai", "Spiced tea with milk", 79, Category::Drink),
        ]
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let filter = MenuFilter::default();
        assert_eq!(filter.apply(&catalog()).len(), 4);
    }

    #[test]
    fn test_query_searches_name_and_description() {
        let items = catalog();
        let filter = MenuFilter {
            query: "CHICKEN".to_string(),
            ..MenuFilter::default()
        };
        assert_eq!(filter.apply(&items).len(), 1);

        let filter = MenuFilter {
            query: "milk".to_string(),
            ..MenuFilter::default()
        };
        // Matches both the dessert and the chai by description.
        assert_eq!(filter.apply(&items).len(), 2);
    }

    #[test]
    fn test_category_selection() {
        let items = catalog();
        let mut filter = MenuFilter::default();
        filter.toggle_category(Category::Main);
        filter.toggle_category(Category::Drink);
        assert_eq!(filter.apply(&items).len(), 2);

        // Toggling off again widens back to everything.
        filter.toggle_category(Category::Main);
        filter.toggle_category(Category::Drink);
        assert_eq!(filter.apply(&items).len(), 4);
    }

    #[test]
    fn test_price_range_is_inclusive() {
        let items = catalog();
        let filter = MenuFilter {
            price_range: Some(Decimal::from(79)..=Decimal::from(299)),
            ..MenuFilter::default()
        };
        let matched = filter.apply(&items);
        assert_eq!(matched.len(), 3);
        assert!(matched.iter().all(|i| i.name != "Butter Chicken"));
    }

    #[test]
    fn test_filters_combine() {
        let items = catalog();
        let filter = MenuFilter {
            query: "milk".to_string(),
            categories: vec![Category::Drink],
            price_range: Some(Decimal::ZERO..=Decimal::from(100)),
        };
        let matched = filter.apply(&items);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].name, "Masala Chai");
    }
}
