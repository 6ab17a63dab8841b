//! The product catalog: an ordered list plus the id counter.
//!
//! Plain synchronous data structure with linear scans. Locking is the
//! caller's job (see [`crate::memory::InMemoryProductRepository`]).

use crate::models::{NewProduct, Product};

#[derive(Debug, Clone)]
pub struct ProductStore {
    products: Vec<Product>,
    next_id: u64,
}

impl ProductStore {
    /// Empty store issuing ids from `first_id`
    pub fn new(first_id: u64) -> Self {
        Self {
            products: Vec::new(),
            next_id: first_id,
        }
    }

    /// Store holding `products` under ids 1, 2, 3...
    pub fn with_seed(products: impl IntoIterator<Item = NewProduct>) -> Self {
        let mut store = Self::new(1);
        for product in products {
            store.insert(product);
        }
        store
    }

    /// All products in insertion order
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn insert(&mut self, input: NewProduct) -> Product {
        let product = Product {
            id: self.next_id,
            name: input.name,
            price: input.price,
            description: input.description,
        };
        self.next_id += 1;
        self.products.push(product.clone());
        product
    }

    pub fn replace(&mut self, id: u64, input: NewProduct) -> Option<Product> {
        let product = self.products.iter_mut().find(|p| p.id == id)?;
        product.name = input.name;
        product.price = input.price;
        product.description = input.description;
        Some(product.clone())
    }

    /// Removes a product, keeping the order of the rest
    pub fn remove(&mut self, id: u64) -> Option<Product> {
        let index = self.products.iter().position(|p| p.id == id)?;
        Some(self.products.remove(index))
    }

    /// Case-insensitive substring match on name or description
    pub fn search(&self, term: &str) -> Vec<Product> {
        let term = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&term)
                    || p.description.to_lowercase().contains(&term)
            })
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
    }
}

impl Default for ProductStore {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_catalog;

    fn pen() -> NewProduct {
        NewProduct::new("Pen", 1.5, "Blue ink pen")
    }

    #[test]
    fn test_seeded_store_has_three_products_and_next_id_four() {
        let store = ProductStore::with_seed(seed_catalog());
        assert_eq!(store.len(), 3);
        assert_eq!(store.next_id(), 4);
        let names: Vec<_> = store.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["Laptop", "Smartphone", "Wireless Headphones"]);
        assert_eq!(store.get(3).map(|p| p.price), Some(199.99));
    }

    #[test]
    fn test_insert_then_get_returns_equal_product() {
        let mut store = ProductStore::default();
        let created = store.insert(pen());
        assert_eq!(created.id, 1);
        assert_eq!(store.get(created.id), Some(&created));
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut store = ProductStore::with_seed(seed_catalog());
        let first = store.insert(pen());
        let second = store.insert(pen());
        assert!(first.id > 3);
        assert!(second.id > first.id);
    }

    #[test]
    fn test_removed_ids_are_never_reused() {
        let mut store = ProductStore::with_seed(seed_catalog());
        let removed = store.remove(3).unwrap();
        assert_eq!(removed.name, "Wireless Headphones");
        assert!(store.get(3).is_none());

        let created = store.insert(pen());
        assert_eq!(created.id, 4);
    }

    #[test]
    fn test_remove_keeps_order_of_remaining() {
        let mut store = ProductStore::with_seed(seed_catalog());
        store.remove(2);
        let ids: Vec<_> = store.list().iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 3]);
    }

    #[test]
    fn test_remove_missing_id() {
        let mut store = ProductStore::with_seed(seed_catalog());
        assert!(store.remove(999).is_none());
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_replace_keeps_id_and_position() {
        let mut store = ProductStore::with_seed(seed_catalog());
        let replaced = store.replace(2, pen()).unwrap();
        assert_eq!(
            replaced,
            Product {
                id: 2,
                name: "Pen".into(),
                price: 1.5,
                description: "Blue ink pen".into(),
            }
        );
        assert_eq!(store.list()[1], replaced);
        assert_eq!(store.next_id(), 4);
    }

    #[test]
    fn test_replace_missing_id() {
        let mut store = ProductStore::default();
        assert!(store.replace(1, pen()).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let store = ProductStore::with_seed(seed_catalog());

        let by_name = store.search("LAPTOP");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].id, 1);

        let by_description = store.search("noise");
        assert_eq!(by_description.len(), 1);
        assert_eq!(by_description[0].name, "Wireless Headphones");

        assert!(store.search("tablet").is_empty());
    }

    #[test]
    fn test_new_store_starts_at_given_id() {
        let mut store = ProductStore::new(100);
        assert_eq!(store.insert(pen()).id, 100);
        assert_eq!(store.next_id(), 101);
    }
}
