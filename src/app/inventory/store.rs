//! 内存产品存储

use thiserror::Error;
use tracing::warn;

use super::model::Product;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("product with id '{0}' already exists")]
    DuplicateId(String),
}

/// 按插入顺序保存的产品集合，`id` 在集合内唯一
#[derive(Debug, Default)]
pub struct ProductStore {
    products: Vec<Product>,
}

impl ProductStore {
    /// 由持久化数据构建存储；重复的 `id` 保留第一条
    pub fn from_products(products: Vec<Product>) -> Self {
        let mut store = Self::default();
        for product in products {
            let id = product.id.clone();
            if store.insert(product).is_err() {
                warn!("丢弃重复的产品记录: {}", id);
            }
        }
        store
    }

    pub fn list(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn insert(&mut self, product: Product) -> Result<(), StoreError> {
        if self.find(&product.id).is_some() {
            return Err(StoreError::DuplicateId(product.id));
        }
        self.products.push(product);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map};

    fn product(id: &str, name: &str) -> Product {
        Product {
            id: id.to_string(),
            name: name.to_string(),
            category: "tools".to_string(),
            price: json!(1.5),
            stock: json!(3),
            weight_kg: json!(0.2),
            extra: Map::new(),
        }
    }

    #[test]
    fn insert_preserves_order() {
        let mut store = ProductStore::default();
        store.insert(product("B", "second")).unwrap();
        store.insert(product("A", "first")).unwrap();
        let ids: Vec<_> = store.list().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["B", "A"]);
    }

    #[test]
    fn duplicate_insert_leaves_store_untouched() {
        let mut store = ProductStore::default();
        store.insert(product("A", "original")).unwrap();
        let err = store.insert(product("A", "impostor")).unwrap_err();
        assert_eq!(err, StoreError::DuplicateId("A".into()));
        assert_eq!(store.len(), 1);
        assert_eq!(store.find("A").unwrap().name, "original");
    }

    #[test]
    fn find_misses_cleanly() {
        let store = ProductStore::default();
        assert!(store.is_empty());
        assert!(store.find("NOPE").is_none());
    }

    #[test]
    fn find_is_exact_match() {
        let mut store = ProductStore::default();
        store.insert(product("prod-1", "x")).unwrap();
        assert!(store.find("PROD-1").is_none());
        assert!(store.find("prod-1").is_some());
    }

    #[test]
    fn from_products_keeps_first_duplicate() {
        let store = ProductStore::from_products(vec![
            product("A", "first"),
            product("B", "other"),
            product("A", "second"),
        ]);
        assert_eq!(store.len(), 2);
        assert_eq!(store.find("A").unwrap().name, "first");
    }
}
