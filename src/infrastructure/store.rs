//! 文档存储基础设施
//!
//! 用内存中的 HashMap 模拟文档数据库的三个集合。
//! 每个集合一把读写锁，整文档替换在单个锁内完成，单文档写入天然原子。

use std::collections::HashMap;
use std::sync::RwLock;

use uuid::Uuid;

use crate::app::category::model::Category;
use crate::app::order::model::Order;
use crate::app::product::model::Product;

/// 存储层错误
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("collection '{0}' is unavailable")]
    Unavailable(&'static str),
}

/// 单个文档集合，按 id 索引
pub struct Collection<T> {
    name: &'static str,
    docs: RwLock<HashMap<Uuid, T>>,
}

impl<T: Clone> Collection<T> {
    fn new(name: &'static str) -> Self {
        Self {
            name,
            docs: RwLock::new(HashMap::new()),
        }
    }

    pub fn insert(&self, id: Uuid, doc: T) -> Result<(), StorageError> {
        let mut docs = self
            .docs
            .write()
            .map_err(|_| StorageError::Unavailable(self.name))?;
        docs.insert(id, doc);
        Ok(())
    }

    pub fn find(&self, id: Uuid) -> Result<Option<T>, StorageError> {
        let docs = self
            .docs
            .read()
            .map_err(|_| StorageError::Unavailable(self.name))?;
        Ok(docs.get(&id).cloned())
    }

    pub fn find_all(&self) -> Result<Vec<T>, StorageError> {
        let docs = self
            .docs
            .read()
            .map_err(|_| StorageError::Unavailable(self.name))?;
        Ok(docs.values().cloned().collect())
    }

    /// 整文档替换；文档不存在时返回 false，不做插入
    pub fn replace(&self, id: Uuid, doc: T) -> Result<bool, StorageError> {
        let mut docs = self
            .docs
            .write()
            .map_err(|_| StorageError::Unavailable(self.name))?;
        match docs.get_mut(&id) {
            Some(slot) => {
                *slot = doc;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn remove(&self, id: Uuid) -> Result<bool, StorageError> {
        let mut docs = self
            .docs
            .write()
            .map_err(|_| StorageError::Unavailable(self.name))?;
        Ok(docs.remove(&id).is_some())
    }

    /// 对集合内全部文档做一次原地修改（类目删除的级联置空用）
    pub fn update_all<F>(&self, mut f: F) -> Result<(), StorageError>
    where
        F: FnMut(&mut T),
    {
        let mut docs = self
            .docs
            .write()
            .map_err(|_| StorageError::Unavailable(self.name))?;
        for doc in docs.values_mut() {
            f(doc);
        }
        Ok(())
    }
}

/// 三个集合组成的文档存储
pub struct DocumentStore {
    pub products: Collection<Product>,
    pub categories: Collection<Category>,
    pub orders: Collection<Order>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self {
            products: Collection::new("products"),
            categories: Collection::new("categories"),
            orders: Collection::new("orders"),
        }
    }
}

impl Default for DocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_order(id: Uuid) -> Order {
        let now = Utc::now();
        Order {
            id,
            total: 0.0,
            items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_replace_missing_returns_false() {
        let store = DocumentStore::new();
        let id = Uuid::new_v4();

        let order = sample_order(id);
        assert!(!store.orders.replace(id, order.clone()).unwrap());

        store.orders.insert(id, order.clone()).unwrap();
        assert!(store.orders.replace(id, order).unwrap());
    }

    #[test]
    fn test_remove_reports_presence() {
        let store = DocumentStore::new();
        let id = Uuid::new_v4();

        assert!(!store.orders.remove(id).unwrap());
        store.orders.insert(id, sample_order(id)).unwrap();
        assert!(store.orders.remove(id).unwrap());
        assert!(store.orders.find(id).unwrap().is_none());
    }
}
