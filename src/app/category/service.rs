//! 类目业务服务

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use super::model::{Category, CategoryRequest};
use crate::core::error::AppError;
use crate::infrastructure::store::DocumentStore;

#[derive(Clone)]
pub struct CategoryService {
    store: Arc<DocumentStore>,
}

impl CategoryService {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    pub fn list_categories(&self) -> Result<Vec<Category>, AppError> {
        let mut categories = self.store.categories.find_all()?;
        categories.sort_by_key(|c| c.created_at);
        Ok(categories)
    }

    pub fn get_category(&self, id: Uuid) -> Result<Category, AppError> {
        self.store
            .categories
            .find(id)?
            .ok_or_else(|| AppError::not_found("Could not find category for this id."))
    }

    pub fn create_category(&self, req: CategoryRequest) -> Result<Category, AppError> {
        req.validate()?;

        let now = Utc::now();
        let category = Category {
            id: Uuid::new_v4(),
            name: req.name,
            created_at: now,
            updated_at: now,
        };

        self.store.categories.insert(category.id, category.clone())?;
        Ok(category)
    }

    pub fn update_category(&self, id: Uuid, req: CategoryRequest) -> Result<Category, AppError> {
        req.validate()?;

        let mut category = self.get_category(id)?;
        category.name = req.name;
        category.updated_at = Utc::now();

        // 读取和写回之间类目被并发删除时按 404 处理，不能静默丢写
        if !self.store.categories.replace(id, category.clone())? {
            return Err(AppError::not_found("Could not find category for this id."));
        }
        Ok(category)
    }

    /// 删除类目并级联把引用它的商品置空，读取端不会看到悬空引用
    pub fn delete_category(&self, id: Uuid) -> Result<(), AppError> {
        if !self.store.categories.remove(id)? {
            return Err(AppError::not_found("Could not find category for this id."));
        }

        self.store.products.update_all(|product| {
            if product.category == Some(id) {
                product.category = None;
            }
        })?;

        Ok(())
    }
}
