//! 商品业务服务

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use super::model::{Product, ProductRequest};
use crate::core::error::AppError;
use crate::infrastructure::store::DocumentStore;

#[derive(Clone)]
pub struct ProductService {
    store: Arc<DocumentStore>,
}

impl ProductService {
    pub fn new(store: Arc<DocumentStore>) -> Self {
        Self { store }
    }

    pub fn list_products(&self) -> Result<Vec<Product>, AppError> {
        let mut products = self.store.products.find_all()?;
        products.sort_by_key(|p| p.created_at);
        Ok(products)
    }

    /// 按类目过滤；类目本身不存在时 404
    pub fn list_products_by_category(&self, category_id: Uuid) -> Result<Vec<Product>, AppError> {
        if self.store.categories.find(category_id)?.is_none() {
            return Err(AppError::not_found("Could not find category for this id."));
        }

        let mut products: Vec<Product> = self
            .store
            .products
            .find_all()?
            .into_iter()
            .filter(|p| p.category == Some(category_id))
            .collect();
        products.sort_by_key(|p| p.created_at);
        Ok(products)
    }

    pub fn get_product(&self, id: Uuid) -> Result<Product, AppError> {
        self.store
            .products
            .find(id)?
            .ok_or_else(|| AppError::not_found("Could not find product for this id."))
    }

    pub fn create_product(&self, req: ProductRequest) -> Result<Product, AppError> {
        req.validate()?;
        self.check_category(req.category)?;

        let now = Utc::now();
        let product = Product {
            id: Uuid::new_v4(),
            name: req.name,
            description: req.description,
            price: req.price,
            count_in_stock: req.count_in_stock,
            image: req.image,
            quantity: req.quantity,
            category: req.category,
            created_at: now,
            updated_at: now,
        };

        self.store.products.insert(product.id, product.clone())?;
        Ok(product)
    }

    /// 无条件覆盖全部可变字段，没有部分更新语义
    pub fn update_product(&self, id: Uuid, req: ProductRequest) -> Result<Product, AppError> {
        req.validate()?;
        self.check_category(req.category)?;

        let mut product = self.get_product(id)?;
        product.name = req.name;
        product.description = req.description;
        product.price = req.price;
        product.count_in_stock = req.count_in_stock;
        product.image = req.image;
        product.quantity = req.quantity;
        product.category = req.category;
        product.updated_at = Utc::now();

        // 读取和写回之间商品被并发删除时按 404 处理，不能静默丢写
        if !self.store.products.replace(id, product.clone())? {
            return Err(AppError::not_found("Could not find product for this id."));
        }
        Ok(product)
    }

    pub fn delete_product(&self, id: Uuid) -> Result<(), AppError> {
        if !self.store.products.remove(id)? {
            return Err(AppError::not_found("Could not find product for this id."));
        }
        Ok(())
    }

    fn check_category(&self, category: Option<Uuid>) -> Result<(), AppError> {
        if let Some(cid) = category {
            if self.store.categories.find(cid)?.is_none() {
                return Err(AppError::invalid("category", "unknown category reference"));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> ProductService {
        ProductService::new(Arc::new(DocumentStore::new()))
    }

    fn request(name: &str, price: f64) -> ProductRequest {
        ProductRequest {
            name: name.to_string(),
            description: "a test product".to_string(),
            price,
            count_in_stock: 10,
            image: "image.png".to_string(),
            quantity: 0,
            category: None,
        }
    }

    #[test]
    fn test_create_and_get() {
        let service = service();
        let created = service.create_product(request("P1", 10.0)).unwrap();

        let fetched = service.get_product(created.id).unwrap();
        assert_eq!(fetched.name, "P1");
        assert_eq!(fetched.price, 10.0);
    }

    #[test]
    fn test_create_rejects_invalid_fields() {
        let service = service();

        let mut req = request("", 10.0);
        req.description = "abc".to_string();

        match service.create_product(req) {
            Err(AppError::Validation(errors)) => {
                let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
                assert!(fields.contains(&"name"));
                assert!(fields.contains(&"description"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_create_rejects_unknown_category() {
        let service = service();
        let mut req = request("P1", 10.0);
        req.category = Some(Uuid::new_v4());

        match service.create_product(req) {
            Err(AppError::Validation(errors)) => assert_eq!(errors[0].field, "category"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_update_overwrites_all_fields() {
        let service = service();
        let created = service.create_product(request("P1", 10.0)).unwrap();

        let updated = service
            .update_product(created.id, request("P1 v2", 12.5))
            .unwrap();
        assert_eq!(updated.name, "P1 v2");
        assert_eq!(updated.price, 12.5);
        assert_eq!(service.get_product(created.id).unwrap().price, 12.5);
    }

    #[test]
    fn test_update_missing_is_not_found() {
        let service = service();
        assert!(matches!(
            service.update_product(Uuid::new_v4(), request("P1", 10.0)),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_update_after_concurrent_delete_is_not_found() {
        let service = service();
        let created = service.create_product(request("P1", 10.0)).unwrap();

        // 模拟另一请求在更新前删掉了商品
        service.store.products.remove(created.id).unwrap();

        assert!(matches!(
            service.update_product(created.id, request("P1 v2", 12.0)),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_missing_is_not_found() {
        let service = service();
        assert!(matches!(
            service.delete_product(Uuid::new_v4()),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_removes_record() {
        let service = service();
        let created = service.create_product(request("P1", 10.0)).unwrap();

        service.delete_product(created.id).unwrap();
        assert!(matches!(
            service.get_product(created.id),
            Err(AppError::NotFound(_))
        ));
    }
}
