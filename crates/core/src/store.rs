//! In-memory product store.
//!
//! The store is the sole owner of the product collection; all access goes
//! through its operations and no reference to the backing vec escapes.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Mutex, MutexGuard, PoisonError,
};

use uuid::Uuid;

use crate::error::{DomainError, DomainResult};
use crate::product::{Product, ProductFields, ProductId};

/// Provider of fresh, unique product identifiers.
pub trait IdGenerator: Send + Sync {
    fn generate(&self) -> ProductId;
}

/// Default generator: UUIDv7 (time-ordered) strings.
#[derive(Debug, Default)]
pub struct UuidGenerator;

impl IdGenerator for UuidGenerator {
    fn generate(&self) -> ProductId {
        ProductId::new(Uuid::now_v7().to_string())
    }
}

/// Deterministic generator for tests: "p-1", "p-2", ...
#[derive(Debug, Default)]
pub struct SequenceGenerator {
    next: AtomicU64,
}

impl IdGenerator for SequenceGenerator {
    fn generate(&self) -> ProductId {
        let n = self.next.fetch_add(1, Ordering::Relaxed) + 1;
        ProductId::new(format!("p-{n}"))
    }
}

/// Exclusive owner of the in-memory product collection.
///
/// Each operation holds the lock for its whole body, so store calls are
/// atomic with respect to each other. Insertion order is preserved,
/// including across deletes (order-preserving removal).
pub struct ProductStore {
    products: Mutex<Vec<Product>>,
    ids: Box<dyn IdGenerator>,
}

impl ProductStore {
    pub fn new(ids: Box<dyn IdGenerator>) -> Self {
        Self {
            products: Mutex::new(Vec::new()),
            ids,
        }
    }

    fn guard(&self) -> MutexGuard<'_, Vec<Product>> {
        // No operation can panic while holding the guard, so a poisoned
        // lock still protects a consistent collection; recover it.
        self.products.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Snapshot of all current products, insertion order.
    pub fn list(&self) -> Vec<Product> {
        self.guard().clone()
    }

    pub fn get(&self, id: &ProductId) -> DomainResult<Product> {
        self.guard()
            .iter()
            .find(|p| &p.id == id)
            .cloned()
            .ok_or(DomainError::NotFound)
    }

    /// Assign a fresh id, append, and return the stored record.
    pub fn create(&self, fields: ProductFields) -> Product {
        let product = fields.into_product(self.ids.generate());
        self.guard().push(product.clone());
        product
    }

    /// Replace all fields except `id` for the matching record.
    pub fn update(&self, id: &ProductId, fields: ProductFields) -> DomainResult<Product> {
        let mut products = self.guard();
        let slot = products
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(DomainError::NotFound)?;
        *slot = fields.into_product(id.clone());
        Ok(slot.clone())
    }

    /// Remove and return the matching record.
    pub fn delete(&self, id: &ProductId) -> DomainResult<Product> {
        let mut products = self.guard();
        let index = products
            .iter()
            .position(|p| &p.id == id)
            .ok_or(DomainError::NotFound)?;
        Ok(products.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ProductStore {
        ProductStore::new(Box::<SequenceGenerator>::default())
    }

    fn fields(name: &str) -> ProductFields {
        ProductFields {
            name: name.to_string(),
            description: format!("{name} description"),
            price: 10.0,
            category: "misc".to_string(),
            in_stock: true,
        }
    }

    #[test]
    fn create_then_get_returns_the_stored_record() {
        let store = store();
        let created = store.create(fields("Widget"));

        let fetched = store.get(&created.id).unwrap();
        assert_eq!(fetched, created);
        assert_eq!(fetched.name, "Widget");
    }

    #[test]
    fn create_assigns_unique_ids() {
        let store = store();
        let a = store.create(fields("A"));
        let b = store.create(fields("B"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn get_unknown_id_is_not_found() {
        let store = store();
        let err = store.get(&ProductId::from("nonexistent-id")).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn update_replaces_fields_but_keeps_id() {
        let store = store();
        let created = store.create(fields("Old"));

        let updated = store.update(&created.id, fields("New")).unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "New");
        assert_eq!(store.get(&created.id).unwrap().name, "New");
    }

    #[test]
    fn update_unknown_id_is_not_found() {
        let store = store();
        let err = store
            .update(&ProductId::from("missing"), fields("X"))
            .unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn delete_removes_the_record() {
        let store = store();
        let created = store.create(fields("Doomed"));

        let deleted = store.delete(&created.id).unwrap();
        assert_eq!(deleted, created);
        assert_eq!(store.get(&created.id).unwrap_err(), DomainError::NotFound);
        assert_eq!(store.delete(&created.id).unwrap_err(), DomainError::NotFound);
    }

    #[test]
    fn list_preserves_insertion_order_across_deletes() {
        let store = store();
        let a = store.create(fields("A"));
        let b = store.create(fields("B"));
        let c = store.create(fields("C"));

        store.delete(&b.id).unwrap();

        let names: Vec<_> = store.list().into_iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["A", "C"]);
        assert_eq!(store.list()[0].id, a.id);
        assert_eq!(store.list()[1].id, c.id);
    }

    #[test]
    fn list_returns_a_snapshot() {
        let store = store();
        store.create(fields("A"));

        let snapshot = store.list();
        store.create(fields("B"));

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.list().len(), 2);
    }
}
