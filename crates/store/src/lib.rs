//! Record-store gateway for the padron user registry.
//!
//! The remote document database owns the durable record set and assigns
//! ids; this crate puts it behind the [`UserStore`] trait so the
//! controller never touches a transport directly. Two implementations:
//! [`RestStore`] for the hosted collection API and [`MemoryStore`] for
//! tests and local runs.
//!
//! Every operation is a single attempt. There are no retries, no
//! backoff, and no transactions; failures are reported to the caller,
//! which decides how to surface them.

pub mod memory;
pub mod models;
pub mod rest;

pub use memory::MemoryStore;
pub use models::{UserFields, UserRecord};
pub use rest::RestStore;

use async_trait::async_trait;
use padron_core::error::StoreError;
use padron_core::types::RecordId;

/// Gateway to one remote collection of user documents.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fetch the full current sequence of records. No filtering, no
    /// pagination.
    async fn list_all(&self) -> Result<Vec<UserRecord>, StoreError>;

    /// Whether a record with exactly this `(nombre, apellido)` pair
    /// exists, via a compound equality query.
    ///
    /// Not atomic with a subsequent [`insert`](UserStore::insert): a
    /// concurrent client can slip a duplicate in between the check and
    /// the write. The registry accepts that window.
    async fn exists_by_name(&self, nombre: &str, apellido: &str) -> Result<bool, StoreError>;

    /// Create a new record. The store assigns the id and returns it.
    async fn insert(&self, fields: &UserFields) -> Result<RecordId, StoreError>;

    /// Replace both fields on an existing record.
    ///
    /// Fails with [`StoreError::NotFound`] if the id no longer exists.
    async fn update(&self, id: &str, fields: &UserFields) -> Result<(), StoreError>;

    /// Remove a record. Deleting an id that is already gone succeeds;
    /// the operation is idempotent from the caller's view.
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

#[async_trait]
impl<S: UserStore + ?Sized> UserStore for std::sync::Arc<S> {
    async fn list_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        (**self).list_all().await
    }

    async fn exists_by_name(&self, nombre: &str, apellido: &str) -> Result<bool, StoreError> {
        (**self).exists_by_name(nombre, apellido).await
    }

    async fn insert(&self, fields: &UserFields) -> Result<RecordId, StoreError> {
        (**self).insert(fields).await
    }

    async fn update(&self, id: &str, fields: &UserFields) -> Result<(), StoreError> {
        (**self).update(id, fields).await
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        (**self).delete(id).await
    }
}
