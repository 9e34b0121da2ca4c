//! In-process store backend.
//!
//! Backs the controller tests and local runs with the same semantics as
//! the hosted collection: ids are assigned on insert, the existence
//! check is a compound equality scan, and deletes are idempotent. A
//! failure switch lets tests drive the degraded paths without a network.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use padron_core::error::StoreError;
use padron_core::types::RecordId;

use crate::models::{UserFields, UserRecord};
use crate::UserStore;

/// A [`UserStore`] holding its records in memory.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<Vec<UserRecord>>,
    unavailable: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a pre-seeded record set.
    pub fn with_records(records: Vec<UserRecord>) -> Self {
        Self {
            records: Mutex::new(records),
            unavailable: AtomicBool::new(false),
        }
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable("memory store offline".into()))
        } else {
            Ok(())
        }
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<UserRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn list_all(&self) -> Result<Vec<UserRecord>, StoreError> {
        self.check_available()?;
        Ok(self.lock().clone())
    }

    async fn exists_by_name(&self, nombre: &str, apellido: &str) -> Result<bool, StoreError> {
        self.check_available()?;
        Ok(self
            .lock()
            .iter()
            .any(|r| r.nombre == nombre && r.apellido == apellido))
    }

    async fn insert(&self, fields: &UserFields) -> Result<RecordId, StoreError> {
        self.check_available()?;
        let id = uuid::Uuid::new_v4().to_string();
        self.lock().push(UserRecord::from_fields(id.clone(), fields));
        Ok(id)
    }

    async fn update(&self, id: &str, fields: &UserFields) -> Result<(), StoreError> {
        self.check_available()?;
        let mut records = self.lock();
        match records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                record.nombre = fields.nombre.clone();
                record.apellido = fields.apellido.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound { id: id.to_string() }),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.check_available()?;
        self.lock().retain(|r| r.id != id);
        Ok(())
    }
}
