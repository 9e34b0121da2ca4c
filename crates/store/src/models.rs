//! Wire models for the user collection.

use padron_core::types::RecordId;
use serde::{Deserialize, Serialize};

/// A document from the remote collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    /// Opaque id assigned by the store, immutable once set.
    pub id: RecordId,
    pub nombre: String,
    pub apellido: String,
}

/// The caller-supplied fields of a record. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub nombre: String,
    pub apellido: String,
}

impl UserFields {
    pub fn new(nombre: impl Into<String>, apellido: impl Into<String>) -> Self {
        Self {
            nombre: nombre.into(),
            apellido: apellido.into(),
        }
    }
}

impl UserRecord {
    /// Rebuild a record from an assigned id plus the submitted fields.
    pub fn from_fields(id: RecordId, fields: &UserFields) -> Self {
        Self {
            id,
            nombre: fields.nombre.clone(),
            apellido: fields.apellido.clone(),
        }
    }
}
