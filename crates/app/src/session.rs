//! Owned UI state and its pure transition functions.
//!
//! [`Session`] holds everything the form knows: the list snapshot, the
//! draft fields, the submit mode, and the last inline error. Every
//! transition is a plain function over this container, so the state
//! machine is testable without a front end or a store.

use padron_core::types::RecordId;
use padron_store::{UserFields, UserRecord};

/// What a submit does: register a new user or update an existing one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Create,
    /// Entered via [`Session::begin_edit`], left only by a successful
    /// update. There is deliberately no cancel transition.
    Editing { id: RecordId },
}

/// The in-progress, unsaved form fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormDraft {
    pub nombre: String,
    pub apellido: String,
}

/// The controller-owned state container.
#[derive(Debug)]
pub struct Session {
    /// Local mirror of the remote collection. Reconciled in place after
    /// each successful write instead of re-fetched, so it drifts
    /// silently if another client mutates concurrently.
    pub list: Vec<UserRecord>,
    pub draft: FormDraft,
    pub mode: Mode,
    /// Inline error shown next to the form. Set only by failed updates.
    pub error: Option<String>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            list: Vec::new(),
            draft: FormDraft::default(),
            mode: Mode::Create,
            error: None,
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing { .. })
    }

    /// Copy a record's fields into the draft and enter edit mode.
    pub fn begin_edit(&mut self, record: &UserRecord) {
        self.draft.nombre = record.nombre.clone();
        self.draft.apellido = record.apellido.clone();
        self.mode = Mode::Editing {
            id: record.id.clone(),
        };
    }

    /// Append a freshly inserted record and clear the draft.
    pub fn apply_insert(&mut self, record: UserRecord) {
        self.list.push(record);
        self.draft = FormDraft::default();
    }

    /// Replace the matching entry after a confirmed update, clear the
    /// draft and the inline error, and return to create mode.
    pub fn apply_update(&mut self, id: &str, fields: &UserFields) {
        for record in &mut self.list {
            if record.id == id {
                record.nombre = fields.nombre.clone();
                record.apellido = fields.apellido.clone();
            }
        }
        self.draft = FormDraft::default();
        self.mode = Mode::Create;
        self.error = None;
    }

    /// Drop the matching entry after a confirmed delete.
    pub fn apply_remove(&mut self, id: &str) {
        self.list.retain(|record| record.id != id);
    }
}
