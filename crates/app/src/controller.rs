//! Orchestration of validation, gateway calls, and state transitions.
//!
//! The controller owns a [`Session`] and a [`UserStore`]. Each user
//! action runs one single-attempt round trip; the local snapshot is
//! reconciled only after a confirmed remote success, so there is no
//! rollback path. Store failures are routed through the surfacing
//! policy in [`crate::policy`].

use padron_core::error::{StoreError, ValidationError};
use padron_core::types::RecordId;
use padron_core::validation::{evaluate, RuleSet};
use padron_store::{UserFields, UserRecord, UserStore};

use crate::policy::{surface, Operation, Surface};
use crate::session::{Mode, Session};

/// Result of a submit, for the front end to present.
#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was persisted and the snapshot reconciled.
    Saved,
    /// Validation rejected the draft. Show the message as a blocking
    /// alert; nothing was mutated, the mode is unchanged.
    Rejected(ValidationError),
    /// The store call failed. It was already logged or set as the
    /// inline error per the surfacing policy; the front end must not
    /// report it again. The draft is intact.
    Failed,
}

pub struct Controller<S> {
    pub session: Session,
    store: S,
}

impl<S: UserStore> Controller<S> {
    pub fn new(store: S) -> Self {
        Self {
            session: Session::new(),
            store,
        }
    }

    /// Fetch all records into the snapshot.
    ///
    /// Runs once on startup and never again; afterwards the snapshot is
    /// reconciled locally. On failure the prior snapshot stays as-is
    /// (degraded read).
    pub async fn load(&mut self) {
        match self.store.list_all().await {
            Ok(records) => self.session.list = records,
            Err(err) => self.report(Operation::Load, &err),
        }
    }

    /// Submit the draft according to the current mode.
    pub async fn submit(&mut self) -> SubmitOutcome {
        match self.session.mode.clone() {
            Mode::Create => self.submit_create().await,
            Mode::Editing { id } => self.submit_update(id).await,
        }
    }

    async fn submit_create(&mut self) -> SubmitOutcome {
        let draft = &self.session.draft;
        if let Err(err) = evaluate(&RuleSet::create(), &draft.nombre, &draft.apellido) {
            return SubmitOutcome::Rejected(err);
        }
        let fields = UserFields::new(draft.nombre.clone(), draft.apellido.clone());

        // Best-effort uniqueness: query first, then insert. A concurrent
        // client can still win the race between the two calls.
        match self
            .store
            .exists_by_name(&fields.nombre, &fields.apellido)
            .await
        {
            Ok(true) => return SubmitOutcome::Rejected(ValidationError::AlreadyRegistered),
            Ok(false) => {}
            Err(err) => {
                self.report(Operation::Insert, &err);
                return SubmitOutcome::Failed;
            }
        }

        match self.store.insert(&fields).await {
            Ok(id) => {
                self.session
                    .apply_insert(UserRecord::from_fields(id, &fields));
                SubmitOutcome::Saved
            }
            Err(err) => {
                self.report(Operation::Insert, &err);
                SubmitOutcome::Failed
            }
        }
    }

    async fn submit_update(&mut self, id: RecordId) -> SubmitOutcome {
        let draft = &self.session.draft;
        if let Err(err) = evaluate(&RuleSet::update(), &draft.nombre, &draft.apellido) {
            return SubmitOutcome::Rejected(err);
        }
        let fields = UserFields::new(draft.nombre.clone(), draft.apellido.clone());

        match self.store.update(&id, &fields).await {
            Ok(()) => {
                self.session.apply_update(&id, &fields);
                SubmitOutcome::Saved
            }
            Err(err) => {
                // Stay in edit mode with the draft intact; the inline
                // error is set by the policy routing below.
                self.report(Operation::Update, &err);
                SubmitOutcome::Failed
            }
        }
    }

    /// Start editing a listed record. No validation, no store call.
    ///
    /// Returns `false` only when the id is not in the snapshot.
    pub fn edit(&mut self, id: &str) -> bool {
        match self.session.list.iter().find(|r| r.id == id).cloned() {
            Some(record) => {
                self.session.begin_edit(&record);
                true
            }
            None => false,
        }
    }

    /// Delete a record immediately, with no confirmation prompt.
    ///
    /// On failure the snapshot is left unchanged, now stale relative to
    /// the remote store.
    pub async fn delete(&mut self, id: &str) {
        match self.store.delete(id).await {
            Ok(()) => self.session.apply_remove(id),
            Err(err) => self.report(Operation::Delete, &err),
        }
    }

    fn report(&mut self, op: Operation, err: &StoreError) {
        tracing::error!(operation = ?op, error = %err, "Store call failed");
        if surface(op) == Surface::Inline {
            self.session.error = Some("Failed to update the user.".to_string());
        }
    }
}
