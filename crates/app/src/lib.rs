//! Form/list controller for the padron user registry.
//!
//! Exposes the session state container, the controller orchestration,
//! the error-surfacing policy, and configuration so integration tests
//! and the binary entrypoint can both access them.

pub mod config;
pub mod controller;
pub mod policy;
pub mod session;
