//! Domain core for the padron user registry.
//!
//! Pure logic only: the shared id type, the error taxonomy, and the
//! field-validation rule sets. No I/O lives here, which keeps every
//! rule and transition unit-testable without a store or a front end.

pub mod error;
pub mod types;
pub mod validation;
