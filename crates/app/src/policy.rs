//! Per-operation error-surfacing policy for store failures.
//!
//! Store failures are not surfaced uniformly: a failed update shows an
//! inline message, while failed loads, inserts, and deletes are only
//! logged. The asymmetry is long-standing behavior that callers rely
//! on; this table keeps it explicit instead of scattering it through
//! the controller.
//!
//! Validation failures are outside this table: they are always surfaced
//! to the user as a blocking alert outcome, never logged-and-swallowed.

/// A store-backed operation the controller performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Insert,
    Update,
    Delete,
}

/// How a failure of one operation reaches the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    /// Logged only; the user sees nothing.
    Log,
    /// Shown as an inline error string next to the form.
    Inline,
}

/// Look up the surfacing policy for a failed operation.
pub fn surface(op: Operation) -> Surface {
    match op {
        Operation::Update => Surface::Inline,
        Operation::Load | Operation::Insert | Operation::Delete => Surface::Log,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_update_failures_are_shown_to_the_user() {
        assert_eq!(surface(Operation::Update), Surface::Inline);
        for op in [Operation::Load, Operation::Insert, Operation::Delete] {
            assert_eq!(surface(op), Surface::Log);
        }
    }
}
