//! Shared pass/fail outcome type for safety checks.

use serde::{Deserialize, Serialize};

/// Result of a single safety check.
///
/// Failing a check is a normal, representable outcome distinct from an
/// invalid-input error: checks never raise, they always return one of these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckOutcome {
    pub passed: bool,
    pub message: String,
}

impl CheckOutcome {
    pub fn pass(message: impl Into<String>) -> Self {
        Self {
            passed: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            passed: false,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        let ok = CheckOutcome::pass("fine");
        assert!(ok.passed);
        assert_eq!(ok.message, "fine");

        let bad = CheckOutcome::fail("not fine");
        assert!(!bad.passed);
        assert_eq!(bad.message, "not fine");
    }
}
