//! Invalid-argument rejection for mutating operations.

use std::fmt;

/// The single error kind raised by mutators.
///
/// Validation always runs before any state change, so a returned error
/// means the component was left untouched. Checks (`check_*` methods)
/// never produce this — a failing check is a normal outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InvalidArgument {
    /// Cargo weight passed to add/remove was negative.
    NegativeCargoWeight(f32),
    /// Anchor-system damage severity outside {1, 2}.
    AnchorSeverityOutOfRange(u8),
    /// Oar damage severity outside 1..=3.
    OarSeverityOutOfRange(u32),
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::NegativeCargoWeight(w) => {
                write!(f, "cargo weight cannot be negative: {}", w)
            }
            InvalidArgument::AnchorSeverityOutOfRange(s) => {
                write!(f, "anchor-system damage severity must be 1 or 2, got {}", s)
            }
            InvalidArgument::OarSeverityOutOfRange(s) => {
                write!(f, "oar damage severity must be between 1 and 3, got {}", s)
            }
        }
    }
}

impl std::error::Error for InvalidArgument {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_the_rejected_value() {
        let msg = InvalidArgument::NegativeCargoWeight(-4.5).to_string();
        assert!(msg.contains("-4.5"));

        let msg = InvalidArgument::AnchorSeverityOutOfRange(3).to_string();
        assert!(msg.contains("3"));

        let msg = InvalidArgument::OarSeverityOutOfRange(0).to_string();
        assert!(msg.contains("0"));
    }
}
