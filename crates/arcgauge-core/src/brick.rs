//! Brick contracts: self-verifying widget assertions.
//!
//! Every widget states the conditions under which its paint output is
//! meaningful. Hosts call [`Brick::verify`] (or [`Brick::can_render`]) before
//! painting; a widget whose assertions fail paints nothing.

use thiserror::Error;

/// Brick assertion that must hold for a widget to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrickAssertion {
    /// Text content must be visible (non-empty)
    TextVisible,

    /// The value range must be non-empty (`max > 0`)
    PositiveRange,

    /// Maximum render latency in milliseconds
    MaxLatencyMs(u32),
}

impl std::fmt::Display for BrickAssertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TextVisible => write!(f, "text visible"),
            Self::PositiveRange => write!(f, "max must be positive"),
            Self::MaxLatencyMs(ms) => write!(f, "render within {ms}ms"),
        }
    }
}

/// Result of verifying brick assertions
#[derive(Debug, Clone, Default)]
pub struct BrickVerification {
    /// All assertions that passed
    pub passed: Vec<BrickAssertion>,
    /// All assertions that failed with reasons
    pub failed: Vec<(BrickAssertion, String)>,
}

impl BrickVerification {
    /// Record a check outcome.
    pub fn check(&mut self, assertion: BrickAssertion, ok: bool, reason: impl Into<String>) {
        if ok {
            self.passed.push(assertion);
        } else {
            self.failed.push((assertion, reason.into()));
        }
    }

    /// Check if all assertions passed
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failed.is_empty()
    }

    /// Convert into a `Result`, reporting the first failed assertion.
    pub fn into_result(self) -> Result<(), BrickError> {
        match self.failed.into_iter().next() {
            None => Ok(()),
            Some((assertion, reason)) => Err(BrickError::AssertionFailed { assertion, reason }),
        }
    }
}

/// Core Brick trait.
///
/// `Widget` requires `Brick`, so every widget carries verifiable assertions.
pub trait Brick: Send + Sync {
    /// Get the brick's unique type name
    fn brick_name(&self) -> &'static str;

    /// Get all assertions for this brick
    fn assertions(&self) -> &[BrickAssertion];

    /// Verify all assertions against current state
    fn verify(&self) -> BrickVerification;

    /// Check if this brick can be rendered (all assertions pass)
    fn can_render(&self) -> bool {
        self.verify().is_valid()
    }
}

/// Brick verification error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrickError {
    /// Assertion failed during verification
    #[error("assertion '{assertion}' failed: {reason}")]
    AssertionFailed {
        /// The assertion that failed
        assertion: BrickAssertion,
        /// Reason for failure
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verification_empty_is_valid() {
        let v = BrickVerification::default();
        assert!(v.is_valid());
        assert!(v.into_result().is_ok());
    }

    #[test]
    fn test_verification_check_records_failure() {
        let mut v = BrickVerification::default();
        v.check(BrickAssertion::TextVisible, true, "");
        v.check(BrickAssertion::PositiveRange, false, "max is 0");
        assert!(!v.is_valid());

        let err = v.into_result().unwrap_err();
        assert_eq!(
            err.to_string(),
            "assertion 'max must be positive' failed: max is 0"
        );
    }
}
