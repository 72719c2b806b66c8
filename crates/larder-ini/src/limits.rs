//! Length limits applied to parsed sections, keys and values.

use crate::error::IniError;

/// Per-field length limits, in bytes.
///
/// Text longer than a limit is truncated (at a character boundary at or
/// below the limit) and parsing continues.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IniLimits {
    /// Longest section name delivered.
    pub max_section: usize,
    /// Longest key delivered.
    pub max_key: usize,
    /// Longest value delivered.
    pub max_value: usize,
}

impl IniLimits {
    /// Default section name limit.
    pub const DEFAULT_MAX_SECTION: usize = 64;
    /// Default key limit.
    pub const DEFAULT_MAX_KEY: usize = Self::DEFAULT_MAX_SECTION;
    /// Default value limit.
    pub const DEFAULT_MAX_VALUE: usize = Self::DEFAULT_MAX_KEY * 16;

    /// Limits with every field unbounded.
    pub fn unbounded() -> Self {
        Self {
            max_section: usize::MAX,
            max_key: usize::MAX,
            max_value: usize::MAX,
        }
    }

    /// Check that every limit is at least one byte.
    pub fn validate(&self) -> Result<(), IniError> {
        for (name, limit) in [
            ("max_section", self.max_section),
            ("max_key", self.max_key),
            ("max_value", self.max_value),
        ] {
            if limit == 0 {
                return Err(IniError::InvalidLimits {
                    reason: format!("{name} must be at least 1"),
                });
            }
        }
        Ok(())
    }
}

impl Default for IniLimits {
    fn default() -> Self {
        Self {
            max_section: Self::DEFAULT_MAX_SECTION,
            max_key: Self::DEFAULT_MAX_KEY,
            max_value: Self::DEFAULT_MAX_VALUE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let limits = IniLimits::default();
        assert_eq!(limits.max_section, 64);
        assert_eq!(limits.max_key, 64);
        assert_eq!(limits.max_value, 1024);
        assert!(limits.validate().is_ok());
        assert!(IniLimits::unbounded().validate().is_ok());
    }

    #[test]
    fn zero_limit_rejected() {
        let limits = IniLimits {
            max_key: 0,
            ..IniLimits::default()
        };
        match limits.validate() {
            Err(IniError::InvalidLimits { reason }) => assert!(reason.contains("max_key")),
            other => panic!("expected InvalidLimits, got {other:?}"),
        }
    }
}
