use thiserror::Error;

/// Root domain error type.
///
/// Raised while turning a request into routes and plans, before any file is
/// touched. Every variant is a usage problem the caller can fix.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Route errors
    // ========================================================================
    #[error("Dynamic segment requires a non-empty parameter name")]
    EmptyDynamicParam,

    #[error("--catch-all requires --dynamic <param>")]
    CatchAllWithoutDynamic,

    #[error("Invalid route segment '{segment}': {reason}")]
    InvalidRouteSegment { segment: String, reason: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    // ========================================================================
    // Option errors
    // ========================================================================
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownValue {
        kind: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("Invalid value for {option}: {reason}")]
    InvalidOption {
        option: &'static str,
        reason: String,
    },

    #[error("At least one HTTP method is required")]
    NoHttpMethods,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::EmptyDynamicParam => vec![
                "Pass a parameter name, e.g. --dynamic slug".into(),
            ],
            Self::CatchAllWithoutDynamic => vec![
                "Combine both flags: --dynamic slug --catch-all".into(),
            ],
            Self::InvalidRouteSegment { .. } | Self::AbsolutePathNotAllowed { .. } => vec![
                "Names are resolved inside the current project".into(),
                "Use a relative route such as admin/users".into(),
            ],
            Self::UnknownValue { expected, .. } => vec![format!("Valid values: {expected}")],
            Self::InvalidOption { option, .. } => vec![format!("Check the value passed to {option}")],
            Self::NoHttpMethods => vec!["Example: --methods GET,POST".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Validation
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_value_lists_expected() {
        let err = DomainError::UnknownValue {
            kind: "database provider",
            value: "oracle".into(),
            expected: "sqlite, postgresql",
        };
        assert!(err.to_string().contains("oracle"));
        assert!(err.suggestions()[0].contains("sqlite"));
    }

    #[test]
    fn every_variant_is_validation() {
        assert_eq!(
            DomainError::EmptyDynamicParam.category(),
            ErrorCategory::Validation
        );
        assert_eq!(DomainError::NoHttpMethods.category(), ErrorCategory::Validation);
    }
}
