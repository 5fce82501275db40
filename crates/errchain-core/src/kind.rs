//! The `ErrorKind` taxonomy.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Label returned for codes outside the declared taxonomy.
pub const UNKNOWN_KIND_LABEL: &str = "unknown error type";

// ─── ErrorKind ────────────────────────────────────────────────────────────────

/// Coarse-grained classification of a failure.
///
/// Variants are ordered by declaration and the discriminant `0` is reserved
/// for [`ErrorKind::Other`], the "unclassified" kind. A node typed `Other`
/// contributes no label when rendered and defers to its cause when matched
/// with [`ClassifiedError::is`](crate::ClassifiedError::is).
///
/// Adding a variant means updating [`ErrorKind::label`], [`ErrorKind::ALL`]
/// and the transport mapping table in `errchain-grpc`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum ErrorKind {
    /// Unclassified. Defers to the cause when matching.
    #[default]
    Other = 0,
    /// Internal fault of the service.
    Internal,
    /// Invalid argument(s) for an operation.
    InvalidArgument,
    /// The request body could not be understood.
    InvalidRequestBody,
    /// Operation not supported here (e.g. method not allowed).
    InvalidOperation,
    /// Resource not found.
    NotFound,
    /// Conflict with an existing resource.
    AlreadyExists,
    /// Caller is not allowed to perform the operation.
    PermissionDenied,
    /// External I/O failure (network, disk).
    Io,
    /// The operation did not complete in time.
    Timeout,
    /// Overload.
    TooMany,
    /// Should never happen; worth escalating.
    Unexpected,
    /// Caller identity could not be established.
    Unauthenticated,
}

/// Returned by `ErrorKind::try_from(u8)` for codes outside the taxonomy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("unknown error kind code {0}")]
pub struct UnknownKind(pub u8);

impl ErrorKind {
    /// Every kind, in declaration order.
    pub const ALL: [ErrorKind; 13] = [
        Self::Other,
        Self::Internal,
        Self::InvalidArgument,
        Self::InvalidRequestBody,
        Self::InvalidOperation,
        Self::NotFound,
        Self::AlreadyExists,
        Self::PermissionDenied,
        Self::Io,
        Self::Timeout,
        Self::TooMany,
        Self::Unexpected,
        Self::Unauthenticated,
    ];

    /// Canonical human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Other => "error",
            Self::Internal => "internal error",
            Self::InvalidArgument => "invalid argument(s)",
            Self::InvalidRequestBody => "invalid request body",
            Self::InvalidOperation => "invalid",
            Self::NotFound => "resource not found",
            Self::AlreadyExists => "conflict with existing resource",
            Self::PermissionDenied => "permission denied",
            Self::Io => "io error",
            Self::Timeout => "request timeout",
            Self::TooMany => "overload",
            Self::Unexpected => "unexpected error",
            Self::Unauthenticated => "unauthenticated",
        }
    }

    /// Declaration-order code; `0` is [`ErrorKind::Other`].
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Label lookup over the whole integer range.
    ///
    /// Codes that do not name a kind resolve to `"unknown error type"`.
    pub fn label_for_code(code: i64) -> &'static str {
        u8::try_from(code)
            .ok()
            .and_then(|c| Self::try_from(c).ok())
            .map_or(UNKNOWN_KIND_LABEL, Self::label)
    }

    /// Returns `true` for every kind except [`ErrorKind::Other`].
    pub fn is_classified(self) -> bool {
        self != Self::Other
    }
}

impl TryFrom<u8> for ErrorKind {
    type Error = UnknownKind;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(code))
            .copied()
            .ok_or(UnknownKind(code))
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_declaration_order() {
        for (i, kind) in ErrorKind::ALL.iter().enumerate() {
            assert_eq!(usize::from(kind.code()), i, "{kind:?}");
        }
    }

    #[test]
    fn every_kind_has_a_label() {
        for kind in ErrorKind::ALL {
            assert!(!kind.label().is_empty(), "{kind:?}");
            assert_ne!(kind.label(), UNKNOWN_KIND_LABEL, "{kind:?}");
        }
    }

    #[test]
    fn labels() {
        assert_eq!(ErrorKind::InvalidArgument.label(), "invalid argument(s)");
        assert_eq!(ErrorKind::NotFound.to_string(), "resource not found");
        assert_eq!(ErrorKind::Other.to_string(), "error");
    }

    #[test]
    fn label_for_code_is_total() {
        assert_eq!(ErrorKind::label_for_code(5), "resource not found");
        assert_eq!(ErrorKind::label_for_code(12), "unauthenticated");
        for code in [13, 255, 256, -1, i64::MIN, i64::MAX] {
            assert_eq!(ErrorKind::label_for_code(code), UNKNOWN_KIND_LABEL, "{code}");
        }
    }

    #[test]
    fn try_from_u8() {
        assert_eq!(ErrorKind::try_from(0u8), Ok(ErrorKind::Other));
        assert_eq!(ErrorKind::try_from(10u8), Ok(ErrorKind::TooMany));
        assert_eq!(ErrorKind::try_from(13u8), Err(UnknownKind(13)));
        assert_eq!(UnknownKind(42).to_string(), "unknown error kind code 42");
    }

    #[test]
    fn default_is_other() {
        assert_eq!(ErrorKind::default(), ErrorKind::Other);
        assert!(!ErrorKind::Other.is_classified());
        assert!(ErrorKind::Io.is_classified());
    }

    #[test]
    fn serde_uses_snake_case_names() {
        let json = serde_json::to_string(&ErrorKind::InvalidRequestBody).unwrap();
        assert_eq!(json, "\"invalid_request_body\"");
        let back: ErrorKind = serde_json::from_str("\"too_many\"").unwrap();
        assert_eq!(back, ErrorKind::TooMany);
    }
}
