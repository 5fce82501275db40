//! Kind → `tonic::Code` mapping.
//!
//! Resolution order:
//! 1. No error            → `Code::Ok`
//! 2. Not classified      → `Code::Internal`
//! 3. First row of [`MAPPING`] whose kind the chain [`is`](ClassifiedError::is) → its code
//! 4. Fallback            → `Code::Internal`

use errchain_core::{Cause, ClassifiedError, ErrorKind};
use tonic::{Code, Status};

/// Kind → code table, checked top to bottom.
///
/// `InvalidOperation` shares `NotFound`'s code: from the caller's side both
/// mean "this route or resource does not serve the request".
pub const MAPPING: &[(ErrorKind, Code)] = &[
    (ErrorKind::InvalidArgument, Code::InvalidArgument),
    (ErrorKind::NotFound, Code::NotFound),
    (ErrorKind::InvalidOperation, Code::NotFound),
    (ErrorKind::Timeout, Code::DeadlineExceeded),
    (ErrorKind::PermissionDenied, Code::PermissionDenied),
    (ErrorKind::Unauthenticated, Code::Unauthenticated),
    (ErrorKind::TooMany, Code::ResourceExhausted),
    (ErrorKind::AlreadyExists, Code::AlreadyExists),
];

/// Kinds with no row in [`MAPPING`]; they map to `Code::Internal`.
pub const INTERNAL_KINDS: &[ErrorKind] = &[
    ErrorKind::Other,
    ErrorKind::Internal,
    ErrorKind::InvalidRequestBody,
    ErrorKind::Io,
    ErrorKind::Unexpected,
];

/// The gRPC code for an optional error.
pub fn code(err: Option<&Cause>) -> Code {
    let Some(err) = err else {
        return Code::Ok;
    };
    match err.as_classified() {
        Some(classified) => code_for(classified),
        None => {
            tracing::debug!(error = %err, "unclassified error mapped to Internal");
            Code::Internal
        }
    }
}

/// The gRPC code for a classified chain.
pub fn code_for(err: &ClassifiedError) -> Code {
    MAPPING
        .iter()
        .find(|(kind, _)| err.is(*kind))
        .map_or(Code::Internal, |(_, code)| *code)
}

/// A `tonic::Status` carrying the mapped code and the rendered chain.
pub fn status(err: Option<&Cause>) -> Status {
    match err {
        None => Status::new(Code::Ok, ""),
        Some(e) => Status::new(code(Some(e)), e.to_string()),
    }
}

/// Like [`status`], for a classified chain.
pub fn status_for(err: &ClassifiedError) -> Status {
    Status::new(code_for(err), err.to_string())
}

// ─── Tests ────────────────────────────────────────────────────────────────────
