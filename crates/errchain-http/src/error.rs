//! `HttpError` — an error paired with the HTTP status to answer with.

use errchain_core::{Cause, Wrapper};
use http::StatusCode;
use thiserror::Error;

/// Status used when the requested one is not a known HTTP status.
pub const DEFAULT_STATUS: StatusCode = StatusCode::BAD_REQUEST;

/// Wraps any error with an HTTP status code.
///
/// Displays exactly as the wrapped error. Exposes the wrapped error through
/// [`Wrapper::inner`], so [`root_cause`](crate::root_cause) can see through it.
#[derive(Debug, Clone, Error)]
#[error("{err}")]
pub struct HttpError {
    status: StatusCode,
    err: Cause,
}

impl HttpError {
    /// Wrap `err` with `status`.
    ///
    /// Returns `None` when there is no error to wrap. A status without a
    /// canonical reason phrase (negative, out of range, or unassigned) is
    /// replaced by 400 Bad Request.
    pub fn new(status: i64, err: Option<Cause>) -> Option<Self> {
        Some(Self::wrap(status, err?))
    }

    /// Wrap an existing error. Same status rules as [`HttpError::new`].
    pub fn wrap(status: i64, err: impl Into<Cause>) -> Self {
        Self {
            status: normalize_status(status),
            err: err.into(),
        }
    }

    /// The status code as a plain integer.
    pub fn status(&self) -> u16 {
        self.status.as_u16()
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// The wrapped error, unmodified.
    pub fn cause(&self) -> &Cause {
        &self.err
    }

    /// Give back the wrapped error.
    pub fn into_cause(self) -> Cause {
        self.err
    }
}

impl Wrapper for HttpError {
    fn inner(&self) -> Option<&Cause> {
        Some(&self.err)
    }
}

impl From<HttpError> for Cause {
    fn from(err: HttpError) -> Self {
        Cause::wrapped(err)
    }
}

/// The `http` status for `status`, or [`DEFAULT_STATUS`] if it has no
/// canonical reason phrase.
pub fn normalize_status(status: i64) -> StatusCode {
    let known = u16::try_from(status)
        .ok()
        .and_then(|code| StatusCode::from_u16(code).ok())
        .filter(|s| s.canonical_reason().is_some());
    match known {
        Some(s) => s,
        None => {
            tracing::debug!(
                status,
                fallback = DEFAULT_STATUS.as_u16(),
                "unknown HTTP status replaced"
            );
            DEFAULT_STATUS
        }
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
