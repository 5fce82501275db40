//! errchain-http — pair an error with the HTTP status to answer with.
//!
//! # Quick Start
//!
//! ```rust
//! use errchain_core::{Cause, ClassifiedError, ErrorKind};
//! use errchain_http::{root_cause, HttpError};
//!
//! let chain = ClassifiedError::wrap(
//!     ErrorKind::InvalidArgument,
//!     "parse id",
//!     std::io::Error::other("not a number"),
//! );
//! let err = HttpError::new(422, Some(chain.into())).unwrap();
//! assert_eq!(err.status(), 422);
//! assert_eq!(err.to_string(), "parse id: invalid argument(s): not a number");
//!
//! // Unknown statuses fall back to 400.
//! let err = HttpError::wrap(-5, std::io::Error::other("cause"));
//! assert_eq!(err.status(), 400);
//!
//! // `root_cause` sees through the wrapper.
//! let wrapped: Cause = err.into();
//! assert_eq!(root_cause(Some(&wrapped)).unwrap().to_string(), "cause");
//! ```

pub mod error;

pub use errchain_core::root_cause;
pub use error::{normalize_status, HttpError, DEFAULT_STATUS};
