//! errchain-grpc — map classified error chains to gRPC status codes.
//!
//! # Quick Start
//!
//! ```rust
//! use errchain_core::{Cause, ClassifiedError, ErrorKind};
//! use tonic::Code;
//!
//! let err: Cause = ClassifiedError::new(ErrorKind::NotFound, "get user", None).into();
//! assert_eq!(errchain_grpc::code(Some(&err)), Code::NotFound);
//!
//! let status = errchain_grpc::status(Some(&err));
//! assert_eq!(status.message(), "get user: resource not found");
//! ```

pub mod mapping;

pub use mapping::{code, code_for, status, status_for, INTERNAL_KINDS, MAPPING};
