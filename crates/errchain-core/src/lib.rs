//! errchain-core — classified, chainable errors for service code.
//!
//! This crate defines:
//! - [`ErrorKind`] — the coarse taxonomy every failure is tagged with
//! - [`ClassifiedError`] — one node of an error chain: kind, operation, cause
//! - [`Cause`] — what a node wraps: another node, a [`Wrapper`], or an opaque error
//! - chain inspection: [`kind_of`], [`is`], [`origin`], [`root_cause`]
//! - [`ResultExt`] — classify the error side of a `Result` while propagating it
//!
//! Protocol mapping lives in the sibling crates `errchain-grpc` and
//! `errchain-http`.
//!
//! # Kind vs. is
//!
//! [`ClassifiedError::kind`] (and [`kind_of`]) report the outermost node's
//! own tag. [`ClassifiedError::is`] (and [`is`]) ask whether the chain
//! represents a kind, looking through nodes typed [`ErrorKind::Other`] until
//! the first explicitly classified node. The two answer different questions
//! and are kept separate.

pub mod cause;
pub mod error;
pub mod kind;

pub use cause::{is, kind_of, origin, root_cause, Cause, Wrapper};
pub use error::{first_error, render, Chain, ClassifiedError, ResultExt};
pub use kind::{ErrorKind, UnknownKind};
