//! `ClassifiedError` — one node of an error chain.

use std::error::Error as StdError;
use std::fmt::{self, Write as _};

use crate::cause::Cause;
use crate::kind::ErrorKind;

/// Separator between two classified nodes in a rendered chain.
pub const CHAIN_SEPARATOR: &str = " => ";

/// Separator between fields of one node, and before an opaque cause.
pub const FIELD_SEPARATOR: &str = ": ";

/// Rendering of an absent or empty error.
pub const NO_ERROR: &str = "no error";

/// A failure tagged with a kind, the operation that failed, and its cause.
///
/// Nodes are immutable once built. Each layer that wants to add context
/// wraps the error it received in a new node:
///
/// ```rust
/// use errchain_core::{ClassifiedError, ErrorKind};
///
/// let io = std::io::Error::other("connection refused");
/// let fetch = ClassifiedError::wrap(ErrorKind::Internal, "fetch", io);
/// let get = ClassifiedError::wrap(ErrorKind::NotFound, "get", fetch);
///
/// assert_eq!(
///     get.to_string(),
///     "get: resource not found => fetch: internal error: connection refused"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassifiedError {
    kind: ErrorKind,
    operation: String,
    cause: Option<Cause>,
}

impl ClassifiedError {
    /// Build a node. Never fails; an empty operation is allowed.
    pub fn new(kind: ErrorKind, operation: impl Into<String>, cause: Option<Cause>) -> Self {
        Self {
            kind,
            operation: operation.into(),
            cause,
        }
    }

    /// Build a node around an existing error.
    pub fn wrap(kind: ErrorKind, operation: impl Into<String>, cause: impl Into<Cause>) -> Self {
        Self::new(kind, operation, Some(cause.into()))
    }

    // ─── Accessors ────────────────────────────────────────────────────────────

    /// This node's own kind. Does not look at the cause.
    ///
    /// Use this to answer "what was this error tagged with". To ask whether
    /// the chain as a whole represents a kind, use [`ClassifiedError::is`],
    /// which looks through `Other`-typed wrappers.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn operation(&self) -> &str {
        &self.operation
    }

    pub fn cause(&self) -> Option<&Cause> {
        self.cause.as_ref()
    }

    /// A node with no operation, kind `Other` and no cause.
    pub fn is_zero(&self) -> bool {
        self.operation.is_empty() && self.kind == ErrorKind::Other && self.cause.is_none()
    }

    // ─── Chain inspection ─────────────────────────────────────────────────────

    /// Returns `true` if the chain represents `kind`.
    ///
    /// The first node with a kind other than `Other` decides the answer,
    /// even if a deeper node carries `kind`. `Other` nodes defer to their
    /// cause. Opaque causes never match.
    ///
    /// This differs from [`ClassifiedError::kind`], which only reports the
    /// outermost node's own tag.
    pub fn is(&self, kind: ErrorKind) -> bool {
        let mut node = self;
        loop {
            if node.kind.is_classified() {
                return node.kind == kind;
            }
            match node.cause.as_ref().and_then(Cause::as_classified) {
                Some(next) => node = next,
                None => return false,
            }
        }
    }

    /// The deepest non-classified cause in the chain.
    ///
    /// `None` if the chain ends without an external error, including when
    /// this node has no cause at all. The returned error is not inspected
    /// further, even if it wraps something.
    pub fn origin(&self) -> Option<&Cause> {
        let mut node = self;
        loop {
            match node.cause.as_ref()? {
                Cause::Classified(next) => node = next.as_ref(),
                other => return Some(other),
            }
        }
    }

    /// Iterate over the classified nodes of the chain, outermost first.
    pub fn chain(&self) -> Chain<'_> {
        Chain { next: Some(self) }
    }

    fn render_into(&self, buf: &mut String) -> fmt::Result {
        if !self.operation.is_empty() {
            pad(buf, FIELD_SEPARATOR);
            buf.push_str(&self.operation);
        }
        if self.kind.is_classified() {
            pad(buf, FIELD_SEPARATOR);
            buf.push_str(self.kind.label());
        }
        match &self.cause {
            None => {}
            Some(Cause::Classified(inner)) => {
                if !inner.is_zero() {
                    pad(buf, CHAIN_SEPARATOR);
                    let mut nested = String::new();
                    inner.render_into(&mut nested)?;
                    buf.push_str(if nested.is_empty() { NO_ERROR } else { &nested });
                }
            }
            Some(other) => {
                pad(buf, FIELD_SEPARATOR);
                write!(buf, "{other}")?;
            }
        }
        Ok(())
    }
}

/// Appends `sep` only if something was written already.
fn pad(buf: &mut String, sep: &str) {
    if !buf.is_empty() {
        buf.push_str(sep);
    }
}

/// Render an optional node; `"no error"` when absent.
pub fn render(err: Option<&ClassifiedError>) -> String {
    err.map_or_else(|| NO_ERROR.to_string(), ToString::to_string)
}

/// Wrap the first present cause; `None` if every cause is absent.
///
/// Collapses several fallible sub-operations into one failure carrying
/// whichever one actually failed first.
pub fn first_error<I>(
    kind: ErrorKind,
    operation: impl Into<String>,
    causes: I,
) -> Option<ClassifiedError>
where
    I: IntoIterator<Item = Option<Cause>>,
{
    causes
        .into_iter()
        .flatten()
        .next()
        .map(|cause| ClassifiedError::new(kind, operation, Some(cause)))
}

impl fmt::Display for ClassifiedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        self.render_into(&mut buf)?;
        if buf.is_empty() {
            f.write_str(NO_ERROR)
        } else {
            f.write_str(&buf)
        }
    }
}

impl StdError for ClassifiedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause.as_ref().map(|c| c as &(dyn StdError + 'static))
    }
}

// ─── Chain iterator ───────────────────────────────────────────────────────────

/// Iterator over the classified nodes of a chain. See [`ClassifiedError::chain`].
#[derive(Debug, Clone)]
pub struct Chain<'a> {
    next: Option<&'a ClassifiedError>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a ClassifiedError;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.cause.as_ref().and_then(Cause::as_classified);
        Some(current)
    }
}

// ─── Result extension ─────────────────────────────────────────────────────────

/// Classify the error side of a `Result` while propagating it.
///
/// ```rust
/// use errchain_core::{ErrorKind, ResultExt};
///
/// fn read_config() -> Result<String, errchain_core::ClassifiedError> {
///     std::fs::read_to_string("/nonexistent/app.toml").classify(ErrorKind::Io, "read config")
/// }
///
/// let err = read_config().unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::Io);
/// assert!(err.to_string().starts_with("read config: io error: "));
/// ```
pub trait ResultExt<T> {
    fn classify(self, kind: ErrorKind, operation: &str) -> Result<T, ClassifiedError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Cause>,
{
    fn classify(self, kind: ErrorKind, operation: &str) -> Result<T, ClassifiedError> {
        self.map_err(|e| ClassifiedError::wrap(kind, operation, e))
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
