//! `Cause` — the value a [`ClassifiedError`] wraps.
//!
//! A cause is one of three things:
//! - another [`ClassifiedError`], continuing the chain;
//! - a [`Wrapper`], an external error that can hand out an inner cause
//!   (e.g. an HTTP status wrapper);
//! - an opaque error, which terminates the chain and is never inspected.

use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;

use crate::error::ClassifiedError;
use crate::kind::ErrorKind;

/// An external error that exposes the error it wraps.
///
/// This is the capability followed by [`root_cause`]. `ClassifiedError`
/// deliberately does not implement it: its chain is walked by
/// [`ClassifiedError::origin`] instead.
pub trait Wrapper: StdError + Send + Sync + 'static {
    /// The wrapped error, if any.
    ///
    /// Named `inner` so it never resolves to the deprecated
    /// `std::error::Error::cause` on a `dyn Wrapper`.
    fn inner(&self) -> Option<&Cause>;
}

/// Any error that can sit in a chain.
#[derive(Debug, Clone)]
pub enum Cause {
    /// Another classified node; the chain continues.
    Classified(Arc<ClassifiedError>),
    /// An external error exposing its inner error through [`Wrapper::inner`].
    Wrapped(Arc<dyn Wrapper>),
    /// An external error that ends the chain.
    Opaque(Arc<dyn StdError + Send + Sync + 'static>),
}

impl Cause {
    /// Wrap an arbitrary external error as an opaque chain terminator.
    pub fn opaque<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self::Opaque(Arc::new(err))
    }

    /// Wrap an external error that exposes its own cause.
    pub fn wrapped<W: Wrapper>(err: W) -> Self {
        Self::Wrapped(Arc::new(err))
    }

    /// The classified node, if this cause is one.
    pub fn as_classified(&self) -> Option<&ClassifiedError> {
        match self {
            Self::Classified(e) => Some(e.as_ref()),
            _ => None,
        }
    }

    /// Returns `true` if this cause is a [`ClassifiedError`].
    pub fn is_classified(&self) -> bool {
        matches!(self, Self::Classified(_))
    }

    /// The outermost node's own kind; `Other` for non-classified errors.
    ///
    /// Does not walk the chain. See [`Cause::is`] for the chain-walking
    /// predicate.
    pub fn kind(&self) -> ErrorKind {
        self.as_classified()
            .map_or(ErrorKind::Other, ClassifiedError::kind)
    }

    /// Returns `true` if the chain represents `kind`.
    ///
    /// Non-classified errors never match. See [`ClassifiedError::is`].
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.as_classified().is_some_and(|e| e.is(kind))
    }
}

impl fmt::Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classified(e) => fmt::Display::fmt(e, f),
            Self::Wrapped(w) => fmt::Display::fmt(w, f),
            Self::Opaque(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl StdError for Cause {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::Classified(e) => e.source(),
            Self::Wrapped(w) => w.source(),
            Self::Opaque(e) => e.source(),
        }
    }
}

impl From<ClassifiedError> for Cause {
    fn from(err: ClassifiedError) -> Self {
        Self::Classified(Arc::new(err))
    }
}

impl From<Arc<ClassifiedError>> for Cause {
    fn from(err: Arc<ClassifiedError>) -> Self {
        Self::Classified(err)
    }
}

impl From<std::io::Error> for Cause {
    fn from(err: std::io::Error) -> Self {
        Self::opaque(err)
    }
}

impl From<Box<dyn StdError + Send + Sync + 'static>> for Cause {
    fn from(err: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self::Opaque(Arc::from(err))
    }
}

// ─── Chain helpers over optional errors ───────────────────────────────────────

/// Own kind of the outermost node; `Other` when absent or not classified.
pub fn kind_of(err: Option<&Cause>) -> ErrorKind {
    err.map_or(ErrorKind::Other, Cause::kind)
}

/// Chain-walking kind predicate; `false` when absent or not classified.
pub fn is(kind: ErrorKind, err: Option<&Cause>) -> bool {
    err.is_some_and(|e| e.is(kind))
}

/// Deepest non-classified cause of a classified chain.
///
/// Absent or non-classified input has no origin.
pub fn origin(err: Option<&Cause>) -> Option<&Cause> {
    err?.as_classified()?.origin()
}

/// Follow [`Wrapper::inner`] until the value no longer exposes it.
///
/// Returns the input unchanged when it is not a wrapper, and `None` when a
/// wrapper has nothing inside. Each step moves to a strictly inner value,
/// so the loop ends.
pub fn root_cause(err: Option<&Cause>) -> Option<&Cause> {
    let mut current = err?;
    while let Cause::Wrapped(w) = current {
        current = w.inner()?;
    }
    Some(current)
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[derive(Debug)]
    struct Envelope(Option<Cause>);

    impl fmt::Display for Envelope {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            match &self.0 {
                Some(c) => write!(f, "{c}"),
                None => Ok(()),
            }
        }
    }

    impl StdError for Envelope {}

    impl Wrapper for Envelope {
        fn inner(&self) -> Option<&Cause> {
            self.0.as_ref()
        }
    }

    fn raw(msg: &str) -> Cause {
        Cause::from(io::Error::other(msg.to_string()))
    }

    #[test]
    fn opaque_displays_inner_message() {
        assert_eq!(raw("connection refused").to_string(), "connection refused");
    }

    #[test]
    fn kind_of_non_classified_is_other() {
        assert_eq!(kind_of(None), ErrorKind::Other);
        assert_eq!(kind_of(Some(&raw("x"))), ErrorKind::Other);
        let wrapped = Cause::wrapped(Envelope(Some(
            ClassifiedError::new(ErrorKind::NotFound, "get", None).into(),
        )));
        assert_eq!(kind_of(Some(&wrapped)), ErrorKind::Other);
    }

    #[test]
    fn is_false_for_absent_and_opaque() {
        assert!(!is(ErrorKind::NotFound, None));
        assert!(!is(ErrorKind::NotFound, Some(&raw("not found"))));
    }

    #[test]
    fn origin_of_absent_or_opaque_is_none() {
        assert!(origin(None).is_none());
        assert!(origin(Some(&raw("x"))).is_none());
    }

    #[test]
    fn root_cause_unwraps_nested_wrappers() {
        let inner = raw("some cause error");
        let twice = Cause::wrapped(Envelope(Some(Cause::wrapped(Envelope(Some(
            inner.clone(),
        ))))));
        let root = root_cause(Some(&twice)).unwrap();
        assert_eq!(root.to_string(), "some cause error");
        assert!(matches!(root, Cause::Opaque(_)));
    }

    #[test]
    fn root_cause_of_empty_wrapper_is_none() {
        let empty = Cause::wrapped(Envelope(None));
        assert!(root_cause(Some(&empty)).is_none());
        assert!(root_cause(None).is_none());
    }

    #[test]
    fn root_cause_leaves_plain_errors_alone() {
        let plain = raw("simple error");
        let root = root_cause(Some(&plain)).unwrap();
        match (root, &plain) {
            (Cause::Opaque(a), Cause::Opaque(b)) => assert!(Arc::ptr_eq(a, b)),
            _ => panic!("expected the same opaque error back"),
        }
    }

    #[test]
    fn root_cause_does_not_walk_classified_chains() {
        let chain: Cause =
            ClassifiedError::wrap(ErrorKind::Internal, "fetch", raw("boom")).into();
        let root = root_cause(Some(&chain)).unwrap();
        assert!(root.is_classified());
    }

    #[test]
    fn inner_is_reachable_through_dyn_wrapper() {
        let wrapper: Arc<dyn Wrapper> = Arc::new(Envelope(Some(raw("eof"))));
        assert_eq!(wrapper.inner().unwrap().to_string(), "eof");

        let empty: Arc<dyn Wrapper> = Arc::new(Envelope(None));
        assert!(empty.inner().is_none());
    }

    #[test]
    fn cause_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cause>();
    }
}
