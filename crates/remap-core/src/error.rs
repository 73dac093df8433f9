use std::sync::Arc;

/// Shorthand for returning an ad-hoc evaluation error.
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::Error::from_args(format_args!($($arg)*)))
    };
}

/// Create an ad-hoc error value without returning it.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        $crate::Error::from_args(format_args!($($arg)*))
    };
}

/// An error that can occur in remap.
#[derive(Clone)]
pub struct Error {
    inner: Arc<ErrorInner>,
}

#[derive(Debug)]
struct ErrorInner {
    kind: ErrorKind,
    cause: Option<Error>,
}

#[derive(Debug)]
enum ErrorKind {
    /// A rule set references members or types that cannot be satisfied.
    /// Detected when a plan is first built and deterministic thereafter.
    Config(String),

    /// A member-access chain hit an absent intermediate value at execution
    /// time and null-checking was not enabled for the mapping.
    NullTraversal(String),

    /// A plan expression could not be evaluated.
    Evaluation(String),

    /// A value could not be decoded into the requested type.
    TypeConversion { value: String, target: String },

    Anyhow(anyhow::Error),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        ErrorKind::Config(msg.into()).into()
    }

    pub fn null_traversal(member: impl Into<String>) -> Self {
        ErrorKind::NullTraversal(member.into()).into()
    }

    pub fn evaluation(msg: impl Into<String>) -> Self {
        ErrorKind::Evaluation(msg.into()).into()
    }

    pub fn type_conversion(value: impl Into<String>, target: impl Into<String>) -> Self {
        ErrorKind::TypeConversion {
            value: value.into(),
            target: target.into(),
        }
        .into()
    }

    #[doc(hidden)]
    pub fn from_args(args: core::fmt::Arguments<'_>) -> Self {
        Self::evaluation(args.to_string())
    }

    pub fn is_config(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::Config(_))
    }

    pub fn is_null_traversal(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::NullTraversal(_))
    }

    pub fn is_type_conversion(&self) -> bool {
        matches!(self.inner.kind, ErrorKind::TypeConversion { .. })
    }

    /// Adds context to this error.
    ///
    /// Context is displayed first, followed by the root cause.
    pub fn context(self, consequent: Error) -> Error {
        let inner = ErrorInner {
            kind: match Arc::try_unwrap(consequent.inner) {
                Ok(inner) => inner.kind,
                Err(shared) => ErrorKind::Evaluation(shared.kind.to_string()),
            },
            cause: Some(self),
        };
        Error {
            inner: Arc::new(inner),
        }
    }

    fn chain(&self) -> impl Iterator<Item = &Error> {
        let mut err = self;
        core::iter::once(err).chain(core::iter::from_fn(move || {
            err = err.inner.cause.as_ref()?;
            Some(err)
        }))
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error {
            inner: Arc::new(ErrorInner { kind, cause: None }),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        ErrorKind::Anyhow(err).into()
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.inner.kind {
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut it = self.chain().peekable();
        while let Some(err) = it.next() {
            core::fmt::Display::fmt(&err.inner.kind, f)?;
            if it.peek().is_some() {
                f.write_str(": ")?;
            }
        }
        Ok(())
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if !f.alternate() {
            core::fmt::Display::fmt(self, f)
        } else {
            f.debug_struct("Error")
                .field("kind", &self.inner.kind)
                .field("cause", &self.inner.cause)
                .finish()
        }
    }
}

impl core::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self {
            ErrorKind::Config(msg) => write!(f, "invalid mapping configuration: {msg}"),
            ErrorKind::NullTraversal(member) => {
                write!(f, "absent value while reading `{member}`")
            }
            ErrorKind::Evaluation(msg) => write!(f, "plan evaluation failed: {msg}"),
            ErrorKind::TypeConversion { value, target } => {
                write!(f, "cannot convert {value} to {target}")
            }
            ErrorKind::Anyhow(err) => core::fmt::Display::fmt(err, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = Error::config("no member named `missing` on `Target`");
        assert_eq!(
            err.to_string(),
            "invalid mapping configuration: no member named `missing` on `Target`"
        );
        assert!(err.is_config());
    }

    #[test]
    fn context_chain_display() {
        let err = Error::null_traversal("child")
            .context(err!("building `Target` from `Source`"));
        assert_eq!(
            err.to_string(),
            "plan evaluation failed: building `Target` from `Source`: \
             absent value while reading `child`"
        );
    }

    #[test]
    fn anyhow_bridge() {
        let err: Error = anyhow::anyhow!("something failed").into();
        assert_eq!(err.to_string(), "something failed");
    }

    #[test]
    fn type_conversion_display() {
        let err = Error::type_conversion("String(\"x\")", "i64");
        assert_eq!(err.to_string(), "cannot convert String(\"x\") to i64");
        assert!(err.is_type_conversion());
    }
}
