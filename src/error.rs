use std::backtrace::Backtrace;
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// A mistake made while assembling a [`Problem`](crate::solver::problem::Problem).
///
/// Configuration errors are programmer errors in the calling code and are
/// surfaced immediately at construction time. They are disjoint from the
/// "no solution" outcome of a search, which is an ordinary `None`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigurationError {
    #[error("variable {variable} has no registered domain")]
    MissingDomain { variable: String },

    #[error("a domain was registered for {variable}, which is not a problem variable")]
    UnknownDomainVariable { variable: String },

    #[error("constraint {constraint} is scoped to {variable}, which is not a problem variable")]
    UnknownScopeVariable {
        constraint: String,
        variable: String,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Inner: {inner}\n{backtrace}")]
    Inner {
        inner: Box<ConfigurationError>,
        backtrace: Box<Backtrace>,
    },
}

impl From<ConfigurationError> for Error {
    fn from(inner: ConfigurationError) -> Self {
        Error::Inner {
            inner: Box::new(inner),
            backtrace: Box::new(std::backtrace::Backtrace::capture()),
        }
    }
}

impl Error {
    /// The underlying configuration error, for callers that want to match on
    /// the specific mistake.
    pub fn configuration(&self) -> &ConfigurationError {
        match self {
            Error::Inner { inner, .. } => inner,
        }
    }
}
