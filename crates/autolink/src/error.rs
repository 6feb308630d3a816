//! Error types for autolinking.

/// Boxed error produced by a caller-supplied resolver.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error returned from autolinking.
///
/// Text itself never causes an error. The only failure source is a
/// [`LinkResolver`](crate::LinkResolver), whose error is returned to the caller
/// exactly as the resolver produced it.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum AutolinkError {
    /// A link resolver failed for the given identifier.
    #[error("failed to resolve link for {identifier:?}")]
    Resolve {
        /// Identifier passed to the resolver (hashtag, username, list or URL).
        identifier: String,
        /// Underlying resolver error.
        #[source]
        source: BoxError,
    },
}

impl AutolinkError {
    /// Create a resolver error wrapping `source`.
    pub fn resolve(identifier: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Resolve {
            identifier: identifier.into(),
            source: source.into(),
        }
    }

    /// Create a resolver error from a plain message.
    pub fn resolve_msg(identifier: impl Into<String>, message: impl Into<String>) -> Self {
        Self::resolve(identifier, message.into())
    }
}
