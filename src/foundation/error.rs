/// Convenience result type used across tweenkit.
pub type TweenkitResult<T> = Result<T, TweenkitError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum TweenkitError {
    /// Invalid declaration-time configuration: durations, repeat counts,
    /// easing names, value literals, grid shapes, trigger regions.
    ///
    /// Raised synchronously from builders and binding calls, never deferred
    /// to tick time.
    #[error("configuration error: {0}")]
    Config(String),

    /// A `(target, property)` pair could not be resolved at tick time.
    ///
    /// Contained per entry: the scheduler skips the offending entry's writes
    /// for the current tick and continues with the rest of the active set.
    #[error("target error: {0}")]
    Target(String),

    /// Wrapped lower-level error from embedders.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TweenkitError {
    /// Build a [`TweenkitError::Config`] value.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Build a [`TweenkitError::Target`] value.
    pub fn target(msg: impl Into<String>) -> Self {
        Self::Target(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
