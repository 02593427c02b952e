//! Errors in the library.
use thiserror::Error;

/// Errors in the library.
#[derive(Error, Debug, PartialEq)]
pub enum RlcError {
    /// Record key error.
    #[error("Record key error: {0}")]
    RecordKeyError(String),

    /// Record value type error.
    #[error("Record value type error: {0}")]
    RecordValueTypeError(String),

    /// A user configuration contains a key unknown to the default configuration.
    #[error("The key {key} is not in default config domain: {allowed:?}")]
    UnknownConfigKey {
        /// The offending key.
        key: String,
        /// Keys of the default configuration.
        allowed: Vec<String>,
    },

    /// The action meaning at an index differs from what a wrapper requires.
    #[error("Expected action meaning {expected} at index {index}, found {found:?}")]
    ActionMeaningMismatch {
        /// Index in the action-meaning table.
        index: usize,
        /// The required meaning.
        expected: String,
        /// The meaning found at `index`, if any.
        found: Option<String>,
    },

    /// The environment declares fewer actions than a wrapper requires.
    #[error("At least {required} actions are required, found {found}")]
    TooFewActions {
        /// Minimum number of actions.
        required: usize,
        /// Number of actions declared by the environment.
        found: usize,
    },

    /// The environment declares more actions than an action index can address.
    #[error("At most {max} actions are supported, found {found}")]
    TooManyActions {
        /// Maximum number of actions.
        max: usize,
        /// Number of actions declared by the environment.
        found: usize,
    },

    /// A count parameter must be positive.
    #[error("Parameter {0} must be positive")]
    NonPositiveParameter(&'static str),

    /// Evaluation over zero episodes.
    #[error("The number of evaluation episodes must be positive")]
    NoEpisodes,
}
