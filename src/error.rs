use miette::Diagnostic;
use thiserror::Error;

// Namespacing scheme:
// geocost::catalog -> model catalog lookups.
// geocost::frequency -> cadence table lookups.
// geocost::input -> engine preconditions.

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Unknown model identifier: '{0}'")]
    #[diagnostic(
        code(geocost::catalog::unknown_model),
        help("Run `geocost models` to see every model id in the catalog.")
    )]
    UnknownModel(String),

    #[error("Unknown refresh frequency: '{0}'")]
    #[diagnostic(
        code(geocost::frequency::unknown),
        help("Valid frequencies are 'daily', 'weekly' and 'monthly'.")
    )]
    UnknownFrequency(String),

    /// The cli clamps before the engine runs, so hitting this means a caller
    /// skipped validation.
    #[error("Invalid calculation input: {0}")]
    #[diagnostic(
        code(geocost::input::invalid),
        help("Web search percentage must be within 0-100 and project count at least 1.")
    )]
    InvalidInput(String),
}
