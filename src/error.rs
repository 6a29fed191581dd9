use thiserror::Error;

/// Failure modes of salted-digest construction and validation.
///
/// A validation mismatch is a normal `false` result, not an error; errors are
/// reserved for structurally malformed input and entropy failures.
#[derive(Debug, Error)]
pub enum Error {
    /// A salt must be at least one byte long, whether supplied or generated.
    #[error("invalid salt length, must be at least 1 byte")]
    SaltTooShort,

    /// The secure random source failed while generating a salt.
    #[error("reading salt bytes from the random source: {0}")]
    Random(#[from] rand::Error),

    /// The validation input cannot even contain an unsalted base digest.
    #[error("slice too short for a base hash digest")]
    TooShortForBaseHash,

    /// The validation input has room for a base digest but no salt bytes.
    #[error("slice too short to be a salted digest")]
    MissingSalt,
}
