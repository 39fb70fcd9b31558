use thiserror::Error;

/// Errors raised by the simulation core
///
/// Both kinds are precondition violations and are surfaced at the boundary of
/// the call that raised them. Nothing here is transient, so there is no retry
/// path; once a cache is constructed, accesses cannot fail.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum SimError {
    /// A non-positive size reached a constructor, either directly or after
    /// strategy folding. Never silently clamped.
    #[error("invalid cache configuration: {0} must be positive")]
    InvalidConfiguration(&'static str),

    /// A statistics snapshot handed to the analyzer is internally inconsistent
    #[error("invalid statistics snapshot: {0}")]
    InvalidInput(&'static str),
}
