use thiserror::Error;

/// Errors reported by the strict sequence builders.
///
/// Driving a sequence never fails; these only come out of constructors that
/// refuse inputs the lenient builders would silently turn into an empty
/// sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SeqError {
    #[error("cannot zip collections of different lengths ({left} vs {right})")]
    LengthMismatch { left: usize, right: usize },
}
