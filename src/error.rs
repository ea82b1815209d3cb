use thiserror::Error;

/// Precondition violations surfaced by the extraction engines.
///
/// Lookup inconsistencies during a run are deliberately *not* errors; they
/// are logged and recorded as [`crate::Anomaly`] values so that a run always
/// produces a best-effort mesh.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// `run` was called before `init_all` allocated the working buffers.
    #[error("engine buffers are not initialized; call init_all before run")]
    Uninitialized,

    /// A caller-supplied buffer does not match the configured resolution.
    #[error("buffer length {got} does not match grid resolution {expected}")]
    ResolutionMismatch { expected: usize, got: usize },

    /// Attempted to write a sample into an externally-owned grid.
    #[error("cannot write samples into a borrowed grid")]
    BorrowedGrid,
}
