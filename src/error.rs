use thiserror::Error;

/// Failures the statistics engine reports to its caller.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A pairwise statistic was requested for images of different sizes.
    #[error("images must have the same dimensions: {}x{} vs {}x{}", .expected.0, .expected.1, .actual.0, .actual.1)]
    DimensionMismatch {
        expected: (u32, u32),
        actual: (u32, u32),
    },
}

pub type Result<T> = std::result::Result<T, Error>;
