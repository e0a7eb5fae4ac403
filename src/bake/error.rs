use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BakeError {
    #[error("input buffer too short: need {expected} bytes, got {actual}")]
    InputTooShort { expected: usize, actual: usize },
    #[error("output buffer too short: need {expected} bytes, got {actual}")]
    OutputTooShort { expected: usize, actual: usize },
    #[error("input length {len} is not a whole number of faces")]
    NotFaceAligned { len: usize },
    #[error("face count {faces} overflows the addressable buffer size")]
    SizeOverflow { faces: usize },
    #[error("null buffer pointer")]
    NullPointer,
}

impl BakeError {
    /// Stable status code reported across the C boundary. Zero means success.
    pub fn status_code(&self) -> i32 {
        match self {
            BakeError::NullPointer => 1,
            BakeError::InputTooShort { .. } => 2,
            BakeError::OutputTooShort { .. } => 3,
            BakeError::NotFaceAligned { .. } => 4,
            BakeError::SizeOverflow { .. } => 5,
        }
    }
}
