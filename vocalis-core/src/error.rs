use thiserror::Error;

/// All errors produced by vocalis-core.
///
/// Low-quality audio is never an error: it surfaces as a typed
/// [`RejectionReason`](crate::gate::RejectionReason) from the validity
/// gate. Only contract violations on the buffer itself reach this enum.
#[derive(Debug, Error)]
pub enum VocalisError {
    #[error("sample buffer is empty")]
    EmptyBuffer,

    #[error("invalid sample rate: {0} Hz")]
    InvalidSampleRate(u32),

    #[error("invalid duration: {0} s")]
    InvalidDuration(f32),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, VocalisError>;
