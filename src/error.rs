use thiserror::Error;

pub type PulseResult<T> = Result<T, PulseError>;

#[derive(Debug, Error)]
pub enum PulseError {
    #[error("required data role `{role}` is not bound to any category column")]
    MissingRequiredRole { role: &'static str },

    #[error("empty input: {0}")]
    EmptyInput(String),

    #[error("unsupported polarity configuration: {count} value groups (at most 2)")]
    UnsupportedPolarityGroups { count: usize },

    #[error("primary value missing at category {category_index} and no secondary group exists")]
    MissingSecondaryGroup { category_index: usize },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
