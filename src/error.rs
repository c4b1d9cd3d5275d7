use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("dataset records are missing a `{0}` field")]
    MissingTimeField(&'static str),

    #[error("record {index} does not match the field set of the first record: {detail}")]
    InconsistentRecord { index: usize, detail: String },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
