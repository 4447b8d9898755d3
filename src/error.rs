use thiserror::Error;

pub type HorizonResult<T> = Result<T, HorizonError>;

#[derive(Debug, Error)]
pub enum HorizonError {
    #[error("invalid series: {0}")]
    InvalidSeries(String),

    #[error("invalid grid: {0}")]
    InvalidGrid(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
