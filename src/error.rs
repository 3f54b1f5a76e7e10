use thiserror::Error;

pub type ZoomResult<T> = Result<T, ZoomError>;

#[derive(Debug, Error)]
pub enum ZoomError {
    #[error("invalid plot box: left={left}, top={top}, width={width}, height={height}")]
    InvalidPlotBox {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    },

    #[error("invalid input: {0}")]
    InvalidInput(String),
}
