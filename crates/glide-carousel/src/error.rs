use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("slidesPerView must be at least 1")]
    ZeroSlidesPerView,
    #[error("autoplayDuration must be greater than 0 ms when autoplay is enabled")]
    ZeroAutoplayDuration,
    #[error("spaceBetween must be a finite, non-negative pixel value (got {0})")]
    InvalidSpacing(f32),
    #[error("invalid carousel config: {0}")]
    Json(#[from] serde_json::Error),
}
