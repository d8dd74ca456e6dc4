use binlegend_common::color::ColorParseError;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ScaleError {
    #[error("Empty domain")]
    EmptyDomain,

    #[error("Empty range")]
    EmptyRange,

    #[error("Thresholds must be in ascending order: {0:?}")]
    ThresholdsNotAscending(Vec<f32>),

    #[error(
        "Threshold domain length ({domain_len}) must be one less than range length ({range_len})"
    )]
    ThresholdDomainMismatch { domain_len: usize, range_len: usize },

    #[error("Invalid scale: {0}")]
    InvalidScale(String),

    #[error("Scale kind `{0}` has no threshold or quantile boundaries")]
    UnsupportedScaleKind(String),

    #[error("Missing required scale field `{0}`")]
    MissingField(&'static str),

    #[error(transparent)]
    InvalidColor(#[from] ColorParseError),
}
