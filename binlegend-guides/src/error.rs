use binlegend_scales::error::ScaleError;
use binlegend_scenegraph::error::SceneGraphError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LegendError {
    #[error("Invalid scale: {0}")]
    InvalidScale(String),

    #[error(
        "Region {width}x{height} is too small for insets (primary {primary_insets}, secondary {secondary_insets})"
    )]
    RegionTooSmall {
        width: f32,
        height: f32,
        primary_insets: f32,
        secondary_insets: f32,
    },

    #[error("Unsupported scale kind: {0}")]
    UnsupportedScaleKind(String),

    #[error("Invalid legend config: {0}")]
    InvalidConfig(String),

    #[error(transparent)]
    Scale(ScaleError),

    #[error(transparent)]
    SceneGraph(#[from] SceneGraphError),
}

impl From<ScaleError> for LegendError {
    fn from(err: ScaleError) -> Self {
        match err {
            ScaleError::InvalidScale(msg) => LegendError::InvalidScale(msg),
            ScaleError::UnsupportedScaleKind(kind) => LegendError::UnsupportedScaleKind(kind),
            err @ (ScaleError::ThresholdsNotAscending(_)
            | ScaleError::ThresholdDomainMismatch { .. }
            | ScaleError::EmptyDomain) => LegendError::InvalidScale(err.to_string()),
            err => LegendError::Scale(err),
        }
    }
}
