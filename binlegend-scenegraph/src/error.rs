use thiserror::Error;

#[derive(Error, Debug)]
pub enum SceneGraphError {
    #[error("Mark `{name}` has {actual} values for `{field}`, expected {expected}")]
    MarkLengthMismatch {
        name: String,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("Failed to write SVG output")]
    Write(#[from] std::fmt::Error),
}
