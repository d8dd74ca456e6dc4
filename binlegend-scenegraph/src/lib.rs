pub mod error;
pub mod marks;
pub mod svg;
