pub mod binned;
pub mod color_interpolator;
pub mod error;
pub mod formatter;
pub mod linear;
pub mod quantile;
pub mod quantize;
pub mod spec;
pub mod threshold;
