pub mod axis;
pub mod config;
pub mod error;
pub mod legend;
pub mod orientation;
pub mod surface;
