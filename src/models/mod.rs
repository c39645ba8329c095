pub mod filter;
pub mod image;

pub use filter::*;
pub use image::*;
