mod color;
mod length;

pub use color::*;
pub use length::*;
