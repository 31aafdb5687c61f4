pub mod annotations;
pub mod args;
pub mod error;
pub mod grayscale;
pub mod sequence;
