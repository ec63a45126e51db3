//! I/O layer: decoding source logos (`reader`) and `writers` for PNG/ICO
//! favicons and the JSON report sidecar.
pub mod reader;
pub use reader::load_rgba;

pub mod writers;
