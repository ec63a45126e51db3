//! Core processing building blocks: content bounds, icon isolation, padding,
//! resizing and the pipeline that chains them. These are internal primitives
//! consumed by the high-level `api` module.
pub mod params;
pub mod processing;
