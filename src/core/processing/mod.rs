pub mod bbox;
pub mod crop;
pub mod padding;
pub mod pipeline;
pub mod resize;
pub mod save;
