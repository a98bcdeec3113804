pub mod core;
pub mod encode;
pub mod scalar;
pub mod wrappers;
