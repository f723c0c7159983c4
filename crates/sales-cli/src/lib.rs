//! CLI library components for the sales profit tool.

pub mod logging;
pub mod render;
