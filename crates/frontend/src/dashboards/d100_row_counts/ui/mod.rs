pub mod panel;
pub mod render;
