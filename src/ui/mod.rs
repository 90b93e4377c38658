pub mod prompt;
pub mod render;
