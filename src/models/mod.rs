pub mod manifest;
pub mod screen;
