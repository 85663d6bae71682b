pub mod catalog;
pub mod text;
pub mod wire;
