#![warn(clippy::pedantic)]

pub mod filesystem;
pub mod log;
pub mod memory;

pub use filesystem::Filesystem;
pub use memory::Memory;
