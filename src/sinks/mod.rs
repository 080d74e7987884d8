//! Sink implementations
//!
//! Any `std::io::Write + Send` value can be a sink. These are the ones the
//! crate ships with.

pub mod file;
pub mod memory;

pub use file::FileSink;
pub use memory::MemorySink;
