//! Local storage for downloaded videos.

mod file_writer;

pub use file_writer::{CHUNK_SIZE, write_stream};
