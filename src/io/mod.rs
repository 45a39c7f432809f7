//! IO abstractions for resolving raw file content.

mod byte_source;

pub use byte_source::{ByteSource, FileSource, MemorySource};
