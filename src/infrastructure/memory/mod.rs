//! In-Memory Implementations
//!
//! 端口的内存实现

mod book_source;

pub use book_source::InMemoryBookSource;
