//! JSON 文档持久化

mod book_source;

pub use book_source::{
    JsonBookSource, CHARACTERS_FILE, CHUNKS_FILE, LOCATIONS_FILE, META_FILE, SUMMARIES_FILE,
};
