//! Query Handlers 实现

mod book_handlers;

pub use book_handlers::*;
