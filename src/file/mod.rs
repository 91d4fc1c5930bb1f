pub mod operations;
pub mod search_replace;
