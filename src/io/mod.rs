pub mod reader;
pub mod terminal;
pub mod writer;
