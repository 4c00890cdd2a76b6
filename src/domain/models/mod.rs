mod document;
mod ranking;

pub use document::*;
pub use ranking::*;
