//! Page content extraction.

pub mod html;
pub mod page;

pub use page::PageExtractor;
