pub mod raw_content;

pub use raw_content::{CACHE_TAG_HEADER, RawContentClient, RawContentClientConfig};
