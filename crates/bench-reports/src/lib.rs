pub mod error;
pub mod feedback;
pub mod fetcher;
pub mod resource;
pub mod version;

pub use error::FetchError;
pub use feedback::Feedback;
pub use fetcher::{ContentFetcher, DEFAULT_ORIGIN, Payload, fetch_datasheet_as};
pub use resource::{CacheHint, DEFAULT_REVALIDATE, DecodeMode, Directory, Resource};
pub use version::Version;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
