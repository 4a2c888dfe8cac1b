//! Core library for the `apod` loader.
//!
//! This crate defines:
//! - The page-data loader for NASA's Astronomy Picture of the Day
//! - The injectable fetch capability and its `reqwest` implementation
//! - Configuration & credentials handling
//! - The result model handed to a rendering layer
//!
//! It is used by `apod-cli`, but can also be reused by other binaries or services.

pub mod config;
pub mod error;
pub mod fetch;
pub mod loader;
pub mod model;

pub use config::Config;
pub use error::{LOAD_FAILED_MESSAGE, PageError};
pub use fetch::{Fetch, FetchResponse, HttpFetch};
pub use loader::{ApodLoader, load};
pub use model::{PageData, RouteParams};
