//! # playcheck-browser
//!
//! Headless Chrome backend for playcheck, built on chromiumoxide.
//!
//! This crate launches Chrome, loads the page under test, and implements
//! [`playcheck::Probe`] for a browser tab so the core trial runner can drive
//! the media element on it.
//!
//! ## Architecture
//!
//! - **HeadlessBrowser**: Manages the browser process lifecycle
//! - **Page**: A browser tab with navigation and scripting
//! - **script**: Renders each [`playcheck::MediaCommand`] as a page script
//! - **session**: Launch, load, run trials, close, in one call
//! - **WaitConfig**: Deadline and cadence for page-load waits
//!
//! ## Example Usage
//!
//! ```ignore
//! use playcheck::RunConfig;
//! use playcheck_browser::{LaunchConfig, check_run};
//!
//! let report = check_run(
//!     "https://example.com/watch",
//!     &LaunchConfig::default(),
//!     &RunConfig::new(3),
//! )
//! .await?;
//!
//! println!("{}", report.to_pretty_json()?);
//! ```
//!
//! ## Security Considerations
//!
//! - **Selectors**: only ever reach the page as JSON string literals
//! - **Process isolation**: each run gets its own Chrome process and profile
//! - **Cleanup**: dropping a browser kills its process
//!
//! ## Testing Strategy
//!
//! Unit tests cover script rendering, waits and error mapping. Tests that
//! need a real Chrome are `#[ignore]`d; run them with `cargo test -- --ignored`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod browser;
pub mod error;
pub mod page;
mod probe;
pub mod script;
pub mod session;
pub mod wait;

// Re-export main types for convenience
pub use browser::{HeadlessBrowser, LaunchConfig};
pub use error::{BrowserError, Result};
pub use page::{LoadState, Page};
pub use session::{check_run, check_run_with};
pub use wait::{DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT, WaitConfig};
