//! Host environment surfaces: display metrics and file downloads
//!
//! The renderer only ever reads from the display host and only ever writes
//! finished files through a download sink; both are traits so tests and
//! other front ends can supply their own.

pub mod display;
pub mod download;

pub use display::{DisplayHost, FixedDisplay};
pub use download::{DirectorySink, DownloadSink};
