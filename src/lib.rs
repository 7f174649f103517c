//! Filmtag - metadata extraction from video file names
//!
//! This library crate exposes the command-line plumbing for integration
//! testing. The scanning engine itself lives in `filmtag-parser`.

pub mod config;
pub mod report;
pub mod scanner;
