//! lazypm - terminal front end for the xbps package manager
//!
//! Library crate exposing the UI core and the xbps provider used by the binary.
//!
//! Tests live close to the modules they exercise as unit tests.

pub mod config;
pub mod error;
pub mod logging;
pub mod packages;
pub mod ui;
pub mod xbps;
