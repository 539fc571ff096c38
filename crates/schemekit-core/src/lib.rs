//! # SchemeKit Core
//!
//! Shared error type and engine-wide constants for SchemeKit.
//! The designer and settings crates build on these so that every layer
//! reports failures and clamps geometry the same way.

pub mod constants;
pub mod error;

pub use error::{Error, Result};
