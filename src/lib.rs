#![deny(missing_docs)]
//! Client-side building blocks for Google Cloud APIs.
//!
//! - [`spanner`]: key ranges and key sets for row reads, with their protobuf
//!   encoding.
//! - [`dns`]: URL and header shaping for the Cloud DNS JSON API over a
//!   caller-supplied HTTP transport.

mod observability;

/// Spanner row selections.
pub mod spanner;

/// Cloud DNS connection.
pub mod dns;

pub use crate::spanner::{InvalidArgument, Key, KeyPart, KeyRange, KeySet};
