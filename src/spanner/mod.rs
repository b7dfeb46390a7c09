//! Row selection types for the Spanner read API.
//!
//! Build a [`KeySet`] from keys and [`KeyRange`]s, then hand
//! [`KeySet::to_proto`] to the RPC layer.

mod error;
mod key;
mod keyset;
pub mod proto;

pub use error::InvalidArgument;
pub use key::{Key, KeyPart};
pub use keyset::{KeyBound, KeyRange, KeyRangeParts, KeySet, KeySetParts};
