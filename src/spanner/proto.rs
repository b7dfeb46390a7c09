//! Wire messages for key selection, compatible with `google.spanner.v1.KeySet`
//! and the `google.protobuf` struct types it embeds.
//!
//! Only the subset of `google.protobuf.Value` needed for key parts is modelled;
//! `struct_value` (tag 5) is never produced.

// prost derives emit undocumented helper methods.
#![allow(missing_docs)]

/// `google.protobuf.NullValue`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, ::prost::Enumeration)]
#[repr(i32)]
pub enum NullValue {
    /// The only null value.
    NullValue = 0,
}

/// `google.protobuf.Value`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Value {
    /// The kind of value.
    #[prost(oneof = "value::Kind", tags = "1, 2, 3, 4, 6")]
    pub kind: ::core::option::Option<value::Kind>,
}

/// Nested types of [`Value`].
pub mod value {
    /// The kind of value.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum Kind {
        /// Null.
        #[prost(enumeration = "super::NullValue", tag = "1")]
        NullValue(i32),
        /// Double.
        #[prost(double, tag = "2")]
        NumberValue(f64),
        /// String.
        #[prost(string, tag = "3")]
        StringValue(::prost::alloc::string::String),
        /// Boolean.
        #[prost(bool, tag = "4")]
        BoolValue(bool),
        /// Repeated values.
        #[prost(message, tag = "6")]
        ListValue(super::ListValue),
    }
}

/// `google.protobuf.ListValue`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct ListValue {
    /// Repeated field of dynamically typed values.
    #[prost(message, repeated, tag = "1")]
    pub values: ::prost::alloc::vec::Vec<Value>,
}

/// `google.spanner.v1.KeyRange`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeyRange {
    /// Start of the range.
    #[prost(oneof = "key_range::StartKeyType", tags = "1, 2")]
    pub start_key_type: ::core::option::Option<key_range::StartKeyType>,
    /// End of the range.
    #[prost(oneof = "key_range::EndKeyType", tags = "3, 4")]
    pub end_key_type: ::core::option::Option<key_range::EndKeyType>,
}

/// Nested types of [`KeyRange`].
pub mod key_range {
    /// Start of a key range.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum StartKeyType {
        /// Range includes rows whose key starts with this prefix.
        #[prost(message, tag = "1")]
        StartClosed(super::ListValue),
        /// Range excludes rows whose key starts with this prefix.
        #[prost(message, tag = "2")]
        StartOpen(super::ListValue),
    }

    /// End of a key range.
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum EndKeyType {
        /// Range includes rows whose key starts with this prefix.
        #[prost(message, tag = "3")]
        EndClosed(super::ListValue),
        /// Range excludes rows whose key starts with this prefix.
        #[prost(message, tag = "4")]
        EndOpen(super::ListValue),
    }
}

/// `google.spanner.v1.KeySet`.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct KeySet {
    /// Individual keys, each a full or prefix primary key.
    #[prost(message, repeated, tag = "1")]
    pub keys: ::prost::alloc::vec::Vec<ListValue>,
    /// Key ranges.
    #[prost(message, repeated, tag = "2")]
    pub ranges: ::prost::alloc::vec::Vec<KeyRange>,
    /// Select every row of the table or index.
    #[prost(bool, tag = "3")]
    pub all: bool,
}

impl KeyRange {
    /// The `start_closed` key, if set.
    pub fn start_closed(&self) -> Option<&ListValue> {
        match &self.start_key_type {
            Some(key_range::StartKeyType::StartClosed(list)) => Some(list),
            _ => None,
        }
    }

    /// The `start_open` key, if set.
    pub fn start_open(&self) -> Option<&ListValue> {
        match &self.start_key_type {
            Some(key_range::StartKeyType::StartOpen(list)) => Some(list),
            _ => None,
        }
    }

    /// The `end_closed` key, if set.
    pub fn end_closed(&self) -> Option<&ListValue> {
        match &self.end_key_type {
            Some(key_range::EndKeyType::EndClosed(list)) => Some(list),
            _ => None,
        }
    }

    /// The `end_open` key, if set.
    pub fn end_open(&self) -> Option<&ListValue> {
        match &self.end_key_type {
            Some(key_range::EndKeyType::EndOpen(list)) => Some(list),
            _ => None,
        }
    }
}
