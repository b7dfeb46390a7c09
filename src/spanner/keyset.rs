//! Row selections for read requests: key ranges and key sets.
//!
//! Both types are immutable once built. The typed constructors cannot produce an
//! invalid value; the flat `*Parts` forms mirror the wire shape and are checked
//! through `TryFrom`, which is also the path taken by deserialization.

use serde::{Deserialize, Serialize};

use super::{error::InvalidArgument, key::Key, proto};
use crate::observability::log_debug;

/// One endpoint of a [`KeyRange`].
#[derive(Clone, Debug, PartialEq)]
pub enum KeyBound {
    /// Rows whose key equals (or is prefixed by) this key are excluded.
    Open(Key),
    /// Rows whose key equals (or is prefixed by) this key are included.
    Closed(Key),
}

impl KeyBound {
    /// The key carried by this bound.
    pub fn key(&self) -> &Key {
        match self {
            KeyBound::Open(key) | KeyBound::Closed(key) => key,
        }
    }

    /// Whether the bound is open.
    pub fn is_open(&self) -> bool {
        matches!(self, KeyBound::Open(_))
    }

    fn open_key(&self) -> Option<&Key> {
        match self {
            KeyBound::Open(key) => Some(key),
            KeyBound::Closed(_) => None,
        }
    }

    fn closed_key(&self) -> Option<&Key> {
        match self {
            KeyBound::Closed(key) => Some(key),
            KeyBound::Open(_) => None,
        }
    }

    // Exactly one of `open`/`closed` must be present.
    fn from_pair(
        open: Option<Key>,
        closed: Option<Key>,
        missing: InvalidArgument,
        conflicting: InvalidArgument,
    ) -> Result<Self, InvalidArgument> {
        match (open, closed) {
            (Some(key), None) => Ok(KeyBound::Open(key)),
            (None, Some(key)) => Ok(KeyBound::Closed(key)),
            (None, None) => Err(missing),
            (Some(_), Some(_)) => Err(conflicting),
        }
    }
}

/// Flat, unvalidated form of a [`KeyRange`].
///
/// Exactly one start field and exactly one end field must be set for the
/// conversion into [`KeyRange`] to succeed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeyRangeParts {
    /// Exclusive start key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_open: Option<Key>,
    /// Inclusive start key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_closed: Option<Key>,
    /// Exclusive end key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_open: Option<Key>,
    /// Inclusive end key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_closed: Option<Key>,
}

/// A range of rows between two composite keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "KeyRangeParts", into = "KeyRangeParts")]
pub struct KeyRange {
    start: KeyBound,
    end: KeyBound,
}

impl KeyRange {
    /// Create a range from explicit bounds.
    pub fn new(start: KeyBound, end: KeyBound) -> Self {
        Self { start, end }
    }

    /// `[start, end)`
    pub fn closed_open(start: impl Into<Key>, end: impl Into<Key>) -> Self {
        Self::new(KeyBound::Closed(start.into()), KeyBound::Open(end.into()))
    }

    /// `(start, end]`
    pub fn open_closed(start: impl Into<Key>, end: impl Into<Key>) -> Self {
        Self::new(KeyBound::Open(start.into()), KeyBound::Closed(end.into()))
    }

    /// `[start, end]`
    pub fn closed(start: impl Into<Key>, end: impl Into<Key>) -> Self {
        Self::new(KeyBound::Closed(start.into()), KeyBound::Closed(end.into()))
    }

    /// `(start, end)`
    pub fn open(start: impl Into<Key>, end: impl Into<Key>) -> Self {
        Self::new(KeyBound::Open(start.into()), KeyBound::Open(end.into()))
    }

    /// Start bound.
    pub fn start(&self) -> &KeyBound {
        &self.start
    }

    /// End bound.
    pub fn end(&self) -> &KeyBound {
        &self.end
    }

    /// Exclusive start key, if the range starts open.
    pub fn start_open(&self) -> Option<&Key> {
        self.start.open_key()
    }

    /// Inclusive start key, if the range starts closed.
    pub fn start_closed(&self) -> Option<&Key> {
        self.start.closed_key()
    }

    /// Exclusive end key, if the range ends open.
    pub fn end_open(&self) -> Option<&Key> {
        self.end.open_key()
    }

    /// Inclusive end key, if the range ends closed.
    pub fn end_closed(&self) -> Option<&Key> {
        self.end.closed_key()
    }

    /// Encode as a `google.spanner.v1.KeyRange`.
    pub fn to_proto(&self) -> proto::KeyRange {
        use proto::key_range::{EndKeyType, StartKeyType};

        let start = match &self.start {
            KeyBound::Open(key) => StartKeyType::StartOpen(key.to_proto()),
            KeyBound::Closed(key) => StartKeyType::StartClosed(key.to_proto()),
        };
        let end = match &self.end {
            KeyBound::Open(key) => EndKeyType::EndOpen(key.to_proto()),
            KeyBound::Closed(key) => EndKeyType::EndClosed(key.to_proto()),
        };
        proto::KeyRange {
            start_key_type: Some(start),
            end_key_type: Some(end),
        }
    }
}

impl TryFrom<KeyRangeParts> for KeyRange {
    type Error = InvalidArgument;

    fn try_from(parts: KeyRangeParts) -> Result<Self, Self::Error> {
        let range = KeyBound::from_pair(
            parts.start_open,
            parts.start_closed,
            InvalidArgument::MissingStart,
            InvalidArgument::ConflictingStart,
        )
        .and_then(|start| {
            KeyBound::from_pair(
                parts.end_open,
                parts.end_closed,
                InvalidArgument::MissingEnd,
                InvalidArgument::ConflictingEnd,
            )
            .map(|end| KeyRange::new(start, end))
        });
        if let Err(err) = &range {
            log_debug!(component = "keyset", event = "key_range_rejected", reason = %err);
        }
        range
    }
}

impl From<KeyRange> for KeyRangeParts {
    fn from(range: KeyRange) -> Self {
        let (start_open, start_closed) = match range.start {
            KeyBound::Open(key) => (Some(key), None),
            KeyBound::Closed(key) => (None, Some(key)),
        };
        let (end_open, end_closed) = match range.end {
            KeyBound::Open(key) => (Some(key), None),
            KeyBound::Closed(key) => (None, Some(key)),
        };
        KeyRangeParts {
            start_open,
            start_closed,
            end_open,
            end_closed,
        }
    }
}

impl From<&KeyRange> for proto::KeyRange {
    fn from(range: &KeyRange) -> Self {
        range.to_proto()
    }
}

/// Flat, unvalidated form of a [`KeySet`].
///
/// `keys`/`ranges` are `None` only in the serialized form of an `all` set.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct KeySetParts {
    /// Select every row.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub all: bool,
    /// Individual keys.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keys: Option<Vec<Key>>,
    /// Key ranges.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ranges: Option<Vec<KeyRange>>,
}

/// A selection of rows: everything, or the union of explicit keys and ranges.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "KeySetParts", into = "KeySetParts")]
pub enum KeySet {
    /// Every row of the table or index.
    All,
    /// The listed keys plus every row covered by the listed ranges.
    Explicit {
        /// Individual keys, in caller order.
        keys: Vec<Key>,
        /// Key ranges, in caller order.
        ranges: Vec<KeyRange>,
    },
}

impl Default for KeySet {
    /// The empty selection.
    fn default() -> Self {
        KeySet::Explicit {
            keys: Vec::new(),
            ranges: Vec::new(),
        }
    }
}

impl KeySet {
    /// Select every row.
    pub fn all() -> Self {
        KeySet::All
    }

    /// Select the given keys and ranges.
    pub fn explicit(keys: Vec<Key>, ranges: Vec<KeyRange>) -> Self {
        KeySet::Explicit { keys, ranges }
    }

    /// Select only the given keys.
    pub fn from_keys<I>(keys: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Key>,
    {
        Self::explicit(keys.into_iter().map(Into::into).collect(), Vec::new())
    }

    /// Select only the given ranges.
    pub fn from_ranges<I>(ranges: I) -> Self
    where
        I: IntoIterator<Item = KeyRange>,
    {
        Self::explicit(Vec::new(), ranges.into_iter().collect())
    }

    /// Whether this set selects every row.
    pub fn is_all(&self) -> bool {
        matches!(self, KeySet::All)
    }

    /// Explicit keys; empty for an `all` set.
    pub fn keys(&self) -> &[Key] {
        match self {
            KeySet::All => &[],
            KeySet::Explicit { keys, .. } => keys,
        }
    }

    /// Explicit ranges; empty for an `all` set.
    pub fn ranges(&self) -> &[KeyRange] {
        match self {
            KeySet::All => &[],
            KeySet::Explicit { ranges, .. } => ranges,
        }
    }

    /// Whether the set selects nothing.
    pub fn is_empty(&self) -> bool {
        !self.is_all() && self.keys().is_empty() && self.ranges().is_empty()
    }

    /// Encode as a `google.spanner.v1.KeySet`.
    pub fn to_proto(&self) -> proto::KeySet {
        match self {
            KeySet::All => proto::KeySet {
                keys: Vec::new(),
                ranges: Vec::new(),
                all: true,
            },
            KeySet::Explicit { keys, ranges } => proto::KeySet {
                keys: keys.iter().map(Key::to_proto).collect(),
                ranges: ranges.iter().map(KeyRange::to_proto).collect(),
                all: false,
            },
        }
    }
}

impl TryFrom<KeySetParts> for KeySet {
    type Error = InvalidArgument;

    fn try_from(parts: KeySetParts) -> Result<Self, Self::Error> {
        let keys = parts.keys.unwrap_or_default();
        let ranges = parts.ranges.unwrap_or_default();
        if parts.all {
            let err = if !keys.is_empty() {
                InvalidArgument::AllWithKeys
            } else if !ranges.is_empty() {
                InvalidArgument::AllWithRanges
            } else {
                return Ok(KeySet::All);
            };
            log_debug!(component = "keyset", event = "key_set_rejected", reason = %err);
            return Err(err);
        }
        Ok(KeySet::explicit(keys, ranges))
    }
}

impl From<KeySet> for KeySetParts {
    fn from(set: KeySet) -> Self {
        match set {
            KeySet::All => KeySetParts {
                all: true,
                keys: None,
                ranges: None,
            },
            KeySet::Explicit { keys, ranges } => KeySetParts {
                all: false,
                keys: Some(keys),
                ranges: Some(ranges),
            },
        }
    }
}

impl From<&KeySet> for proto::KeySet {
    fn from(set: &KeySet) -> Self {
        set.to_proto()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spanner::key::KeyPart;

    fn key(text: &str) -> Key {
        Key::from([text])
    }

    fn parts(
        start_open: Option<Key>,
        start_closed: Option<Key>,
        end_open: Option<Key>,
        end_closed: Option<Key>,
    ) -> KeyRangeParts {
        KeyRangeParts {
            start_open,
            start_closed,
            end_open,
            end_closed,
        }
    }

    #[test]
    fn range_without_bounds_is_rejected() {
        assert_eq!(
            KeyRange::try_from(KeyRangeParts::default()),
            Err(InvalidArgument::MissingStart)
        );
    }

    #[test]
    fn range_with_both_starts_is_rejected() {
        let res = KeyRange::try_from(parts(Some(key("key_1")), Some(key("key_2")), None, None));
        assert_eq!(res, Err(InvalidArgument::ConflictingStart));

        let res = KeyRange::try_from(parts(
            Some(Key::empty()),
            Some(Key::empty()),
            None,
            Some(key("key_1")),
        ));
        assert_eq!(res, Err(InvalidArgument::ConflictingStart));
    }

    #[test]
    fn range_with_both_ends_is_rejected() {
        let res = KeyRange::try_from(parts(
            Some(key("key_1")),
            None,
            Some(Key::empty()),
            Some(Key::empty()),
        ));
        assert_eq!(res, Err(InvalidArgument::ConflictingEnd));
    }

    #[test]
    fn range_with_single_bound_is_rejected() {
        let cases = [
            (parts(None, Some(key("k")), None, None), InvalidArgument::MissingEnd),
            (parts(Some(key("k")), None, None, None), InvalidArgument::MissingEnd),
            (parts(None, None, None, Some(key("k"))), InvalidArgument::MissingStart),
            (parts(None, None, Some(key("k")), None), InvalidArgument::MissingStart),
        ];
        for (input, expected) in cases {
            assert_eq!(KeyRange::try_from(input), Err(expected));
        }
    }

    #[test]
    fn start_open_end_closed_keeps_only_given_fields() {
        let range =
            KeyRange::try_from(parts(Some(key("key_1")), None, None, Some(key("key_2")))).unwrap();

        assert_eq!(range.start_open(), Some(&key("key_1")));
        assert_eq!(range.start_closed(), None);
        assert_eq!(range.end_open(), None);
        assert_eq!(range.end_closed(), Some(&key("key_2")));
        assert_eq!(range, KeyRange::open_closed(["key_1"], ["key_2"]));
    }

    #[test]
    fn start_closed_end_open_keeps_only_given_fields() {
        let range = KeyRange::closed_open(["key_1"], ["key_2"]);

        assert_eq!(range.start_open(), None);
        assert_eq!(range.start_closed(), Some(&key("key_1")));
        assert_eq!(range.end_open(), Some(&key("key_2")));
        assert_eq!(range.end_closed(), None);
    }

    #[test]
    fn range_proto_sets_matching_fields() {
        let pb = KeyRange::closed_open(["key_1"], ["key_2"]).to_proto();

        assert_eq!(pb.start_closed(), Some(&key("key_1").to_proto()));
        assert_eq!(pb.end_open(), Some(&key("key_2").to_proto()));
        assert!(pb.start_open().is_none());
        assert!(pb.end_closed().is_none());
    }

    #[test]
    fn empty_key_is_present_but_empty() {
        let range = KeyRange::closed(Key::empty(), ["key"]);
        let pb = range.to_proto();

        let start = pb.start_closed().expect("start_closed present");
        assert!(start.values.is_empty());
        assert_eq!(pb.end_closed(), Some(&key("key").to_proto()));
    }

    #[test]
    fn key_set_all_has_no_keys_or_ranges() {
        let set = KeySet::try_from(KeySetParts {
            all: true,
            ..Default::default()
        })
        .unwrap();

        assert!(set.is_all());
        assert!(set.keys().is_empty());
        assert!(set.ranges().is_empty());
        assert!(!set.is_empty());
    }

    #[test]
    fn key_set_all_with_keys_or_ranges_is_rejected() {
        let with_keys = KeySetParts {
            all: true,
            keys: Some(vec![key("key1"), key("key2")]),
            ranges: None,
        };
        assert_eq!(KeySet::try_from(with_keys), Err(InvalidArgument::AllWithKeys));

        let with_ranges = KeySetParts {
            all: true,
            keys: None,
            ranges: Some(vec![KeyRange::closed_open(["key1"], ["key3"])]),
        };
        assert_eq!(
            KeySet::try_from(with_ranges),
            Err(InvalidArgument::AllWithRanges)
        );
    }

    #[test]
    fn key_set_all_with_empty_lists_is_accepted() {
        let set = KeySet::try_from(KeySetParts {
            all: true,
            keys: Some(Vec::new()),
            ranges: Some(Vec::new()),
        })
        .unwrap();
        assert_eq!(set, KeySet::All);
    }

    #[test]
    fn default_key_set_is_empty_selection() {
        let set = KeySet::default();

        assert!(!set.is_all());
        assert!(set.is_empty());
        assert_eq!(KeySet::try_from(KeySetParts::default()), Ok(set.clone()));

        let pb = set.to_proto();
        assert!(!pb.all);
        assert!(pb.keys.is_empty());
        assert!(pb.ranges.is_empty());
    }

    #[test]
    fn key_set_keeps_keys_and_ranges_together() {
        let range = KeyRange::open_closed(["key5"], ["key6"]);
        let set = KeySet::explicit(vec![key("key1")], vec![range.clone()]);

        assert_eq!(set.keys(), &[key("key1")]);
        assert_eq!(set.ranges(), &[range]);
        assert!(!set.is_empty());
    }

    #[test]
    fn key_set_all_proto_sets_only_flag() {
        let pb = KeySet::all().to_proto();

        assert!(pb.all);
        assert!(pb.keys.is_empty());
        assert!(pb.ranges.is_empty());
    }

    #[test]
    fn key_set_proto_keeps_insertion_order() {
        let set = KeySet::from_keys([["key2"], ["key1"], ["key2"]]);
        let pb = set.to_proto();

        assert!(!pb.all);
        let firsts: Vec<_> = pb
            .keys
            .iter()
            .map(|list| list.values[0].clone())
            .collect();
        assert_eq!(
            firsts,
            vec![
                KeyPart::from("key2").to_proto(),
                KeyPart::from("key1").to_proto(),
                KeyPart::from("key2").to_proto(),
            ]
        );
    }

    #[test]
    fn key_set_proto_embeds_range_encoding() {
        let r1 = KeyRange::open_closed(["KEY_1"], ["KEY_2"]);
        let r2 = KeyRange::closed_open(["KEY_3"], ["KEY_4"]);
        let set = KeySet::from_ranges([r1.clone(), r2.clone()]);

        let pb = set.to_proto();
        assert!(pb.keys.is_empty());
        assert_eq!(pb.ranges, vec![r1.to_proto(), r2.to_proto()]);
        assert_eq!(pb, set.to_proto());
    }
}
