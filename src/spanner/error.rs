use thiserror::Error;

/// Rejected key range or key set arguments.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum InvalidArgument {
    /// Neither start bound was given.
    #[error("key range needs one of start_open or start_closed")]
    MissingStart,
    /// Both start bounds were given.
    #[error("key range cannot set both start_open and start_closed")]
    ConflictingStart,
    /// Neither end bound was given.
    #[error("key range needs one of end_open or end_closed")]
    MissingEnd,
    /// Both end bounds were given.
    #[error("key range cannot set both end_open and end_closed")]
    ConflictingEnd,
    /// `all` combined with a non-empty key list.
    #[error("key set cannot combine all with explicit keys")]
    AllWithKeys,
    /// `all` combined with a non-empty range list.
    #[error("key set cannot combine all with explicit ranges")]
    AllWithRanges,
}
