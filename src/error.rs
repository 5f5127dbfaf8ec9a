//! Error types returned by [`crate::Deque`] operations and invariant checks.

use thiserror::Error;

/// Errors that may arise from a [`crate::Deque`] operation.
///
/// Every error is reported to the caller of the operation that triggered it; a failed operation
/// leaves the deque exactly as it was before the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DequeError {
    /// A [`crate::Mode::Safe`] deque was asked to store its sentinel value.
    #[error("the sentinel value cannot be stored in a safe deque")]
    ReservedValue,
    /// A positional operation was given an index outside `0..len`.
    #[error("index {index} out of range for deque of length {len}")]
    OutOfRange {
        /// The index that was requested.
        index: usize,
        /// The length of the deque at the time of the call.
        len: usize,
    },
    /// An endpoint was read from an empty deque.
    #[error("deque is empty")]
    EmptyDeque,
    /// The value to remove does not occur in the deque.
    #[error("value not found in deque")]
    NotFound,
    /// The storage could not be grown (arithmetic overflow or allocation failure).
    #[error("cannot grow deque storage to {requested} slots")]
    CapacityExceeded {
        /// The slot count that could not be allocated; `usize::MAX` on arithmetic overflow.
        requested: usize,
    },
}

/// A broken structural invariant found by [`crate::Deque::check_invariants`].
///
/// These indicate a defect in the deque itself, never a recoverable runtime condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The storage length is not a power of two.
    #[error("capacity {capacity} is not a power of two")]
    CapacityNotPowerOfTwo {
        /// The storage length found.
        capacity: usize,
    },
    /// A cursor points past the end of the storage.
    #[error("cursor head={head} tail={tail} outside storage of capacity {capacity}")]
    CursorOutOfBounds {
        /// Slot of the first element.
        head: usize,
        /// Slot one past the last element.
        tail: usize,
        /// The storage length.
        capacity: usize,
    },
    /// The elements fill every slot, leaving no free slot between back and front.
    #[error("length {len} leaves no free slot in capacity {capacity}")]
    NoGrowthMargin {
        /// The element count.
        len: usize,
        /// The storage length.
        capacity: usize,
    },
    /// The slot right after the back holds an element value.
    #[error("slot {index} after the last element does not hold the sentinel")]
    TailNotSentinel {
        /// The offending slot.
        index: usize,
    },
    /// The slot right before the front holds an element value.
    #[error("slot {index} before the first element does not hold the sentinel")]
    BeforeHeadNotSentinel {
        /// The offending slot.
        index: usize,
    },
    /// A slot outside the occupied region holds something other than the sentinel.
    #[error("vacant slot {index} does not hold the sentinel")]
    VacantNotSentinel {
        /// The offending slot.
        index: usize,
    },
    /// A [`crate::Mode::Safe`] deque holds the sentinel as an element.
    #[error("occupied slot {index} holds the sentinel in a safe deque")]
    OccupiedSentinel {
        /// The offending slot.
        index: usize,
    },
}
