//! Defines [`Deque`], a growable double-ended queue of [`Primitive`] values.

mod invariants;

use alloc::vec::Vec;
use core::fmt::{Debug, Formatter};

use crate::{
    error::DequeError,
    primitive::Primitive,
    ring::Ring,
};

/// Capacity of a deque created without a capacity hint.
pub const DEFAULT_CAPACITY: usize = 16;
/// Smallest capacity allocated for a non-zero capacity hint.
pub const MIN_CAPACITY: usize = 8;

/// Whether a [`Deque`] accepts its element type's sentinel as data.
///
/// "Unsafe" refers only to the sentinel protocol: nothing here involves `unsafe` code.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum Mode {
    /// The sentinel is rejected with [`DequeError::ReservedValue`], so any slot holding it is
    /// known to be vacant.
    #[default]
    Safe,
    /// The sentinel is stored like any other value. Occupancy must then be judged by length and
    /// index bounds only.
    Unsafe,
}

/// A double-ended queue of primitive values backed by a power-of-two ring buffer.
///
/// Storage slots that hold no element always contain the element type's
/// [sentinel](Primitive::sentinel), and one slot is always kept free, so the slot right after the
/// back and the slot right before the front are vacant at all times. The storage doubles whenever
/// an insertion would use up that free slot.
///
/// ## Summary of supported operations
///
/// - {push,pop} at {front,back}; `push_*` fail with [`DequeError::ReservedValue`] when a
///   [`Mode::Safe`] deque is given the sentinel.
///
/// - Read the front, back, or any index.
///
/// - Delete at an index, or remove the first/last occurrence of a value.
///
/// - Copy out the content, front to back, with [`Self::to_vec()`].
///
/// - Verify the structure with [`Self::check_invariants()`] / [`Self::assert_invariants()`].
///
/// Example:
/// ```
/// use primdeque::{Deque, DequeError};
/// let mut d = Deque::<char>::new();
/// d.push_back('a')?;
/// d.push_back('b')?;
/// d.push_back('c')?;
/// assert_eq!(d.delete(1)?, 'b');
/// assert_eq!(d.to_vec(), vec!['a', 'c']);
/// assert_eq!(d.push_back('\0'), Err(DequeError::ReservedValue));
/// d.assert_invariants();
/// # Ok::<(), DequeError>(())
/// ```
#[derive(Clone)]
pub struct Deque<T: Primitive> {
    ring: Ring<T>,
    mode: Mode,
}

/// Rounds a capacity hint to the allocated slot count: a power of two strictly greater than
/// `hint`, so `hint` elements fit without growing.
fn initial_capacity(hint: usize) -> Result<usize, DequeError> {
    match hint {
        0 => Ok(DEFAULT_CAPACITY),
        h if h < MIN_CAPACITY => Ok(MIN_CAPACITY),
        _ => hint
            .checked_add(1)
            .and_then(usize::checked_next_power_of_two)
            .ok_or(DequeError::CapacityExceeded { requested: usize::MAX }),
    }
}

impl<T: Primitive>
Deque<T> {
    /// Creates an empty [`Mode::Safe`] deque with capacity [`DEFAULT_CAPACITY`].
    pub fn new() -> Self { Self::with_mode(Mode::Safe) }

    /// Creates an empty [`Mode::Unsafe`] deque with capacity [`DEFAULT_CAPACITY`].
    pub fn new_unsafe() -> Self { Self::with_mode(Mode::Unsafe) }

    /// Creates an empty deque in the given mode with capacity [`DEFAULT_CAPACITY`].
    pub fn with_mode(mode: Mode) -> Self { Self::with_capacity_and_mode(0, mode) }

    /// Creates an empty [`Mode::Safe`] deque that holds at least `n` elements before growing.
    /// `n == 0` means [`DEFAULT_CAPACITY`].
    /// Panics if the storage cannot be allocated.
    pub fn with_capacity(n: usize) -> Self { Self::with_capacity_and_mode(n, Mode::Safe) }

    /// Creates an empty deque in the given mode that holds at least `n` elements before growing.
    /// Panics if the storage cannot be allocated.
    pub fn with_capacity_and_mode(n: usize, mode: Mode) -> Self {
        match Self::try_with_capacity_and_mode(n, mode) {
            Ok(deque) => deque,
            Err(e) => panic!("{}", e),
        }
    }

    /// Fallible [`Self::with_capacity()`].
    pub fn try_with_capacity(n: usize) -> Result<Self, DequeError> {
        Self::try_with_capacity_and_mode(n, Mode::Safe)
    }

    /// Fallible [`Self::with_capacity_and_mode()`].
    pub fn try_with_capacity_and_mode(n: usize, mode: Mode) -> Result<Self, DequeError> {
        Ok(Self {
            ring: Ring::with_capacity(initial_capacity(n)?)?,
            mode,
        })
    }

    /// Creates a [`Mode::Safe`] deque holding `values` front to back.
    pub fn from_slice(values: &[T]) -> Result<Self, DequeError> {
        Self::try_from_iter_in(values.iter().copied(), Mode::Safe)
    }

    /// Creates a deque in the given mode holding the items of `iter` front to back.
    /// Fails on the first item that cannot be pushed.
    pub fn try_from_iter_in<I: IntoIterator<Item=T>>(iter: I, mode: Mode) -> Result<Self, DequeError> {
        let iter = iter.into_iter();
        let mut deque = Self::try_with_capacity_and_mode(iter.size_hint().0, mode)?;
        for value in iter {
            deque.push_back(value)?;
        }
        Ok(deque)
    }

    /// Returns how many elements are currently in the deque.
    pub fn len(&self) -> usize { self.ring.len() }
    /// Returns if this deque is empty.
    pub fn is_empty(&self) -> bool { self.ring.head() == self.ring.tail() }
    /// Returns the number of storage slots (always a power of two).
    pub fn capacity(&self) -> usize { self.ring.capacity() }
    /// Returns the number of storage slots not holding an element.
    /// One of them is always kept free, so this is an upper bound on what fits before growing.
    pub fn space(&self) -> usize { self.capacity() - self.len() }
    /// Returns the mode this deque was created with.
    pub fn mode(&self) -> Mode { self.mode }

    fn admit(&self, value: T) -> Result<(), DequeError> {
        match self.mode {
            Mode::Safe if value.is_sentinel() => Err(DequeError::ReservedValue),
            _ => Ok(()),
        }
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert_eq!(self.check_structure(), Ok(()));
    }

    ////////////////////////////////////////////////////////////////////
    // push

    /// Appends an element to the back of this deque, growing the storage if needed.
    pub fn push_back(&mut self, value: T) -> Result<(), DequeError> {
        self.admit(value)?;
        self.ring.push_back(value)?;
        self.debug_check();
        Ok(())
    }

    /// Same as [`Self::push_back()`].
    pub fn add(&mut self, value: T) -> Result<(), DequeError> { self.push_back(value) }

    /// Prepends an element to the front of this deque, growing the storage if needed.
    pub fn push_front(&mut self, value: T) -> Result<(), DequeError> {
        self.admit(value)?;
        self.ring.push_front(value)?;
        self.debug_check();
        Ok(())
    }

    ////////////////////////////////////////////////////////////////////
    // get

    /// Returns the element at the front of the deque, or `None` if the deque is empty.
    pub fn front(&self) -> Option<T> {
        (!self.is_empty()).then(|| self.ring.get(0))
    }

    /// Returns the element at the back of the deque, or `None` if the deque is empty.
    pub fn back(&self) -> Option<T> {
        (!self.is_empty()).then(|| self.ring.get(self.len() - 1))
    }

    /// Returns the element at the front of the deque.
    pub fn get_first(&self) -> Result<T, DequeError> {
        self.front().ok_or(DequeError::EmptyDeque)
    }

    /// Returns the element at the back of the deque.
    pub fn get_last(&self) -> Result<T, DequeError> {
        self.back().ok_or(DequeError::EmptyDeque)
    }

    /// Returns the `i`-th element from the front; `None` if the index is out of bounds.
    pub fn get(&self, i: usize) -> Option<T> {
        (i < self.len()).then(|| self.ring.get(i))
    }

    /// Returns the index of the first occurrence of `value`, scanning front to back.
    pub fn position(&self, value: T) -> Option<usize> {
        (0..self.len()).find(|&i| self.ring.get(i) == value)
    }

    /// Returns the index of the last occurrence of `value`, scanning back to front.
    pub fn rposition(&self, value: T) -> Option<usize> {
        (0..self.len()).rev().find(|&i| self.ring.get(i) == value)
    }

    /// Returns whether `value` occurs in the deque.
    pub fn contains(&self, value: T) -> bool { self.position(value).is_some() }

    /// Copies the elements into a new [`Vec`], front to back.
    pub fn to_vec(&self) -> Vec<T> { self.ring.to_vec() }

    ////////////////////////////////////////////////////////////////////
    // pop / delete

    /// Removes the front element from this deque and returns it;
    /// `None` if the deque is empty.
    pub fn pop_front(&mut self) -> Option<T> {
        let value = self.ring.pop_front();
        self.debug_check();
        value
    }

    /// Removes the back element from this deque and returns it;
    /// `None` if the deque is empty.
    pub fn pop_back(&mut self) -> Option<T> {
        let value = self.ring.pop_back();
        self.debug_check();
        value
    }

    /// Removes the `i`-th element from the front and returns it.
    ///
    /// Only the elements on the shorter side of `i` move, so deleting near either end is cheap.
    pub fn delete(&mut self, i: usize) -> Result<T, DequeError> {
        let len = self.len();
        if i >= len {
            return Err(DequeError::OutOfRange { index: i, len });
        }
        let value = self.ring.delete(i);
        self.debug_check();
        Ok(value)
    }

    /// Removes the first occurrence of `value`; returns whether one was found.
    pub fn remove(&mut self, value: T) -> bool {
        self.try_remove(value).is_ok()
    }

    /// Removes the first occurrence of `value` and returns the index it occupied.
    pub fn try_remove(&mut self, value: T) -> Result<usize, DequeError> {
        let i = self.position(value).ok_or(DequeError::NotFound)?;
        self.ring.delete(i);
        self.debug_check();
        Ok(i)
    }

    /// Removes the last occurrence of `value`; returns whether one was found.
    pub fn remove_last(&mut self, value: T) -> bool {
        match self.rposition(value) {
            Some(i) => {
                self.ring.delete(i);
                self.debug_check();
                true
            }
            None => false,
        }
    }

    /// Removes all elements, keeping the current capacity.
    pub fn clear(&mut self) {
        self.ring.clear();
        self.debug_check();
    }
}

impl<T: Primitive>
Default for Deque<T> {
    fn default() -> Self { Self::new() }
}

/// Collects into a [`Mode::Safe`] deque.
/// Panics if an item is the sentinel; see [`Deque::try_from_iter_in()`] for a fallible version.
impl<T: Primitive>
FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iter: I) -> Self {
        match Self::try_from_iter_in(iter, Mode::Safe) {
            Ok(deque) => deque,
            Err(e) => panic!("{}", e),
        }
    }
}

/// Pushes every item to the back.
/// Panics if an item cannot be pushed; items before it stay in the deque.
impl<T: Primitive>
Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item=T>>(&mut self, iter: I) {
        for value in iter {
            if let Err(e) = self.push_back(value) {
                panic!("{}", e);
            }
        }
    }
}

// Only the logical content takes part in the comparison; capacity, alignment and mode do not.
impl<T: Primitive>
PartialEq for Deque<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() { return false; }
        (0..self.len()).all(|i| self.ring.get(i) == other.ring.get(i))
    }
}

impl<T: Primitive + Eq>
Eq for Deque<T> {}

impl<T: Primitive>
Debug for Deque<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let (front, back) = self.ring.as_slices();
        f.debug_list().entries(front).entries(back).finish()
    }
}
