//! Power-of-two circular storage with head/tail cursors.
//!
//! The occupied region is `[head, tail)` modulo the capacity. Every slot outside it holds the
//! element type's sentinel, and at least one slot is always outside it, so `head == tail`
//! unambiguously means "empty".

use alloc::vec::Vec;

use crate::{
    error::DequeError,
    primitive::Primitive,
};

#[derive(Clone)]
pub(crate) struct Ring<T: Primitive> {
    buf: Vec<T>,
    head: usize,
    tail: usize,
    #[cfg(test)]
    refuse_growth: bool,
}

/// Allocates `capacity` sentinel-filled slots, or reports why it cannot.
fn filled<T: Primitive>(capacity: usize) -> Result<Vec<T>, DequeError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(capacity).map_err(|_| capacity_exceeded(capacity))?;
    buf.resize(capacity, T::sentinel());
    Ok(buf)
}

fn capacity_exceeded(requested: usize) -> DequeError {
    #[cfg(feature = "tracing")]
    tracing::warn!(requested, "deque storage cannot grow");
    DequeError::CapacityExceeded { requested }
}

impl<T: Primitive>
Ring<T> {
    /// Creates an empty ring. `capacity` must be a power of two.
    pub(crate) fn with_capacity(capacity: usize) -> Result<Self, DequeError> {
        debug_assert!(capacity.is_power_of_two());
        Ok(Self {
            buf: filled(capacity)?,
            head: 0,
            tail: 0,
            #[cfg(test)]
            refuse_growth: false,
        })
    }

    pub(crate) fn capacity(&self) -> usize { self.buf.len() }
    pub(crate) fn head(&self) -> usize { self.head }
    pub(crate) fn tail(&self) -> usize { self.tail }
    pub(crate) fn slots(&self) -> &[T] { &self.buf }

    #[cfg(test)]
    pub(crate) fn slots_mut(&mut self) -> &mut [T] { &mut self.buf }

    #[inline]
    fn mask(&self) -> usize { self.buf.len() - 1 }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.tail.wrapping_sub(self.head) & self.mask()
    }

    /// Maps logical index `i` to its storage slot.
    #[inline]
    pub(crate) fn physical(&self, i: usize) -> usize {
        self.head.wrapping_add(i) & self.mask()
    }

    /// Returns the element at logical index `i`; `i < len` is the caller's responsibility.
    #[inline]
    pub(crate) fn get(&self, i: usize) -> T {
        self.buf[self.physical(i)]
    }

    /// Returns the occupied region as (up to) two contiguous slices, front to back.
    pub(crate) fn as_slices(&self) -> (&[T], &[T]) {
        if self.head <= self.tail {
            (&self.buf[self.head..self.tail], &[])
        } else {
            (&self.buf[self.head..], &self.buf[..self.tail])
        }
    }

    pub(crate) fn to_vec(&self) -> Vec<T> {
        let (front, back) = self.as_slices();
        let mut out = Vec::with_capacity(front.len() + back.len());
        out.extend_from_slice(front);
        out.extend_from_slice(back);
        out
    }

    ////////////////////////////////////////////////////////////////////
    // growth

    /// Doubles the storage, moving the content to start at slot 0.
    /// Nothing is modified unless the new buffer has been allocated.
    fn grow(&mut self) -> Result<(), DequeError> {
        let old_capacity = self.capacity();
        let new_capacity = old_capacity
            .checked_mul(2)
            .ok_or_else(|| capacity_exceeded(usize::MAX))?;
        #[cfg(test)]
        if self.refuse_growth {
            return Err(capacity_exceeded(new_capacity));
        }

        let mut buf = Vec::new();
        buf.try_reserve_exact(new_capacity).map_err(|_| capacity_exceeded(new_capacity))?;
        let (front, back) = self.as_slices();
        buf.extend_from_slice(front);
        buf.extend_from_slice(back);
        let len = buf.len();
        buf.resize(new_capacity, T::sentinel());

        #[cfg(feature = "tracing")]
        tracing::debug!(old_capacity, new_capacity, len, "grew deque storage");

        self.buf = buf;
        self.head = 0;
        self.tail = len;
        Ok(())
    }

    /// Makes room for one more element, keeping the one-slot margin.
    fn reserve_one(&mut self) -> Result<(), DequeError> {
        if self.len() + 1 >= self.capacity() {
            self.grow()?;
        }
        Ok(())
    }

    ////////////////////////////////////////////////////////////////////
    // push / pop

    pub(crate) fn push_back(&mut self, value: T) -> Result<(), DequeError> {
        self.reserve_one()?;
        self.buf[self.tail] = value;
        self.tail = (self.tail + 1) & self.mask();
        Ok(())
    }

    pub(crate) fn push_front(&mut self, value: T) -> Result<(), DequeError> {
        self.reserve_one()?;
        self.head = self.head.wrapping_sub(1) & self.mask();
        self.buf[self.head] = value;
        Ok(())
    }

    pub(crate) fn pop_front(&mut self) -> Option<T> {
        if self.head == self.tail { return None; }
        let value = self.buf[self.head];
        self.buf[self.head] = T::sentinel();
        self.head = (self.head + 1) & self.mask();
        Some(value)
    }

    pub(crate) fn pop_back(&mut self) -> Option<T> {
        if self.head == self.tail { return None; }
        self.tail = self.tail.wrapping_sub(1) & self.mask();
        let value = self.buf[self.tail];
        self.buf[self.tail] = T::sentinel();
        Some(value)
    }

    pub(crate) fn clear(&mut self) {
        let (head, tail) = (self.head, self.tail);
        if head <= tail {
            self.buf[head..tail].fill(T::sentinel());
        } else {
            self.buf[head..].fill(T::sentinel());
            self.buf[..tail].fill(T::sentinel());
        }
        self.head = 0;
        self.tail = 0;
    }

    ////////////////////////////////////////////////////////////////////
    // delete

    /// Removes the element at logical index `i` (`i < len`) and returns it.
    ///
    /// Whichever side of `i` holds fewer elements is shifted one slot towards the hole, then the
    /// cursor on that side retracts and its vacated slot ends up holding the sentinel.
    pub(crate) fn delete(&mut self, i: usize) -> T {
        debug_assert!(i < self.len());
        let mask = self.mask();
        let (h, t) = (self.head, self.tail);
        let p = self.physical(i);
        let value = self.buf[p];

        let front = p.wrapping_sub(h) & mask;
        let back = t.wrapping_sub(p) & mask;

        if front < back {
            if h <= p {
                self.buf.copy_within(h..p, h + 1);
            } else {
                self.buf.copy_within(0..p, 1);
                self.buf[0] = self.buf[mask];
                self.buf.copy_within(h..mask, h + 1);
            }
            self.buf[h] = T::sentinel();
            self.head = (h + 1) & mask;
        } else {
            // the copy also drags the sentinel at `t` one slot down
            if p < t {
                self.buf.copy_within(p + 1..t + 1, p);
            } else {
                self.buf.copy_within(p + 1..mask + 1, p);
                self.buf[mask] = self.buf[0];
                self.buf.copy_within(1..t + 1, 0);
            }
            self.tail = t.wrapping_sub(1) & mask;
        }
        value
    }
}
