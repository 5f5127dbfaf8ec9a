//! Structural self-checks for [`Deque`].

use crate::{
    error::InvariantViolation,
    primitive::Primitive,
};

use super::{Deque, Mode};

impl<T: Primitive>
Deque<T> {
    /// Checks every structural invariant of this deque:
    ///
    /// - capacity is a power of two and exceeds the length by at least one;
    /// - the slot after the back and the slot before the front hold the sentinel;
    /// - every vacant slot holds the sentinel;
    /// - in [`Mode::Safe`], no occupied slot holds the sentinel.
    ///
    /// Runs in `O(capacity)` and has no side effects. Intended for tests after each mutation.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.check_structure()?;

        let ring = &self.ring;
        let capacity = ring.capacity();
        let len = ring.len();
        for (index, &slot) in ring.slots().iter().enumerate() {
            let occupied = index.wrapping_sub(ring.head()) & (capacity - 1) < len;
            match (occupied, slot.is_sentinel()) {
                (true, true) if self.mode == Mode::Safe => {
                    return Err(InvariantViolation::OccupiedSentinel { index });
                }
                (false, false) => {
                    return Err(InvariantViolation::VacantNotSentinel { index });
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Panics with the first violation [`Self::check_invariants()`] finds.
    pub fn assert_invariants(&self) {
        if let Err(violation) = self.check_invariants() {
            panic!("deque invariant violated: {} in {:?}", violation, self.ring.slots());
        }
    }

    /// The `O(1)` subset of [`Self::check_invariants()`]: capacity, cursors and the two boundary
    /// slots. Holds in both modes.
    pub(crate) fn check_structure(&self) -> Result<(), InvariantViolation> {
        let ring = &self.ring;
        let capacity = ring.capacity();
        let (head, tail) = (ring.head(), ring.tail());

        if !capacity.is_power_of_two() {
            return Err(InvariantViolation::CapacityNotPowerOfTwo { capacity });
        }
        if head >= capacity || tail >= capacity {
            return Err(InvariantViolation::CursorOutOfBounds { head, tail, capacity });
        }
        let len = ring.len();
        if len + 1 > capacity {
            return Err(InvariantViolation::NoGrowthMargin { len, capacity });
        }

        let slots = ring.slots();
        if !slots[tail].is_sentinel() {
            return Err(InvariantViolation::TailNotSentinel { index: tail });
        }
        let before_head = head.wrapping_sub(1) & (capacity - 1);
        if !slots[before_head].is_sentinel() {
            return Err(InvariantViolation::BeforeHeadNotSentinel { index: before_head });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        deque::{Deque, Mode},
        error::InvariantViolation,
    };

    #[test]
    fn test_fresh_deques_hold() {
        Deque::<i32>::new().assert_invariants();
        Deque::<f64>::with_capacity(420).assert_invariants();
        Deque::<char>::with_capacity_and_mode(3, Mode::Unsafe).assert_invariants();
    }

    #[test]
    fn test_detects_boundary_slots() {
        let mut d = Deque::<u8>::from_slice(&[1, 2, 3]).unwrap();
        d.ring.slots_mut()[3] = 9;
        assert_eq!(d.check_invariants(), Err(InvariantViolation::TailNotSentinel { index: 3 }));

        let mut d = Deque::<u8>::from_slice(&[1, 2, 3]).unwrap();
        d.pop_front();
        d.ring.slots_mut()[0] = 9;
        assert_eq!(
            d.check_invariants(),
            Err(InvariantViolation::BeforeHeadNotSentinel { index: 0 }),
        );
    }

    #[test]
    fn test_detects_vacant_garbage() {
        let mut d = Deque::<i16>::from_slice(&[1, 2]).unwrap();
        d.ring.slots_mut()[5] = -1;
        assert_eq!(d.check_structure(), Ok(()));
        assert_eq!(d.check_invariants(), Err(InvariantViolation::VacantNotSentinel { index: 5 }));
    }

    #[test]
    fn test_occupied_sentinel_depends_on_mode() {
        let mut safe = Deque::<char>::from_slice(&['a', 'b', 'c']).unwrap();
        safe.ring.slots_mut()[1] = '\0';
        assert_eq!(
            safe.check_invariants(),
            Err(InvariantViolation::OccupiedSentinel { index: 1 }),
        );

        let mut lax = Deque::<char>::new_unsafe();
        lax.push_back('a').unwrap();
        lax.push_back('\0').unwrap();
        lax.push_back('c').unwrap();
        assert_eq!(lax.check_invariants(), Ok(()));
    }

    #[test]
    #[should_panic(expected = "deque invariant violated")]
    fn test_assert_panics() {
        let mut d = Deque::<u32>::from_slice(&[4]).unwrap();
        d.ring.slots_mut()[1] = 4;
        d.assert_invariants();
    }
}
