use primdeque::{Deque, DequeError, Mode};

fn check_len(d: &Deque<char>, len: usize) {
    assert_eq!(d.is_empty(), len == 0);
    assert_eq!(d.len(), len);
    d.assert_invariants();
}

fn modes() -> [Mode; 2] { [Mode::Safe, Mode::Unsafe] }

#[test]
fn creation() {
    for mode in modes() {
        let d = Deque::<char>::with_mode(mode);
        check_len(&d, 0);
    }
}

#[test]
fn creation_from_sequence() {
    for mode in modes() {
        let d = Deque::try_from_iter_in(['\u{1}', '\u{2}', '\u{3}'], mode).unwrap();
        assert_eq!(d.to_vec(), vec!['\u{1}', '\u{2}', '\u{3}']);
        assert!(d.space() >= 3);
        check_len(&d, 3);
    }
}

#[test]
fn creation_with_capacity() {
    for mode in modes() {
        let d = Deque::<char>::with_capacity_and_mode(420, mode);
        assert!(d.space() >= 420);
        check_len(&d, 0);
    }
}

#[test]
fn add_multiple() {
    for mode in modes() {
        let mut d = Deque::with_mode(mode);
        check_len(&d, 0);
        d.add('a').unwrap();
        check_len(&d, 1);
        d.add('b').unwrap();
        check_len(&d, 2);
    }
}

#[test]
fn add_delete() {
    for mode in modes() {
        let mut d = Deque::with_mode(mode);
        d.add('a').unwrap();
        check_len(&d, 1);
        assert_eq!(d.delete(0), Ok('a'));
        check_len(&d, 0);
    }
}

#[test]
fn add_remove() {
    for mode in modes() {
        let mut d = Deque::with_mode(mode);
        d.add('a').unwrap();
        check_len(&d, 1);
        assert!(d.remove('a'));
        check_len(&d, 0);
    }
}

#[test]
fn add_delete_with_leftover() {
    for mode in modes() {
        let mut d = Deque::with_mode(mode);
        for c in ['a', 'b', 'c'] {
            d.add(c).unwrap();
        }
        check_len(&d, 3);
        assert_eq!(d.delete(1), Ok('b'));
        check_len(&d, 2);
        assert_eq!(d.to_vec(), vec!['a', 'c']);
    }
}

#[test]
fn add_remove_with_leftover() {
    for mode in modes() {
        let mut d = Deque::with_mode(mode);
        for c in ['a', 'b', 'c'] {
            d.add(c).unwrap();
        }
        assert!(d.remove('b'));
        check_len(&d, 2);
        assert_eq!(d.to_vec(), vec!['a', 'c']);
    }
}

#[test]
fn safe_rejects_min_value() {
    let mut d = Deque::<char>::new();
    d.add('a').unwrap();
    assert_eq!(d.add(char::MIN), Err(DequeError::ReservedValue));
    check_len(&d, 1);
}

#[test]
fn unsafe_add_min_value() {
    let mut d = Deque::<char>::new_unsafe();
    d.add(char::MIN).unwrap();
    check_len(&d, 1);
    d.add(char::MIN).unwrap();
    check_len(&d, 2);
}

#[test]
fn unsafe_add_delete_min_value() {
    let mut d = Deque::<char>::new_unsafe();
    d.add(char::MIN).unwrap();
    assert_eq!(d.delete(0), Ok(char::MIN));
    check_len(&d, 0);
}

#[test]
fn unsafe_add_remove_min_value() {
    let mut d = Deque::<char>::new_unsafe();
    d.add(char::MIN).unwrap();
    assert!(d.remove(char::MIN));
    check_len(&d, 0);
}

#[test]
fn unsafe_get_min_value() {
    let mut d = Deque::<char>::new_unsafe();
    d.add(char::MIN).unwrap();
    assert_eq!(d.get_last(), Ok(char::MIN));
    assert_eq!(d.get_first(), Ok(char::MIN));
    check_len(&d, 1);

    d.add('b').unwrap();
    assert_eq!(d.get_first(), Ok(char::MIN));
    assert_eq!(d.get_last(), Ok('b'));
    check_len(&d, 2);
}

#[test]
fn growth_keeps_order() {
    for initial in [1, 8, 13, 16] {
        let mut d = Deque::<i64>::with_capacity(initial);
        let capacity = d.capacity();
        let values: Vec<i64> = (1..=capacity as i64 + 1).collect();
        for &v in &values {
            d.push_back(v).unwrap();
            d.assert_invariants();
        }
        assert!(d.capacity() >= 2 * capacity);
        assert!(d.capacity().is_power_of_two());
        assert_eq!(d.to_vec(), values);
    }
}

#[test]
fn growth_from_wrapped_front() {
    let mut d = Deque::<u16>::with_capacity(7);
    for v in (1..=20).rev() {
        d.push_front(v).unwrap();
        d.assert_invariants();
    }
    assert_eq!(d.to_vec(), (1..=20).collect::<Vec<u16>>());
}

#[test]
fn typed_instantiations() {
    let mut f = Deque::<f64>::from_slice(&[1.5, -2.25]).unwrap();
    assert_eq!(f.push_back(-0.0), Err(DequeError::ReservedValue));
    assert!(f.remove(-2.25));
    assert_eq!(f.to_vec(), vec![1.5]);

    let mut n = Deque::<i16>::new_unsafe();
    n.push_back(0).unwrap();
    n.push_front(i16::MIN).unwrap();
    assert_eq!(n.to_vec(), vec![i16::MIN, 0]);
    n.assert_invariants();

    let u = Deque::<u128>::from_slice(&[u128::MAX]).unwrap();
    assert_eq!(u.get_first(), Ok(u128::MAX));
}
