#![doc = include_str!("../README.md")]
#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

mod deque;
mod error;
mod primitive;
mod ring;

pub use self::{
    deque::{Deque, Mode, DEFAULT_CAPACITY, MIN_CAPACITY},
    error::{DequeError, InvariantViolation},
    primitive::Primitive,
};
