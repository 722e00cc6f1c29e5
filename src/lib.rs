//! # dynarray - A Growable Array With Explicit Doubling
//!
//! This crate provides [`DynamicArray`], a generic resizable array that owns a
//! single contiguous buffer and manages its growth by hand instead of
//! delegating to `Vec`.
//!
//! ## Overview
//!
//! ```text
//!   DynamicArray<T> Layout:
//!
//!   ┌──────────────────────────────────────────────────────────────────┐
//!   │                         Owned Buffer                             │
//!   │                                                                  │
//!   │   ┌─────┬─────┬─────┬─────┬─────┬─────────────────────────────┐  │
//!   │   │  0  │  1  │  2  │ ... │len-1│    uninitialized slots      │  │
//!   │   └─────┴─────┴─────┴─────┴─────┴─────────────────────────────┘  │
//!   │   ◄──────────── len ───────────►                                 │
//!   │   ◄─────────────────────────── capacity ──────────────────────►  │
//!   │                                                                  │
//!   └──────────────────────────────────────────────────────────────────┘
//!
//!   Invariant: 0 <= len <= capacity
//! ```
//!
//! ## Crate Structure
//!
//! ```text
//!   dynarray
//!   ├── array    - DynamicArray implementation
//!   ├── error    - ArrayError and Result alias
//!   ├── growth   - Doubling policy (grow_capacity, DEFAULT_CAPACITY)
//!   └── raw      - RawBuf, the owned allocation (internal)
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use dynarray::{ArrayError, DynamicArray};
//!
//! let mut array = DynamicArray::new();
//! assert_eq!(array.capacity(), 4);
//!
//! for i in 1..=6 {
//!     array.push(i);
//! }
//! assert_eq!(array.capacity(), 8);
//!
//! array.unshift(0);
//! assert_eq!(array.at(0), Ok(&0));
//! assert_eq!(array.at(7), Err(ArrayError::OutOfBounds { index: 7, len: 7 }));
//!
//! assert_eq!(array.find(|&x| x > 3), Some(&4));
//! assert_eq!(array.find_index(|&x| x == 2), Some(2));
//! ```
//!
//! ## How Growth Works
//!
//! Every insert first makes sure there is a free slot. If there is none, a
//! new buffer of twice the capacity is allocated, the elements move over in
//! order and the old buffer is released:
//!
//! ```text
//!   push(5) on a full buffer of 4:
//!
//!   old  ┌───┬───┬───┬───┐
//!        │ 1 │ 2 │ 3 │ 4 │ ──────────────┐ copy len elements
//!        └───┴───┴───┴───┘               ▼
//!   new  ┌───┬───┬───┬───┬───┬───┬───┬───┐
//!        │ 1 │ 2 │ 3 │ 4 │ 5 │   │   │   │
//!        └───┴───┴───┴───┴───┴───┴───┴───┘
//!                          ▲
//!                          └── written after the move
//! ```
//!
//! Doubling keeps the total copy work over N appends at O(N). Capacity is
//! never reduced by removals.
//!
//! `unshift` and `shift` move every element one slot up or down, so they
//! cost O(len) against the amortized O(1) of `push` and `pop`.
//!
//! ## Copy and Move
//!
//! - `clone` is a deep copy that keeps the source's capacity, not only its
//!   length.
//! - `take` hands the buffer to a new array and leaves the source with
//!   length and capacity zero. The source stays usable.
//!
//! ## Errors
//!
//! Checked access and removals return [`ArrayError`] before touching the
//! array. The `Index` operators panic with the same message. Allocation
//! failure aborts through `handle_alloc_error`.
//!
//! ## Logging
//!
//! Reallocations are reported at `trace` level and buffer moves at `debug`
//! level through the `log` facade.
//!
//! ## Limitations
//!
//! - **Single-threaded only**: no internal synchronization
//! - **No shrinking**: memory is only returned when the array is dropped
//! - **No iterators**: elements are reached by index or by predicate search

mod array;
mod error;
mod growth;
mod raw;

pub use array::DynamicArray;
pub use error::{ArrayError, Result};
pub use growth::{DEFAULT_CAPACITY, grow_capacity};
