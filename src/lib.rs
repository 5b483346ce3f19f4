//! An implicit binary heap priority queue with an injectable ordering
//!
//! The heap keeps its elements in one contiguous buffer laid out as a complete binary tree: the
//! children of index `i` live at `2i + 1` and `2i + 2`. The element at index 0 always has the
//! highest priority according to the heap's [`Compare`] implementation.
//!
//! # Examples
//!
//! ## Max-heap
//!
//! ```
//! use binheap::{BinaryHeap, Max};
//!
//! let mut heap: BinaryHeap<i32, Max> = BinaryHeap::new();
//!
//! heap.push(1).unwrap();
//! heap.push(5).unwrap();
//! heap.push(2).unwrap();
//!
//! assert_eq!(heap.peek(), Ok(&5));
//! assert_eq!(heap.pop(), Ok(5));
//! assert_eq!(heap.len(), 2);
//! ```
//!
//! ## Min-heap built from a batch
//!
//! ```
//! use binheap::{BinaryHeap, HeapConfig, Min};
//!
//! let heap = BinaryHeap::from_vec(vec![5, 3, 8, 1], Min, HeapConfig::default()).unwrap();
//!
//! assert_eq!(heap.into_sorted_vec(), [8, 5, 3, 1]);
//! ```
//!
//! ## Arbitrary ordering
//!
//! Any `Fn(&T, &T) -> Ordering` closure is a comparator. `Greater` means "higher priority".
//!
//! ```
//! use binheap::BinaryHeap;
//!
//! // shortest string first
//! let mut heap = BinaryHeap::with_comparator(|a: &&str, b: &&str| b.len().cmp(&a.len()));
//! heap.push("three").unwrap();
//! heap.push("a").unwrap();
//! heap.push("to").unwrap();
//!
//! assert_eq!(heap.pop(), Ok("a"));
//! ```
//!
//! ## Fixed capacity
//!
//! ```
//! use binheap::{BinaryHeap, HeapConfig, Max};
//!
//! let mut heap = BinaryHeap::with_config(Max, HeapConfig::fixed(2));
//!
//! assert!(heap.push(0).is_ok());
//! assert!(heap.push(1).is_ok());
//!
//! let err = heap.push(2).unwrap_err(); // full
//! assert_eq!(err.into_inner(), 2);
//! ```
//!
//! # `Send`-ness
//!
//! A heap is `Send` when both its elements and its comparator are. Every mutating operation takes
//! `&mut self`; share a heap between threads by wrapping the whole heap in a single lock.
//!
//! # Optional Features
//!
//! - **`serde`**: implements `Serialize` and `Deserialize` for the heap and its configuration.
//! - **`defmt`**: implements `defmt::Format` for the heap and its errors.
//! - **`cli`**: builds the interactive `heap-menu` binary.

#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]

extern crate alloc;

#[cfg(test)]
#[macro_use]
mod test_helpers;

pub use binary_heap::BinaryHeap;
pub use config::{Growth, HeapConfig, DEFAULT_CAPACITY};
pub use error::{CapacityError, EmptyHeap, InvariantViolation};
pub use order::{Compare, Max, Min};

pub mod binary_heap;
mod config;
mod error;
mod order;

#[cfg(feature = "defmt")]
mod defmt;
#[cfg(feature = "serde")]
mod de;
#[cfg(feature = "serde")]
mod ser;
