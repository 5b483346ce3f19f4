/// Capacity of a heap created without an explicit configuration.
pub const DEFAULT_CAPACITY: usize = 100;

/// What a heap does when an insertion finds it full.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Growth {
    /// Reject the insertion with a [`CapacityError`](crate::CapacityError).
    Fixed,
    /// Double the capacity and carry on.
    #[default]
    Doubling,
}

/// Construction-time settings of a [`BinaryHeap`](crate::BinaryHeap).
///
/// ```
/// use binheap::{Growth, HeapConfig, DEFAULT_CAPACITY};
///
/// let config = HeapConfig::default();
/// assert_eq!(config.capacity, DEFAULT_CAPACITY);
/// assert_eq!(config.growth, Growth::Doubling);
///
/// assert_eq!(HeapConfig::fixed(8).growth, Growth::Fixed);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HeapConfig {
    /// Initial capacity. Zero is allowed; a doubling heap then grows to one slot on first push.
    pub capacity: usize,
    /// Growth policy, fixed for the lifetime of the heap.
    pub growth: Growth,
}

impl HeapConfig {
    /// A heap that never holds more than `capacity` elements unless [`reserve`] is called.
    ///
    /// [`reserve`]: crate::BinaryHeap::reserve
    pub const fn fixed(capacity: usize) -> Self {
        Self {
            capacity,
            growth: Growth::Fixed,
        }
    }

    /// A heap that starts with room for `capacity` elements and doubles when full.
    pub const fn doubling(capacity: usize) -> Self {
        Self {
            capacity,
            growth: Growth::Doubling,
        }
    }
}

impl Default for HeapConfig {
    fn default() -> Self {
        Self::doubling(DEFAULT_CAPACITY)
    }
}
