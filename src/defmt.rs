//! Defmt implementations for heap types

use defmt::Formatter;

use crate::{BinaryHeap, CapacityError, EmptyHeap, InvariantViolation};

impl<T, C> defmt::Format for BinaryHeap<T, C>
where
    T: defmt::Format,
{
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(fmt, "{=[?]}", self.iter().as_slice())
    }
}

impl defmt::Format for EmptyHeap {
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(fmt, "heap is empty")
    }
}

impl<T> defmt::Format for CapacityError<T> {
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(
            fmt,
            "insufficient capacity: maximum {=usize}, encountered {=usize}",
            self.capacity,
            self.requested
        )
    }
}

impl defmt::Format for InvariantViolation {
    fn format(&self, fmt: Formatter<'_>) {
        defmt::write!(
            fmt,
            "heap property violated: child {=usize} outranks parent {=usize}",
            self.child,
            self.parent
        )
    }
}
