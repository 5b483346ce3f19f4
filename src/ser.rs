use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::BinaryHeap;

// Heap order, so deserializing a serialized heap reproduces the same buffer.
impl<T, C> Serialize for BinaryHeap<T, C>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}
