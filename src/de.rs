use alloc::vec::Vec;
use core::{fmt, marker::PhantomData};

use serde::de::{self, Deserialize, Deserializer, SeqAccess};

use crate::{order::Compare, BinaryHeap};

/// Any sequence is accepted; the items are heapified with the default configuration.
impl<'de, T, C> Deserialize<'de> for BinaryHeap<T, C>
where
    T: Deserialize<'de>,
    C: Compare<T> + Default,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ValueVisitor<'de, T, C>(PhantomData<(&'de (), T, C)>);

        impl<'de, T, C> de::Visitor<'de> for ValueVisitor<'de, T, C>
        where
            T: Deserialize<'de>,
            C: Compare<T> + Default,
        {
            type Value = BinaryHeap<T, C>;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a sequence")
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                // cap the hint so a hostile length can't force a huge allocation
                let mut values = Vec::with_capacity(seq.size_hint().unwrap_or(0).min(4096));

                while let Some(value) = seq.next_element()? {
                    values.push(value);
                }

                Ok(values.into_iter().collect())
            }
        }
        deserializer.deserialize_seq(ValueVisitor(PhantomData))
    }
}
