use crate::{Slice, SliceMut};
use serde::ser::{Serialize, SerializeSeq, Serializer};

impl<T> Serialize for Slice<'_, T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for el in *self {
            seq.serialize_element(el)?;
        }
        seq.end()
    }
}

impl<T> Serialize for SliceMut<'_, T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_view().serialize(serializer)
    }
}
