// ============================================================================
// Serde Support
// (De)serialization of vectors together with their tolerance
// ============================================================================

use super::element::Element;
use super::vector::NumericVector;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize)]
struct VectorRef<'a, T> {
    data: &'a [T],
    tolerance: f64,
}

#[derive(Deserialize)]
struct VectorOwned<T> {
    data: Vec<T>,
    tolerance: f64,
}

impl<T> Serialize for NumericVector<T>
where
    T: Element + Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        VectorRef {
            data: self.as_slice(),
            tolerance: self.tolerance(),
        }
        .serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for NumericVector<T>
where
    T: Element + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = VectorOwned::<T>::deserialize(deserializer)?;
        let mut vector = NumericVector::from(raw.data);
        vector.set_tolerance(raw.tolerance).map_err(D::Error::custom)?;
        Ok(vector)
    }
}
