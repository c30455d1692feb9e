use serde::{Deserialize, Deserializer};

/// Three-state field for partial updates: absent in the body (leave the
/// column alone), explicit `null` (clear a nullable column), or a value.
///
/// Use with `#[serde(default)]` so a missing key deserializes to `Unset`.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchField<T> {
    Unset,
    Null,
    Value(T),
}

// Manual impl: the derive would demand `T: Default` for a variant that
// holds no `T`.
impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    /// Collapses `Null` and `Unset` to `None`; only meaningful after an
    /// `is_unset` check when the two must be told apart.
    pub fn into_option(self) -> Option<T> {
        match self {
            PatchField::Value(v) => Some(v),
            _ => None,
        }
    }
}

impl<'de, T> Deserialize<'de> for PatchField<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => PatchField::Value(value),
            None => PatchField::Null,
        })
    }
}
