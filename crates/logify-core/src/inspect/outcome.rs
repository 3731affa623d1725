//! Success/failure interpretation of a callable's return value
//!
//! `Result::Err` is a failure; every other supported return type is a
//! success. Types outside this list can opt in with [`plain_outcome!`].

use crate::errors::TargetInvocationError;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

/// Return values an inspected callable may produce.
pub trait IntoOutcome {
    /// The value handed back to the caller on success
    type Value: Serialize;

    /// # Errors
    ///
    /// The captured failure when the callable reported one.
    fn into_outcome(self) -> Result<Self::Value, TargetInvocationError>;
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: Serialize,
    E: Into<anyhow::Error>,
{
    type Value = T;

    fn into_outcome(self) -> Result<T, TargetInvocationError> {
        self.map_err(TargetInvocationError::from_error)
    }
}

/// Mark types as always-successful return values.
///
/// ```
/// #[derive(serde::Serialize)]
/// struct Invoice { id: u32 }
///
/// logify_core::plain_outcome!(Invoice);
/// ```
#[macro_export]
macro_rules! plain_outcome {
    ($($ty:ty),* $(,)?) => {
        $(
            impl $crate::inspect::IntoOutcome for $ty {
                type Value = $ty;

                fn into_outcome(
                    self,
                ) -> ::std::result::Result<Self::Value, $crate::errors::TargetInvocationError> {
                    Ok(self)
                }
            }
        )*
    };
}

plain_outcome!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    serde_json::Value,
);

impl<'a> IntoOutcome for &'a str {
    type Value = &'a str;

    fn into_outcome(self) -> Result<&'a str, TargetInvocationError> {
        Ok(self)
    }
}

impl<T: Serialize> IntoOutcome for Option<T> {
    type Value = Option<T>;

    fn into_outcome(self) -> Result<Self, TargetInvocationError> {
        Ok(self)
    }
}

impl<T: Serialize> IntoOutcome for Vec<T> {
    type Value = Vec<T>;

    fn into_outcome(self) -> Result<Self, TargetInvocationError> {
        Ok(self)
    }
}

impl<K: Serialize, V: Serialize> IntoOutcome for BTreeMap<K, V> {
    type Value = BTreeMap<K, V>;

    fn into_outcome(self) -> Result<Self, TargetInvocationError> {
        Ok(self)
    }
}

impl<K: Serialize, V: Serialize> IntoOutcome for HashMap<K, V> {
    type Value = HashMap<K, V>;

    fn into_outcome(self) -> Result<Self, TargetInvocationError> {
        Ok(self)
    }
}
