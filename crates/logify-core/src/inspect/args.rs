//! Argument capture and invocation of plain callables
//!
//! Arguments travel as a tuple so any arity up to six can be described and
//! then spread into the callable: `(2, 3)` calls `add(2, 3)`, `(x,)` calls
//! `f(x)`, `()` calls `f()`.

use crate::errors::{ExError, ExErrorKind};
use crate::shape::Captured;
use serde::ser::{Impossible, Serializer};
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Argument tuples whose elements can be captured for description.
pub trait ArgList {
    /// One captured value per argument, in call order.
    fn capture(&self) -> Vec<Captured>;
}

/// A callable invocable with the argument tuple `Args`.
pub trait Callable<Args> {
    type Output;

    fn call(self, args: Args) -> Self::Output;
}

/// Capture a single value. Values serde cannot represent (e.g. maps with
/// non-string keys) are captured as `null` and reported as a diagnostic.
pub fn capture_value<T: Serialize + ?Sized>(value: &T) -> Captured {
    if let Ok(n) = value.serialize(NonFiniteFloat) {
        return Captured::NonFinite(n);
    }
    Captured::Json(serde_json::to_value(value).unwrap_or_else(|err| {
        let ex_err = ExError::new(ExErrorKind::Serialization).with_message(err.to_string());
        tracing::warn!(
            component = module_path!(),
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            "value could not be captured: {}",
            ex_err.message()
        );
        Value::Null
    }))
}

/// Accepts only a NaN or infinite float, possibly behind `Some` or a
/// newtype, and yields it. Anything else is rejected on the first call.
struct NonFiniteFloat;

#[derive(Debug)]
struct Rejected;

impl fmt::Display for Rejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("not a non-finite float")
    }
}

impl std::error::Error for Rejected {}

impl serde::ser::Error for Rejected {
    fn custom<T: fmt::Display>(_msg: T) -> Self {
        Rejected
    }
}

macro_rules! reject {
    ($($method:ident($($arg:ty),*) -> $ok:ty;)*) => {
        $(
            fn $method(self, $(_: $arg),*) -> Result<$ok, Rejected> {
                Err(Rejected)
            }
        )*
    };
}

impl Serializer for NonFiniteFloat {
    type Ok = f64;
    type Error = Rejected;
    type SerializeSeq = Impossible<f64, Rejected>;
    type SerializeTuple = Impossible<f64, Rejected>;
    type SerializeTupleStruct = Impossible<f64, Rejected>;
    type SerializeTupleVariant = Impossible<f64, Rejected>;
    type SerializeMap = Impossible<f64, Rejected>;
    type SerializeStruct = Impossible<f64, Rejected>;
    type SerializeStructVariant = Impossible<f64, Rejected>;

    fn serialize_f32(self, v: f32) -> Result<f64, Rejected> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<f64, Rejected> {
        if v.is_finite() {
            Err(Rejected)
        } else {
            Ok(v)
        }
    }

    fn serialize_some<T>(self, value: &T) -> Result<f64, Rejected>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<f64, Rejected>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<f64, Rejected>
    where
        T: ?Sized + Serialize,
    {
        Err(Rejected)
    }

    reject! {
        serialize_bool(bool) -> f64;
        serialize_i8(i8) -> f64;
        serialize_i16(i16) -> f64;
        serialize_i32(i32) -> f64;
        serialize_i64(i64) -> f64;
        serialize_u8(u8) -> f64;
        serialize_u16(u16) -> f64;
        serialize_u32(u32) -> f64;
        serialize_u64(u64) -> f64;
        serialize_char(char) -> f64;
        serialize_str(&str) -> f64;
        serialize_bytes(&[u8]) -> f64;
        serialize_none() -> f64;
        serialize_unit() -> f64;
        serialize_unit_struct(&'static str) -> f64;
        serialize_unit_variant(&'static str, u32, &'static str) -> f64;
        serialize_seq(Option<usize>) -> Self::SerializeSeq;
        serialize_tuple(usize) -> Self::SerializeTuple;
        serialize_tuple_struct(&'static str, usize) -> Self::SerializeTupleStruct;
        serialize_tuple_variant(&'static str, u32, &'static str, usize) -> Self::SerializeTupleVariant;
        serialize_map(Option<usize>) -> Self::SerializeMap;
        serialize_struct(&'static str, usize) -> Self::SerializeStruct;
        serialize_struct_variant(&'static str, u32, &'static str, usize) -> Self::SerializeStructVariant;
    }
}

macro_rules! impl_arity {
    ($($arg:ident),*) => {
        impl<Func, Out, $($arg),*> Callable<($($arg,)*)> for Func
        where
            Func: FnOnce($($arg),*) -> Out,
        {
            type Output = Out;

            #[allow(non_snake_case)]
            fn call(self, ($($arg,)*): ($($arg,)*)) -> Out {
                self($($arg),*)
            }
        }

        impl<$($arg: Serialize),*> ArgList for ($($arg,)*) {
            #[allow(non_snake_case)]
            fn capture(&self) -> Vec<Captured> {
                let ($($arg,)*) = self;
                vec![$(capture_value($arg)),*]
            }
        }
    };
}

impl_arity!();
impl_arity!(A1);
impl_arity!(A1, A2);
impl_arity!(A1, A2, A3);
impl_arity!(A1, A2, A3, A4);
impl_arity!(A1, A2, A3, A4, A5);
impl_arity!(A1, A2, A3, A4, A5, A6);

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    #[test]
    fn test_call_spreads_tuple() {
        assert_eq!(add.call((2, 3)), 5);
        assert_eq!((|| "none").call(()), "none");
        assert_eq!((|s: String| s.len()).call(("abc".to_string(),)), 3);
    }

    #[test]
    fn test_capture_in_call_order() {
        let args = (1, "two", vec![3]);
        assert_eq!(
            args.capture(),
            vec![
                Captured::Json(json!(1)),
                Captured::Json(json!("two")),
                Captured::Json(json!([3]))
            ]
        );
        assert!(().capture().is_empty());
    }

    #[test]
    fn test_unrepresentable_value_becomes_null() {
        let mut map = std::collections::HashMap::new();
        map.insert(vec![1u8], 1);
        assert_eq!(capture_value(&map), Captured::Json(Value::Null));
    }

    #[test]
    fn test_non_finite_floats_are_kept() {
        assert!(matches!(capture_value(&f64::NAN), Captured::NonFinite(n) if n.is_nan()));
        assert_eq!(capture_value(&f64::INFINITY), Captured::NonFinite(f64::INFINITY));
        assert_eq!(
            capture_value(&Some(f32::NEG_INFINITY)),
            Captured::NonFinite(f64::NEG_INFINITY)
        );
    }

    #[test]
    fn test_finite_and_absent_floats_stay_json() {
        assert_eq!(capture_value(&2.5f64), Captured::Json(json!(2.5)));
        assert_eq!(capture_value(&None::<f64>), Captured::Json(Value::Null));
        assert_eq!(capture_value(&"NaN"), Captured::Json(json!("NaN")));
    }
}
