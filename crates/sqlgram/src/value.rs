//! Parameter values collected by the renderer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A single positional parameter.
///
/// Literal operands handed to the builders end up here; the renderer emits a
/// dialect-specific marker in the SQL text and appends the value to the
/// parameter list in emission order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    Uuid(Uuid),
    Date(NaiveDate),
    Timestamp(DateTime<Utc>),
    Json(serde_json::Value),
}

impl Value {
    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "integer",
            Value::UInt(_) => "unsigned integer",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::Bytes(_) => "bytes",
            Value::Uuid(_) => "uuid",
            Value::Date(_) => "date",
            Value::Timestamp(_) => "timestamp",
            Value::Json(_) => "json",
        }
    }

    /// Whether the value is a number below zero.
    ///
    /// Negative numbers are represented in the grammar as a unary minus
    /// applied to an unsigned literal.
    pub fn is_negative(&self) -> bool {
        match self {
            Value::Int(v) => *v < 0,
            Value::Float(v) => *v < 0.0,
            _ => false,
        }
    }

    /// Absolute value of a negative number, `None` for anything else.
    pub(crate) fn negated(&self) -> Option<Value> {
        match self {
            Value::Int(v) if *v < 0 => Some(Value::UInt(v.unsigned_abs())),
            Value::Float(v) if *v < 0.0 => Some(Value::Float(-v)),
            _ => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Value::Int(_) | Value::UInt(_) | Value::Float(_))
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $target:ty, $($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(v: $t) -> Self {
                    Value::$variant(<$target>::from(v))
                }
            }
        )*
    };
}

impl_from_int!(Int, i64, i8, i16, i32, i64);
impl_from_int!(UInt, u64, u8, u16, u32, u64);

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        Value::UInt(v as u64)
    }
}

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&String> for Value {
    fn from(v: &String) -> Self {
        Value::Text(v.clone())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<Uuid> for Value {
    fn from(v: Uuid) -> Self {
        Value::Uuid(v)
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::Timestamp(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

#[cfg(feature = "postgres")]
mod pg {
    use super::Value;
    use bytes::BytesMut;
    use std::error::Error;
    use tokio_postgres::types::{IsNull, ToSql, Type, to_sql_checked};

    /// Accepts every column type and defers the check to the wrapped value,
    /// so a mismatch surfaces as `WrongType` from `to_sql_checked`.
    impl ToSql for Value {
        fn to_sql(
            &self,
            ty: &Type,
            out: &mut BytesMut,
        ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
            match self {
                Value::Null => Ok(IsNull::Yes),
                Value::Bool(v) => v.to_sql_checked(ty, out),
                Value::Int(v) => write_int(*v, ty, out),
                Value::UInt(v) => write_int(i64::try_from(*v)?, ty, out),
                Value::Float(v) => {
                    if *ty == Type::FLOAT4 {
                        (*v as f32).to_sql_checked(ty, out)
                    } else {
                        v.to_sql_checked(ty, out)
                    }
                }
                Value::Text(v) => v.to_sql_checked(ty, out),
                Value::Bytes(v) => v.to_sql_checked(ty, out),
                Value::Uuid(v) => v.to_sql_checked(ty, out),
                Value::Date(v) => v.to_sql_checked(ty, out),
                Value::Timestamp(v) => v.to_sql_checked(ty, out),
                Value::Json(v) => v.to_sql_checked(ty, out),
            }
        }

        fn accepts(_ty: &Type) -> bool {
            true
        }

        to_sql_checked!();
    }

    /// Integers narrow to INT2/INT4 columns, failing on overflow.
    fn write_int(
        v: i64,
        ty: &Type,
        out: &mut BytesMut,
    ) -> Result<IsNull, Box<dyn Error + Sync + Send>> {
        match *ty {
            Type::INT2 => i16::try_from(v)?.to_sql_checked(ty, out),
            Type::INT4 => i32::try_from(v)?.to_sql_checked(ty, out),
            _ => v.to_sql_checked(ty, out),
        }
    }

    /// Get parameters as references compatible with tokio-postgres.
    pub fn params_ref(params: &[Value]) -> Vec<&(dyn ToSql + Sync)> {
        params.iter().map(|p| p as &(dyn ToSql + Sync)).collect()
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use tokio_postgres::types::WrongType;

        fn encode(value: &Value, ty: &Type) -> Result<Vec<u8>, Box<dyn Error + Sync + Send>> {
            let mut buf = BytesMut::new();
            value.to_sql_checked(ty, &mut buf)?;
            Ok(buf.to_vec())
        }

        #[test]
        fn integers_narrow_to_column_width() {
            assert_eq!(encode(&Value::Int(7), &Type::INT2).unwrap(), 7i16.to_be_bytes());
            assert_eq!(encode(&Value::Int(-7), &Type::INT4).unwrap(), (-7i32).to_be_bytes());
            assert_eq!(encode(&Value::UInt(5), &Type::INT8).unwrap(), 5i64.to_be_bytes());
            assert_eq!(encode(&Value::UInt(5), &Type::INT4).unwrap(), 5i32.to_be_bytes());
        }

        #[test]
        fn integer_overflow_is_an_error() {
            assert!(encode(&Value::Int(1 << 40), &Type::INT4).is_err());
            assert!(encode(&Value::Int(i64::from(i16::MAX) + 1), &Type::INT2).is_err());
            assert!(encode(&Value::UInt(u64::MAX), &Type::INT8).is_err());
        }

        #[test]
        fn float4_is_narrowed() {
            assert_eq!(encode(&Value::Float(1.5), &Type::FLOAT4).unwrap(), 1.5f32.to_be_bytes());
            assert_eq!(encode(&Value::Float(1.5), &Type::FLOAT8).unwrap(), 1.5f64.to_be_bytes());
        }

        #[test]
        fn mismatched_type_is_rejected() {
            let err = encode(&Value::from("abc"), &Type::INT4).unwrap_err();
            assert!(err.is::<WrongType>(), "{err}");

            let err = encode(&Value::Int(1), &Type::TEXT).unwrap_err();
            assert!(err.is::<WrongType>(), "{err}");

            let err = encode(&Value::Bool(true), &Type::UUID).unwrap_err();
            assert!(err.is::<WrongType>(), "{err}");
        }

        #[test]
        fn matching_types_encode_inner_value() {
            assert_eq!(encode(&Value::from("abc"), &Type::TEXT).unwrap(), b"abc");
            assert_eq!(encode(&Value::Bool(true), &Type::BOOL).unwrap(), [1u8]);
        }

        #[test]
        fn null_encodes_for_any_type() {
            let mut buf = BytesMut::new();
            let is_null = Value::Null.to_sql_checked(&Type::INT4, &mut buf).unwrap();
            assert!(matches!(is_null, IsNull::Yes));
            assert!(buf.is_empty());
        }

        #[test]
        fn params_ref_keeps_order() {
            let params = vec![Value::Int(1), Value::from("x")];
            let refs = params_ref(&params);
            assert_eq!(refs.len(), 2);

            let mut buf = BytesMut::new();
            refs[0].to_sql_checked(&Type::INT8, &mut buf).unwrap();
            assert_eq!(&buf[..], 1i64.to_be_bytes());

            let mut buf = BytesMut::new();
            refs[1].to_sql_checked(&Type::TEXT, &mut buf).unwrap();
            assert_eq!(&buf[..], b"x");
        }
    }
}

#[cfg(feature = "postgres")]
pub use pg::params_ref;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_numbers_split_into_sign_and_magnitude() {
        assert!(Value::from(-5i32).is_negative());
        assert_eq!(Value::from(-5i32).negated(), Some(Value::UInt(5)));
        assert_eq!(Value::from(i64::MIN).negated(), Some(Value::UInt(1 << 63)));
        assert_eq!(Value::from(-1.5f64).negated(), Some(Value::Float(1.5)));
        assert_eq!(Value::from(3u8).negated(), None);
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("a")), Value::Text("a".into()));
    }

    #[test]
    fn serializes_untagged() {
        let json = serde_json::to_string(&vec![Value::from("foo"), Value::from(10), Value::Null])
            .unwrap();
        assert_eq!(json, r#"["foo",10,null]"#);
    }
}
