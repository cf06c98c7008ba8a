use crate::{Context, Fragment, InterpolateError, Result, Value};
use std::{borrow::Cow, mem};
use time::{Date, PrimitiveDateTime, Time};

/// Semantic kind of an argument, ready to be rendered by a [`crate::SqlWriter`].
///
/// Text borrows from the originating [`Value`] when possible. Values produced
/// by a [`crate::ValueProvider`] are owned.
#[derive(Debug, Clone, PartialEq)]
pub enum Classified<'a> {
    Null,
    Bool(bool),
    /// Every integer width, `magnitude` keeps the full `u64` range.
    Integer {
        negative: bool,
        magnitude: u64,
    },
    Float(f64),
    Text(Cow<'a, str>),
    Date(Date),
    Time(Time),
    /// Always expressed in UTC.
    Timestamp(PrimitiveDateTime),
    /// Scalar elements only.
    List(Vec<Classified<'a>>),
}

/// List elements share one kind, taken from the declared element type or else
/// from the first non null element.
fn same_kind(
    context: &Context,
    expected: &mut Option<mem::Discriminant<Value>>,
    element: &Value,
) -> Result<()> {
    if element.is_null() {
        return Ok(());
    }
    let kind = mem::discriminant(element);
    match expected {
        Some(expected) if *expected != kind => {
            Err(context.reject(InterpolateError::InvalidValue).into())
        }
        Some(..) => Ok(()),
        None => {
            *expected = Some(kind);
            Ok(())
        }
    }
}

macro_rules! signed {
    ($v:expr) => {{
        let v = $v;
        Classified::Integer {
            negative: v < 0,
            magnitude: (v as i64).unsigned_abs(),
        }
    }};
}
macro_rules! unsigned {
    ($v:expr) => {
        Classified::Integer {
            negative: false,
            magnitude: $v as u64,
        }
    };
}

impl<'a> Classified<'a> {
    /// Determine the kind of `value`.
    ///
    /// The fragment of `context` decides which error an unsupported value
    /// raises: [`InterpolateError::InvalidValue`] at the top level,
    /// [`InterpolateError::InvalidListElement`] inside a list.
    pub fn classify(context: &mut Context, value: &'a Value) -> Result<Self> {
        if value.is_null() {
            return Ok(Classified::Null);
        }
        Ok(match value {
            Value::Boolean(Some(v)) => Classified::Bool(*v),
            Value::Int8(Some(v)) => signed!(*v),
            Value::Int16(Some(v)) => signed!(*v),
            Value::Int32(Some(v)) => signed!(*v),
            Value::Int64(Some(v)) => signed!(*v),
            Value::UInt8(Some(v)) => unsigned!(*v),
            Value::UInt16(Some(v)) => unsigned!(*v),
            Value::UInt32(Some(v)) => unsigned!(*v),
            Value::UInt64(Some(v)) => unsigned!(*v),
            Value::Float32(Some(v)) => Classified::Float(*v as f64),
            Value::Float64(Some(v)) => Classified::Float(*v),
            Value::Char(Some(v)) => Classified::Text(Cow::Owned(v.to_string())),
            Value::Varchar(Some(v)) => Classified::Text(Cow::Borrowed(v.as_str())),
            Value::Blob(Some(v)) => match std::str::from_utf8(v) {
                Ok(v) => Classified::Text(Cow::Borrowed(v)),
                Err(..) => {
                    return Err(context.reject(InterpolateError::NotValidText).into());
                }
            },
            Value::Date(Some(v)) => Classified::Date(*v),
            Value::Time(Some(v)) => Classified::Time(*v),
            Value::Timestamp(Some(v)) => Classified::Timestamp(*v),
            Value::TimestampWithTimezone(Some(v)) => {
                let v = v.to_utc();
                Classified::Timestamp(PrimitiveDateTime::new(v.date(), v.time()))
            }
            Value::List(Some(v), element_type) => {
                if context.fragment == Fragment::ListElement {
                    return Err(context.reject(InterpolateError::InvalidValue).into());
                }
                let mut context = context.switch_fragment(Fragment::ListElement);
                let mut expected = match element_type.as_ref() {
                    Value::List(..) | Value::Struct(..) => {
                        return Err(context.current.reject(InterpolateError::InvalidValue).into());
                    }
                    Value::Null | Value::Provider(..) => None,
                    kind => Some(mem::discriminant(kind)),
                };
                let mut result = Vec::with_capacity(v.len());
                for element in v {
                    let classified = match element {
                        Value::Provider(provider) if !context.current.provided => {
                            let produced = provider.provide()?.unwrap_or_default();
                            same_kind(&context.current, &mut expected, &produced)?;
                            Classified::provided(&mut context.current, &produced)?
                        }
                        _ => {
                            same_kind(&context.current, &mut expected, element)?;
                            Classified::classify(&mut context.current, element)?
                        }
                    };
                    result.push(classified);
                }
                Classified::List(result)
            }
            Value::Provider(provider) if !context.provided => {
                let produced = provider.provide()?.unwrap_or_default();
                Classified::provided(context, &produced)?
            }
            _ => return Err(context.reject(InterpolateError::InvalidValue).into()),
        })
    }

    /// Classify the output of a value provider, which may not be another provider.
    fn provided(context: &mut Context, produced: &Value) -> Result<Classified<'static>> {
        let mut context = context.switch_provided();
        Ok(Classified::classify(&mut context.current, produced)?.into_owned())
    }

    /// Detach from the borrowed value.
    pub fn into_owned(self) -> Classified<'static> {
        match self {
            Classified::Null => Classified::Null,
            Classified::Bool(v) => Classified::Bool(v),
            Classified::Integer {
                negative,
                magnitude,
            } => Classified::Integer {
                negative,
                magnitude,
            },
            Classified::Float(v) => Classified::Float(v),
            Classified::Text(v) => Classified::Text(Cow::Owned(v.into_owned())),
            Classified::Date(v) => Classified::Date(v),
            Classified::Time(v) => Classified::Time(v),
            Classified::Timestamp(v) => Classified::Timestamp(v),
            Classified::List(v) => {
                Classified::List(v.into_iter().map(Classified::into_owned).collect())
            }
        }
    }
}
