#[cfg(test)]
mod tests {
    use quill_core::{AsValue, Result, Value};
    use std::{borrow::Cow, collections::VecDeque, rc::Rc, sync::Arc};
    use time::macros::{date, datetime, time};

    #[test]
    fn value_none() {
        assert_eq!(Value::Null, Value::Null);
        assert_ne!(Value::Float32(Some(1.0)), Value::Null);
        assert!(Value::Int32(None).is_null());
        assert!(Value::List(None, Box::new(Value::Int8(None))).is_null());
        assert!(!Value::Varchar(Some("".into())).is_null());
    }

    #[test]
    fn value_bool() {
        let val: Value = true.into();
        assert_eq!(val, Value::Boolean(Some(true)));
        assert_ne!(val, Value::Boolean(Some(false)));
        assert_ne!(val, Value::Boolean(None));
        assert_ne!(val, Value::Varchar(Some("true".into())));
        assert_eq!(bool::try_from_value(val).unwrap(), true);
        assert_eq!(bool::try_from_value((1 as i8).into()).unwrap(), true);
        assert_eq!(bool::try_from_value((0 as i64).into()).unwrap(), false);
        assert_eq!(bool::try_from_value((2 as u64).into()).unwrap(), true);
        assert!(bool::try_from_value((0.5 as f32).into()).is_err());
    }

    #[test]
    fn value_integers() {
        assert_eq!(Value::from(127 as i8), Value::Int8(Some(127)));
        assert_eq!(Value::from(-32768 as i16), Value::Int16(Some(-32768)));
        assert_ne!(Value::from(-32768 as i16), Value::Int32(Some(-32768)));
        assert_eq!(Value::from(7 as isize), Value::Int64(Some(7)));
        assert_eq!(Value::from(7 as usize), Value::UInt64(Some(7)));
        assert_eq!(i8::try_from_value((99 as u8).into()).unwrap(), 99);
        assert_eq!(i16::try_from_value((-29 as i8).into()).unwrap(), -29);
        assert_eq!(i64::try_from_value((123456 as u32).into()).unwrap(), 123456);
        assert_eq!(
            u64::try_from_value((u64::MAX).into()).unwrap(),
            18446744073709551615
        );
        assert!(i8::try_from_value((200 as u8).into()).is_err());
        assert!(u32::try_from_value((-1 as i32).into()).is_err());
        assert!(i64::try_from_value((u64::MAX).into()).is_err());
        assert!(i8::try_from_value((0.1 as f64).into()).is_err());
        let error = u8::try_from_value((300 as i16).into()).unwrap_err();
        assert!(format!("{error}").contains("out of range for u8"));
        let error = i8::try_from_value((0.1 as f64).into()).unwrap_err();
        assert_eq!(format!("{error}"), "Cannot convert Float64 value Float64(Some(0.1)) to i8");
    }

    #[test]
    fn value_floats() {
        assert_eq!(Value::from(0.15625 as f32), Value::Float32(Some(0.15625)));
        assert_eq!(f64::try_from_value((0.5 as f32).into()).unwrap(), 0.5);
        assert_eq!(f32::try_from_value((0.25 as f64).into()).unwrap(), 0.25);
        assert!(f64::try_from_value((1 as i32).into()).is_err());
    }

    #[test]
    fn value_text() {
        assert_eq!(Value::from("hello"), Value::Varchar(Some("hello".into())));
        assert_eq!(
            Value::from(String::from("hello")),
            Value::Varchar(Some("hello".into()))
        );
        assert_eq!(
            Value::from(Cow::Borrowed("hello")),
            Value::Varchar(Some("hello".into()))
        );
        assert_eq!(Value::from('x'), Value::Char(Some('x')));
        assert_eq!(char::try_from_value("y".into()).unwrap(), 'y');
        assert!(char::try_from_value("yz".into()).is_err());
        assert_eq!(String::try_from_value('z'.into()).unwrap(), "z");
        assert!(<&str>::try_from_value("borrowed".into()).is_err());
        let blob: Box<[u8]> = Box::new(*b"bytes");
        assert_eq!(String::try_from_value(blob.into()).unwrap(), "bytes");
        let blob: Box<[u8]> = Box::new([0x34, 0xFF, 0xFE]);
        assert!(String::try_from_value(blob.into()).is_err());
        assert_eq!(
            <Box<[u8]>>::try_from_value("abc".into()).unwrap().as_ref(),
            b"abc"
        );
    }

    #[test]
    fn value_temporal() {
        assert_eq!(
            Value::from(date!(2025 - 03 - 14)),
            Value::Date(Some(date!(2025 - 03 - 14)))
        );
        assert_eq!(
            Value::from(time!(10:20:30)),
            Value::Time(Some(time!(10:20:30)))
        );
        let offset = datetime!(2025-03-14 10:00 +02:00);
        assert_eq!(
            time::PrimitiveDateTime::try_from_value(offset.into()).unwrap(),
            datetime!(2025-03-14 08:00)
        );
        assert_eq!(
            time::OffsetDateTime::try_from_value(datetime!(2025-03-14 08:00).into()).unwrap(),
            offset
        );
    }

    #[test]
    fn value_option() {
        assert_eq!(Value::from(None::<i32>), Value::Int32(None));
        assert_eq!(Value::from(Some(5 as u16)), Value::UInt16(Some(5)));
        assert_eq!(Option::<i32>::try_from_value(Value::Null).unwrap(), None);
        assert_eq!(
            Option::<i32>::try_from_value(Value::Int32(None)).unwrap(),
            None
        );
        assert_eq!(Option::<i32>::try_from_value(3.into()).unwrap(), Some(3));
    }

    #[test]
    fn value_lists() {
        let val: Value = vec![1, 2, 3].into();
        assert_eq!(
            val,
            Value::List(
                Some(vec![
                    Value::Int32(Some(1)),
                    Value::Int32(Some(2)),
                    Value::Int32(Some(3)),
                ]),
                Box::new(Value::Int32(None)),
            )
        );
        assert_ne!(
            val,
            Value::List(
                Some(vec![
                    Value::Int32(Some(1)),
                    Value::Int32(Some(2)),
                    Value::Int32(Some(3)),
                ]),
                Box::new(Value::Int64(None)),
            )
        );
        assert_eq!(Vec::<i64>::try_from_value(val.clone()).unwrap(), [1, 2, 3]);
        assert_eq!(
            VecDeque::<u8>::try_from_value(val.clone()).unwrap(),
            VecDeque::from([1, 2, 3])
        );
        assert_eq!(<[i32; 3]>::try_from_value(val.clone()).unwrap(), [1, 2, 3]);
        assert!(<[i32; 2]>::try_from_value(val).is_err());
        assert_eq!(Value::from(["a", "b"]), Value::from(vec!["a", "b"]));
        assert_eq!(
            Vec::<String>::try_from_value(Value::List(None, Box::new(Value::Varchar(None))))
                .unwrap(),
            Vec::<String>::new()
        );
    }

    #[test]
    fn value_wrappers() {
        assert_eq!(Value::from(Box::new(1.5 as f64)), Value::Float64(Some(1.5)));
        assert_eq!(Value::from(Arc::new(true)), Value::Boolean(Some(true)));
        assert_eq!(
            Value::from(Rc::new(String::from("rc"))),
            Value::Varchar(Some("rc".into()))
        );
        assert_eq!(*Arc::<i32>::try_from_value(9.into()).unwrap(), 9);
        assert_eq!(*Box::<i32>::try_from_value(9.into()).unwrap(), 9);
    }

    #[test]
    fn value_provider_identity() {
        let provider = Value::provider(|| -> Result<Option<Value>> { Ok(None) });
        assert_eq!(provider, provider.clone());
        assert_ne!(provider, Value::provider(|| -> Result<Option<Value>> { Ok(None) }));
        assert!(!provider.is_null());
        assert_eq!(format!("{provider:?}"), "Provider(..)");
        assert_eq!(provider.kind(), "Provider");
    }
}
