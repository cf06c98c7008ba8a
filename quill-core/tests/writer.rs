#[cfg(test)]
mod tests {
    use quill_core::{
        Classified, Context, Fragment, GenericSqlWriter, InterpolateError, SqlWriter, Value,
        count_placeholders, separated_by, template_pieces, truncate_long,
    };
    use std::borrow::Cow;

    const WRITER: GenericSqlWriter = GenericSqlWriter::new();

    fn render(value: &Classified) -> String {
        let mut out = String::new();
        WRITER.write_value(&mut Context::default(), &mut out, value);
        out
    }

    #[test]
    fn escape_table() {
        for (input, expected) in [
            ("\\", r"'\\'"),
            ("'", r"'\''"),
            ("\"", r#"'\"'"#),
            ("\0", r"'\x00'"),
            ("\n", r"'\n'"),
            ("\r", r"'\r'"),
            ("\x1a", r"'\x1a'"),
            ("\t", "'\t'"),
            ("%_", "'%_'"),
            ("日本", "'日本'"),
            ("\\n", r"'\\n'"),
            ("a\\'b", r"'a\\\'b'"),
        ] {
            assert_eq!(render(&Classified::Text(Cow::Borrowed(input))), expected);
        }
    }

    #[test]
    fn scalars() {
        assert_eq!(render(&Classified::Null), "NULL");
        assert_eq!(render(&Classified::Bool(true)), "1");
        assert_eq!(render(&Classified::Bool(false)), "0");
        assert_eq!(
            render(&Classified::Integer {
                negative: true,
                magnitude: 42
            }),
            "-42"
        );
        assert_eq!(render(&Classified::Float(-0.0)), "-0");
        assert_eq!(render(&Classified::Float(1e-7)), "0.0000001");
        assert_eq!(render(&Classified::List(vec![])), "()");
        assert_eq!(
            render(&Classified::List(vec![
                Classified::Null,
                Classified::Text("a".into())
            ])),
            "(NULL,'a')"
        );
    }

    #[test]
    fn classify() {
        let mut context = Context::new(Fragment::Value);
        assert_eq!(
            Classified::classify(&mut context, &Value::from(-5 as i8)).unwrap(),
            Classified::Integer {
                negative: true,
                magnitude: 5
            }
        );
        assert_eq!(
            Classified::classify(&mut context, &Value::from(u64::MAX)).unwrap(),
            Classified::Integer {
                negative: false,
                magnitude: u64::MAX
            }
        );
        assert_eq!(
            Classified::classify(&mut context, &Value::UInt8(None)).unwrap(),
            Classified::Null
        );
        assert_eq!(
            Classified::classify(&mut context, &Value::from(0.5 as f32)).unwrap(),
            Classified::Float(0.5)
        );
        let text = Value::from("borrowed");
        assert!(matches!(
            Classified::classify(&mut context, &text).unwrap(),
            Classified::Text(Cow::Borrowed("borrowed"))
        ));
        let error = Classified::classify(&mut context, &Value::Struct(Some(vec![]))).unwrap_err();
        assert!(InterpolateError::InvalidValue.is(&error));

        let mut context = Context::new(Fragment::ListElement);
        let error = Classified::classify(&mut context, &Value::from(vec![1])).unwrap_err();
        assert!(InterpolateError::InvalidListElement.is(&error));
        let blob: Box<[u8]> = Box::new([0xFF]);
        let error = Classified::classify(&mut context, &Value::from(blob)).unwrap_err();
        assert!(InterpolateError::InvalidListElement.is(&error));
        assert_eq!(context.fragment, Fragment::ListElement);
        assert!(!context.provided);
    }

    #[test]
    fn into_owned() {
        let value = Value::from(vec!["a", "b"]);
        let classified = Classified::classify(&mut Context::default(), &value)
            .unwrap()
            .into_owned();
        drop(value);
        assert_eq!(
            classified,
            Classified::List(vec![
                Classified::Text("a".into()),
                Classified::Text("b".into())
            ])
        );
    }

    #[test]
    fn scanner() {
        assert_eq!(count_placeholders("", '?'), 0);
        assert_eq!(count_placeholders("a = ? AND b = ?", '?'), 2);
        assert_eq!(count_placeholders("??¿?", '?'), 3);
        assert_eq!(
            template_pieces("a = ? AND b = ?", '?').collect::<Vec<_>>(),
            ["a = ", " AND b = ", ""]
        );
    }

    #[test]
    fn utilities() {
        let mut out = String::from("(");
        separated_by(&mut out, [1, 2, 3], |out, v| out.push_str(&v.to_string()), ", ");
        assert_eq!(out, "(1, 2, 3");
        let long = "é".repeat(300);
        let truncated = format!("{}", truncate_long!(long));
        assert!(truncated.ends_with("..."));
        assert!(truncated.len() <= 500);
        assert_eq!(format!("{}", truncate_long!("short ")), "short");
    }
}
