use crate::{
    Classified, Context, Fragment, InterpolateError, Result, Value, count_placeholders,
    separated_by, template_pieces, truncate_long,
};
use std::fmt::Write;
use time::{Date, PrimitiveDateTime, Time};

macro_rules! write_integer {
    ($out:ident, $value:expr) => {{
        let mut buffer = itoa::Buffer::new();
        $out.push_str(buffer.format($value));
    }};
}

/// Dialect printer turning classified values into SQL literals and splicing
/// them into templates.
///
/// The default methods implement single quoted strings with backslash
/// escapes. A dialect overrides the methods whose output differs.
pub trait SqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter;

    /// Character marking a substitution point in templates.
    fn placeholder(&self) -> char {
        '?'
    }

    /// Copy `value` into the buffer, replacing every character that could
    /// terminate or alter a quoted literal with its backslash escape.
    fn write_escaped(&self, _context: &mut Context, out: &mut String, value: &str) {
        let mut position = 0;
        for (i, c) in value.char_indices() {
            let replace = match c {
                '\\' => r"\\",
                '\'' => r"\'",
                '"' => r#"\""#,
                '\0' => r"\x00",
                '\n' => r"\n",
                '\r' => r"\r",
                '\x1a' => r"\x1a",
                _ => continue,
            };
            out.push_str(&value[position..i]);
            out.push_str(replace);
            position = i + 1;
        }
        out.push_str(&value[position..]);
    }

    /// Render a classified value.
    fn write_value(&self, context: &mut Context, out: &mut String, value: &Classified) {
        match value {
            Classified::Null => self.write_value_none(context, out),
            Classified::Bool(v) => self.write_value_bool(context, out, *v),
            Classified::Integer {
                negative,
                magnitude,
            } => self.write_value_integer(context, out, *negative, *magnitude),
            Classified::Float(v) => self.write_value_float(context, out, *v),
            Classified::Text(v) => self.write_value_string(context, out, v),
            Classified::Date(v) => self.write_value_date(context, out, v, false),
            Classified::Time(v) => self.write_value_time(context, out, v, false),
            Classified::Timestamp(v) => self.write_value_timestamp(context, out, v),
            Classified::List(v) => self.write_value_list(context, out, v),
        }
    }

    /// Render NULL literal.
    fn write_value_none(&self, _context: &mut Context, out: &mut String) {
        out.push_str("NULL");
    }

    /// Render boolean literal.
    fn write_value_bool(&self, _context: &mut Context, out: &mut String, value: bool) {
        out.push_str(["0", "1"][value as usize]);
    }

    fn write_value_integer(
        &self,
        _context: &mut Context,
        out: &mut String,
        negative: bool,
        magnitude: u64,
    ) {
        if negative {
            out.push('-');
        }
        write_integer!(out, magnitude);
    }

    /// Shortest representation that parses back to the same `f64`, never in
    /// exponent notation.
    fn write_value_float(&self, context: &mut Context, out: &mut String, value: f64) {
        if value.is_infinite() {
            self.write_value_infinity(context, out, value.is_sign_negative());
        } else if value.is_nan() {
            self.write_value_nan(context, out);
        } else {
            let _ = write!(out, "{}", value);
        }
    }

    /// Render +/- INF via CAST.
    fn write_value_infinity(&self, context: &mut Context, out: &mut String, negative: bool) {
        out.push_str("CAST(");
        self.write_value_string(context, out, if negative { "-inf" } else { "inf" });
        out.push_str(" AS DOUBLE)");
    }

    /// Render NaN via CAST.
    fn write_value_nan(&self, context: &mut Context, out: &mut String) {
        out.push_str("CAST(");
        self.write_value_string(context, out, "NaN");
        out.push_str(" AS DOUBLE)");
    }

    /// Render and escape a string literal using single quotes.
    fn write_value_string(&self, context: &mut Context, out: &mut String, value: &str) {
        out.push('\'');
        self.write_escaped(context, out, value);
        out.push('\'');
    }

    /// Render a DATE literal (optionally as part of TIMESTAMP composition).
    fn write_value_date(
        &self,
        _context: &mut Context,
        out: &mut String,
        value: &Date,
        timestamp: bool,
    ) {
        let b = if timestamp { "" } else { "'" };
        let _ = write!(
            out,
            "{b}{:04}-{:02}-{:02}{b}",
            value.year(),
            value.month() as u8,
            value.day()
        );
    }

    /// Render a TIME literal (optionally as part of TIMESTAMP composition).
    fn write_value_time(
        &self,
        _context: &mut Context,
        out: &mut String,
        value: &Time,
        timestamp: bool,
    ) {
        let b = if timestamp { "" } else { "'" };
        let _ = write!(
            out,
            "{b}{:02}:{:02}:{:02}",
            value.hour(),
            value.minute(),
            value.second(),
        );
        let mut subsecond = value.nanosecond();
        if subsecond != 0 {
            let mut width = 9;
            while subsecond % 10 == 0 {
                subsecond /= 10;
                width -= 1;
            }
            let _ = write!(out, ".{:0width$}", subsecond);
        }
        out.push_str(b);
    }

    /// Render a TIMESTAMP literal, date and time separated by a space.
    fn write_value_timestamp(
        &self,
        context: &mut Context,
        out: &mut String,
        value: &PrimitiveDateTime,
    ) {
        out.push('\'');
        self.write_value_date(context, out, &value.date(), true);
        out.push(' ');
        self.write_value_time(context, out, &value.time(), true);
        out.push('\'');
    }

    /// Render a parenthesized, comma separated list.
    fn write_value_list(&self, context: &mut Context, out: &mut String, value: &[Classified]) {
        let mut context = context.switch_fragment(Fragment::ListElement);
        out.push('(');
        separated_by(
            out,
            value,
            |out, v| self.write_value(&mut context.current, out, v),
            ",",
        );
        out.push(')');
    }

    /// Replace every placeholder of `template` with the literal of the
    /// corresponding value, appending the result to `out`.
    ///
    /// Arity is checked before any value is touched. On error `out` is left
    /// as it was received.
    fn write_interpolated(
        &self,
        context: &mut Context,
        out: &mut String,
        template: &str,
        values: &[Value],
    ) -> Result<()> {
        let marker = self.placeholder();
        let placeholders = count_placeholders(template, marker);
        if placeholders != values.len() {
            return Err(InterpolateError::ArgumentMismatch {
                placeholders,
                values: values.len(),
            }
            .into());
        }
        let len = out.len();
        out.reserve(template.len());
        let mut context = context.switch_fragment(Fragment::Value);
        let mut pieces = template_pieces(template, marker);
        if let Some(piece) = pieces.next() {
            out.push_str(piece);
        }
        for (piece, value) in pieces.zip(values) {
            let classified = match Classified::classify(&mut context.current, value) {
                Ok(v) => v,
                Err(e) => {
                    out.truncate(len);
                    return Err(e);
                }
            };
            self.write_value(&mut context.current, out, &classified);
            context.current.counter += 1;
            out.push_str(piece);
        }
        Ok(())
    }

    /// Interpolate into a new string.
    fn interpolate(&self, template: &str, values: &[Value]) -> Result<String> {
        let mut out = String::new();
        let mut context = Context::default();
        self.write_interpolated(&mut context, &mut out, template, values)?;
        log::trace!(
            "Interpolated {} values: {}",
            context.counter,
            truncate_long!(out)
        );
        Ok(out)
    }
}

/// Writer for the backslash escaping dialect with a configurable marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenericSqlWriter {
    placeholder: char,
}

impl GenericSqlWriter {
    pub const fn new() -> Self {
        Self { placeholder: '?' }
    }
    pub const fn with_placeholder(placeholder: char) -> Self {
        Self { placeholder }
    }
}

impl Default for GenericSqlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl SqlWriter for GenericSqlWriter {
    fn as_dyn(&self) -> &dyn SqlWriter {
        self
    }

    fn placeholder(&self) -> char {
        self.placeholder
    }
}
