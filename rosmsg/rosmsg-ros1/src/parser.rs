//! Field grammar for a single `.msg` declaration line, built on nom parser
//! combinators.
//!
//! Recognized shape:
//!
//! ```text
//! <type>[<array>] <name>
//! <type>[<array>] <name> = <value text>
//! ```
//!
//! where `<array>` is `[]` (variable length) or `[N]` (fixed length). The
//! value text runs to the end of the line and is kept verbatim.

use std::num::ParseIntError;

use nom::{
    IResult,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit0},
    combinator::{all_consuming, map, map_res, opt, rest},
    sequence::{delimited, pair, preceded, tuple},
};
use rosmsg_core::{MessageDefinitionField, MsgDefError, normalize_type};

/// Declaration pieces before type normalization.
#[derive(Debug, PartialEq, Eq)]
struct RawField<'a> {
    base_type: &'a str,
    /// `Some(None)` for `T[]`, `Some(Some(n))` for `T[n]`.
    array: Option<Option<usize>>,
    name: &'a str,
    value_text: Option<&'a str>,
}

/// Parse one comment-stripped, trimmed declaration line.
pub fn parse_field_line(line: &str) -> Result<MessageDefinitionField, MsgDefError> {
    let (_, raw) = all_consuming(field_decl)(line).map_err(|_| MsgDefError::MalformedField {
        line: line.to_string(),
    })?;

    // Aliases are renamed only for scalars; `char[]` and `byte[N]` keep their
    // spelling, which is what the checksum text must contain.
    let mut field = match raw.array {
        Some(length) => MessageDefinitionField::new(raw.base_type, raw.name).with_array(length),
        None => MessageDefinitionField::new(normalize_type(raw.base_type), raw.name),
    };
    if let Some(text) = raw.value_text {
        field = field.with_value_text(text);
    }
    Ok(field)
}

fn ws(input: &str) -> IResult<&str, &str> {
    take_while(|c: char| c.is_whitespace())(input)
}

fn ws1(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_whitespace())(input)
}

/// Type name without its array suffix.
fn base_type(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '[')(input)
}

fn array_len(digits: &str) -> Result<Option<usize>, ParseIntError> {
    if digits.is_empty() {
        Ok(None)
    } else {
        digits.parse().map(Some)
    }
}

/// `[]` or `[N]`
fn array_suffix(input: &str) -> IResult<&str, Option<usize>> {
    delimited(char('['), map_res(digit0, array_len), char(']'))(input)
}

fn field_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| !c.is_whitespace() && c != '=')(input)
}

/// `= <value>`; everything after the `=` is the value.
fn constant_value(input: &str) -> IResult<&str, &str> {
    preceded(pair(ws, char('=')), map(rest, str::trim))(input)
}

fn field_decl(input: &str) -> IResult<&str, RawField<'_>> {
    map(
        tuple((
            base_type,
            opt(array_suffix),
            ws1,
            field_name,
            opt(constant_value),
            ws,
        )),
        |(base_type, array, _, name, value_text, _)| RawField {
            base_type,
            array,
            name,
            value_text,
        },
    )(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(line: &str) -> RawField<'_> {
        all_consuming(field_decl)(line).unwrap().1
    }

    #[test]
    fn splits_type_and_name() {
        assert_eq!(
            raw("float64 x"),
            RawField {
                base_type: "float64",
                array: None,
                name: "x",
                value_text: None,
            }
        );
    }

    #[test]
    fn array_suffix_with_and_without_length() {
        assert_eq!(raw("int8[] data").array, Some(None));
        assert_eq!(raw("int8[16] data").array, Some(Some(16)));
        assert_eq!(raw("int8 data").array, None);
    }

    #[test]
    fn constant_value_tolerates_spacing() {
        assert_eq!(raw("int32 bar=-11").value_text, Some("-11"));
        assert_eq!(raw("float32 baz= \t -32.25").value_text, Some("-32.25"));
        assert_eq!(raw("uint32 foo = 55").value_text, Some("55"));
        assert_eq!(raw("int32 empty =").value_text, Some(""));
    }

    #[test]
    fn constant_value_keeps_inner_equals_signs() {
        assert_eq!(raw("string EQ = a=b").value_text, Some("a=b"));
    }

    #[test]
    fn rejects_lines_outside_the_grammar() {
        for line in [
            "int32",
            "int32 =5",
            "[3] x",
            "int8[3]x",
            "int8[3][2] x",
            "int8[abc] x",
            "int8[3 x",
            "string foo bar",
        ] {
            assert!(
                all_consuming(field_decl)(line).is_err(),
                "{line:?} should not parse"
            );
        }
    }
}
