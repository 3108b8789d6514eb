//! Text encodings shared by [`Vector2`](super::Vector2) and [`Vector3`](super::Vector3).
//!
//! Two forms exist:
//! - compact: components joined by `#` (`"1.5#2"`), used for structured exchange
//! - raw: components separated by spaces and terminated by a newline (`"1.5 2\n"`)

use std::io::{BufRead, Write};

use crate::error::FormatError;

use super::Scalar;

const AXES: [char; 3] = ['x', 'y', 'z'];

/// Separator between components in the compact form.
const COMPACT_SEPARATOR: char = '#';

/// Encodes components as `a#b` or `a#b#c`.
pub(super) fn encode_compact(components: &[Scalar]) -> String {
    join(components, COMPACT_SEPARATOR)
}

/// Decodes the compact form into exactly `N` components.
pub(super) fn decode_compact<const N: usize>(
    kind: &'static str,
    input: &str,
) -> Result<[Scalar; N], FormatError> {
    let fields: Vec<&str> = input.split(COMPACT_SEPARATOR).collect();
    parse_fields(kind, input, &fields)
}

/// Encodes components as a single space-separated, newline-terminated line.
pub(super) fn encode_raw(components: &[Scalar]) -> Vec<u8> {
    let mut line = join(components, ' ');
    line.push('\n');
    line.into_bytes()
}

/// Writes the [`encode_raw`] line to `writer`.
pub(super) fn write_raw<W: Write>(
    mut writer: W,
    components: &[Scalar],
) -> Result<(), FormatError> {
    writer.write_all(&encode_raw(components))?;
    Ok(())
}

/// Reads one line from `reader` and decodes exactly `N` whitespace-separated components.
pub(super) fn read_raw<const N: usize, R: BufRead>(
    kind: &'static str,
    mut reader: R,
) -> Result<[Scalar; N], FormatError> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    let fields: Vec<&str> = line.split_whitespace().collect();
    parse_fields(kind, line.trim_end(), &fields)
}

fn join(components: &[Scalar], separator: char) -> String {
    let mut out = String::new();
    for (i, c) in components.iter().enumerate() {
        if i > 0 {
            out.push(separator);
        }
        out.push_str(&c.to_string());
    }
    out
}

fn parse_fields<const N: usize>(
    kind: &'static str,
    input: &str,
    fields: &[&str],
) -> Result<[Scalar; N], FormatError> {
    if fields.len() != N {
        tracing::debug!(kind, input, found = fields.len(), "wrong field count");
        return Err(FormatError::FieldCount {
            kind,
            expected: N,
            found: fields.len(),
            input: input.to_owned(),
        });
    }

    let mut out = [0.0; N];
    for ((slot, field), axis) in out.iter_mut().zip(fields).zip(AXES) {
        *slot = field.parse().map_err(|source| {
            tracing::debug!(kind, input, %axis, "non-numeric field");
            FormatError::InvalidField {
                kind,
                field: axis,
                value: (*field).to_owned(),
                source,
            }
        })?;
    }
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn compact_joins_with_hash() {
        assert_eq!(encode_compact(&[4.0, 5.5]), "4#5.5");
        assert_eq!(encode_compact(&[-1.0, 0.0, 2.25]), "-1#0#2.25");
    }

    #[test]
    fn compact_rejects_wrong_field_count() {
        let err = decode_compact::<2>("Vector2", "1#2#3").unwrap_err();
        assert!(matches!(
            err,
            FormatError::FieldCount {
                expected: 2,
                found: 3,
                ..
            }
        ));

        let err = decode_compact::<3>("Vector3", "1#2").unwrap_err();
        assert!(matches!(
            err,
            FormatError::FieldCount {
                expected: 3,
                found: 2,
                ..
            }
        ));
    }

    #[test]
    fn compact_reports_offending_axis() {
        let err = decode_compact::<3>("Vector3", "1#2#oops").unwrap_err();
        match err {
            FormatError::InvalidField { kind, field, value, .. } => {
                assert_eq!(kind, "Vector3");
                assert_eq!(field, 'z');
                assert_eq!(value, "oops");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn raw_line_is_newline_terminated() {
        let mut buf = Vec::new();
        write_raw(&mut buf, &[1.5, -2.0]).unwrap();
        assert_eq!(buf, b"1.5 -2\n");
        assert_eq!(buf, encode_raw(&[1.5, -2.0]));
    }

    #[test]
    fn raw_reads_first_line_only() {
        let [x, y] = read_raw::<2, _>("Vector2", &b"3 4\n5 6\n"[..]).unwrap();
        assert!((x - 3.0).abs() < f32::EPSILON);
        assert!((y - 4.0).abs() < f32::EPSILON);
    }

    #[test]
    fn raw_rejects_missing_and_extra_fields() {
        assert!(read_raw::<3, _>("Vector3", &b"1 2\n"[..]).is_err());
        assert!(read_raw::<2, _>("Vector2", &b"1 2 3\n"[..]).is_err());
        assert!(read_raw::<2, _>("Vector2", &b""[..]).is_err());
    }
}
