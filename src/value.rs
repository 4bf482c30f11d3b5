//! Stored Value Module
//!
//! Scalar values accepted by the cache and their two renderings: the bytes
//! written to the store, and the literal text recorded in call history.

use std::fmt::Write;

// == Value ==
/// A scalar value the cache can store.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Str(String),
    Bytes(Vec<u8>),
    Int(i64),
    Float(f64),
}

impl Value {
    // == Store Encoding ==
    /// Encodes the value the way it is written to the store.
    ///
    /// Integers are base-10 text, floats use [`float_repr`].
    pub fn to_bytes(&self) -> Vec<u8> {
        match self {
            Value::Str(s) => s.as_bytes().to_vec(),
            Value::Bytes(b) => b.clone(),
            Value::Int(i) => i.to_string().into_bytes(),
            Value::Float(f) => float_repr(*f).into_bytes(),
        }
    }

    // == Literal ==
    /// Renders the value as a quoted literal, e.g. `'a'`, `b'\x00'`, `42`.
    pub fn literal(&self) -> String {
        match self {
            Value::Str(s) => quote_str(s),
            Value::Bytes(b) => quote_bytes(b),
            Value::Int(i) => i.to_string(),
            Value::Float(f) => float_repr(*f),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

// == Float Rendering ==
/// Renders a float with the fewest digits that parse back to it.
///
/// Plain notation is used for decimal exponents in `-4..16` and always keeps
/// a fractional part (`1.0`); outside that range the exponent carries a sign
/// and at least two digits (`1e+16`, `1.5e-07`). Non-finite values are
/// `nan`, `inf` and `-inf`.
pub fn float_repr(f: f64) -> String {
    if f.is_nan() {
        return "nan".to_string();
    }
    if f.is_infinite() {
        return if f > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // `{:e}` yields the shortest round-trip digits, e.g. `-1.5e-7`.
    let sci = format!("{:e}", f.abs());
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::with_capacity(digits.len() + 8);
    if f.is_sign_negative() {
        out.push('-');
    }

    if (-4..16).contains(&exp) {
        if exp < 0 {
            out.push_str("0.");
            out.push_str(&"0".repeat((-exp - 1) as usize));
            out.push_str(&digits);
        } else {
            let int_len = exp as usize + 1;
            if digits.len() <= int_len {
                out.push_str(&digits);
                out.push_str(&"0".repeat(int_len - digits.len()));
                out.push_str(".0");
            } else {
                out.push_str(&digits[..int_len]);
                out.push('.');
                out.push_str(&digits[int_len..]);
            }
        }
    } else {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let sign = if exp < 0 { '-' } else { '+' };
        let _ = write!(out, "e{}{:02}", sign, exp.abs());
    }
    out
}

// == Quoting Helpers ==
/// Quotes text with single quotes, switching to double quotes when the
/// text contains a single quote and no double quote.
fn quote_str(s: &str) -> String {
    let quote = if s.contains('\'') && !s.contains('"') {
        '"'
    } else {
        '\''
    };

    let mut out = String::with_capacity(s.len() + 2);
    out.push(quote);
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\x{:02x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// Quotes bytes as a `b'...'` literal; non-printable bytes become `\xNN`.
fn quote_bytes(bytes: &[u8]) -> String {
    let quote = if bytes.contains(&b'\'') && !bytes.contains(&b'"') {
        b'"'
    } else {
        b'\''
    };

    let mut out = String::with_capacity(bytes.len() + 3);
    out.push('b');
    out.push(quote as char);
    for &b in bytes {
        match b {
            b'\\' => out.push_str("\\\\"),
            b'\n' => out.push_str("\\n"),
            b'\r' => out.push_str("\\r"),
            b'\t' => out.push_str("\\t"),
            b if b == quote => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7e => out.push(b as char),
            b => {
                let _ = write!(out, "\\x{:02x}", b);
            }
        }
    }
    out.push(quote as char);
    out
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bytes() {
        assert_eq!(Value::from("hello").to_bytes(), b"hello".to_vec());
        assert_eq!(Value::from(vec![0u8, 255]).to_bytes(), vec![0u8, 255]);
        assert_eq!(Value::from(42i64).to_bytes(), b"42".to_vec());
        assert_eq!(Value::from(-7).to_bytes(), b"-7".to_vec());
        assert_eq!(Value::from(2.75).to_bytes(), b"2.75".to_vec());
        assert_eq!(Value::from(1.0).to_bytes(), b"1.0".to_vec());
    }

    #[test]
    fn test_literal_str() {
        assert_eq!(Value::from("a").literal(), "'a'");
        assert_eq!(Value::from("it's").literal(), "\"it's\"");
        assert_eq!(Value::from("a'b\"c").literal(), "'a\\'b\"c'");
        assert_eq!(Value::from("line\nbreak").literal(), "'line\\nbreak'");
    }

    #[test]
    fn test_literal_bytes() {
        assert_eq!(Value::from(b"abc".as_slice()).literal(), "b'abc'");
        assert_eq!(Value::from(vec![0u8, 0x41, 0xff]).literal(), "b'\\x00A\\xff'");
    }

    #[test]
    fn test_literal_numbers() {
        assert_eq!(Value::from(42i64).literal(), "42");
        assert_eq!(Value::from(2.5).literal(), "2.5");
    }

    #[test]
    fn test_float_repr_plain_range() {
        assert_eq!(float_repr(0.0), "0.0");
        assert_eq!(float_repr(-0.0), "-0.0");
        assert_eq!(float_repr(100.0), "100.0");
        assert_eq!(float_repr(-2.75), "-2.75");
        assert_eq!(float_repr(0.0001), "0.0001");
        assert_eq!(float_repr(1e15), "1000000000000000.0");
        assert_eq!(float_repr(123.456), "123.456");
    }

    #[test]
    fn test_float_repr_exponent_range() {
        assert_eq!(float_repr(1e16), "1e+16");
        assert_eq!(float_repr(1e-7), "1e-07");
        assert_eq!(float_repr(-1.5e-5), "-1.5e-05");
        assert_eq!(float_repr(1.25e100), "1.25e+100");
        assert_eq!(float_repr(5e-324), "5e-324");
    }

    #[test]
    fn test_float_repr_non_finite() {
        assert_eq!(float_repr(f64::NAN), "nan");
        assert_eq!(float_repr(f64::INFINITY), "inf");
        assert_eq!(float_repr(f64::NEG_INFINITY), "-inf");
        assert_eq!(Value::from(1e16).literal(), "1e+16");
    }

    #[test]
    fn test_float_repr_parses_back() {
        for f in [0.1, 1e16, 1e-7, -2.75, 1e22, 123456.789, f64::MAX, f64::MIN_POSITIVE] {
            assert_eq!(float_repr(f).parse::<f64>().unwrap(), f);
        }
    }
}
