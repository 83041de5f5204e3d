//! Numeric tokens of SHP files
//!
//! A token starting with `0` (or `-0`) is hexadecimal, every other token is
//! decimal: `012` is 18, `12` is 12 and `-012` is -18.

use crate::error::{Result, ShapeFileError};
use nom::{
    branch::alt,
    bytes::complete::tag_no_case,
    character::complete::{char, digit1, hex_digit1},
    combinator::{all_consuming, map, opt},
    sequence::preceded,
    IResult,
};

fn sign(input: &str) -> IResult<&str, bool> {
    map(opt(alt((char('-'), char('+')))), |s| s == Some('-'))(input)
}

fn hex_digits(input: &str) -> IResult<&str, &str> {
    preceded(opt(tag_no_case("0x")), hex_digit1)(input)
}

fn integer(input: &str, radix: u32) -> IResult<&str, (bool, &str)> {
    let (input, negative) = sign(input)?;
    let (input, digits) = if radix == 16 {
        hex_digits(input)?
    } else {
        digit1(input)?
    };
    Ok((input, (negative, digits)))
}

/// Parse a complete token as integer of the given radix
pub fn parse_int(token: &str, radix: u32) -> Result<i32> {
    let invalid = || ShapeFileError::FileStructure(format!("invalid number '{}'", token));
    let (_, (negative, digits)) =
        all_consuming(|input| integer(input, radix))(token.trim()).map_err(|_| invalid())?;
    let value = i64::from_str_radix(digits, radix).map_err(|_| invalid())?;
    let value = if negative { -value } else { value };
    i32::try_from(value).map_err(|_| invalid())
}

/// Parse one shape data token, surrounding parentheses are ignored.
///
/// Returns `None` for empty tokens.
pub fn parse_code(token: &str) -> Result<Option<i32>> {
    let code = token.trim().trim_matches(|c| c == '(' || c == ')').trim();
    if code.is_empty() {
        return Ok(None);
    }
    let radix = if code.starts_with('0') || code.starts_with("-0") {
        16
    } else {
        10
    };
    parse_int(code, radix).map(Some)
}

/// Parse a shape number like `*0000A` (hex) or `*130` (decimal)
pub fn parse_shape_number(token: &str) -> Result<i32> {
    let digits = token.strip_prefix('*').unwrap_or(token);
    if digits.is_empty() {
        return Err(ShapeFileError::FileStructure(format!(
            "missing shape number in '{}'",
            token
        )));
    }
    let radix = if digits.starts_with('0') { 16 } else { 10 };
    parse_int(digits, radix)
}
