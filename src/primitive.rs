//! Recognizes `true`, `false`, `null`, and JSON numbers.

use crate::context::ParseContext;
use crate::error::Status;
use crate::lookup;
use crate::token::TokenKind;

/// `ctx.pos` must point at a primitive lead byte (`+ - 0-9 t f n`).
pub(crate) fn parse_primitive(ctx: &mut ParseContext) -> Result<usize, Status> {
    let start = ctx.pos;
    let mut end = start;
    while end < ctx.bytes.len() && !lookup::is_primitive_terminator(ctx.bytes[end]) {
        end += 1;
    }
    if end == ctx.bytes.len() {
        return Err(Status::PartialToken { start });
    }

    let text = &ctx.input[start..end];
    if !is_valid_primitive(text) {
        return Err(Status::InvalidPrimitive { start });
    }

    let index = ctx.pool.alloc()?;
    let tok = ctx.pool.get_mut(index);
    tok.kind = TokenKind::Primitive;
    tok.start = start;
    tok.end = Some(end);
    tok.parent = ctx.toksuper;
    ctx.pos = end;
    Ok(index)
}

fn is_valid_primitive(text: &str) -> bool {
    text == "true" || text == "false" || text == "null" || is_valid_number(text)
}

/// RFC 8259 number grammar, relaxed to accept a leading `+` alongside `-`
/// (both are primitive lead bytes).
fn is_valid_number(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if i < bytes.len() && (bytes[i] == b'-' || bytes[i] == b'+') {
        i += 1;
    }

    if i >= bytes.len() || !lookup::is_digit(bytes[i]) {
        return false;
    }
    if bytes[i] == b'0' {
        i += 1;
    } else {
        while i < bytes.len() && lookup::is_digit(bytes[i]) {
            i += 1;
        }
    }

    if i < bytes.len() && bytes[i] == b'.' {
        i += 1;
        let frac_start = i;
        while i < bytes.len() && lookup::is_digit(bytes[i]) {
            i += 1;
        }
        if i == frac_start {
            return false;
        }
    }

    if i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
        i += 1;
        if i < bytes.len() && (bytes[i] == b'+' || bytes[i] == b'-') {
            i += 1;
        }
        let exp_start = i;
        while i < bytes.len() && lookup::is_digit(bytes[i]) {
            i += 1;
        }
        if i == exp_start {
            return false;
        }
    }

    i == bytes.len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_standard_literals() {
        assert!(is_valid_primitive("true"));
        assert!(is_valid_primitive("false"));
        assert!(is_valid_primitive("null"));
    }

    #[test]
    fn accepts_numbers() {
        assert!(is_valid_primitive("0"));
        assert!(is_valid_primitive("-17"));
        assert!(is_valid_primitive("3.14"));
        assert!(is_valid_primitive("6.02e23"));
        assert!(is_valid_primitive("1E-10"));
    }

    #[test]
    fn rejects_malformed_numbers() {
        assert!(!is_valid_primitive("01"));
        assert!(!is_valid_primitive("."));
        assert!(!is_valid_primitive("1."));
        assert!(!is_valid_primitive("1e"));
        assert!(!is_valid_primitive("--1"));
        assert!(!is_valid_primitive("truee"));
    }
}
