//! Recognizes quoted strings and validates (without expanding) escapes.

use crate::context::ParseContext;
use crate::error::Status;
use crate::lookup;
use crate::token::TokenKind;

/// `ctx.pos` must point at the opening `"`.
pub(crate) fn parse_string(ctx: &mut ParseContext) -> Result<usize, Status> {
    let open = ctx.pos;
    let mut pos = open + 1;
    let payload_start = pos;

    loop {
        if pos >= ctx.bytes.len() {
            return Err(Status::PartialToken { start: open });
        }

        match ctx.bytes[pos] {
            b'"' => {
                let payload_end = pos;
                ctx.pos = pos + 1;
                let index = ctx.pool.alloc()?;
                let tok = ctx.pool.get_mut(index);
                tok.kind = TokenKind::String;
                tok.start = payload_start;
                tok.end = Some(payload_end);
                tok.parent = ctx.toksuper;
                return Ok(index);
            }
            b'\\' => {
                pos += 1;
                if pos >= ctx.bytes.len() {
                    return Err(Status::PartialToken { start: open });
                }
                let escaped = ctx.bytes[pos];
                if escaped == b'u' {
                    if pos + 4 >= ctx.bytes.len() {
                        return Err(Status::PartialToken { start: open });
                    }
                    for k in 1..=4 {
                        if !ctx.bytes[pos + k].is_ascii_hexdigit() {
                            return Err(Status::Invalid { index: pos + k });
                        }
                    }
                    pos += 4;
                } else if !lookup::is_simple_escape(escaped) {
                    return Err(Status::Invalid { index: pos });
                }
                pos += 1;
            }
            b if b < 0x20 => return Err(Status::Invalid { index: pos }),
            _ => pos += 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::TokenPool;
    use crate::token::Token;

    fn parse(input: &str) -> Result<(usize, Token), Status> {
        let mut tokens = [Token::EMPTY; 4];
        let pool = TokenPool::new(&mut tokens);
        let mut ctx = ParseContext::new(input, pool, 8);
        let index = parse_string(&mut ctx)?;
        Ok((ctx.pos, *ctx.pool.get(index)))
    }

    #[test]
    fn plain_string() {
        let (pos, tok) = parse(r#""hello""#).unwrap();
        assert_eq!(pos, 7);
        assert_eq!(tok.kind, TokenKind::String);
        assert_eq!((tok.start, tok.end), (1, Some(6)));
    }

    #[test]
    fn rejects_bare_control_byte() {
        assert!(parse("\"a\nb\"").is_err());
    }

    #[test]
    fn rejects_unknown_escape() {
        assert!(parse(r#""\q""#).is_err());
    }

    #[test]
    fn accepts_unicode_escape() {
        assert!(parse(r#""é""#).is_ok());
    }

    #[test]
    fn accepts_multibyte_utf8() {
        assert!(parse("\"\u{e9}\"").is_ok());
    }

    #[test]
    fn unterminated_is_partial() {
        assert!(matches!(parse(r#""abc"#), Err(Status::PartialToken { .. })));
    }
}
