//! Token comparison and copy-out helpers: byte-exact equality against a
//! literal, structural equality between two token trees, and key lookup
//! within an object.

use crate::token::{Token, TokenIndex, TokenKind};

/// Payload length of a closed token; `0` for one that never closed.
pub fn tok_len(tok: &Token) -> usize {
    tok.len()
}

/// Byte-exact equality between `literal` and `tok`'s raw payload in
/// `input`. Both sides must match exactly over the token's declared
/// `[start, end)` range; the comparison never reads past it.
pub fn tok_eq(literal: &str, tok: &Token, input: &str) -> bool {
    tok.text(input) == literal
}

/// Like [`tok_eq`] but only compares the first `n` bytes of `literal`
/// against the token's payload (itself still compared exactly; `n` is not
/// applied to the token side).
pub fn tok_eq_n(literal: &str, n: usize, tok: &Token, input: &str) -> bool {
    match literal.as_bytes().get(..n) {
        Some(prefix) => tok.text(input).as_bytes() == prefix,
        None => false,
    }
}

/// Copies up to `dst.len()` raw payload bytes from `tok` into `dst`.
/// Returns the number of bytes written. No terminator is appended.
pub fn tok_copy(dst: &mut [u8], tok: &Token, input: &str) -> usize {
    let payload = tok.text(input).as_bytes();
    let n = payload.len().min(dst.len());
    dst[..n].copy_from_slice(&payload[..n]);
    n
}

/// Looks up a key by literal text within the object at `tokens[obj_index]`.
/// Returns the index of the matching key token, or `None` if absent.
///
/// Precondition: `tokens[obj_index].kind == TokenKind::Object`.
pub fn obj_has_key(
    tokens: &[Token],
    obj_index: TokenIndex,
    needle: &str,
    input: &str,
) -> Option<TokenIndex> {
    let obj = &tokens[obj_index];
    debug_assert_eq!(obj.kind, TokenKind::Object);
    if obj.size == 0 {
        return None;
    }
    let mut key = obj_index + 1;
    loop {
        if tok_eq(needle, &tokens[key], input) {
            return Some(key);
        }
        match tokens[key].sibling {
            Some(next) => key = next,
            None => return None,
        }
    }
}

/// Structural equality of two token subtrees, each rooted at `a`/`b` in its
/// own `(tokens, input)` pair. Object key order is insignificant; array
/// element order is significant.
pub fn tok_tok_eq(
    tokens_a: &[Token],
    a: TokenIndex,
    input_a: &str,
    tokens_b: &[Token],
    b: TokenIndex,
    input_b: &str,
) -> bool {
    let ta = &tokens_a[a];
    let tb = &tokens_b[b];
    if ta.kind != tb.kind {
        return false;
    }

    match ta.kind {
        TokenKind::Primitive | TokenKind::String => ta.text(input_a) == tb.text(input_b),
        TokenKind::Array => {
            if ta.size != tb.size {
                return false;
            }
            let (mut ia, mut ib) = (
                if ta.size == 0 { None } else { Some(a + 1) },
                if tb.size == 0 { None } else { Some(b + 1) },
            );
            loop {
                match (ia, ib) {
                    (None, None) => return true,
                    (Some(i), Some(j)) => {
                        if !tok_tok_eq(tokens_a, i, input_a, tokens_b, j, input_b) {
                            return false;
                        }
                        ia = tokens_a[i].sibling;
                        ib = tokens_b[j].sibling;
                    }
                    _ => return false,
                }
            }
        }
        TokenKind::Object => {
            if ta.size != tb.size {
                return false;
            }
            let mut ia = if ta.size == 0 { None } else { Some(a + 1) };
            while let Some(key_a) = ia {
                let key_text = tokens_a[key_a].text(input_a);
                let value_a = key_a + 1;
                let matched = obj_has_key(tokens_b, b, key_text, input_b).is_some_and(|key_b| {
                    tok_tok_eq(tokens_a, value_a, input_a, tokens_b, key_b + 1, input_b)
                });
                if !matched {
                    return false;
                }
                ia = tokens_a[key_a].sibling;
            }
            true
        }
        TokenKind::Unassigned => false,
    }
}
