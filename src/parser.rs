//! The top-level entry point: validates the outer shape, drives the object
//! parser, and exposes the builder used to configure a parse.

use crate::context::ParseContext;
use crate::error::Status;
use crate::limit::RecursionGuard;
use crate::object::parse_object;
use crate::pool::TokenPool;
use crate::token::{Token, TokenKind};

/// Configuration for one [`parse`] call, built with chained setters before
/// the call is made.
#[derive(Debug, Clone, Copy)]
pub struct ParserConfig {
    nest_depth: usize,
}

impl ParserConfig {
    pub fn new() -> Self {
        Self {
            nest_depth: RecursionGuard::DEFAULT_NEST_DEPTH,
        }
    }

    /// Overrides the maximum container nesting depth. Exceeding it during a
    /// parse fails with [`Status::NestDepthExceeded`] rather than
    /// recursing further.
    pub fn with_nest_depth(mut self, nest_depth: usize) -> Self {
        self.nest_depth = nest_depth;
        self
    }

    pub fn nest_depth(&self) -> usize {
        self.nest_depth
    }
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses `input` against `tokens`, writing tokens `[0..n)` on success and
/// returning `n`. The outermost value must be a JSON object.
pub fn parse(input: &str, tokens: &mut [Token], config: &ParserConfig) -> Result<usize, Status> {
    if tokens.is_empty() {
        return Err(Status::NoMemory { attempted: 0 });
    }

    let pool = TokenPool::new(tokens);
    let mut ctx = ParseContext::new(input, pool, config.nest_depth());
    ctx.skip_whitespace();

    match ctx.peek() {
        Some(b'{') => {}
        _ => return Err(Status::NonObject),
    }

    parse_object(&mut ctx)?;
    Ok(ctx.pool.len())
}

/// A cheap sanity check a caller can run over a successfully parsed token
/// slice: the root must be an `Object`, and (for a non-trivial document)
/// its first child must be a `String` key.
pub fn is_valid_json(tokens: &[Token]) -> bool {
    if tokens.len() < 2 || tokens[0].kind != TokenKind::Object {
        return false;
    }
    if tokens.len() == 2 {
        return tokens[1].kind == TokenKind::Array;
    }
    tokens[1].kind == TokenKind::String
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_capacity_one() {
        let mut tokens = [Token::EMPTY; 1];
        let n = parse("{}", &mut tokens, &ParserConfig::default()).unwrap();
        assert_eq!(n, 1);
        assert_eq!(tokens[0].kind, TokenKind::Object);
        assert_eq!((tokens[0].start, tokens[0].end, tokens[0].size), (0, Some(2), 0));
    }

    #[test]
    fn simple_key_value() {
        let mut tokens = [Token::EMPTY; 3];
        let n = parse(r#"{"k":true}"#, &mut tokens, &ParserConfig::default()).unwrap();
        assert_eq!(n, 3);
        assert!(is_valid_json(&tokens[..n]));
    }

    #[test]
    fn rejects_non_object_root() {
        let mut tokens = [Token::EMPTY; 4];
        let err = parse("[1,2]", &mut tokens, &ParserConfig::default()).unwrap_err();
        assert!(matches!(err, Status::NonObject));
    }

    #[test]
    fn capacity_one_short_fails() {
        let mut tokens = [Token::EMPTY; 4];
        let err = parse(r#"{"a":1,"b":2}"#, &mut tokens, &ParserConfig::default()).unwrap_err();
        assert!(matches!(err, Status::NoMemory { .. }));
    }

    #[test]
    fn nesting_beyond_limit_fails_cleanly() {
        let mut tokens = [Token::EMPTY; 64];
        let config = ParserConfig::new().with_nest_depth(2);
        let deeply_nested = r#"{"a":{"b":{"c":1}}}"#;
        let err = parse(deeply_nested, &mut tokens, &config).unwrap_err();
        assert!(matches!(err, Status::NestDepthExceeded { .. }));
    }

    #[test]
    fn leading_whitespace_is_skipped() {
        let mut tokens = [Token::EMPTY; 1];
        let n = parse("   \n\t{}", &mut tokens, &ParserConfig::default()).unwrap();
        assert_eq!(n, 1);
        assert_eq!(tokens[0].start, 5);
    }
}
