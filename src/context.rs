//! The single mutable value threaded through the recursive-descent parse:
//! where we are in the input, which token currently "owns" what gets
//! parsed next, and how deep we've recursed.

use crate::limit::RecursionGuard;
use crate::pool::TokenPool;
use crate::token::TokenIndex;

pub(crate) struct ParseContext<'t, 'i> {
    pub(crate) input: &'i str,
    pub(crate) bytes: &'i [u8],
    pub(crate) pos: usize,
    pub(crate) pool: TokenPool<'t>,
    /// The token that owns whatever gets parsed next: an enclosing
    /// container, or the key whose value is being read. `None` only before
    /// the outermost object is opened.
    pub(crate) toksuper: Option<TokenIndex>,
    pub(crate) depth: RecursionGuard,
}

impl<'t, 'i> ParseContext<'t, 'i> {
    pub(crate) fn new(input: &'i str, pool: TokenPool<'t>, nest_depth: usize) -> Self {
        Self {
            input,
            bytes: input.as_bytes(),
            pos: 0,
            pool,
            toksuper: None,
            depth: RecursionGuard::new(nest_depth),
        }
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    pub(crate) fn skip_whitespace(&mut self) {
        while let Some(b) = self.peek() {
            if crate::lookup::is_whitespace(b) {
                self.pos += 1;
            } else {
                break;
            }
        }
    }
}
