//! The flat token record and the kinds it can take.

/// Index into a token slice. `None` stands in for what a C implementation
/// would represent as a sentinel value (`NO_PARENT`, `NO_SIBLING`).
pub type TokenIndex = usize;

/// What kind of JSON node a [`Token`] describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `true`, `false`, `null`, or a JSON number.
    Primitive,
    /// `{ ... }`.
    Object,
    /// `[ ... ]`.
    Array,
    /// A quoted string, used both as an object key and as a scalar value.
    String,
    /// A slot the pool has not yet handed out.
    Unassigned,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::Primitive => "PRIMITIVE",
            TokenKind::Object => "OBJECT",
            TokenKind::Array => "ARRAY",
            TokenKind::String => "STRING",
            TokenKind::Unassigned => "UNASSIGNED",
        };
        f.write_str(name)
    }
}

/// One node in the flat, index-linked JSON token forest.
///
/// `start`/`end` are byte offsets into the input the token was parsed from.
/// `parent`/`sibling` are indices into the same token slice; there is no
/// embedded handle back to the input or the pool, so callers pass those
/// explicitly to the comparison and decode functions in [`crate::compare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub start: usize,
    pub end: Option<usize>,
    pub size: u32,
    pub parent: Option<TokenIndex>,
    pub sibling: Option<TokenIndex>,
}

impl Token {
    /// An empty, `Unassigned` slot. This is the value every caller-supplied
    /// token slice should be filled with before a parse; [`crate::pool`]
    /// re-establishes it for every slot it hands out.
    pub const EMPTY: Token = Token {
        kind: TokenKind::Unassigned,
        start: 0,
        end: None,
        size: 0,
        parent: None,
        sibling: None,
    };

    /// Byte length of the token's payload. `0` for a token that hasn't been
    /// closed yet.
    pub fn len(&self) -> usize {
        match self.end {
            Some(end) => end.saturating_sub(self.start),
            None => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether this token is a key: a `String` that has been bound to
    /// exactly one value.
    pub fn is_key(&self) -> bool {
        self.kind == TokenKind::String && self.size == 1
    }

    /// `start..end` of this token's payload within its input, once closed.
    pub fn range(&self) -> Option<std::ops::Range<usize>> {
        self.end.map(|end| self.start..end)
    }

    /// The raw payload text of this token, borrowed from `input`. Escapes in
    /// strings are not expanded; this is the encoded text exactly as it
    /// appeared in the source.
    pub fn text<'a>(&self, input: &'a str) -> &'a str {
        match self.range() {
            Some(range) => &input[range],
            None => "",
        }
    }
}
