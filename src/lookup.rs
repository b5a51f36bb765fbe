//! Byte-classification lookup tables: a `const fn` over a 256-entry array,
//! so classification during parsing is a single array index instead of a
//! chain of comparisons.

/// ASCII whitespace the grammar treats as insignificant between tokens:
/// space, tab, CR, LF. (RFC 8259 §2; no other Unicode whitespace counts.)
static WHITESPACE: [bool; 256] = whitespace_lut();

/// Bytes that terminate a primitive literal (`true`/`false`/`null`/number):
/// `,`, `]`, `}`, or ASCII whitespace.
static PRIMITIVE_TERMINATOR: [bool; 256] = primitive_terminator_lut();

/// Bytes legal immediately after a `\` inside a JSON string, excluding
/// `u` (which additionally requires four hex digits, checked separately).
static SIMPLE_ESCAPE: [bool; 256] = simple_escape_lut();

#[inline]
pub(crate) fn is_whitespace(b: u8) -> bool {
    WHITESPACE[b as usize]
}

#[inline]
pub(crate) fn is_primitive_terminator(b: u8) -> bool {
    PRIMITIVE_TERMINATOR[b as usize]
}

#[inline]
pub(crate) fn is_simple_escape(b: u8) -> bool {
    SIMPLE_ESCAPE[b as usize]
}

#[inline]
pub(crate) fn is_primitive_lead(b: u8) -> bool {
    matches!(b, b'+' | b'-' | b'0'..=b'9' | b't' | b'f' | b'n')
}

#[inline]
pub(crate) fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

const fn whitespace_lut() -> [bool; 256] {
    let mut lut = [false; 256];
    lut[b' ' as usize] = true;
    lut[b'\t' as usize] = true;
    lut[b'\r' as usize] = true;
    lut[b'\n' as usize] = true;
    lut
}

const fn primitive_terminator_lut() -> [bool; 256] {
    let mut lut = whitespace_lut();
    lut[b',' as usize] = true;
    lut[b']' as usize] = true;
    lut[b'}' as usize] = true;
    lut
}

const fn simple_escape_lut() -> [bool; 256] {
    let mut lut = [false; 256];
    lut[b'"' as usize] = true;
    lut[b'\\' as usize] = true;
    lut[b'/' as usize] = true;
    lut[b'b' as usize] = true;
    lut[b'f' as usize] = true;
    lut[b'n' as usize] = true;
    lut[b'r' as usize] = true;
    lut[b't' as usize] = true;
    lut
}
