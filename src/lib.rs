//! A fixed-capacity, allocation-free JSON tokenizer.
//!
//! `parse` walks a UTF-8 JSON document whose outermost value is an object
//! and writes a flat, indexable forest of [`Token`]s into a caller-supplied
//! slice. No dynamic allocation happens during the parse, no input bytes
//! are copied, and no heap object graph is built: tokens reference the
//! input by byte offset and link to one another by slice index.
//!
//! ```
//! use jtok::{parse, obj_has_key, ParserConfig, Token, TokenKind};
//!
//! let input = r#"{"name":"probe-7","armed":true}"#;
//! let mut tokens = [Token::EMPTY; 8];
//! let n = parse(input, &mut tokens, &ParserConfig::default()).unwrap();
//! assert_eq!(tokens[0].kind, TokenKind::Object);
//!
//! let armed = obj_has_key(&tokens[..n], 0, "armed", input).unwrap();
//! assert_eq!(tokens[armed + 1].text(input), "true");
//! ```

mod array;
mod compare;
mod context;
mod error;
mod limit;
mod lookup;
mod object;
mod parser;
mod pool;
mod primitive;
mod string;
mod token;

pub use compare::{obj_has_key, tok_copy, tok_eq, tok_eq_n, tok_len, tok_tok_eq};
pub use error::Status;
pub use limit::RecursionGuard;
pub use parser::{is_valid_json, parse, ParserConfig};
pub use token::{Token, TokenIndex, TokenKind};
