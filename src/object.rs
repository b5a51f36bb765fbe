//! Recognizes `{ "key": value, ... }`, alternating through key/colon/value/
//! comma states and stitching keys into a sibling chain.

use crate::array::parse_array;
use crate::context::ParseContext;
use crate::error::Status;
use crate::lookup;
use crate::primitive::parse_primitive;
use crate::string::parse_string;
use crate::token::TokenKind;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectKey,
    ExpectColon(usize),
    ExpectValue(usize),
    ExpectComma,
}

/// `ctx.pos` must point at `{`.
pub(crate) fn parse_object(ctx: &mut ParseContext) -> Result<usize, Status> {
    let start = ctx.pos;
    let obj_index = ctx.pool.alloc()?;
    {
        let tok = ctx.pool.get_mut(obj_index);
        tok.kind = TokenKind::Object;
        tok.start = start;
        tok.parent = ctx.toksuper;
    }
    ctx.pos += 1;

    if !ctx.depth.enter() {
        let status = Status::NestDepthExceeded {
            index: ctx.pos,
            limit: ctx.depth.limit(),
        };
        ctx.depth.exit();
        return Err(status);
    }
    let result = parse_body(ctx, obj_index);
    ctx.depth.exit();
    result
}

fn parse_body(ctx: &mut ParseContext, obj_index: usize) -> Result<usize, Status> {
    let saved_super = ctx.toksuper;
    let mut state = State::ExpectKey;
    let mut last_key: Option<usize> = None;

    loop {
        ctx.skip_whitespace();
        let b = match ctx.peek() {
            Some(b) => b,
            None => {
                return Err(Status::PartialToken {
                    start: ctx.pool.get(obj_index).start,
                })
            }
        };

        match (b, state) {
            (b'}', State::ExpectKey) if last_key.is_none() => {
                let end = ctx.pos + 1;
                ctx.pool.get_mut(obj_index).end = Some(end);
                ctx.pos = end;
                ctx.toksuper = saved_super;
                return Ok(obj_index);
            }
            (b'}', State::ExpectKey) => {
                // `last_key.is_some()` here means we just consumed a `,` and
                // are still waiting on a key: a trailing comma before `}`.
                return Err(Status::ObjNoKey { index: ctx.pos });
            }
            (b'}', State::ExpectComma) => {
                let end = ctx.pos + 1;
                if let Some(last) = last_key {
                    ctx.pool.get_mut(last).sibling = None;
                }
                ctx.pool.get_mut(obj_index).end = Some(end);
                ctx.pos = end;
                ctx.toksuper = saved_super;
                return Ok(obj_index);
            }
            (b'}', State::ExpectColon(key)) | (b'}', State::ExpectValue(key)) => {
                return Err(Status::KeyNoVal {
                    key_start: ctx.pool.get(key).start,
                });
            }
            (b'"', State::ExpectKey) => {
                ctx.toksuper = Some(obj_index);
                let key = parse_string(ctx)?;
                let key_tok = *ctx.pool.get(key);
                if key_tok.start == key_tok.end.unwrap_or(key_tok.start) {
                    return Err(Status::EmptyKey {
                        index: key_tok.start,
                    });
                }
                if let Some(last) = last_key {
                    ctx.pool.get_mut(last).sibling = Some(key);
                }
                last_key = Some(key);
                ctx.pool.get_mut(obj_index).size += 1;
                state = State::ExpectColon(key);
            }
            (b':', State::ExpectColon(key)) => {
                ctx.pos += 1;
                ctx.toksuper = Some(key);
                state = State::ExpectValue(key);
            }
            (b'{' | b'[' | b'"', State::ExpectValue(key)) => {
                if ctx.pool.get(key).size != 0 {
                    return Err(Status::KeyMultipleVal {
                        key_start: ctx.pool.get(key).start,
                    });
                }
                ctx.toksuper = Some(key);
                match b {
                    b'{' => parse_object(ctx)?,
                    b'[' => parse_array(ctx)?,
                    b'"' => parse_string(ctx)?,
                    _ => unreachable!(),
                };
                ctx.pool.get_mut(key).size = 1;
                ctx.toksuper = Some(obj_index);
                state = State::ExpectComma;
            }
            (b, State::ExpectValue(key)) if lookup::is_primitive_lead(b) => {
                if ctx.pool.get(key).size != 0 {
                    return Err(Status::KeyMultipleVal {
                        key_start: ctx.pool.get(key).start,
                    });
                }
                ctx.toksuper = Some(key);
                parse_primitive(ctx)?;
                ctx.pool.get_mut(key).size = 1;
                ctx.toksuper = Some(obj_index);
                state = State::ExpectComma;
            }
            (b',', State::ExpectComma) => {
                ctx.pos += 1;
                state = State::ExpectKey;
            }
            (b',', _) => return Err(Status::ObjNoKey { index: ctx.pos }),
            (b'"', State::ExpectColon(_)) => return Err(Status::ValNoColon { index: ctx.pos }),
            (b'"', State::ExpectComma) => return Err(Status::ValNoComma { index: ctx.pos }),
            (_, State::ExpectKey) => return Err(Status::ObjNoKey { index: ctx.pos }),
            (_, State::ExpectComma) => return Err(Status::ValNoComma { index: ctx.pos }),
            (_, _) => return Err(Status::Invalid { index: ctx.pos }),
        }
    }
}
