//! Recognizes `[ ... ]`, enforcing that every element shares one kind and
//! stitching elements into a sibling chain.

use crate::context::ParseContext;
use crate::error::Status;
use crate::lookup;
use crate::object::parse_object;
use crate::primitive::parse_primitive;
use crate::string::parse_string;
use crate::token::TokenKind;

#[derive(Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectValueOrEnd,
    ExpectValue,
    ExpectCommaOrEnd,
}

/// `ctx.pos` must point at `[`.
pub(crate) fn parse_array(ctx: &mut ParseContext) -> Result<usize, Status> {
    let start = ctx.pos;
    let array_index = ctx.pool.alloc()?;
    {
        let tok = ctx.pool.get_mut(array_index);
        tok.kind = TokenKind::Array;
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
    let result = parse_body(ctx, array_index);
    ctx.depth.exit();
    result
}

fn parse_body(ctx: &mut ParseContext, array_index: usize) -> Result<usize, Status> {
    let saved_super = ctx.toksuper;
    let mut state = State::ExpectValueOrEnd;
    let mut element_kind: Option<TokenKind> = None;
    let mut last_child: Option<usize> = None;

    loop {
        ctx.skip_whitespace();
        let b = match ctx.peek() {
            Some(b) => b,
            None => {
                return Err(Status::PartialToken {
                    start: ctx.pool.get(array_index).start,
                })
            }
        };

        match b {
            b']' if state == State::ExpectValueOrEnd || state == State::ExpectCommaOrEnd => {
                let end = ctx.pos + 1;
                if let Some(last) = last_child {
                    ctx.pool.get_mut(last).sibling = None;
                }
                ctx.pool.get_mut(array_index).end = Some(end);
                ctx.pos = end;
                ctx.toksuper = saved_super;
                return Ok(array_index);
            }
            b']' => return Err(Status::StrayComma { index: ctx.pos }),
            b',' if state == State::ExpectCommaOrEnd => {
                ctx.pos += 1;
                state = State::ExpectValue;
            }
            b',' => return Err(Status::StrayComma { index: ctx.pos }),
            b'{' | b'[' | b'"'
                if state == State::ExpectValueOrEnd || state == State::ExpectValue =>
            {
                ctx.toksuper = Some(array_index);
                let child = match b {
                    b'{' => parse_object(ctx)?,
                    b'[' => parse_array(ctx)?,
                    b'"' => parse_string(ctx)?,
                    _ => unreachable!(),
                };
                attach(ctx, array_index, child, &mut element_kind, &mut last_child)?;
                state = State::ExpectCommaOrEnd;
            }
            _ if lookup::is_primitive_lead(b)
                && (state == State::ExpectValueOrEnd || state == State::ExpectValue) =>
            {
                ctx.toksuper = Some(array_index);
                let child = parse_primitive(ctx)?;
                attach(ctx, array_index, child, &mut element_kind, &mut last_child)?;
                state = State::ExpectCommaOrEnd;
            }
            _ => return Err(Status::Invalid { index: ctx.pos }),
        }
    }
}

fn attach(
    ctx: &mut ParseContext,
    array_index: usize,
    child: usize,
    element_kind: &mut Option<TokenKind>,
    last_child: &mut Option<usize>,
) -> Result<(), Status> {
    let child_kind = ctx.pool.get(child).kind;
    match *element_kind {
        Some(expected) if expected != child_kind => {
            return Err(Status::MixedArray {
                index: ctx.pool.get(child).start,
            });
        }
        None => *element_kind = Some(child_kind),
        _ => {}
    }
    if let Some(last) = *last_child {
        ctx.pool.get_mut(last).sibling = Some(child);
    }
    *last_child = Some(child);
    ctx.pool.get_mut(array_index).size += 1;
    Ok(())
}
