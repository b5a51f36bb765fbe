use jtok::{is_valid_json, obj_has_key, parse, tok_tok_eq, ParserConfig, Status, Token, TokenKind};
use pretty_assertions::assert_eq;

fn parse_ok<'a>(input: &str, tokens: &'a mut [Token]) -> usize {
    parse(input, tokens, &ParserConfig::default()).expect("expected a successful parse")
}

#[test]
fn scenario_1_empty_object() {
    let mut tokens = [Token::EMPTY; 1];
    let n = parse_ok("{}", &mut tokens);
    assert_eq!(n, 1);
    assert_eq!(tokens[0].kind, TokenKind::Object);
    assert_eq!(tokens[0].start, 0);
    assert_eq!(tokens[0].end, Some(2));
    assert_eq!(tokens[0].size, 0);
}

#[test]
fn scenario_2_single_key_value() {
    let mut tokens = [Token::EMPTY; 3];
    let n = parse_ok(r#"{"k":true}"#, &mut tokens);
    assert_eq!(n, 3);
    assert_eq!(tokens[0].size, 1);
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[1].parent, Some(0));
    assert_eq!(tokens[1].size, 1);
    assert_eq!(tokens[2].kind, TokenKind::Primitive);
    assert_eq!(tokens[2].parent, Some(1));
    assert!(is_valid_json(&tokens[..n]));
}

#[test]
fn scenario_3_key_lookup_and_sibling_chain() {
    let input = r#"{"a":1,"b":2}"#;
    let mut tokens = [Token::EMPTY; 5];
    let n = parse_ok(input, &mut tokens);
    assert_eq!(n, 5);
    assert_eq!(obj_has_key(&tokens, 0, "b", input), Some(3));
    assert_eq!(tokens[1].sibling, Some(3));
}

#[test]
fn scenario_4_mixed_array_stops_at_first_mismatch() {
    let mut tokens = [Token::EMPTY; 8];
    let err = parse(r#"{"a":[1,2,"x"]}"#, &mut tokens, &ParserConfig::default()).unwrap_err();
    assert!(matches!(err, Status::MixedArray { .. }));
}

#[test]
fn scenario_5_trailing_comma_rejected() {
    let mut tokens = [Token::EMPTY; 8];
    let err = parse(r#"{"a":1,}"#, &mut tokens, &ParserConfig::default()).unwrap_err();
    assert!(matches!(err, Status::ObjNoKey { .. }));
}

#[test]
fn scenario_6_key_order_does_not_affect_structural_equality() {
    let input_a = r#"{"a":1,"b":2}"#;
    let input_b = r#"{"b":2,"a":1}"#;
    let mut tokens_a = [Token::EMPTY; 5];
    let mut tokens_b = [Token::EMPTY; 5];
    parse_ok(input_a, &mut tokens_a);
    parse_ok(input_b, &mut tokens_b);
    assert!(tok_tok_eq(&tokens_a, 0, input_a, &tokens_b, 0, input_b));
}

#[test]
fn nested_object_and_array_roundtrip() {
    let input = r#"{"id":7,"tags":["a","b","c"],"meta":{"ok":true}}"#;
    let mut tokens = [Token::EMPTY; 16];
    let n = parse_ok(input, &mut tokens);
    assert!(is_valid_json(&tokens[..n]));
    let tags = obj_has_key(&tokens[..n], 0, "tags", input).unwrap();
    let array_index = tags + 1;
    assert_eq!(tokens[array_index].kind, TokenKind::Array);
    assert_eq!(tokens[array_index].size, 3);
}

#[test]
fn empty_array_value() {
    let mut tokens = [Token::EMPTY; 3];
    let n = parse_ok(r#"{"a":[]}"#, &mut tokens);
    assert_eq!(n, 3);
    assert_eq!(tokens[0].size, 1);
    assert_eq!(tokens[1].kind, TokenKind::String);
    assert_eq!(tokens[2].kind, TokenKind::Array);
    assert_eq!(tokens[2].size, 0);
}

#[test]
fn capacity_exactly_required_succeeds_one_short_fails() {
    let input = r#"{"a":1,"b":2}"#;
    let mut exact = [Token::EMPTY; 5];
    assert!(parse(input, &mut exact, &ParserConfig::default()).is_ok());

    let mut short = [Token::EMPTY; 4];
    let err = parse(input, &mut short, &ParserConfig::default()).unwrap_err();
    assert!(matches!(err, Status::NoMemory { .. }));
}

#[test]
fn unquoted_key_is_rejected() {
    let mut tokens = [Token::EMPTY; 4];
    let err = parse("{a:1}", &mut tokens, &ParserConfig::default()).unwrap_err();
    assert!(matches!(err, Status::ObjNoKey { .. }));
}

#[test]
fn key_bound_to_two_values_is_rejected() {
    let mut tokens = [Token::EMPTY; 8];
    let err = parse(r#"{"a":1:2}"#, &mut tokens, &ParserConfig::default());
    assert!(err.is_err());
}

#[test]
fn deep_nesting_fails_without_overflowing_the_stack() {
    let mut input = String::new();
    for _ in 0..200 {
        input.push_str(r#"{"a":"#);
    }
    input.push_str("1");
    for _ in 0..200 {
        input.push('}');
    }
    let mut tokens = [Token::EMPTY; 512];
    let err = parse(&input, &mut tokens, &ParserConfig::default()).unwrap_err();
    assert!(matches!(err, Status::NestDepthExceeded { .. }));
}
