use minire::{
    Error, Pattern,
    charset::{self, CharSet},
    operator::{Operator, OperatorKind, Quantifier},
    parse_pattern,
};

fn parse_ok(pattern: &[u8]) -> Pattern {
    parse_pattern(pattern).unwrap_or_else(|_| {
        panic!(
            "Parser failed for pattern: {}",
            str::from_utf8(pattern).unwrap()
        )
    })
}

fn op(kind: OperatorKind) -> Operator {
    Operator::new(kind)
}

fn quantified(kind: OperatorKind, quantifier: Quantifier) -> Operator {
    let mut op = Operator::new(kind);
    op.quantify(quantifier);
    op
}

fn make_set(bytes: &[u8], ranges: &[(u8, u8)]) -> CharSet {
    let mut set = CharSet::new();
    for &b in bytes {
        set.add_byte(b);
    }
    for &(s, e) in ranges {
        set.add_range(s, e).unwrap();
    }
    set
}

fn bounds(pattern: &[u8]) -> (usize, Option<usize>) {
    let pattern = parse_ok(pattern);
    assert_eq!(pattern.len(), 1);
    (pattern[0].min_repeat(), pattern[0].max_repeat())
}

#[test]
fn test_simple_sequence_parser() {
    assert_eq!(
        parse_ok(b"abc"),
        &[
            op(OperatorKind::Literal(b'a')),
            op(OperatorKind::Literal(b'b')),
            op(OperatorKind::Literal(b'c'))
        ][..]
    );
    assert_eq!(
        parse_ok(b"a.c"),
        &[
            op(OperatorKind::Literal(b'a')),
            op(OperatorKind::Any),
            op(OperatorKind::Literal(b'c'))
        ][..]
    );
    assert!(parse_ok(b"").is_empty());
}

#[test]
fn test_escape_parser() {
    assert_eq!(parse_ok(br"\."), &[op(OperatorKind::Literal(b'.'))][..]);
    assert_eq!(parse_ok(br"\\"), &[op(OperatorKind::Literal(b'\\'))][..]);
    assert_eq!(
        parse_ok(br"\[a\]"),
        &[
            op(OperatorKind::Literal(b'[')),
            op(OperatorKind::Literal(b'a')),
            op(OperatorKind::Literal(b']'))
        ][..]
    );
    assert_eq!(
        parse_ok(br"\**"),
        &[quantified(OperatorKind::Literal(b'*'), Quantifier::Star)][..]
    );
}

#[test]
fn test_quantifiers_parser() {
    assert_eq!(bounds(b"a"), (1, Some(1)));
    assert_eq!(bounds(b"a?"), (0, Some(1)));
    assert_eq!(bounds(b"a*"), (0, None));
    assert_eq!(bounds(b"a+"), (1, None));
    assert_eq!(bounds(b".*"), (0, None));

    assert_eq!(
        parse_ok(b"a.*c+d?e"),
        &[
            op(OperatorKind::Literal(b'a')),
            quantified(OperatorKind::Any, Quantifier::Star),
            quantified(OperatorKind::Literal(b'c'), Quantifier::Plus),
            quantified(OperatorKind::Literal(b'd'), Quantifier::Question),
            op(OperatorKind::Literal(b'e')),
        ][..]
    );
}

#[test]
fn test_dangling_quantifiers_parser() {
    assert_eq!(
        parse_ok(b"*a"),
        &[
            op(OperatorKind::Literal(b'*')),
            op(OperatorKind::Literal(b'a'))
        ][..]
    );
    assert_eq!(
        parse_ok(b"a*+"),
        &[
            quantified(OperatorKind::Literal(b'a'), Quantifier::Star),
            op(OperatorKind::Literal(b'+'))
        ][..]
    );
    assert_eq!(
        parse_ok(b"+?"),
        &[quantified(OperatorKind::Literal(b'+'), Quantifier::Question)][..]
    );
}

#[test]
fn test_sets_parser() {
    assert_eq!(
        parse_ok(b"[]"),
        &[op(OperatorKind::Subset(make_set(&[], &[])))][..]
    );
    assert_eq!(
        parse_ok(b"[abc]"),
        &[op(OperatorKind::Subset(make_set(b"abc", &[])))][..]
    );
    assert_eq!(
        parse_ok(b"[^abc]"),
        &[op(OperatorKind::NegatedSubset(make_set(b"abc", &[])))][..]
    );
    assert_eq!(
        parse_ok(b"[^]"),
        &[op(OperatorKind::NegatedSubset(make_set(&[], &[])))][..]
    );
    assert_eq!(
        parse_ok(b"[a-c]"),
        &[op(OperatorKind::Subset(make_set(&[], &[(b'a', b'c')])))][..]
    );
    assert_eq!(
        parse_ok(b"[^0-9x]"),
        &[op(OperatorKind::NegatedSubset(make_set(b"x", &[(b'0', b'9')])))][..]
    );
    assert_eq!(
        parse_ok(b"[a.^*]"),
        &[op(OperatorKind::Subset(make_set(b"a.^*", &[])))][..]
    );
    assert_eq!(
        parse_ok(b"[-abc]"),
        &[op(OperatorKind::Subset(make_set(b"-abc", &[])))][..]
    );
    assert_eq!(
        parse_ok(b"[abc-]"),
        &[op(OperatorKind::Subset(make_set(b"abc-", &[])))][..]
    );
}

#[test]
fn test_set_escapes_parser() {
    assert_eq!(
        parse_ok(br"[\]\\]"),
        &[op(OperatorKind::Subset(make_set(b"]\\", &[])))][..]
    );
    // A leading caret negates even when escaped.
    assert_eq!(
        parse_ok(br"[\^a]"),
        &[op(OperatorKind::NegatedSubset(make_set(b"a", &[])))][..]
    );
    assert_eq!(
        parse_ok(br"[a\^]"),
        &[op(OperatorKind::Subset(make_set(b"a^", &[])))][..]
    );
    assert_eq!(
        parse_ok(br"[a\-z]"),
        &[op(OperatorKind::Subset(make_set(b"a-z", &[])))][..]
    );
}

#[test]
fn test_set_quantifier_parser() {
    assert_eq!(
        parse_ok(b"[abc]*x"),
        &[
            quantified(OperatorKind::Subset(make_set(b"abc", &[])), Quantifier::Star),
            op(OperatorKind::Literal(b'x'))
        ][..]
    );
}

#[test]
fn test_parser_errors() {
    assert_eq!(parse_pattern(b"[abc"), Err(Error::UnterminatedSet { pos: 0 }));
    assert_eq!(parse_pattern(b"ab[^"), Err(Error::UnterminatedSet { pos: 2 }));
    assert_eq!(parse_pattern(br"x[\]"), Err(Error::UnterminatedSet { pos: 1 }));
    assert_eq!(parse_pattern(br"ab\"), Err(Error::DanglingEscape { pos: 2 }));
    assert_eq!(
        parse_pattern(b"[z-a]"),
        Err(Error::CharSet {
            pos: 1,
            err: charset::Error::Range(b'z', b'a')
        })
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        Error::UnterminatedSet { pos: 0 }.to_string(),
        "invalid pattern: missing ']' for set opened at 0"
    );
    assert_eq!(
        Error::DanglingEscape { pos: 4 }.to_string(),
        "invalid pattern: pattern ends with '\\' at 4"
    );
    assert_eq!(
        Error::CharSet {
            pos: 1,
            err: charset::Error::Range(b'z', b'a')
        }
        .to_string(),
        "invalid pattern: invalid range 'z-a' at 1"
    );
    assert_eq!(
        Error::InvalidRepeat { min: 3, max: Some(2) }.to_string(),
        "invalid repeat bounds {3, 2}"
    );
    assert_eq!(
        Error::InvalidRepeat { min: 3, max: None }.to_string(),
        "invalid repeat bounds {3, inf}"
    );
}

#[test]
fn test_pattern_source() {
    let pattern: Pattern = "a[bc]+".parse().unwrap();
    assert_eq!(pattern.as_bytes(), b"a[bc]+");
    assert_eq!(pattern.len(), 2);
}
