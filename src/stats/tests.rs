use super::*;
use pretty_assertions::assert_eq;

fn sample() -> Vec<Token> {
    vec![
        Token::new(Kind::Identifier, "B", 1, 1),
        Token::new(Kind::Start, "start", 1, 3),
        Token::new(Kind::Identifier, "A", 2, 1),
        Token::new(Kind::Semicolon, ";", 2, 2),
        Token::new(Kind::Eof, "", 2, 2),
    ]
}

#[test]
fn counts_exclude_eof() {
    let stats = ScanStats::collect(&sample(), 2);
    assert_eq!(stats.total_tokens, 4);
    assert_eq!(stats.count(Kind::Identifier), 2);
    assert_eq!(stats.count(Kind::Eof), 0);
    assert_eq!(stats.count(Kind::Float), 0);
}

#[test]
fn render_orders_kinds_by_declaration() {
    let stats = ScanStats::collect(&sample(), 2);
    let expected = "--- Scanner Statistics ---\n\
        Total Tokens: 4\n\
        Lines Processed: 2\n\
        Token Counts by Type:\n  \
        START          : 1\n  \
        IDENTIFIER     : 2\n  \
        SEMICOLON      : 1\n";
    assert_eq!(stats.render(), expected);
}

#[test]
fn empty_scan() {
    let stats = ScanStats::collect(&[Token::new(Kind::Eof, "", 1, 0)], 1);
    assert_eq!(stats.total_tokens, 0);
    assert!(stats.counts.is_empty());
}
