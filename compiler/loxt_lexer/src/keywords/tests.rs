use super::*;

#[test]
fn agrees_with_keyword_table() {
    for (spelling, kind) in TokenKind::KEYWORDS {
        assert_eq!(lookup(spelling), Some(kind), "keyword `{spelling}`");
    }
}

#[test]
fn identifiers_are_not_keywords() {
    for word in ["", "x", "i", "iff", "orchid", "While", "NIL", "classy", "returns", "_"] {
        assert_eq!(lookup(word), None, "`{word}` is not a keyword");
    }
}
