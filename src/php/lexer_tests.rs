use super::*;

fn kinds(src: &str) -> Vec<TokenKind> {
    Lexer::new(src)
        .tokenize()
        .unwrap()
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

#[test]
fn text_before_open_tag_is_inline_html() {
    let tokens = kinds("hello<?php $a = 1;");
    assert_eq!(tokens[0], TokenKind::InlineHtml("hello".to_string()));
    assert_eq!(tokens[1], TokenKind::Variable("a".to_string()));
}

#[test]
fn open_tag_requires_whitespace() {
    let tokens = kinds("<?phpx");
    assert_eq!(tokens, vec![TokenKind::InlineHtml("<?phpx".to_string())]);
}

#[test]
fn close_tag_swallows_one_newline() {
    let tokens = kinds("<?php $a = 1; ?>\n");
    assert_eq!(tokens.last(), Some(&TokenKind::CloseTag));

    let tokens = kinds("<?php $a = 1; ?>\n\n");
    assert_eq!(
        tokens.last(),
        Some(&TokenKind::InlineHtml("\n".to_string()))
    );
}

#[test]
fn comments_are_skipped() {
    let src = "<?php\n// line\n# hash\n/**\n* doc\n*/\n$a = 'x';";
    let tokens = kinds(src);
    assert_eq!(
        tokens,
        vec![
            TokenKind::Variable("a".to_string()),
            TokenKind::Assign,
            TokenKind::Str("x".to_string()),
            TokenKind::Semicolon,
        ]
    );
}

#[test]
fn line_numbers_follow_newlines() {
    let tokens = Lexer::new("<?php\n\n$a\n= 1;").tokenize().unwrap();
    assert_eq!(tokens[0].line, 3);
    assert_eq!(tokens[1].line, 4);
}

#[test]
fn single_quoted_escapes() {
    let tokens = kinds(r"<?php 'it\'s \\ \n'");
    assert_eq!(tokens, vec![TokenKind::Str(r"it's \ \n".to_string())]);
}

#[test]
fn double_quoted_escapes() {
    let tokens = kinds(r#"<?php "a\tb\n\"c\" \$d \x41\101""#);
    assert_eq!(
        tokens,
        vec![TokenKind::Str("a\tb\n\"c\" $d AA".to_string())]
    );
}

#[test]
fn double_quoted_interpolation_is_rejected() {
    let err = Lexer::new(r#"<?php "hello $name""#).tokenize().unwrap_err();
    assert!(err.message.contains("interpolation"));
}

#[test]
fn numbers() {
    let tokens = kinds("<?php 42 0x1F 1.5 7");
    assert_eq!(
        tokens,
        vec![
            TokenKind::Int(42),
            TokenKind::Int(31),
            TokenKind::Float(1.5),
            TokenKind::Int(7),
        ]
    );
}

#[test]
fn integer_followed_by_concat_is_not_float() {
    let tokens = kinds("<?php 1 . 'a'");
    assert_eq!(tokens[0], TokenKind::Int(1));
    assert_eq!(tokens[1], TokenKind::Dot);
}

#[test]
fn punctuation() {
    let tokens = kinds("<?php => && || ! ( ) [ ] { } , ; = . -");
    assert_eq!(
        tokens,
        vec![
            TokenKind::DoubleArrow,
            TokenKind::AndAnd,
            TokenKind::OrOr,
            TokenKind::Bang,
            TokenKind::LParen,
            TokenKind::RParen,
            TokenKind::LBracket,
            TokenKind::RBracket,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Comma,
            TokenKind::Semicolon,
            TokenKind::Assign,
            TokenKind::Dot,
            TokenKind::Minus,
        ]
    );
}

#[test]
fn unterminated_string_reports_start_line() {
    let err = Lexer::new("<?php\n$a = 'abc\n\n").tokenize().unwrap_err();
    assert_eq!(err.line, 2);
    assert!(err.message.contains("unterminated string"));
}

#[test]
fn unterminated_comment_is_an_error() {
    let err = Lexer::new("<?php /* never closed").tokenize().unwrap_err();
    assert!(err.message.contains("unterminated comment"));
}

#[test]
fn unknown_character_is_an_error() {
    let err = Lexer::new("<?php $a = 1 + 2;").tokenize().unwrap_err();
    assert!(err.message.contains("'+'"));
}

#[test]
fn line_comment_ends_at_close_tag() {
    let tokens = kinds("<?php // comment ?>after");
    assert_eq!(
        tokens,
        vec![
            TokenKind::CloseTag,
            TokenKind::InlineHtml("after".to_string())
        ]
    );
}
