//! Token definitions for equation lines
//!
//! One equation line lexes into a flat stream of these tokens. Whitespace
//! separates tokens and is otherwise insignificant, so `2x` and `2 x` lex
//! identically. Two variants are never produced by the raw lexer itself:
//! `Identifier` and `Function` come out of the word resolution
//! transformation, which splits or promotes raw `Word` tokens.

use std::fmt;

use logos::Logos;

use crate::eqtree::ast::RelOp;

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r]+")]
pub enum Token {
    // Numbers
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(f64),

    // A trailing dot, or a second dot glued onto a number. Longest match
    // makes this win over Number exactly when the spelling is malformed;
    // tokenize_raw converts it into a LexError.
    #[regex(r"[0-9]+\.[0-9]*\.[0-9.]*|[0-9]+\.")]
    MalformedNumber,

    // Words
    #[regex(r"[a-zA-Z]+", |lex| lex.slice().to_string())]
    Word(String), // raw letter run, consumed by word resolution

    Identifier(String), // single-letter variable name
    Function(String),   // known function name followed by a call

    // Superscript digit runs: x² and x¹² both normalize to caret powers
    #[regex(r"[⁰¹²³⁴⁵⁶⁷⁸⁹]+", parse_superscript)]
    Superscript(f64),

    // Operators
    #[token("+", |_| '+')]
    #[token("-", |_| '-')]
    #[token("*", |_| '*')]
    #[token("/", |_| '/')]
    #[token("^", |_| '^')]
    Operator(char),

    // Relations
    #[token("=", |_| RelOp::Eq)]
    #[token("<", |_| RelOp::Lt)]
    #[token(">", |_| RelOp::Gt)]
    #[token("<=", |_| RelOp::Le)]
    #[token("≤", |_| RelOp::Le)]
    #[token(">=", |_| RelOp::Ge)]
    #[token("≥", |_| RelOp::Ge)]
    Relational(RelOp),

    // Grouping
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("|")]
    Pipe,

    // Separators
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,
}

impl Token {
    /// True for tokens that can begin an implicitly multiplied factor when
    /// they directly follow a parsed factor (`2x`, `3(x+1)`, `(a)(b)`,
    /// `2sin(x)`). Numbers are deliberately excluded: `2 3` is not a
    /// product.
    pub fn begins_implicit_factor(&self) -> bool {
        matches!(
            self,
            Token::Identifier(_) | Token::Function(_) | Token::LParen
        )
    }

    /// True for `(`, `{` and `[`.
    pub fn is_opening_bracket(&self) -> bool {
        matches!(self, Token::LParen | Token::LBrace | Token::LBracket)
    }

    /// True for `)`, `}` and `]`.
    pub fn is_closing_bracket(&self) -> bool {
        matches!(self, Token::RParen | Token::RBrace | Token::RBracket)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::MalformedNumber => write!(f, "<malformed number>"),
            Token::Word(word) => write!(f, "{}", word),
            Token::Identifier(name) => write!(f, "{}", name),
            Token::Function(name) => write!(f, "{}", name),
            Token::Superscript(value) => write!(f, "^{}", value),
            Token::Operator(op) => write!(f, "{}", op),
            Token::Relational(relation) => write!(f, "{}", relation),
            Token::LParen => write!(f, "("),
            Token::RParen => write!(f, ")"),
            Token::LBrace => write!(f, "{{"),
            Token::RBrace => write!(f, "}}"),
            Token::LBracket => write!(f, "["),
            Token::RBracket => write!(f, "]"),
            Token::Pipe => write!(f, "|"),
            Token::Comma => write!(f, ","),
            Token::Semicolon => write!(f, ";"),
        }
    }
}

fn parse_number(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

fn parse_superscript(lex: &mut logos::Lexer<Token>) -> Option<f64> {
    let digits: Option<String> = lex.slice().chars().map(superscript_digit).collect();
    digits?.parse().ok()
}

/// Map a superscript digit to its ASCII digit.
pub(crate) fn superscript_digit(ch: char) -> Option<char> {
    match ch {
        '⁰' => Some('0'),
        '¹' => Some('1'),
        '²' => Some('2'),
        '³' => Some('3'),
        '⁴' => Some('4'),
        '⁵' => Some('5'),
        '⁶' => Some('6'),
        '⁷' => Some('7'),
        '⁸' => Some('8'),
        '⁹' => Some('9'),
        _ => None,
    }
}
