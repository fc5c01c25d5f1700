//! Lexing of structures in linear notation.

use logos::{Lexer, Logos};

#[derive(Logos, Clone, Debug, PartialEq, Eq)]
pub enum Token<'s> {
    #[token("<")]
    LAng,

    #[token(">")]
    RAng,

    #[token("{")]
    LBrc,

    #[token("}")]
    RBrc,

    #[token("(")]
    LPar,

    #[token(")")]
    RPar,

    #[token(",")]
    Comma,

    #[token(":")]
    Colon,

    #[token("+")]
    Plus,

    #[token("*")]
    Star,

    #[token(".")]
    Period,

    #[token("NOT")]
    Not,

    #[token("MAY")]
    May,

    #[token("MUST")]
    Must,

    #[token("IMP")]
    Imp,

    #[token("OR")]
    Or,

    #[regex("[0-9]+", |lex| lex.slice().parse::<usize>().ok())]
    Num(usize),

    #[regex("[a-zA-Z_][a-zA-Z0-9_']*")]
    Ident(&'s str),

    #[regex(r"[ \t\r\n\f]+")]
    #[regex("%[^\n]*")]
    Space,

    #[error]
    Error,
}

/// Tokens of a string, excluding whitespace and comments.
pub struct Tokens<'s>(Lexer<'s, Token<'s>>);

impl<'s> Iterator for Tokens<'s> {
    type Item = Token<'s>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.find(|token| *token != Token::Space)
    }
}

pub fn lex(s: &str) -> Tokens<'_> {
    Tokens(Token::lexer(s))
}

#[test]
fn tokens() {
    use alloc::vec::Vec;
    let s = "<1,{(1,x')},{(1,NOTE(x')), % comment\n (1,NOT P)},{}>.";
    let tokens: Vec<_> = lex(s).collect();
    assert_eq!(tokens[1], Token::Num(1));
    assert_eq!(tokens[7], Token::Ident("x'"));
    assert_eq!(tokens[15], Token::Ident("NOTE"));
    assert!(tokens.contains(&Token::Not));
    assert_eq!(tokens.last(), Some(&Token::Period));
    assert!(!tokens.contains(&Token::Space));
}
