//! Parsing of structures in linear notation.
//!
//! ~~~
//! # use pdrt::{PdrsIter, Pdrs};
//! let s = "% a man walks\n<1,{(1,x)},{(1,man(x)),(1,walk(x))},{}>. (P + Q).";
//! let ps: Result<Vec<_>, _> = PdrsIter::new(s).collect();
//! let ps = ps?;
//! assert_eq!(ps.len(), 2);
//! assert_eq!(ps[1], Pdrs::amerge(Pdrs::Lambda("P".into()), Pdrs::Lambda("Q".into())));
//! # Ok::<_, pdrt::Error>(())
//! ~~~

use crate::lex::{lex, Token, Tokens};
use crate::pdrs::{Basic, Cond, Map, PCon, PRef, PVar, Pdrs, Ref};
use alloc::vec::Vec;
use core::fmt::{self, Display};
use core::iter::Peekable;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    ExpectedPdrs,
    ExpectedCond,
    ExpectedPVar,
    ExpectedIdent,
    ExpectedComma,
    ExpectedLPar,
    ExpectedRPar,
    ExpectedLBrc,
    ExpectedCommaOrRBrc,
    ExpectedCommaOrRPar,
    ExpectedRAng,
    ExpectedPlusOrStar,
    ExpectedImpOrOr,
    ExpectedPeriod,
    ExpectedEnd,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let expected = match self {
            Self::ExpectedPdrs => "structure",
            Self::ExpectedCond => "condition",
            Self::ExpectedPVar => "projection variable",
            Self::ExpectedIdent => "identifier",
            Self::ExpectedComma => "','",
            Self::ExpectedLPar => "'('",
            Self::ExpectedRPar => "')'",
            Self::ExpectedLBrc => "'{'",
            Self::ExpectedCommaOrRBrc => "',' or '}'",
            Self::ExpectedCommaOrRPar => "',' or ')'",
            Self::ExpectedRAng => "'>'",
            Self::ExpectedPlusOrStar => "'+' or '*'",
            Self::ExpectedImpOrOr => "IMP or OR",
            Self::ExpectedPeriod => "'.'",
            Self::ExpectedEnd => "end of input",
        };
        write!(f, "expected {}", expected)
    }
}

fn expect<'s, I>(iter: &mut I, token: Token<'s>, err: Error) -> Result<(), Error>
where
    I: Iterator<Item = Token<'s>>,
{
    if iter.next() == Some(token) {
        Ok(())
    } else {
        Err(err)
    }
}

fn pvar<'s>(iter: &mut impl Iterator<Item = Token<'s>>) -> Result<PVar, Error> {
    match iter.next() {
        Some(Token::Num(n)) => Ok(n),
        _ => Err(Error::ExpectedPVar),
    }
}

fn ident<'s>(iter: &mut impl Iterator<Item = Token<'s>>) -> Result<&'s str, Error> {
    match iter.next() {
        Some(Token::Ident(id)) => Ok(id),
        _ => Err(Error::ExpectedIdent),
    }
}

/// Parse a structure.
pub fn pdrs<'s, I>(iter: &mut Peekable<I>) -> Result<Pdrs, Error>
where
    I: Iterator<Item = Token<'s>>,
{
    match iter.next() {
        Some(Token::LAng) => basic(iter).map(Pdrs::Basic),
        Some(Token::LPar) => {
            let l = pdrs(iter)?;
            let merge: fn(Pdrs, Pdrs) -> Pdrs = match iter.next() {
                Some(Token::Plus) => Pdrs::amerge,
                Some(Token::Star) => Pdrs::pmerge,
                _ => return Err(Error::ExpectedPlusOrStar),
            };
            let r = pdrs(iter)?;
            expect(iter, Token::RPar, Error::ExpectedRPar)?;
            Ok(merge(l, r))
        }
        Some(Token::Ident(x)) => Ok(Pdrs::Lambda(x.into())),
        _ => Err(Error::ExpectedPdrs),
    }
}

/// Parse a basic structure after its opening '<'.
fn basic<'s, I>(iter: &mut Peekable<I>) -> Result<Basic, Error>
where
    I: Iterator<Item = Token<'s>>,
{
    let label = pvar(iter)?;
    expect(iter, Token::Comma, Error::ExpectedComma)?;
    let universe = set(iter, |iter| Ok(PRef::new(pvar_comma(iter)?, ident(iter)?)))?;
    expect(iter, Token::Comma, Error::ExpectedComma)?;
    let conds = set(iter, |iter| {
        let pvar = pvar_comma(iter)?;
        Ok(PCon {
            pvar,
            cond: cond(iter)?,
        })
    })?;
    expect(iter, Token::Comma, Error::ExpectedComma)?;
    let maps = set(iter, |iter| Ok(Map(pvar_comma(iter)?, pvar(iter)?)))?;
    expect(iter, Token::RAng, Error::ExpectedRAng)?;
    Ok(Basic {
        label,
        maps,
        universe,
        conds,
    })
}

/// Parse a projection variable followed by a comma.
fn pvar_comma<'s>(iter: &mut impl Iterator<Item = Token<'s>>) -> Result<PVar, Error> {
    let pv = pvar(iter)?;
    expect(iter, Token::Comma, Error::ExpectedComma)?;
    Ok(pv)
}

/// Parse a set `{(...),...,(...)}`, where `elem` parses the contents of each pair of parentheses.
fn set<'s, I, T, F>(iter: &mut Peekable<I>, mut elem: F) -> Result<Vec<T>, Error>
where
    I: Iterator<Item = Token<'s>>,
    F: FnMut(&mut Peekable<I>) -> Result<T, Error>,
{
    expect(iter, Token::LBrc, Error::ExpectedLBrc)?;
    let mut elems = Vec::new();
    if iter.peek() == Some(&Token::RBrc) {
        iter.next();
        return Ok(elems);
    }
    loop {
        expect(iter, Token::LPar, Error::ExpectedLPar)?;
        elems.push(elem(iter)?);
        expect(iter, Token::RPar, Error::ExpectedRPar)?;
        match iter.next() {
            Some(Token::Comma) => (),
            Some(Token::RBrc) => return Ok(elems),
            _ => return Err(Error::ExpectedCommaOrRBrc),
        }
    }
}

fn cond<'s, I>(iter: &mut Peekable<I>) -> Result<Cond, Error>
where
    I: Iterator<Item = Token<'s>>,
{
    let p1 = match iter.peek() {
        Some(Token::Not) => {
            iter.next();
            return Ok(Cond::Neg(pdrs(iter)?));
        }
        Some(Token::May) => {
            iter.next();
            return Ok(Cond::Diamond(pdrs(iter)?));
        }
        Some(Token::Must) => {
            iter.next();
            return Ok(Cond::Box(pdrs(iter)?));
        }
        Some(Token::Ident(id)) => {
            let id = *id;
            iter.next();
            match iter.peek() {
                // `r: p`
                Some(Token::Colon) => {
                    iter.next();
                    return Ok(Cond::Prop(Ref::from(id), pdrs(iter)?));
                }
                // `rel(x, ..., y)`
                Some(Token::LPar) => {
                    iter.next();
                    return Ok(Cond::Rel(id.into(), args(iter)?));
                }
                // placeholder as antecedent
                _ => Pdrs::Lambda(id.into()),
            }
        }
        Some(Token::LAng | Token::LPar) => pdrs(iter)?,
        _ => return Err(Error::ExpectedCond),
    };
    match iter.next() {
        Some(Token::Imp) => Ok(Cond::Imp(p1, pdrs(iter)?)),
        Some(Token::Or) => Ok(Cond::Or(p1, pdrs(iter)?)),
        _ => Err(Error::ExpectedImpOrOr),
    }
}

/// Parse relation arguments after the opening '('.
fn args<'s, I>(iter: &mut Peekable<I>) -> Result<Vec<Ref>, Error>
where
    I: Iterator<Item = Token<'s>>,
{
    let mut args = Vec::new();
    if iter.peek() == Some(&Token::RPar) {
        iter.next();
        return Ok(args);
    }
    loop {
        args.push(Ref::from(ident(iter)?));
        match iter.next() {
            Some(Token::Comma) => (),
            Some(Token::RPar) => return Ok(args),
            _ => return Err(Error::ExpectedCommaOrRPar),
        }
    }
}

impl Pdrs {
    /// Parse a single structure, optionally terminated by a period.
    ///
    /// ~~~
    /// # use pdrt::Pdrs;
    /// let s = "<1,{(1,x)},{(1,man(x)),(1,NOT <2,{},{(2,happy(x))},{}>)},{(2,1)}>";
    /// let p = Pdrs::parse_str(s)?;
    /// assert_eq!(p.to_string(), s);
    /// assert!(Pdrs::parse_str("<1,{},{},{}> <2,{},{},{}>").is_err());
    /// # Ok::<_, pdrt::Error>(())
    /// ~~~
    pub fn parse_str(s: &str) -> Result<Self, Error> {
        let mut iter = lex(s).peekable();
        let p = pdrs(&mut iter)?;
        if iter.peek() == Some(&Token::Period) {
            iter.next();
        }
        match iter.next() {
            None => Ok(p),
            Some(_) => Err(Error::ExpectedEnd),
        }
    }
}

/// Iterator over period-terminated structures of a string.
///
/// After the first error, the iterator yields nothing more.
pub struct PdrsIter<'s> {
    tokens: Peekable<Tokens<'s>>,
    failed: bool,
}

impl<'s> PdrsIter<'s> {
    pub fn new(s: &'s str) -> Self {
        Self {
            tokens: lex(s).peekable(),
            failed: false,
        }
    }

    fn parse_period(&mut self) -> Result<Pdrs, Error> {
        let p = pdrs(&mut self.tokens)?;
        expect(&mut self.tokens, Token::Period, Error::ExpectedPeriod)?;
        Ok(p)
    }
}

impl<'s> Iterator for PdrsIter<'s> {
    type Item = Result<Pdrs, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        self.tokens.peek()?;
        let p = self.parse_period();
        self.failed = p.is_err();
        Some(p)
    }
}

#[test]
fn positive() -> Result<(), Error> {
    use alloc::string::ToString;
    let ps = [
        "<1,{},{},{}>",
        "P",
        "((P + <1,{},{},{}>) * Q)",
        "<1,{(1,x),(2,y)},{(1,see(x,y)),(1,f()),(1,x: <2,{},{},{}>)},{(1,2),(2,3)}>",
        "<1,{},{(1,<2,{},{},{}> IMP <3,{},{},{}>),(1,P OR (Q + <4,{},{},{}>))},{}>",
        "<1,{},{(1,MAY <2,{},{},{}>),(1,MUST <3,{},{},{}>),(1,NOT P)},{}>",
    ];
    for s in ps {
        let p = Pdrs::parse_str(s)?;
        assert_eq!(p.to_string(), s);
        assert_eq!(Pdrs::parse_str(&p.to_string()), Ok(p));
    }
    Ok(())
}

#[test]
fn negative() {
    use Error::*;
    let parse_err = |s| Pdrs::parse_str(s).unwrap_err();
    assert_eq!(parse_err(""), ExpectedPdrs);
    assert_eq!(parse_err("<x,{},{},{}>"), ExpectedPVar);
    assert_eq!(parse_err("<1,{},{},{}"), ExpectedRAng);
    assert_eq!(parse_err("<1,{(1,x) (1,y)},{},{}>"), ExpectedCommaOrRBrc);
    assert_eq!(parse_err("<1,{},{(1,<2,{},{},{}>)},{}>"), ExpectedImpOrOr);
    assert_eq!(parse_err("<1,{},{(1,see(x y))},{}>"), ExpectedCommaOrRPar);
    assert_eq!(parse_err("(P - Q)"), ExpectedPlusOrStar);
    assert_eq!(parse_err("P Q"), ExpectedEnd);

    let mut iter = PdrsIter::new("P. Q R.");
    assert_eq!(iter.next(), Some(Ok(Pdrs::Lambda("P".into()))));
    assert_eq!(iter.next(), Some(Err(ExpectedPeriod)));
    assert_eq!(iter.next(), None);
}
