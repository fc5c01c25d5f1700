//! Abstraction, application and composition of structures.
//!
//! Partial structures are represented as functions that
//! take atoms (structures or referents) and
//! ultimately yield a structure.
//!
//! ~~~
//! # use pdrt::{Lambda, Pdrs, Ref};
//! let man = |x: Ref| Pdrs::parse_str(&format!("<1,{{}},{{(1,man({}))}},{{}}>", x)).unwrap();
//! let see = Lambda::new(|x: Ref| {
//!     Lambda::new(move |y: Ref| {
//!         let s = format!("<1,{{}},{{(1,see({},{}))}},{{}}>", x, y);
//!         Pdrs::parse_str(&s).unwrap()
//!     })
//! });
//!
//! let p = see << Ref::from("x") << Ref::from("y");
//! assert_eq!(p, Pdrs::parse_str("<1,{},{(1,see(x,y))},{}>")?);
//! assert_eq!(pdrt::beta_reduce(man, Ref::from("z")).to_string(), "<1,{},{(1,man(z))},{}>");
//! # Ok::<_, pdrt::Error>(())
//! ~~~

use crate::pdrs::{Basic, PCon, Pdrs, Ref};
use alloc::{boxed::Box, string::String};
use core::ops::{Mul, Shl};

/// Argument of an abstraction.
pub trait Atom {}

impl Atom for Pdrs {}
impl Atom for Ref {}

/// Structure, possibly abstracted over atoms.
pub trait Abstract {}

impl Abstract for Pdrs {}
impl<A: Atom, T: Abstract> Abstract for Lambda<A, T> {}

/// Abstraction of `T` over an atom `A`.
pub struct Lambda<A, T>(Box<dyn Fn(A) -> T>);

impl<A: Atom, T: Abstract> Lambda<A, T> {
    pub fn new(f: impl Fn(A) -> T + 'static) -> Self {
        Self(Box::new(f))
    }

    /// Apply the abstraction to an atom.
    pub fn apply(&self, x: A) -> T {
        (self.0)(x)
    }
}

impl Lambda<Pdrs, Pdrs> {
    /// Abstract over all placeholders `name` in `body`.
    ///
    /// ~~~
    /// # use pdrt::{Lambda, Pdrs};
    /// let body = Pdrs::parse_str("(P + <1,{(1,x)},{(1,man(x))},{}>)")?;
    /// let f = Lambda::abstract_over("P", body.clone());
    /// let x = Pdrs::parse_str("<2,{},{},{}>")?;
    /// assert_eq!(f.apply(x.clone()), body.subst("P", &x));
    /// # Ok::<_, pdrt::Error>(())
    /// ~~~
    pub fn abstract_over(name: impl Into<String>, body: Pdrs) -> Self {
        let name = name.into();
        Self::new(move |x| body.subst(&name, &x))
    }
}

/// Beta reduction: `f << x` applies `f` to `x`.
impl<A: Atom, T: Abstract> Shl<A> for Lambda<A, T> {
    type Output = T;
    fn shl(self, x: A) -> T {
        self.apply(x)
    }
}

impl<A: Atom, T: Abstract> Shl<A> for &Lambda<A, T> {
    type Output = T;
    fn shl(self, x: A) -> T {
        self.apply(x)
    }
}

/// Function composition: `(f * g) << x` equals `f << (g << x)`.
impl<A, B, T> Mul<Lambda<B, A>> for Lambda<A, T>
where
    A: Atom + Abstract + 'static,
    B: Atom + 'static,
    T: Abstract + 'static,
{
    type Output = Lambda<B, T>;
    fn mul(self, g: Lambda<B, A>) -> Lambda<B, T> {
        Lambda::new(move |x| self.apply(g.apply(x)))
    }
}

/// Apply a function to an atom.
pub fn beta_reduce<A: Atom, T: Abstract>(f: impl FnOnce(A) -> T, x: A) -> T {
    f(x)
}

/// Compose two functions, applying `g` first.
pub fn compose<A, B, C>(f: impl Fn(B) -> C, g: impl Fn(A) -> B) -> impl Fn(A) -> C {
    move |x| f(g(x))
}

impl Pdrs {
    /// Replace all placeholders `name` by `value`.
    ///
    /// ~~~
    /// # use pdrt::Pdrs;
    /// let p = Pdrs::parse_str("<1,{},{(1,NOT (P * <2,{},{},{}>))},{}>")?;
    /// let x = Pdrs::parse_str("<3,{},{},{}>")?;
    /// let q = Pdrs::parse_str("<1,{},{(1,NOT (<3,{},{},{}> * <2,{},{},{}>))},{}>")?;
    /// assert_eq!(p.subst("P", &x), q);
    /// assert_eq!(p.subst("Q", &x), p);
    /// # Ok::<_, pdrt::Error>(())
    /// ~~~
    pub fn subst(&self, name: &str, value: &Self) -> Self {
        let rec = |p: &Self| p.subst(name, value);
        match self {
            Self::Lambda(x) if x == name => value.clone(),
            Self::Lambda(_) => self.clone(),
            Self::AMerge(l, r) => Self::amerge(rec(l), rec(r)),
            Self::PMerge(l, r) => Self::pmerge(rec(l), rec(r)),
            Self::Basic(b) => {
                let conds = b.conds.iter().map(|pc| PCon {
                    pvar: pc.pvar,
                    cond: pc.cond.map_pdrss(rec),
                });
                Self::Basic(Basic {
                    label: b.label,
                    maps: b.maps.clone(),
                    universe: b.universe.clone(),
                    conds: conds.collect(),
                })
            }
        }
    }
}

#[cfg(test)]
use alloc::format;

#[cfg(test)]
fn rel(name: &str, x: &Ref) -> Pdrs {
    let s = format!("<1,{{}},{{(1,{}({}))}},{{}}>", name, x);
    Pdrs::parse_str(&s).unwrap()
}

#[test]
fn saturated() {
    let p = Pdrs::parse_str("<1,{(1,x)},{(1,man(x))},{}>").unwrap();
    let q = Pdrs::parse_str("<2,{},{},{}>").unwrap();
    let merge = Lambda::new(|p: Pdrs| Lambda::new(move |q: Pdrs| Pdrs::amerge(p.clone(), q)));
    assert_eq!(merge << p.clone() << q.clone(), Pdrs::amerge(p, q));

    let x = Ref::from("x");
    assert_eq!(beta_reduce(|x| rel("man", &x), x.clone()), rel("man", &x));
}

#[test]
fn associativity() {
    let neg = |p: Pdrs| Pdrs::parse_str(&format!("<9,{{}},{{(9,NOT {})}},{{}}>", p)).unwrap();
    let f = |p: Pdrs| Pdrs::amerge(Pdrs::Lambda("F".into()), p);
    let g = |p: Pdrs| Pdrs::pmerge(p, Pdrs::Lambda("G".into()));
    let x = Pdrs::parse_str("<1,{},{},{}>").unwrap();

    let fg_h = compose(compose(f, g), neg);
    let f_gh = compose(f, compose(g, neg));
    assert_eq!(fg_h(x.clone()), f_gh(x.clone()));

    let l = |h: fn(Pdrs) -> Pdrs| Lambda::new(h);
    let lfg_h = (l(f) * l(g)) * l(neg);
    let lf_gh = l(f) * (l(g) * l(neg));
    assert_eq!(&lfg_h << x.clone(), &lf_gh << x.clone());
    assert_eq!(lfg_h << x.clone(), f(g(neg(x))));
}
