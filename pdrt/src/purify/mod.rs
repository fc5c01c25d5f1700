//! Purification, eliminating accidental reuse of variables.
//!
//! Purification proceeds in two passes:
//! First, context labels that were already used elsewhere are renamed.
//! Then, referents that are declared again independently of
//! their previous declarations are renamed, together with their uses.

mod pref;
mod pvar;

use crate::pdrs::{PRef, PVar, Pdrs, Ref};
use crate::structure::GCtx;
use crate::variable::fresh_refs;
use alloc::vec::Vec;

/// Persistent set of projection variables seen so far.
type Seen = im::HashSet<PVar, fnv::FnvBuildHasher>;

impl Pdrs {
    /// Rename all unbound duplicate projection variables and referents.
    ///
    /// Free projection variables are never renamed.
    ///
    /// ~~~
    /// # use pdrt::Pdrs;
    /// let p = Pdrs::parse_str("(<1,{(1,x)},{(1,man(x))},{}> + <1,{(1,y)},{(1,woman(y))},{}>)")?;
    /// let q = Pdrs::parse_str("(<1,{(1,x)},{(1,man(x))},{}> + <2,{(2,y)},{(2,woman(y))},{}>)")?;
    /// assert_eq!(p.purify(), q);
    /// assert!(q.is_pure());
    /// # Ok::<_, pdrt::Error>(())
    /// ~~~
    pub fn purify(&self) -> Self {
        let gc = GCtx::new(self);
        let free: Seen = gc.free_pvars(self).into_iter().collect();
        let (g, _) = self.purify_pvars(&gc, free);

        let gc = GCtx::new(&g);
        let mut eps = Vec::new();
        let mut dps = Vec::new();
        g.unbound_dup_prefs(&gc, &mut eps, &mut dps);
        if dps.is_empty() {
            return g;
        }

        let olds: Vec<Ref> = dps.iter().map(|pr| pr.r.clone()).collect();
        let news = fresh_refs(&olds, &g.refs());
        let pairs: Vec<(PRef, PRef)> = dps
            .into_iter()
            .zip(news)
            .map(|(pr, r)| {
                let new = PRef::new(pr.pvar, r);
                debug!("rename duplicate referent {} to {}", pr, new);
                (pr, new)
            })
            .collect();
        g.purify_prefs(&gc, &pairs)
    }

    /// Return true if purification leaves the structure unchanged.
    pub fn is_pure(&self) -> bool {
        self.purify() == *self
    }
}

#[cfg(test)]
fn parse(s: &str) -> Pdrs {
    Pdrs::parse_str(s).unwrap()
}

#[test]
fn sibling_contexts() {
    let p = "(<1,{(1,x)},{(1,man(x))},{}> + <1,{(1,y)},{(1,NOT <3,{},{(1,woman(y))},{}>)},{}>)";
    let q = "(<1,{(1,x)},{(1,man(x))},{}> + <4,{(4,y)},{(4,NOT <3,{},{(4,woman(y))},{}>)},{}>)";
    assert_eq!(parse(p).purify(), parse(q));
}

#[test]
fn unrelated_referents() {
    let p = "<1,{},{(1,<2,{(2,x)},{(2,man(x))},{}> OR
                   <3,{},{(3,NOT <4,{(4,x)},{(4,happy(x)),(4,NOT <5,{},{(5,sad(x))},{}>)},{}>)},{}>)},{}>";
    let q = "<1,{},{(1,<2,{(2,x)},{(2,man(x))},{}> OR
                   <3,{},{(3,NOT <4,{(4,x1)},{(4,happy(x1)),(4,NOT <5,{},{(5,sad(x1))},{}>)},{}>)},{}>)},{}>";
    assert_eq!(parse(p).purify(), parse(q));
}

#[test]
fn free_accessible_referents() {
    // the free x in the outer context is accessible from the duplicate (3,x)
    let p = "<1,{},{(1,<2,{(2,x)},{},{}> OR <3,{(3,x)},{},{}>),(1,g(x))},{}>";
    let q = "<1,{},{(1,<2,{(2,x)},{},{}> OR <3,{(3,x1)},{},{}>),(1,g(x1))},{}>";
    assert_eq!(parse(p).purify(), parse(q));
}

#[test]
fn proposition_referents() {
    let p = "<1,{},{(1,<2,{(2,x)},{},{}> OR <3,{},{(3,x: <5,{},{(5,f(x))},{}>)},{}>)},{}>";
    let q = "<1,{},{(1,<2,{(2,x)},{},{}> OR <3,{},{(3,x1: <5,{},{(5,f(x))},{}>)},{}>)},{}>";
    assert_eq!(parse(p).purify(), parse(q));
}

#[test]
fn maximal_labels() {
    use alloc::format;
    let p = format!("(<{0},{{}},{{}},{{}}> + <{0},{{}},{{}},{{}}>)", PVar::MAX);
    let q = format!("(<{},{{}},{{}},{{}}> + <0,{{}},{{}},{{}}>)", PVar::MAX);
    assert_eq!(parse(&p).purify(), parse(&q));
}

#[test]
fn bound_referents() {
    let ps = [
        "<1,{(1,x)},{(1,man(x)),(1,NOT <2,{},{(2,happy(x))},{}>)},{}>",
        "<1,{(1,x)},{(1,x: <2,{(2,y)},{(2,see(x,y))},{}>)},{}>",
        "<1,{(1,x)},{(1,NOT <2,{(2,x)},{(2,man(x))},{}>)},{}>",
        "(<1,{(1,x)},{},{}> + <2,{(2,x)},{(2,man(x))},{}>)",
    ];
    for p in ps.map(parse) {
        assert_eq!(p.purify(), p);
        assert!(p.is_pure());
    }
}

#[test]
fn free_preserved() {
    // the free 2 in the outer universe forces renaming the inner label 2
    let p = parse("<1,{(2,x)},{(1,NOT <2,{},{(2,man(x))},{}>)},{}>");
    let q = parse("<1,{(2,x)},{(1,NOT <3,{},{(3,man(x))},{}>)},{}>");
    let pp = p.purify();
    assert_eq!(pp, q);
    assert_eq!(pp.free_pvars(), p.free_pvars());
}

#[test]
fn idempotent() {
    let ps = [
        "(<1,{(1,x)},{(1,man(x))},{}> + <1,{(1,y)},{(1,NOT <3,{},{(1,woman(y))},{}>)},{}>)",
        "<1,{},{(1,<2,{(2,x)},{},{}> OR <3,{(3,x)},{},{}>),(1,<2,{},{},{}> IMP <2,{},{},{}>)},{}>",
        "<1,{(1,x)},{(1,NOT <2,{(2,x)},{(2,man(x))},{}>),(1,MAY <2,{},{},{}>)},{(1,7)}>",
        "(P * <1,{(4,x)},{(1,MUST <1,{},{},{}>)},{}>)",
        "<1,{},{(1,<1,{},{},{}> OR <3,{},{(1,f())},{}>)},{}>",
    ];
    for p in ps.map(parse) {
        let pp = p.purify();
        assert_eq!(pp.purify(), pp);
        assert_eq!(pp.free_pvars(), p.free_pvars());
    }
}

#[test]
fn placeholders() {
    let p = parse("(P + <1,{(1,x)},{(1,man(x))},{}>)");
    assert_eq!(p.purify(), p);
    let lambda = Pdrs::Lambda("Q".into());
    assert_eq!(lambda.purify(), lambda);
}
