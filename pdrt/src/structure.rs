//! Structural queries: variables, accessibility and boundness.

use crate::pdrs::{Basic, Cond, Map, PRef, PVar, Pdrs, Ref};
use alloc::vec::Vec;
use fnv::{FnvHashMap, FnvHashSet};

impl Pdrs {
    /// Return the labels of all basic structures in pre-order.
    pub fn labels(&self) -> Vec<PVar> {
        let mut labels = Vec::new();
        self.visit(&mut |b| labels.push(b.label));
        labels
    }

    /// Return all universe entries in pre-order.
    pub fn universes(&self) -> Vec<&PRef> {
        let mut universes = Vec::new();
        self.visit(&mut |b| universes.extend(b.universe.iter()));
        universes
    }

    /// Return all projection variables occurring in the structure.
    pub fn pvars(&self) -> FnvHashSet<PVar> {
        let mut pvars = FnvHashSet::default();
        self.visit(&mut |b| {
            pvars.insert(b.label);
            pvars.extend(b.pointers())
        });
        pvars
    }

    /// Return all discourse referents occurring in the structure.
    pub fn refs(&self) -> FnvHashSet<Ref> {
        let mut refs = FnvHashSet::default();
        self.visit(&mut |b| {
            refs.extend(b.universe.iter().map(|pr| pr.r.clone()));
            for pc in &b.conds {
                match &pc.cond {
                    Cond::Rel(_, args) => refs.extend(args.iter().cloned()),
                    Cond::Prop(r, _) => {
                        refs.insert(r.clone());
                    }
                    _ => (),
                }
            }
        });
        refs
    }

    /// Return the projection variables that are free in the structure.
    ///
    /// ~~~
    /// # use pdrt::Pdrs;
    /// let p = Pdrs::parse_str("<1,{(3,x)},{(1,NOT <2,{},{(2,man(x)),(1,old(x))},{}>)},{}>")?;
    /// assert_eq!(p.free_pvars().into_iter().collect::<Vec<_>>(), vec![3]);
    /// # Ok::<_, pdrt::Error>(())
    /// ~~~
    pub fn free_pvars(&self) -> FnvHashSet<PVar> {
        GCtx::new(self).free_pvars(self)
    }

    /// Run a function on every basic structure in pre-order.
    ///
    /// Lambda placeholders are not descended into.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Basic)) {
        match self {
            Self::Lambda(_) => (),
            Self::AMerge(l, r) | Self::PMerge(l, r) => {
                l.visit(f);
                r.visit(f)
            }
            Self::Basic(b) => {
                f(b);
                for pc in &b.conds {
                    pc.cond.pdrss().for_each(|p| p.visit(f))
                }
            }
        }
    }
}

/// Global context in which local structures are interpreted.
///
/// This precomputes the projection graph and the universes of
/// a global structure, such that accessibility and boundness
/// can be queried for any of its substructures.
pub struct GCtx<'a> {
    /// `b` is in `graph[a]` if context `b` is directly accessible from context `a`
    graph: FnvHashMap<PVar, Vec<PVar>>,
    universes: Vec<&'a PRef>,
    labels: FnvHashSet<PVar>,
    pvars: FnvHashSet<PVar>,
}

impl<'a> GCtx<'a> {
    pub fn new(gp: &'a Pdrs) -> Self {
        let mut gc = Self {
            graph: Default::default(),
            universes: gp.universes(),
            labels: gp.labels().into_iter().collect(),
            pvars: gp.pvars(),
        };
        gc.add_pdrs(gp, None);
        gc
    }

    fn add_edge(&mut self, from: PVar, to: PVar) {
        self.graph.entry(from).or_default().push(to)
    }

    fn add_pdrs(&mut self, p: &Pdrs, parent: Option<PVar>) {
        match p {
            Pdrs::Lambda(_) => (),
            Pdrs::AMerge(l, r) => {
                self.add_pdrs(l, parent);
                self.add_pdrs(r, parent);
                if let (Some(ll), Some(rl)) = (l.label(), r.label()) {
                    self.add_edge(ll, rl);
                    self.add_edge(rl, ll)
                }
            }
            Pdrs::PMerge(l, r) => {
                self.add_pdrs(l, parent);
                self.add_pdrs(r, parent);
                if let (Some(ll), Some(rl)) = (l.label(), r.label()) {
                    self.add_edge(rl, ll)
                }
            }
            Pdrs::Basic(b) => self.add_basic(b, parent),
        }
    }

    fn add_basic(&mut self, b: &Basic, parent: Option<PVar>) {
        if let Some(parent) = parent {
            self.add_edge(b.label, parent)
        }
        b.maps.iter().for_each(|Map(x, y)| self.add_edge(*x, *y));
        for pc in &b.conds {
            pc.cond.pdrss().for_each(|p| self.add_pdrs(p, Some(b.label)));
            if let Cond::Imp(p1, p2) = &pc.cond {
                if let (Some(l1), Some(l2)) = (p1.label(), p2.label()) {
                    self.add_edge(l2, l1)
                }
            }
        }
    }

    /// Return all projection variables of the global structure.
    pub fn pvars(&self) -> &FnvHashSet<PVar> {
        &self.pvars
    }

    /// Return all contexts accessible from `pv`, including `pv` itself.
    pub fn accessible(&self, pv: PVar) -> FnvHashSet<PVar> {
        let mut seen = FnvHashSet::default();
        let mut todo = Vec::from([pv]);
        while let Some(x) = todo.pop() {
            if seen.insert(x) {
                let succs = self.graph.get(&x).into_iter().flatten();
                todo.extend(succs.filter(|y| !seen.contains(*y)))
            }
        }
        seen
    }

    /// Return true if context `pv1` is accessible from context `pv2`.
    pub fn is_accessible(&self, pv1: PVar, pv2: PVar) -> bool {
        pv1 == pv2 || self.accessible(pv2).contains(&pv1)
    }

    /// Return true if `pv` is bound in the local structure `lp`.
    pub fn is_bound_pvar(&self, pv: PVar, lp: &Pdrs) -> bool {
        match lp {
            Pdrs::Lambda(_) => false,
            Pdrs::AMerge(l, r) | Pdrs::PMerge(l, r) => {
                self.is_bound_pvar(pv, l) || self.is_bound_pvar(pv, r)
            }
            Pdrs::Basic(b) => self.bound_in(pv, b),
        }
    }

    /// Return true if `pv` is bound at the basic structure `b`.
    ///
    /// This is the case if `pv` is the label of `b` or
    /// the label of some context accessible from `b`.
    pub(crate) fn bound_in(&self, pv: PVar, b: &Basic) -> bool {
        pv == b.label || (self.labels.contains(&pv) && self.is_accessible(pv, b.label))
    }

    /// Return true if the referent `pr`, occurring in `lp`, is bound.
    pub fn is_bound_pref(&self, pr: &PRef, lp: &Pdrs) -> bool {
        !lp.is_lambda() && self.declared(pr)
    }

    /// Return true if `pr` is declared in a universe accessible from its context.
    pub(crate) fn declared(&self, pr: &PRef) -> bool {
        let acc = self.accessible(pr.pvar);
        let mut universes = self.universes.iter();
        universes.any(|u| u.r == pr.r && acc.contains(&u.pvar))
    }

    /// Return true if the referent `pr`, occurring in `lp`, is bound by `by`.
    pub fn is_pref_bound_by_pref(&self, pr: &PRef, lp: &Pdrs, by: &PRef) -> bool {
        !lp.is_lambda() && self.declared_by(pr, by)
    }

    pub(crate) fn declared_by(&self, pr: &PRef, by: &PRef) -> bool {
        pr.r == by.r && self.universes.contains(&by) && self.is_accessible(by.pvar, pr.pvar)
    }

    /// Return the projection variables that are free in `lp`.
    pub fn free_pvars(&self, lp: &Pdrs) -> FnvHashSet<PVar> {
        let mut free = FnvHashSet::default();
        lp.visit(&mut |b| free.extend(b.pointers().filter(|pv| !self.bound_in(*pv, b))));
        free
    }
}

#[cfg(test)]
use alloc::vec;

#[test]
fn accessibility() {
    let p = Pdrs::parse_str(
        "<1,{(1,x)},{(1,<2,{(2,y)},{},{}> IMP <3,{},{(3,love(x,y))},{}>),
                     (1,<4,{},{},{}> OR <5,{},{},{}>)},{(1,6)}>",
    )
    .unwrap();
    let gc = GCtx::new(&p);
    assert!(gc.is_accessible(1, 3));
    assert!(gc.is_accessible(2, 3));
    assert!(!gc.is_accessible(3, 2));
    assert!(!gc.is_accessible(4, 5));
    assert!(!gc.is_accessible(5, 4));
    assert!(gc.is_accessible(6, 5));
    assert!(gc.is_accessible(7, 7));
    assert!(!gc.is_accessible(7, 1));
}

#[test]
fn boundness() {
    let p = Pdrs::parse_str("<1,{(1,x)},{(1,NOT <2,{(2,y)},{(2,see(x,y))},{}>),(1,f(y))},{}>")
        .unwrap();
    let gc = GCtx::new(&p);
    let neg = match &p {
        Pdrs::Basic(b) => b.conds[0].cond.pdrss().next().unwrap(),
        _ => panic!("basic structure expected"),
    };
    assert!(gc.is_bound_pvar(1, neg));
    assert!(!gc.is_bound_pvar(2, &p));
    assert!(gc.is_bound_pref(&PRef::new(2, "x"), neg));
    assert!(!gc.is_bound_pref(&PRef::new(1, "y"), &p));
    assert!(gc.is_pref_bound_by_pref(&PRef::new(2, "x"), neg, &PRef::new(1, "x")));
    assert!(!gc.is_pref_bound_by_pref(&PRef::new(1, "y"), &p, &PRef::new(2, "y")));
    let lambda = Pdrs::Lambda("P".into());
    assert!(!gc.is_bound_pref(&PRef::new(1, "x"), &lambda));
}

#[test]
fn variables() {
    let p = Pdrs::parse_str("(<1,{(1,x)},{(1,man(x))},{}> + <2,{(4,y)},{(2,x: <3,{},{},{}>)},{(2,5)}>)")
        .unwrap();
    assert_eq!(p.labels(), vec![1, 2, 3]);
    let pvars: FnvHashSet<_> = [1, 2, 3, 4, 5].into_iter().collect();
    assert_eq!(p.pvars(), pvars);
    let refs: FnvHashSet<Ref> = ["x", "y"].into_iter().map(Ref::from).collect();
    assert_eq!(p.refs(), refs);
    // 5 is accessible via a MAP, but it does not label any context
    let free: FnvHashSet<_> = [4, 5].into_iter().collect();
    assert_eq!(p.free_pvars(), free);
}
