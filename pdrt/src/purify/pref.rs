//! Renaming of duplicate projected referents.

use crate::pdrs::{Basic, Cond, PCon, PRef, PVar, Pdrs, Ref};
use crate::structure::GCtx;
use alloc::vec::Vec;

impl GCtx<'_> {
    /// Return true if the referent `pr`, occurring in `lp`, is independent of `others`.
    ///
    /// This is the case if `pr` is bound by none of `others`, and
    /// if `pr` is free, none of `others` is accessible from `pr`.
    pub fn independent(&self, pr: &PRef, others: &[&PRef], lp: &Pdrs) -> bool {
        let bound_by = |o: &&PRef| self.is_pref_bound_by_pref(pr, lp, o);
        let accessible = |o: &&PRef| self.is_accessible(o.pvar, pr.pvar);
        !others.iter().any(bound_by)
            && (self.is_bound_pref(pr, lp) || !others.iter().any(accessible))
    }

    /// Return true if `pr` has the referent of some `eps`,
    /// but is independent of all these.
    fn duplicate(&self, pr: &PRef, eps: &[PRef], lp: &Pdrs) -> bool {
        let same: Vec<&PRef> = eps.iter().filter(|e| e.r == pr.r).collect();
        !same.is_empty() && self.independent(pr, &same, lp)
    }
}

fn push_dup(dps: &mut Vec<PRef>, pr: PRef) {
    if !dps.contains(&pr) {
        trace!("duplicate referent {}", pr);
        dps.push(pr)
    }
}

impl Pdrs {
    /// Find referents that are introduced again independently of their previous introductions.
    ///
    /// Referents are introduced in universes and by propositions.
    /// `eps` contains the universe entries seen so far, and
    /// `dps` the duplicates found so far.
    pub(crate) fn unbound_dup_prefs(&self, gc: &GCtx, eps: &mut Vec<PRef>, dps: &mut Vec<PRef>) {
        match self {
            Self::Lambda(_) => (),
            Self::AMerge(l, r) | Self::PMerge(l, r) => {
                l.unbound_dup_prefs(gc, eps, dps);
                r.unbound_dup_prefs(gc, eps, dps)
            }
            Self::Basic(b) => {
                for pr in &b.universe {
                    if gc.duplicate(pr, eps, self) {
                        push_dup(dps, pr.clone())
                    }
                }
                eps.extend(b.universe.iter().cloned());

                for pc in &b.conds {
                    if let Cond::Prop(r, _) = &pc.cond {
                        let pr = PRef::new(pc.pvar, r.clone());
                        if gc.duplicate(&pr, eps, self) {
                            push_dup(dps, pr)
                        }
                    }
                    for p in pc.cond.pdrss() {
                        p.unbound_dup_prefs(gc, eps, dps)
                    }
                }
            }
        }
    }

    /// Replace referents according to conversion pairs.
    ///
    /// A referent occurrence is replaced by the target of the first pair whose source
    /// 1. equals the occurrence,
    /// 2. binds the occurrence, or
    /// 3. has the same referent and a context from which
    ///    the context of the occurrence is accessible,
    ///    provided that the occurrence is free.
    pub(crate) fn purify_prefs(&self, gc: &GCtx, pairs: &[(PRef, PRef)]) -> Self {
        let rec = |p: &Self| p.purify_prefs(gc, pairs);
        match self {
            Self::Lambda(_) => self.clone(),
            Self::AMerge(l, r) => Self::amerge(rec(l), rec(r)),
            Self::PMerge(l, r) => Self::pmerge(rec(l), rec(r)),
            Self::Basic(b) => {
                let convert = |pv: PVar, r: &Ref| gc.convert(&PRef::new(pv, r.clone()), self, pairs);
                let universe = b.universe.iter();
                let universe = universe.map(|pr| PRef::new(pr.pvar, convert(pr.pvar, &pr.r)));
                let conds = b.conds.iter().map(|pc| {
                    let cond = match &pc.cond {
                        Cond::Rel(name, args) => {
                            let args = args.iter().map(|a| convert(pc.pvar, a));
                            Cond::Rel(name.clone(), args.collect())
                        }
                        Cond::Prop(r, p) => Cond::Prop(convert(pc.pvar, r), rec(p)),
                        cond => cond.map_pdrss(rec),
                    };
                    PCon {
                        pvar: pc.pvar,
                        cond,
                    }
                });
                Self::Basic(Basic {
                    label: b.label,
                    maps: b.maps.clone(),
                    universe: universe.collect(),
                    conds: conds.collect(),
                })
            }
        }
    }
}

impl GCtx<'_> {
    /// Return the referent to replace the occurrence `pr` in `lp` with.
    fn convert(&self, pr: &PRef, lp: &Pdrs, pairs: &[(PRef, PRef)]) -> Ref {
        let same = |(src, _): &&(PRef, PRef)| src.r == pr.r;
        let exact = || pairs.iter().find(|(src, _)| src == pr);
        let bound = || {
            let mut same = pairs.iter().filter(same);
            same.find(|(src, _)| self.is_pref_bound_by_pref(pr, lp, src))
        };
        let free = || {
            let mut same = pairs.iter().filter(same);
            let is_free = !self.is_bound_pref(pr, lp);
            same.find(|(src, _)| is_free && self.is_accessible(pr.pvar, src.pvar))
        };
        match exact().or_else(bound).or_else(free) {
            Some((_, tgt)) => tgt.r.clone(),
            None => pr.r.clone(),
        }
    }
}

#[test]
fn independence() {
    let p = "<1,{(1,x)},{(1,<2,{(2,x)},{},{}> OR <3,{},{(3,NOT <4,{(4,x)},{},{}>)},{}>)},{}>";
    let p = Pdrs::parse_str(p).unwrap();
    let gc = GCtx::new(&p);
    let (x1, x2, x4) = (PRef::new(1, "x"), PRef::new(2, "x"), PRef::new(4, "x"));
    // bound by the outermost declaration
    assert!(!gc.independent(&x4, &[&x1], &p));
    assert!(!gc.independent(&x2, &[&x1], &p));
    // declared in unrelated contexts
    assert!(gc.independent(&x4, &[&x2], &p));
    // free and accessible
    let y = PRef::new(3, "y");
    assert!(!gc.independent(&y, &[&PRef::new(1, "y")], &p));
    assert!(gc.independent(&y, &[&PRef::new(2, "y")], &p));

    let mut eps = Vec::new();
    let mut dps = Vec::new();
    p.unbound_dup_prefs(&gc, &mut eps, &mut dps);
    assert_eq!(eps, Vec::from([x1, x2, x4]));
    assert!(dps.is_empty());
}
