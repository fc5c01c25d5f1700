//! Renaming of duplicate context labels.

use super::Seen;
use crate::pdrs::{Basic, Cond, Map, PCon, PVar, Pdrs};
use crate::structure::GCtx;
use crate::variable::fresh_pvar;
use alloc::vec::Vec;

/// Return a projection variable neither in the global structure nor seen.
fn fresh(gc: &GCtx, seen: &Seen) -> PVar {
    fresh_pvar(gc.pvars().iter().chain(seen.iter()).copied())
}

impl Pdrs {
    /// Rename every context label that occurs in `seen` or earlier in the structure.
    ///
    /// Return the purified structure together with
    /// `seen` extended by all projection variables of the structure.
    pub(crate) fn purify_pvars(&self, gc: &GCtx, seen: Seen) -> (Self, Seen) {
        match self {
            Self::Lambda(_) => (self.clone(), seen),
            Self::AMerge(l, r) => {
                let (l, seen) = l.purify_pvars(gc, seen);
                let (r, seen) = r.purify_pvars(gc, seen);
                (Self::amerge(l, r), seen)
            }
            Self::PMerge(l, r) => {
                let (l, seen) = l.purify_pvars(gc, seen);
                let (r, seen) = r.purify_pvars(gc, seen);
                (Self::pmerge(l, r), seen)
            }
            Self::Basic(b) => {
                let (b, seen) = b.purify_pvars(gc, seen);
                (b.into(), seen)
            }
        }
    }
}

impl Basic {
    fn purify_pvars(&self, gc: &GCtx, mut seen: Seen) -> (Self, Seen) {
        let b = if seen.contains(&self.label) {
            let new = fresh(gc, &seen);
            debug!("rename duplicate context {} to {}", self.label, new);
            self.rename_in(gc, &[(self.label, new)], &[])
        } else {
            self.clone()
        };
        let Basic {
            label,
            maps,
            universe,
            conds,
        } = b;

        seen.insert(label);
        seen.extend(maps.iter().flat_map(|Map(a, b)| [*a, *b]));
        seen.extend(universe.iter().map(|pr| pr.pvar));

        let mut pconds = Vec::with_capacity(conds.len());
        for pc in &conds {
            let (pc, seen_) = pc.purify_pvars(gc, seen);
            seen = seen_;
            pconds.push(pc);
        }

        let b = Basic {
            label,
            maps,
            universe,
            conds: pconds,
        };
        (b, seen)
    }
}

impl PCon {
    fn purify_pvars(&self, gc: &GCtx, seen: Seen) -> (Self, Seen) {
        let pv = self.pvar;
        let sub = |p: &Pdrs, seen: Seen| p.purify_pvars(gc, seen.update(pv));
        let (cond, seen) = match &self.cond {
            Cond::Rel(..) => (self.cond.clone(), seen.update(pv)),
            Cond::Neg(p) => {
                let (p, seen) = sub(p, seen);
                (Cond::Neg(p), seen)
            }
            Cond::Diamond(p) => {
                let (p, seen) = sub(p, seen);
                (Cond::Diamond(p), seen)
            }
            Cond::Box(p) => {
                let (p, seen) = sub(p, seen);
                (Cond::Box(p), seen)
            }
            Cond::Prop(r, p) => {
                let (p, seen) = sub(p, seen);
                (Cond::Prop(r.clone(), p), seen)
            }
            Cond::Imp(p1, p2) => {
                let (p1, p2, seen) = purify_binary(gc, pv, p1, p2, seen, true);
                (Cond::Imp(p1, p2), seen)
            }
            Cond::Or(p1, p2) => {
                let (p1, p2, seen) = purify_binary(gc, pv, p1, p2, seen, false);
                (Cond::Or(p1, p2), seen)
            }
        };
        (PCon { pvar: pv, cond }, seen)
    }
}

/// Purify the operands of an implication or disjunction tagged with `pv`.
///
/// If the label of the left operand was already seen,
/// it is renamed in the left operand before purifying it.
/// The right operand is renamed as well only if the left operand
/// is accessible from it, as for the consequent of an implication;
/// otherwise the old label in the right operand refers to an outer context.
fn purify_binary(
    gc: &GCtx,
    pv: PVar,
    p1: &Pdrs,
    p2: &Pdrs,
    seen: Seen,
    accessible: bool,
) -> (Pdrs, Pdrs, Seen) {
    let pvs = match p1.label() {
        Some(l) if seen.contains(&l) => {
            let new = fresh(gc, &seen);
            debug!("rename duplicate antecedent context {} to {}", l, new);
            Vec::from([(l, new)])
        }
        _ => Vec::new(),
    };
    let (p1, seen) = p1.rename_in(gc, &pvs, &[]).purify_pvars(gc, seen.update(pv));
    let p2 = if accessible {
        p2.rename_in(gc, &pvs, &[])
    } else {
        p2.clone()
    };
    let (p2, seen) = p2.purify_pvars(gc, seen);
    (p1, p2, seen)
}

#[test]
fn implication() {
    let p = "<1,{},{(1,<2,{},{},{}> IMP <3,{},{},{}>),(1,<2,{},{(2,f())},{}> IMP <4,{},{(2,g())},{}>)},{}>";
    let q = "<1,{},{(1,<2,{},{},{}> IMP <3,{},{},{}>),(1,<5,{},{(5,f())},{}> IMP <4,{},{(5,g())},{}>)},{}>";
    let p = Pdrs::parse_str(p).unwrap();
    let gc = GCtx::new(&p);
    let (pp, seen) = p.purify_pvars(&gc, Seen::default());
    assert_eq!(pp, Pdrs::parse_str(q).unwrap());
    assert!([1, 2, 3, 4, 5].iter().all(|pv| seen.contains(pv)));
}

#[test]
fn disjunction() {
    // the 1 in the right disjunct refers to the outer context
    let p = "<1,{},{(1,<1,{},{},{}> OR <3,{},{(1,f())},{}>)},{}>";
    let q = "<1,{},{(1,<4,{},{},{}> OR <3,{},{(1,f())},{}>)},{}>";
    let p = Pdrs::parse_str(p).unwrap();
    let gc = GCtx::new(&p);
    let (pp, _) = p.purify_pvars(&gc, Seen::default());
    assert_eq!(pp, Pdrs::parse_str(q).unwrap());

    assert_eq!(pp.purify(), pp);
    assert_eq!(pp.free_pvars(), p.free_pvars());
}
