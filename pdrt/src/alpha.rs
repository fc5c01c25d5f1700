//! Alpha conversion, renaming bound projection variables and referents.

use crate::pdrs::{Basic, Cond, Map, PCon, PRef, PVar, Pdrs, Ref};
use crate::structure::GCtx;
use crate::variable::rename;
use alloc::boxed::Box;

impl Pdrs {
    /// Rename projection variables and referents that are bound in the structure.
    ///
    /// Every pair `(old, new)` replaces `old` by `new`;
    /// if several pairs share the same `old`, the first one counts.
    ///
    /// Referents in conditions are renamed only if they are bound
    /// in the *renamed* context of their condition.
    /// To rename both projection variables and referents,
    /// it is therefore advisable to use separate calls.
    ///
    /// ~~~
    /// # use pdrt::{Pdrs, Ref};
    /// let p = Pdrs::parse_str("<1,{(1,x)},{(1,man(x)),(2,happy(x))},{}>")?;
    ///
    /// let q = Pdrs::parse_str("<3,{(3,x)},{(3,man(x)),(2,happy(x))},{}>")?;
    /// assert_eq!(p.alpha_convert(&[(1, 3), (2, 4)], &[]), q);
    ///
    /// let rs = [(Ref::from("x"), Ref::from("y"))];
    /// let q = Pdrs::parse_str("<1,{(1,y)},{(1,man(y)),(2,happy(x))},{}>")?;
    /// assert_eq!(p.alpha_convert(&[], &rs), q);
    /// # Ok::<_, pdrt::Error>(())
    /// ~~~
    pub fn alpha_convert(&self, pvs: &[(PVar, PVar)], rs: &[(Ref, Ref)]) -> Self {
        if pvs.is_empty() && rs.is_empty() {
            return self.clone();
        }
        self.rename_in(&GCtx::new(self), pvs, rs)
    }

    /// Rename bound variables, where boundness is determined in the global context.
    pub(crate) fn rename_in(&self, gc: &GCtx, pvs: &[(PVar, PVar)], rs: &[(Ref, Ref)]) -> Self {
        let rec = |p: &Self| Box::new(p.rename_in(gc, pvs, rs));
        match self {
            Self::Lambda(_) => self.clone(),
            Self::AMerge(l, r) => Self::AMerge(rec(l), rec(r)),
            Self::PMerge(l, r) => Self::PMerge(rec(l), rec(r)),
            Self::Basic(b) => Self::Basic(b.rename_in(gc, pvs, rs)),
        }
    }
}

impl Basic {
    pub(crate) fn rename_in(&self, gc: &GCtx, pvs: &[(PVar, PVar)], rs: &[(Ref, Ref)]) -> Self {
        let pvar = |pv: PVar| {
            if gc.bound_in(pv, self) {
                rename(&pv, pvs)
            } else {
                pv
            }
        };
        let pref = |pv: PVar, r: &Ref| {
            if gc.declared(&PRef::new(pv, r.clone())) {
                rename(r, rs)
            } else {
                r.clone()
            }
        };

        let label = rename(&self.label, pvs);
        if label != self.label {
            trace!("rename context {} to {}", self.label, label);
        }
        let maps = self.maps.iter().map(|Map(a, b)| Map(pvar(*a), pvar(*b)));
        let universe = self.universe.iter().map(|pr| PRef {
            pvar: pvar(pr.pvar),
            r: rename(&pr.r, rs),
        });
        let conds = self.conds.iter().map(|pc| {
            let pv = pvar(pc.pvar);
            let cond = match &pc.cond {
                Cond::Rel(name, args) => {
                    Cond::Rel(name.clone(), args.iter().map(|r| pref(pv, r)).collect())
                }
                Cond::Prop(r, p) => Cond::Prop(pref(pv, r), p.rename_in(gc, pvs, rs)),
                cond => cond.map_pdrss(|p| p.rename_in(gc, pvs, rs)),
            };
            PCon { pvar: pv, cond }
        });

        Self {
            label,
            maps: maps.collect(),
            universe: universe.collect(),
            conds: conds.collect(),
        }
    }
}

#[cfg(test)]
use alloc::vec;

#[test]
fn free_untouched() {
    // 2 and z are free, hence not renamed
    let p = "<1,{(1,x)},{(2,man(x)),(1,see(x,z)),(1,NOT <3,{},{(1,f(x))},{}>)},{}>";
    let p = Pdrs::parse_str(p).unwrap();

    let rs = [(Ref::from("x"), Ref::from("y")), (Ref::from("z"), Ref::from("w"))];
    let q = "<1,{(1,y)},{(2,man(x)),(1,see(y,z)),(1,NOT <3,{},{(1,f(y))},{}>)},{}>";
    assert_eq!(p.alpha_convert(&[], &rs), Pdrs::parse_str(q).unwrap());

    let q = "<5,{(5,x)},{(2,man(x)),(5,see(x,z)),(5,NOT <3,{},{(5,f(x))},{}>)},{}>";
    assert_eq!(p.alpha_convert(&[(1, 5), (2, 6)], &[]), Pdrs::parse_str(q).unwrap());
}

#[test]
fn identity() {
    let p = Pdrs::parse_str("(P + <1,{(1,x)},{(1,x: <2,{},{},{}>)},{(1,2)}>)").unwrap();
    assert_eq!(p.alpha_convert(&[], &[]), p);
    let lambda = Pdrs::Lambda("P".into());
    let rs = vec![(Ref::from("x"), Ref::from("y"))];
    assert_eq!(lambda.alpha_convert(&[(1, 2)], &rs), lambda);
}
