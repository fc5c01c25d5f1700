//! Resolution of merges into single contexts.

use crate::pdrs::{Basic, Map, PCon, Pdrs};
use crate::structure::GCtx;
use alloc::vec::Vec;

impl Pdrs {
    /// Purify the structure and resolve all merges of basic structures.
    ///
    /// Merges with placeholder operands remain unresolved.
    ///
    /// ~~~
    /// # use pdrt::Pdrs;
    /// let p = Pdrs::parse_str("(<1,{(1,x)},{(1,man(x))},{}> + <1,{(1,y)},{(1,see(x,y))},{}>)")?;
    /// let q = Pdrs::parse_str("<2,{(2,x),(2,y)},{(2,man(x)),(2,see(x,y))},{}>")?;
    /// assert_eq!(p.resolve_merges(), q);
    ///
    /// let p = Pdrs::parse_str("(<1,{(1,x)},{(1,man(x))},{}> * <2,{},{(2,happy(x))},{}>)")?;
    /// let q = Pdrs::parse_str("<2,{(1,x)},{(1,man(x)),(2,happy(x))},{(2,1)}>")?;
    /// assert_eq!(p.resolve_merges(), q);
    /// # Ok::<_, pdrt::Error>(())
    /// ~~~
    pub fn resolve_merges(&self) -> Self {
        self.purify().resolve()
    }

    fn resolve(&self) -> Self {
        match self {
            Self::Lambda(_) => self.clone(),
            Self::AMerge(l, r) => match (l.resolve(), r.resolve()) {
                (Self::Basic(b1), Self::Basic(b2)) => {
                    Self::Basic(b1.amerge(b2, &GCtx::new(self)))
                }
                (l, r) => Self::amerge(l, r),
            },
            Self::PMerge(l, r) => match (l.resolve(), r.resolve()) {
                (Self::Basic(b1), Self::Basic(b2)) => Self::Basic(b1.pmerge(b2)),
                (l, r) => Self::pmerge(l, r),
            },
            Self::Basic(b) => {
                let conds = b.conds.iter().map(|pc| PCon {
                    pvar: pc.pvar,
                    cond: pc.cond.map_pdrss(Self::resolve),
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

impl Basic {
    /// Merge two contexts into the context of `other`.
    ///
    /// The label of `self` is renamed to the label of `other` in both contexts,
    /// where boundness is determined in the global context of the merge.
    fn amerge(self, other: Self, gc: &GCtx) -> Self {
        trace!("assertive merge of {} into {}", self.label, other.label);
        let pvs = [(self.label, other.label)];
        let l = self.rename_in(gc, &pvs, &[]);
        let r = other.rename_in(gc, &pvs, &[]);
        l.append(r, Vec::new())
    }

    /// Merge two contexts, making `self` accessible from `other`.
    fn pmerge(self, other: Self) -> Self {
        trace!("projective merge of {} into {}", self.label, other.label);
        let map = Map(other.label, self.label);
        self.append(other, Vec::from([map]))
    }

    fn append(self, other: Self, mut maps: Vec<Map>) -> Self {
        maps.extend(self.maps);
        maps.extend(other.maps);
        let mut universe = self.universe;
        universe.extend(other.universe);
        let mut conds = self.conds;
        conds.extend(other.conds);
        Self {
            label: other.label,
            maps,
            universe,
            conds,
        }
    }
}

#[test]
fn nested() {
    let p = "<1,{},{(1,NOT (<2,{(2,x)},{},{}> + <3,{},{(3,man(x))},{}>))},{}>";
    let q = "<1,{},{(1,NOT <3,{(3,x)},{(3,man(x))},{}>)},{}>";
    let p = Pdrs::parse_str(p).unwrap();
    assert_eq!(p.resolve_merges(), Pdrs::parse_str(q).unwrap());
}

#[test]
fn placeholders() {
    let p = "(P + (<1,{},{(1,f())},{}> + <2,{},{(1,NOT <3,{},{},{}>)},{}>))";
    let q = "(P + <2,{},{(2,f()),(2,NOT <3,{},{},{}>)},{}>)";
    let p = Pdrs::parse_str(p).unwrap();
    assert_eq!(p.resolve_merges(), Pdrs::parse_str(q).unwrap());
}
