//! Projective discourse representation structures.

use alloc::{boxed::Box, string::String, vec::Vec};
use core::fmt::{self, Display};

/// Projection variable, labelling a discourse context.
pub type PVar = usize;

/// Discourse referent.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Ref(pub String);

impl From<&str> for Ref {
    fn from(s: &str) -> Self {
        Self(s.into())
    }
}

impl From<String> for Ref {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Referent as introduced or used in a context.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PRef {
    pub pvar: PVar,
    pub r: Ref,
}

impl PRef {
    pub fn new(pvar: PVar, r: impl Into<Ref>) -> Self {
        let r = r.into();
        Self { pvar, r }
    }
}

/// Minimally accessible projection context.
///
/// `Map(a, b)` states that context `b` is accessible from context `a`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Map(pub PVar, pub PVar);

/// A single discourse context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Basic {
    pub label: PVar,
    pub maps: Vec<Map>,
    pub universe: Vec<PRef>,
    pub conds: Vec<PCon>,
}

/// Projective discourse representation structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pdrs {
    /// Placeholder for a structure to be supplied later
    Lambda(String),
    /// Assertive merge
    AMerge(Box<Pdrs>, Box<Pdrs>),
    /// Projective merge
    PMerge(Box<Pdrs>, Box<Pdrs>),
    Basic(Basic),
}

/// Condition tagged with the context it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PCon {
    pub pvar: PVar,
    pub cond: Cond,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Cond {
    Rel(String, Vec<Ref>),
    Neg(Pdrs),
    Imp(Pdrs, Pdrs),
    Or(Pdrs, Pdrs),
    Prop(Ref, Pdrs),
    Diamond(Pdrs),
    Box(Pdrs),
}

impl Basic {
    pub fn new(label: PVar) -> Self {
        Self {
            label,
            maps: Vec::new(),
            universe: Vec::new(),
            conds: Vec::new(),
        }
    }

    /// Projection variables pointed to by the MAPs, universe and conditions.
    pub fn pointers(&self) -> impl Iterator<Item = PVar> + '_ {
        let maps = self.maps.iter().flat_map(|Map(a, b)| [*a, *b]);
        let universe = self.universe.iter().map(|pr| pr.pvar);
        maps.chain(universe).chain(self.conds.iter().map(|pc| pc.pvar))
    }
}

impl From<Basic> for Pdrs {
    fn from(b: Basic) -> Self {
        Self::Basic(b)
    }
}

impl Pdrs {
    pub fn amerge(l: Self, r: Self) -> Self {
        Self::AMerge(Box::new(l), Box::new(r))
    }

    pub fn pmerge(l: Self, r: Self) -> Self {
        Self::PMerge(Box::new(l), Box::new(r))
    }

    pub fn is_lambda(&self) -> bool {
        matches!(self, Self::Lambda(_))
    }

    /// Return the label of the context the structure resolves to.
    ///
    /// The label of a merge is the label of its right operand.
    pub fn label(&self) -> Option<PVar> {
        match self {
            Self::Lambda(_) => None,
            Self::AMerge(_, r) | Self::PMerge(_, r) => r.label(),
            Self::Basic(b) => Some(b.label),
        }
    }

    /// Return the labels of all outermost basic structures.
    pub fn top_labels(&self) -> Vec<PVar> {
        match self {
            Self::Lambda(_) => Vec::new(),
            Self::AMerge(l, r) | Self::PMerge(l, r) => {
                let mut labels = l.top_labels();
                labels.extend(r.top_labels());
                labels
            }
            Self::Basic(b) => Vec::from([b.label]),
        }
    }
}

impl Cond {
    /// Return the structures directly embedded in the condition.
    pub fn pdrss(&self) -> impl Iterator<Item = &Pdrs> {
        let (p1, p2) = match self {
            Self::Rel(..) => (None, None),
            Self::Neg(p) | Self::Prop(_, p) | Self::Diamond(p) | Self::Box(p) => (Some(p), None),
            Self::Imp(p1, p2) | Self::Or(p1, p2) => (Some(p1), Some(p2)),
        };
        p1.into_iter().chain(p2)
    }

    /// Rebuild the condition with its embedded structures mapped by `f`, left before right.
    pub fn map_pdrss(&self, mut f: impl FnMut(&Pdrs) -> Pdrs) -> Self {
        match self {
            Self::Rel(name, args) => Self::Rel(name.clone(), args.clone()),
            Self::Neg(p) => Self::Neg(f(p)),
            Self::Imp(p1, p2) => {
                let p1 = f(p1);
                Self::Imp(p1, f(p2))
            }
            Self::Or(p1, p2) => {
                let p1 = f(p1);
                Self::Or(p1, f(p2))
            }
            Self::Prop(r, p) => Self::Prop(r.clone(), f(p)),
            Self::Diamond(p) => Self::Diamond(f(p)),
            Self::Box(p) => Self::Box(f(p)),
        }
    }
}

fn list<T: Display>(items: &[T], f: &mut fmt::Formatter) -> fmt::Result {
    let mut iter = items.iter();
    if let Some(head) = iter.next() {
        head.fmt(f)?;
    }
    iter.try_for_each(|x| write!(f, ",{}", x))
}

impl Display for PRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.pvar, self.r)
    }
}

impl Display for Map {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Display for PCon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({},{})", self.pvar, self.cond)
    }
}

impl Display for Cond {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Rel(name, args) => {
                write!(f, "{}(", name)?;
                list(args, f)?;
                write!(f, ")")
            }
            Self::Neg(p) => write!(f, "NOT {}", p),
            Self::Imp(p1, p2) => write!(f, "{} IMP {}", p1, p2),
            Self::Or(p1, p2) => write!(f, "{} OR {}", p1, p2),
            Self::Prop(r, p) => write!(f, "{}: {}", r, p),
            Self::Diamond(p) => write!(f, "MAY {}", p),
            Self::Box(p) => write!(f, "MUST {}", p),
        }
    }
}

impl Display for Basic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "<{},{{", self.label)?;
        list(&self.universe, f)?;
        write!(f, "}},{{")?;
        list(&self.conds, f)?;
        write!(f, "}},{{")?;
        list(&self.maps, f)?;
        write!(f, "}}>")
    }
}

impl Display for Pdrs {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Lambda(x) => x.fmt(f),
            Self::AMerge(l, r) => write!(f, "({} + {})", l, r),
            Self::PMerge(l, r) => write!(f, "({} * {})", l, r),
            Self::Basic(b) => b.fmt(f),
        }
    }
}

#[test]
fn display() {
    use alloc::string::ToString;
    let inner = Basic {
        label: 2,
        maps: Vec::new(),
        universe: Vec::from([PRef::new(2, "y")]),
        conds: Vec::from([PCon {
            pvar: 2,
            cond: Cond::Rel("see".into(), Vec::from(["x".into(), "y".into()])),
        }]),
    };
    let outer = Basic {
        label: 1,
        maps: Vec::from([Map(2, 1)]),
        universe: Vec::from([PRef::new(1, "x")]),
        conds: Vec::from([PCon {
            pvar: 1,
            cond: Cond::Neg(inner.into()),
        }]),
    };
    let p = Pdrs::amerge(Pdrs::Lambda("P".into()), outer.into());
    assert_eq!(
        p.to_string(),
        "(P + <1,{(1,x)},{(1,NOT <2,{(2,y)},{(2,see(x,y))},{}>)},{(2,1)}>)"
    );
    assert_eq!(p.label(), Some(1));
    assert_eq!(p.top_labels(), Vec::from([1]));
}
