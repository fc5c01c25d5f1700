#![no_std]
#![forbid(unsafe_code)]

//! Lambda calculus for Projective Discourse Representation Structures.
//!
//! A projective discourse representation structure ([`Pdrs`])
//! represents the meaning of a discourse.
//! Every discourse context carries a label, its *projection variable*, and
//! every referent and condition records the context it belongs to.
//! Whether a variable is bound thus depends on the
//! accessibility of contexts ([`GCtx`]) in the whole structure.
//!
//! Partial structures are built with placeholders and abstractions ([`Lambda`]),
//! combined by merges, and finally *purified*:
//! purification renames context labels and referents that
//! were accidentally reused in unrelated contexts.
//!
//! ~~~
//! # use pdrt::{Lambda, Pdrs};
//! // "a man walks", with a placeholder for what follows
//! let s = "(<1,{(1,x)},{(1,man(x)),(1,walk(x))},{}> + P)";
//! let f = Lambda::abstract_over("P", Pdrs::parse_str(s)?);
//!
//! // "he whistles", accidentally reusing the label 1
//! let q = Pdrs::parse_str("<1,{},{(1,whistle(x))},{}>")?;
//!
//! let p = f << q;
//! assert!(!p.is_pure());
//! let r = Pdrs::parse_str("<2,{(2,x)},{(2,man(x)),(2,walk(x)),(2,whistle(x))},{}>")?;
//! assert_eq!(p.resolve_merges(), r);
//! # Ok::<_, pdrt::Error>(())
//! ~~~

extern crate alloc;
#[macro_use]
extern crate log;

mod alpha;
pub mod error;
pub mod lambda;
pub mod lex;
mod merge;
pub mod parse;
pub mod pdrs;
mod purify;
pub mod structure;
pub mod variable;

pub use error::Error;
pub use lambda::{beta_reduce, compose, Abstract, Atom, Lambda};
pub use parse::PdrsIter;
pub use pdrs::{Basic, Cond, Map, PCon, PRef, PVar, Pdrs, Ref};
pub use structure::GCtx;
