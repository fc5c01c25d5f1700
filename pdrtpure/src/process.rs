use crate::{Opt, Stage};
use pdrt::Pdrs;
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

/// Process a structure, returning the line to print.
pub fn process(p: &Pdrs, opt: &Opt) -> String {
    if opt.check {
        let pure = p.is_pure();
        log::debug!("{} is pure: {}", p, pure);
        return String::from(if pure { "pure" } else { "impure" });
    }

    if opt.omits(Stage::Purify) {
        p.to_string()
    } else if opt.omits(Stage::Merge) {
        p.purify().to_string()
    } else {
        p.resolve_merges().to_string()
    }
}

/// Process structures in the given order.
///
/// If parallel execution is enabled, structures are processed concurrently,
/// but results are still returned in the given order.
pub fn process_all(ps: &[Pdrs], opt: &Opt) -> Vec<String> {
    if opt.jobs.is_some() {
        ps.par_iter().map(|p| process(p, opt)).collect()
    } else {
        ps.iter().map(|p| process(p, opt)).collect()
    }
}

#[test]
fn stages() {
    use clap::Parser;
    let opt = |args: &[&str]| Opt::try_parse_from([&["pdrtpure"][..], args].concat()).unwrap();
    let p = "(<1,{(1,x)},{(1,man(x))},{}> + <1,{},{(1,walk(x))},{}>)";
    let ps = [p, "<1,{},{},{}>"].map(|p| Pdrs::parse_str(p).unwrap());

    let out = process_all(&ps, &opt(&["--omit", "purify"]));
    assert_eq!(out, [p, "<1,{},{},{}>"]);

    let out = process_all(&ps, &opt(&["--omit", "merge", "-j"]));
    let purified = "(<1,{(1,x)},{(1,man(x))},{}> + <2,{},{(2,walk(x))},{}>)";
    assert_eq!(out, [purified, "<1,{},{},{}>"]);

    let out = process_all(&ps, &opt(&["--jobs", "2"]));
    assert_eq!(out[0], "<2,{(2,x)},{(2,man(x)),(2,walk(x))},{}>");

    let out = process_all(&ps, &opt(&["--check"]));
    assert_eq!(out, ["impure", "pure"]);
}
