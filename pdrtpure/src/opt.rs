use crate::Stage;
use clap::Parser;
use std::path::PathBuf;

/// Purify Projective Discourse Representation Structures
///
/// Every input file contains structures in linear notation,
/// each terminated by a period.
/// For every structure, the result is printed on a line.
#[derive(Clone, Debug, Parser)]
#[command(version)]
pub struct Opt {
    /// Perform only operations until (excluding) the given stage.
    ///
    /// Possible values are: purify, merge.
    #[arg(long, value_name = "STAGE")]
    pub omit: Option<Stage>,

    /// Report for every structure whether it is pure, instead of printing it
    #[arg(long)]
    pub check: bool,

    /// Process structures concurrently
    ///
    /// If this option is given with a number n, then
    /// maximally n structures are concurrently processed.
    /// If this option is given without an extra argument, then
    /// the number of concurrently processed structures is
    /// determined automatically from the number of CPUs.
    /// In any case, results are printed in the order of the input.
    #[arg(long, short = 'j', value_name = "N")]
    pub jobs: Option<Option<usize>>,

    /// Files to process
    ///
    /// To read from standard input, use "-" as file name.
    /// If no file is given, standard input is read.
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Opt {
    /// Return true if the given stage is omitted.
    pub fn omits(&self, stage: Stage) -> bool {
        self.omit.map_or(false, |omit| stage >= omit)
    }
}

#[test]
fn parse_args() {
    let opt = Opt::try_parse_from(["pdrtpure", "a.pdrs", "--omit", "purify", "-", "-j"]).unwrap();
    assert!(opt.omits(Stage::Purify) && opt.omits(Stage::Merge));
    assert_eq!(opt.jobs, Some(None));
    assert_eq!(opt.files.len(), 2);

    let opt = Opt::try_parse_from(["pdrtpure", "--omit", "merge", "--jobs", "4"]).unwrap();
    assert!(!opt.omits(Stage::Purify) && opt.omits(Stage::Merge));
    assert_eq!(opt.jobs, Some(Some(4)));
    assert!(opt.files.is_empty());

    assert!(Opt::try_parse_from(["pdrtpure", "--omit", "parse"]).is_err());
}
