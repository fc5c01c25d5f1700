/// A stage in the processing of structures.
///
/// This is useful to omit certain parts of processing.
/// Omitting one stage also omits all stages after it,
/// i.e. all stages greater than the stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Purification
    Purify,
    /// Merge resolution
    Merge,
}

impl core::str::FromStr for Stage {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "purify" => Ok(Self::Purify),
            "merge" => Ok(Self::Merge),
            _ => Err("unknown stage: ".to_owned() + s),
        }
    }
}

#[test]
fn from_str() {
    assert_eq!("merge".parse(), Ok(Stage::Merge));
    assert!("check".parse::<Stage>().is_err());
    assert!(Stage::Purify < Stage::Merge);
}
