use crate::Error;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Contents of an input file.
pub struct Input {
    pub name: String,
    pub contents: String,
}

/// Return stdin if no files given, else lazily read the files.
pub fn read_inputs(files: &[PathBuf]) -> Box<dyn Iterator<Item = Result<Input, Error>> + '_> {
    if files.is_empty() {
        Box::new(std::iter::once(read(Path::new("-"))))
    } else {
        Box::new(files.iter().map(|file| read(file)))
    }
}

/// Read a file, where "-" stands for stdin.
fn read(path: &Path) -> Result<Input, Error> {
    let mut contents = String::new();
    if path == Path::new("-") {
        io::stdin().read_to_string(&mut contents)?;
    } else {
        std::fs::File::open(path)?.read_to_string(&mut contents)?;
    }
    let name = path.display().to_string();
    Ok(Input { name, contents })
}
