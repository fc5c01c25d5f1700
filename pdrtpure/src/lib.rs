mod error;
mod opt;
mod process;
mod read;
mod stage;

pub use error::Error;
pub use opt::Opt;
pub use process::{process, process_all};
pub use read::{read_inputs, Input};
pub use stage::Stage;
