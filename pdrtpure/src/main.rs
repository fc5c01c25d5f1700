//! Purifier for Projective Discourse Representation Structures.

use clap::Parser;
use pdrt::PdrsIter;
use pdrtpure::{process_all, read_inputs, Error, Opt};

#[cfg(feature = "mimalloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> Result<(), Error> {
    env_logger::init();

    let opt = Opt::parse();

    // if a precise number of parallel jobs has been given
    if let Some(Some(jobs)) = opt.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()?;
    }

    for input in read_inputs(&opt.files) {
        let input = input?;
        log::info!("Process {}", input.name);
        let ps: Result<Vec<_>, _> = PdrsIter::new(&input.contents).collect();
        let ps = ps?;
        log::info!("Parsed {} structures", ps.len());

        for line in process_all(&ps, &opt) {
            println!("{}", line)
        }
    }
    Ok(())
}
