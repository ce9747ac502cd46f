use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use argh::FromArgs;
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};
use tileify::TileifyError;

const DEFAULT_IMAGE_PATH: &str = "../assets/background/puzzle_15.png";

#[derive(FromArgs, Debug)]
/// Count the unique 8x8 tiles in an image
struct Args {
    /// image to scan
    #[argh(positional, default = "PathBuf::from(DEFAULT_IMAGE_PATH)")]
    image: PathBuf,

    /// log verbosity: off, error, warn, info, debug or trace
    #[argh(option, default = "LevelFilter::Warn")]
    log_level: LevelFilter,
}

fn main() -> ExitCode {
    let args: Args = argh::from_env();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), TileifyError> {
    // stdout is reserved for the report
    TermLogger::init(
        args.log_level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )?;
    return write_report(&args.image, &mut io::stdout().lock());
}

/// Writes the report for `image` to `out`. Nothing is written if the image can't be loaded.
fn write_report<W: Write>(image: &Path, out: &mut W) -> Result<(), TileifyError> {
    let report = tileify::count_unique_tiles(image)?;
    writeln!(out, "{report}").map_err(TileifyError::Output)?;
    return Ok(());
}
