use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "pypi-license-info",
    about = "Retrieving license info from pypi",
    version
)]
pub struct Cli {
    /// Input requirement file, currently only the requirements.txt format is supported
    #[arg(short = 'i', long, default_value = "requirements.txt", value_name = "PATH")]
    pub input_file_path: PathBuf,

    /// Write the result to a file instead of the console
    #[arg(short = 'o', long, value_name = "PATH")]
    pub output_file_path: Option<PathBuf>,
}
