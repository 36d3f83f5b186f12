use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "lessen")]
#[command(about = "Convert flat CSS to nested LESS")]
pub struct Cli {
    /// CSS file to convert; reads stdin when omitted
    pub input: Option<PathBuf>,

    /// Write the LESS here instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Extract repeated colors, font sizes and spacing into variables
    #[arg(long)]
    pub variables: bool,
}
