//! Command-line argument definitions using clap
//!
//! The tool is fully interactive and takes no options; clap supplies the
//! name/version/about surface.

use clap::Parser;

/// nb2pdf - Convert Jupyter notebooks to PDF and optionally merge them
#[derive(Parser, Debug)]
#[command(name = "nb2pdf")]
#[command(author, version, about, long_about = None)]
pub struct Args {}
