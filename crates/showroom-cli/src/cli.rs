//! CLI definition using clap

use clap::Parser;

/// The whole program is one interactive session over stdin/stdout, so
/// there is nothing to configure here; clap only supplies help/version.
#[derive(Parser)]
#[command(name = "showroom")]
#[command(version)]
#[command(about = "Interactive vehicle inventory with range estimation")]
#[command(long_about = None)]
pub struct Cli {}
