use clap::{Parser, Subcommand};
use cutbox::init_logging;

mod commands;

#[derive(Parser)]
#[command(name = "cutbox")]
#[command(about = "Generate cuttable and foldable box templates as SVG", long_about = None)]
#[command(version)]
#[command(long_version = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")"))]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the designs of a project file
    #[command(alias = "b")]
    Build(commands::build::BuildArgs),

    /// Build a single design from defaults and overrides
    #[command(alias = "m")]
    Make(commands::make::MakeArgs),

    /// List the available designs
    Designs(commands::designs::DesignsArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose)?;

    match cli.command {
        Commands::Build(args) => commands::build::execute(args),
        Commands::Make(args) => commands::make::execute(args),
        Commands::Designs(args) => commands::designs::execute(args),
    }
}
