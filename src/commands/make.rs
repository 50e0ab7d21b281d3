use anyhow::{Context, Result};
use clap::Args;
use cutbox::{render_design, write_atomic, DesignKind, SettingsBuilder};
use cutbox_settings::overrides_table;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug)]
pub struct MakeArgs {
    /// Design to build (see `cutbox designs`)
    #[arg(value_name = "DESIGN")]
    pub design: String,

    /// Set a parameter, e.g. `--set length=60 --set width=40mm`
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,

    /// Output file; `-` writes to stdout. Defaults to `<design>.svg`
    #[arg(short, long, value_name = "FILE", value_hint = clap::ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

pub fn execute(args: MakeArgs) -> Result<()> {
    let kind: DesignKind = args.design.parse()?;
    let settings = SettingsBuilder::new()
        .layer("defaults", kind.defaults())
        .layer("overrides", overrides_table(&args.overrides)?)
        .build()
        .with_context(|| format!("Invalid settings for {}", kind))?;

    let rendered = render_design(kind.tag(), kind, &settings, Path::new("."))
        .with_context(|| format!("Failed to build {}", kind))?;

    match args.output {
        Some(path) if path.as_os_str() == "-" => {
            std::io::stdout()
                .write_all(rendered.svg.as_bytes())
                .context("Failed to write to stdout")?;
        }
        output => {
            let path = output.unwrap_or_else(|| PathBuf::from(&rendered.file_name));
            write_atomic(&path, &rendered.svg)?;
            info!(design = %kind, path = %path.display(), "wrote design");
        }
    }
    Ok(())
}
