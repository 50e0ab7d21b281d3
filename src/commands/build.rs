use anyhow::{bail, Result};
use clap::Args;
use cutbox::{build_project, BuildOptions};
use cutbox_settings::overrides_table;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Path to the project file (.toml)
    #[arg(value_name = "PROJECT", value_hint = clap::ValueHint::FilePath)]
    pub project: PathBuf,

    /// Build only this section; may be repeated
    #[arg(short, long = "section", value_name = "NAME")]
    pub sections: Vec<String>,

    /// Directory for the SVG files, defaults to the project's directory
    #[arg(short, long, value_name = "DIR", value_hint = clap::ValueHint::DirPath)]
    pub output_dir: Option<PathBuf>,

    /// Override a setting in every section, e.g. `--set thickness=3mm`
    #[arg(long = "set", value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

pub fn execute(args: BuildArgs) -> Result<()> {
    let options = BuildOptions {
        sections: args.sections,
        output_dir: args.output_dir,
        overrides: overrides_table(&args.overrides)?,
    };
    let report = build_project(&args.project, &options)?;
    if !report.is_success() {
        bail!(
            "{} of {} designs failed: {}",
            report.failed.len(),
            report.failed.len() + report.written.len(),
            report.failed.join(", ")
        );
    }
    Ok(())
}
