//! Project runner
//!
//! Builds the sections of a project one after another. Each section is
//! rendered completely before its file is written, and a failing section
//! does not stop the ones after it.

use anyhow::{Context, Result};
use cutbox_designs::{DesignKind, Drawing, Template};
use cutbox_settings::{Project, Settings};
use std::path::{Path, PathBuf};
use toml::Table;
use tracing::{debug, error, info};

use crate::output::write_atomic;

const MARGIN_KEY: &str = "margin";
const TEMPLATE_KEY: &str = "template";
const OUTPUT_KEY: &str = "output";
const TITLE_KEY: &str = "title";
const DEFAULT_MARGIN_MM: f64 = 5.0;

/// A design rendered to SVG, not yet written anywhere.
#[derive(Debug, Clone)]
pub struct RenderedDesign {
    pub kind: DesignKind,
    /// Output file name, `<stem>.svg`.
    pub file_name: String,
    pub svg: String,
}

/// Render one design from resolved settings.
///
/// `name` is the fallback for the title and the output file stem. A relative
/// `template` path is looked up under `base_dir`.
pub fn render_design(
    name: &str,
    kind: DesignKind,
    settings: &Settings,
    base_dir: &Path,
) -> Result<RenderedDesign> {
    let template = match settings.text(TEMPLATE_KEY)? {
        Some(path) => {
            let path = base_dir.join(path);
            Template::load_from_file(&path)
                .with_context(|| format!("Failed to load template {}", path.display()))?
        }
        None => Template::builtin()?,
    };
    let margin = settings.measure_or_mm(MARGIN_KEY, DEFAULT_MARGIN_MM)?;
    let title = settings.text(TITLE_KEY)?.unwrap_or_else(|| name.to_string());
    let stem = settings.text(OUTPUT_KEY)?.unwrap_or_else(|| name.to_string());

    let design = kind.build(settings)?;
    let drawing = Drawing::create(design.as_ref(), settings.converter(), margin)?;
    debug!(design = %kind, viewbox = %drawing.viewbox(), "rendered");

    Ok(RenderedDesign {
        kind,
        file_name: format!("{}.svg", stem),
        svg: drawing.to_svg(&template, &title),
    })
}

#[derive(Debug, Clone, Default)]
pub struct BuildOptions {
    /// Sections to build; empty means all of them.
    pub sections: Vec<String>,
    /// Defaults to the directory of the project file.
    pub output_dir: Option<PathBuf>,
    pub overrides: Table,
}

#[derive(Debug, Default)]
pub struct BuildReport {
    pub written: Vec<PathBuf>,
    /// Names of the sections that failed.
    pub failed: Vec<String>,
}

impl BuildReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Build every selected section of the project at `path`.
///
/// Errors loading the project or naming an unknown section fail the whole
/// run. Errors inside a section are logged and recorded in the report.
pub fn build_project(path: &Path, options: &BuildOptions) -> Result<BuildReport> {
    let project = Project::load_from_file(path)
        .with_context(|| format!("Failed to load project {}", path.display()))?;
    let base_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    let output_dir = options.output_dir.as_deref().unwrap_or(base_dir);

    for name in &options.sections {
        project.section(name)?;
    }

    let mut report = BuildReport::default();
    for section in project.sections() {
        if !options.sections.is_empty() && !options.sections.contains(&section.name) {
            continue;
        }
        let result = build_section(&project, section, base_dir, output_dir, &options.overrides);
        match result {
            Ok(written) => {
                info!(section = %section.name, path = %written.display(), "wrote design");
                report.written.push(written);
            }
            Err(e) => {
                error!(section = %section.name, "design failed: {:#}", e);
                report.failed.push(section.name.clone());
            }
        }
    }
    Ok(report)
}

fn build_section(
    project: &Project,
    section: &cutbox_settings::Section,
    base_dir: &Path,
    output_dir: &Path,
    overrides: &Table,
) -> Result<PathBuf> {
    let kind: DesignKind = section.design().parse()?;
    let settings = project.settings_for(section, kind.defaults(), overrides.clone())?;
    let rendered = render_design(&section.name, kind, &settings, base_dir)?;
    let target = output_dir.join(&rendered.file_name);
    write_atomic(&target, &rendered.svg)?;
    Ok(target)
}
