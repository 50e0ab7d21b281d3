//! # Cutbox
//!
//! Generates cuttable and foldable box templates as SVG drawings.
//!
//! ## Architecture
//!
//! Cutbox is organized as a workspace with multiple crates:
//!
//! 1. **cutbox-core** - Drawing units, points and bounds
//! 2. **cutbox-settings** - Measures, layered settings and project files
//! 3. **cutbox-designs** - Design variants, path rendering and templates
//! 4. **cutbox** - Command line tool and project runner
//!
//! ## Designs
//!
//! - **matchbox**: funnel tray with optional thumbholes and a separated layout
//! - **cardbox**: tuck box for a card deck
//! - **corner**: corner piece
//! - **cardsheet**: sheet of rounded cards
//! - **partition**: slotted divider strips

pub mod output;
pub mod runner;

pub use cutbox_core::{Bounds, CoreError, Point, Unit, UnitConverter};
pub use cutbox_designs::{BoxDesign, DesignError, DesignKind, Drawing, Template};
pub use cutbox_settings::{Project, Section, Settings, SettingsBuilder, SettingsError};
pub use output::write_atomic;
pub use runner::{build_project, render_design, BuildOptions, BuildReport, RenderedDesign};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Log lines go to stderr so SVG written to stdout stays clean. `RUST_LOG`
/// takes precedence over `verbose` when set.
pub fn init_logging(verbose: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .with_level(true)
        .with_line_number(verbose);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
