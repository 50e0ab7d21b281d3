//! # Cutbox Designs
//!
//! Box design variants and the machinery that turns them into SVG.
//!
//! Each variant builds a fixed table of lattice points from its parameters,
//! picks the cutlines that connect them, and hands both to the renderer.
//! The [`registry`] maps design tags to variants.

pub mod card_box;
pub mod card_sheet;
pub mod corner;
pub mod cutline;
pub mod design;
pub mod drawing;
pub mod error;
pub mod matchbox;
pub mod partition;
pub mod registry;
pub mod render;
pub mod template;

pub use card_box::{CardBoxMaker, CardBoxParameters};
pub use card_sheet::{CardSheetMaker, CardSheetParameters};
pub use corner::{CornerMaker, CornerParameters};
pub use cutline::{Compass, CutGroup, Cutline, Rotation};
pub use design::BoxDesign;
pub use drawing::Drawing;
pub use error::{DesignError, DesignResult};
pub use matchbox::{MatchboxMaker, MatchboxParameters, SizeRegime, ThumbholeMode};
pub use partition::{PartitionMaker, PartitionParameters};
pub use registry::DesignKind;
pub use render::{render_cutline, render_group, render_path_data};
pub use template::Template;
