//! Design registry
//!
//! Closed set of design variants, looked up by tag. Each variant knows its
//! default settings layer and how to build itself from resolved settings.

use crate::card_box::{CardBoxMaker, CardBoxParameters};
use crate::card_sheet::{CardSheetMaker, CardSheetParameters};
use crate::corner::{CornerMaker, CornerParameters};
use crate::design::BoxDesign;
use crate::error::{DesignError, DesignResult};
use crate::matchbox::{MatchboxMaker, MatchboxParameters};
use crate::partition::{PartitionMaker, PartitionParameters};
use cutbox_settings::Settings;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use toml::{Table, Value};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignKind {
    Matchbox,
    CardBox,
    Corner,
    CardSheet,
    Partition,
}

impl DesignKind {
    pub const ALL: [DesignKind; 5] = [
        DesignKind::Matchbox,
        DesignKind::CardBox,
        DesignKind::Corner,
        DesignKind::CardSheet,
        DesignKind::Partition,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Matchbox => "matchbox",
            Self::CardBox => "cardbox",
            Self::Corner => "corner",
            Self::CardSheet => "cardsheet",
            Self::Partition => "partition",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Matchbox => "Funnel tray with end-wall openings and optional thumbholes",
            Self::CardBox => "Tuck box for a card deck",
            Self::Corner => "Folded corner protector",
            Self::CardSheet => "Grid of rounded cards",
            Self::Partition => "Interlocking divider strips for a partitioned box",
        }
    }

    /// Keys without a default; missing any of them is an error.
    pub fn required_keys(&self) -> &'static [&'static str] {
        match self {
            Self::CardSheet => &["length", "width"],
            _ => &["length", "width", "height", "thickness"],
        }
    }

    /// Lowest settings layer for this variant.
    pub fn defaults(&self) -> Table {
        let entries: Vec<(&str, Value)> = match self {
            Self::Matchbox => vec![
                ("thumbhole", Value::String("none".into())),
                ("single_funnel", Value::Boolean(false)),
                ("enforce_small", Value::Boolean(false)),
                ("enforce_large", Value::Boolean(false)),
                ("small_height_threshold", Value::String("20mm".into())),
                ("separated", Value::Boolean(false)),
                ("separation", Value::String("5mm".into())),
            ],
            Self::CardBox => vec![
                ("glue_flap", Value::String("8mm".into())),
                ("corner_radius", Value::String("3mm".into())),
                ("thumbhole", Value::Boolean(true)),
                ("thumbhole_radius", Value::String("8mm".into())),
                ("thumbhole_fillet", Value::String("2mm".into())),
            ],
            Self::Corner => vec![
                ("corner_gap", Value::String("2mm".into())),
                ("corner_radius", Value::String("2mm".into())),
            ],
            Self::CardSheet => vec![
                ("rows", Value::Integer(1)),
                ("columns", Value::Integer(1)),
                ("gap", Value::String("2mm".into())),
                ("corner_radius", Value::String("3mm".into())),
            ],
            Self::Partition => vec![
                ("rows", Value::Integer(2)),
                ("columns", Value::Integer(2)),
                ("side_gap", Value::String("0.5mm".into())),
                ("vertical_separation", Value::String("5mm".into())),
            ],
        };
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v))
            .collect()
    }

    /// Build the design from fully resolved settings.
    pub fn build(&self, settings: &Settings) -> DesignResult<Box<dyn BoxDesign>> {
        let design: Box<dyn BoxDesign> = match self {
            Self::Matchbox => Box::new(MatchboxMaker::new(MatchboxParameters::from_settings(
                settings,
            )?)?),
            Self::CardBox => Box::new(CardBoxMaker::new(CardBoxParameters::from_settings(
                settings,
            )?)?),
            Self::Corner => Box::new(CornerMaker::new(CornerParameters::from_settings(settings)?)?),
            Self::CardSheet => Box::new(CardSheetMaker::new(
                CardSheetParameters::from_settings(settings)?,
            )?),
            Self::Partition => Box::new(PartitionMaker::new(
                PartitionParameters::from_settings(settings)?,
            )?),
        };
        Ok(design)
    }
}

impl fmt::Display for DesignKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for DesignKind {
    type Err = DesignError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase().replace(['-', '_'], "");
        Self::ALL
            .into_iter()
            .find(|kind| kind.tag() == tag)
            .ok_or_else(|| DesignError::UnknownDesign(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cutbox_settings::SettingsBuilder;

    #[test]
    fn test_tags_round_trip() {
        for kind in DesignKind::ALL {
            assert_eq!(kind.tag().parse::<DesignKind>().unwrap(), kind);
        }
        assert_eq!("card_box".parse::<DesignKind>().unwrap(), DesignKind::CardBox);
        assert_eq!("Card-Sheet".parse::<DesignKind>().unwrap(), DesignKind::CardSheet);
    }

    #[test]
    fn test_unknown_tag() {
        assert!(matches!(
            "crate".parse::<DesignKind>(),
            Err(DesignError::UnknownDesign(_))
        ));
    }

    #[test]
    fn test_defaults_never_cover_required_keys() {
        for kind in DesignKind::ALL {
            let defaults = kind.defaults();
            for key in kind.required_keys() {
                assert!(!defaults.contains_key(*key), "{} defaults {}", kind, key);
            }
        }
    }

    #[test]
    fn test_missing_required_key_fails() {
        let settings = SettingsBuilder::new()
            .layer("defaults", DesignKind::Corner.defaults())
            .build()
            .unwrap();
        assert!(matches!(
            DesignKind::Corner.build(&settings),
            Err(DesignError::Settings(_))
        ));
    }

    #[test]
    fn test_build_every_kind() {
        let base: Table = "length = 60\nwidth = 40\nheight = 15\nthickness = 1.5"
            .parse()
            .unwrap();
        for kind in DesignKind::ALL {
            let settings = SettingsBuilder::new()
                .layer("defaults", kind.defaults())
                .layer("section", base.clone())
                .build()
                .unwrap();
            let design = kind.build(&settings).unwrap();
            assert_eq!(design.kind(), kind);
            assert!(!design.corners().is_empty());
            assert!(!design.cut_groups().is_empty());
        }
    }
}
