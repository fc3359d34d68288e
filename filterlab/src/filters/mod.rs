pub mod catalog;
pub mod lucky;
pub mod store;
pub mod synth;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ternary;

pub use catalog::{FilterName, FilterSpec, describe};
pub use store::{FilterStore, FilterValueMap, TargetId};
pub use synth::{copy_text, synthesize};

/// Which CSS property the filters of a target are synthesized into. Each mode
/// owns an independent partition of the [`FilterStore`].
#[derive(
    Clone, Copy, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Normal,
    Backdrop,
}

impl Mode {
    pub fn property(&self) -> &'static str {
        match self {
            Mode::Normal => "filter",
            Mode::Backdrop => "backdrop-filter",
        }
    }

    pub fn is_backdrop(&self) -> bool {
        matches!(self, Mode::Backdrop)
    }
}

impl From<bool> for Mode {
    fn from(backdrop: bool) -> Self {
        ternary!(backdrop, Mode::Backdrop, Mode::Normal)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Normal => "normal",
            Mode::Backdrop => "backdrop",
        })
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" | "filter" => Ok(Mode::Normal),
            "backdrop" | "backdrop-filter" => Ok(Mode::Backdrop),
            _ => Err(format!(
                "unknown mode '{}'; expected 'normal' or 'backdrop'",
                s
            )),
        }
    }
}
