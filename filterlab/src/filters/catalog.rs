//! The ten CSS filter functions the playground knows about.
//!
//! Filter Effects 1: <https://www.w3.org/TR/filter-effects/#filter-functions>

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

const MDN_FILTER_FUNCTION_URL: &str =
    "https://developer.mozilla.org/en-US/docs/Web/CSS/filter-function";

pub const PLACEHOLDER_TITLE: &str = "Select a Filter";
pub const PLACEHOLDER_DESCRIPTION: &str = "Description of the selected filter \
    will appear here. You can change the filter value using the input below \
    and see the changes in real-time.";

#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
pub enum FilterName {
    #[serde(rename = "blur")]
    Blur,
    #[serde(rename = "brightness")]
    Brightness,
    #[serde(rename = "contrast")]
    Contrast,
    #[serde(rename = "drop-shadow")]
    DropShadow,
    #[serde(rename = "grayscale")]
    Grayscale,
    #[serde(rename = "hue-rotate")]
    HueRotate,
    #[serde(rename = "invert")]
    Invert,
    #[serde(rename = "opacity")]
    Opacity,
    #[serde(rename = "saturate")]
    Saturate,
    #[serde(rename = "sepia")]
    Sepia,
}

impl FilterName {
    /// Catalog order, which is also the order the filter buttons are listed in
    pub const ALL: [FilterName; 10] = [
        FilterName::Blur,
        FilterName::Brightness,
        FilterName::Contrast,
        FilterName::DropShadow,
        FilterName::Grayscale,
        FilterName::HueRotate,
        FilterName::Invert,
        FilterName::Opacity,
        FilterName::Saturate,
        FilterName::Sepia,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterName::Blur => "blur",
            FilterName::Brightness => "brightness",
            FilterName::Contrast => "contrast",
            FilterName::DropShadow => "drop-shadow",
            FilterName::Grayscale => "grayscale",
            FilterName::HueRotate => "hue-rotate",
            FilterName::Invert => "invert",
            FilterName::Opacity => "opacity",
            FilterName::Saturate => "saturate",
            FilterName::Sepia => "sepia",
        }
    }
}

impl fmt::Display for FilterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FilterName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FilterName::ALL
            .iter()
            .find(|name| name.as_str() == s)
            .copied()
            .ok_or_else(|| format!("unknown filter function '{}'", s))
    }
}

#[derive(Debug)]
pub struct FilterSpec {
    pub description: &'static str,
    pub default_value: &'static str,
    /// Suffix appended to plain numeric values of this filter
    pub unit: &'static str,
}

static BLUR: FilterSpec = FilterSpec {
    description: "blur(px) Applies a Gaussian blur. Can be adjusted with a \
        pixel value.",
    default_value: "0px",
    unit: "px",
};

static BRIGHTNESS: FilterSpec = FilterSpec {
    description: "brightness(%) Adjusts the brightness of the element. 100% \
        is normal. Values greater than 100% make it brighter, while values \
        less than 100% make it darker.",
    default_value: "100%",
    unit: "%",
};

static CONTRAST: FilterSpec = FilterSpec {
    description: "contrast(%) Adjusts the contrast of the element. 100% is \
        normal. Values greater than 100% increase contrast, while values less \
        than 100% decrease contrast.",
    default_value: "100%",
    unit: "%",
};

// Compound value; the unit is never used since the generator builds the whole
// shadow string itself
static DROP_SHADOW: FilterSpec = FilterSpec {
    description: "drop-shadow(offsetX offsetY blurRadius color) Applies a \
        drop shadow effect. Requires offsetX, offsetY, blurRadius, and color \
        values.",
    default_value: "0 0 0 transparent",
    unit: "%",
};

static GRAYSCALE: FilterSpec = FilterSpec {
    description: "grayscale(%) Converts the element to grayscale. 0% is \
        fully colored, while 100% is completely grayscale. Negative values \
        are not allowed.",
    default_value: "0%",
    unit: "%",
};

static HUE_ROTATE: FilterSpec = FilterSpec {
    description: "hue-rotate(deg) Applies a hue rotation to the element. The \
        angle is specified in degrees. 0deg is default(original color), \
        360deg is maximum.",
    default_value: "0deg",
    unit: "deg",
};

static INVERT: FilterSpec = FilterSpec {
    description: "invert(%) Inverts the colors of the element. 0% is normal, \
        while 100% is completely inverted. Negative values are not allowed.",
    default_value: "0%",
    unit: "%",
};

static OPACITY: FilterSpec = FilterSpec {
    description: "opacity(%) Adjusts the opacity of the element. 100% is \
        fully opaque, while 0% is fully transparent. Values greater than 100% \
        or negative are not allowed.",
    default_value: "100%",
    unit: "%",
};

static SATURATE: FilterSpec = FilterSpec {
    description: "saturate(%) Adjusts the saturation of the element. 100% is \
        normal, values greater than 100% increase saturation, and values less \
        than 100% decrease saturation. Negative values are not allowed.",
    default_value: "100%",
    unit: "%",
};

static SEPIA: FilterSpec = FilterSpec {
    description: "sepia(%) Applies a sepia filter to the element. 0% is \
        normal, while 100% is completely sepia. Negative values are not \
        allowed.",
    default_value: "0%",
    unit: "%",
};

pub fn describe(name: FilterName) -> &'static FilterSpec {
    match name {
        FilterName::Blur => &BLUR,
        FilterName::Brightness => &BRIGHTNESS,
        FilterName::Contrast => &CONTRAST,
        FilterName::DropShadow => &DROP_SHADOW,
        FilterName::Grayscale => &GRAYSCALE,
        FilterName::HueRotate => &HUE_ROTATE,
        FilterName::Invert => &INVERT,
        FilterName::Opacity => &OPACITY,
        FilterName::Saturate => &SATURATE,
        FilterName::Sepia => &SEPIA,
    }
}

pub fn default_value(name: FilterName) -> &'static str {
    describe(name).default_value
}

pub fn unit(name: FilterName) -> &'static str {
    describe(name).unit
}

/// MDN page for `name`, or the filter-function index when nothing is selected
pub fn mdn_url(name: Option<FilterName>) -> String {
    match name {
        Some(name) => format!("{}/{}", MDN_FILTER_FUNCTION_URL, name),
        None => MDN_FILTER_FUNCTION_URL.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip_through_from_str() {
        for name in FilterName::ALL {
            assert_eq!(name.as_str().parse::<FilterName>(), Ok(name));
        }
    }

    #[test]
    fn test_unknown_name_is_rejected() {
        let err = "drop_shadow".parse::<FilterName>().unwrap_err();
        assert!(err.contains("unknown filter function"));
        assert!("Blur".parse::<FilterName>().is_err());
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_value(FilterName::Blur), "0px");
        assert_eq!(default_value(FilterName::Brightness), "100%");
        assert_eq!(default_value(FilterName::DropShadow), "0 0 0 transparent");
        assert_eq!(default_value(FilterName::HueRotate), "0deg");
        assert_eq!(default_value(FilterName::Opacity), "100%");
        assert_eq!(default_value(FilterName::Sepia), "0%");
    }

    #[test]
    fn test_unit_table() {
        assert_eq!(unit(FilterName::Blur), "px");
        assert_eq!(unit(FilterName::HueRotate), "deg");
        for name in FilterName::ALL {
            if !matches!(name, FilterName::Blur | FilterName::HueRotate) {
                assert_eq!(unit(name), "%", "{}", name);
            }
        }
    }

    #[test]
    fn test_descriptions_lead_with_function_signature() {
        for name in FilterName::ALL {
            let description = describe(name).description;
            assert!(
                description.starts_with(&format!("{}(", name)),
                "{}",
                description
            );
            assert!(!description.contains("  "), "{}", description);
        }
    }

    #[test]
    fn test_mdn_url() {
        assert_eq!(
            mdn_url(Some(FilterName::HueRotate)),
            "https://developer.mozilla.org/en-US/docs/Web/CSS/filter-function/hue-rotate"
        );
        assert_eq!(
            mdn_url(None),
            "https://developer.mozilla.org/en-US/docs/Web/CSS/filter-function"
        );
    }

    #[test]
    fn test_serde_uses_css_names() {
        let json = serde_json::to_string(&FilterName::DropShadow).unwrap();
        assert_eq!(json, "\"drop-shadow\"");
    }
}
