use super::store::FilterValueMap;
use super::Mode;

/// Renders `values` as a CSS filter value: `name(value)` per entry in
/// insertion order, separated by single spaces
pub fn synthesize(values: &FilterValueMap) -> String {
    values
        .iter()
        .map(|(filter, value)| format!("{}({})", filter, value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The declaration put on the clipboard, e.g. `filter: blur(2px);`. Nothing
/// is copied for an empty value.
pub fn copy_text(mode: Mode, rendered: &str) -> Option<String> {
    if rendered.is_empty() {
        return None;
    }

    Some(format!("{}: {};", mode.property(), rendered))
}
