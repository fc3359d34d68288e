//! Text front end: turns input lines into [`Command`]s and [`Event`]s into
//! display lines. Nothing here touches filter state.

use super::events::{Command, Event, ResetScope};
use super::registry::TargetRegistry;
use crate::filters::catalog::{self, FilterName};
use crate::filters::{Mode, TargetId};

pub const HELP: &str = "\
Commands:
  targets [id ...]        select preview targets (ids or labels; none = empty)
  mode normal|backdrop    switch between filter and backdrop-filter
  filter <name>           select a filter function to edit
  value [text]            set the selected filter's value (empty = default)
  lucky                   random filter with a random value
  reset [all]             clear the active mode's filters
  copy <target> [mode]    copy the target's CSS declaration (default: active mode)
  show                    describe the selected filter
  state                   print all filter state as JSON
  list                    list filters and targets
  help                    print this message
  quit                    exit";

/// A parsed line: either something for the playground or something the
/// shell answers by itself
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ShellInput {
    Command(Command),
    Help,
    List,
}

pub fn parse_line(
    line: &str,
    registry: &TargetRegistry,
) -> Result<Option<ShellInput>, String> {
    let line = line.trim_start();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest),
        None => (line.trim_end(), ""),
    };

    let command = match keyword {
        "" => return Ok(None),
        "help" | "?" => return Ok(Some(ShellInput::Help)),
        "list" => return Ok(Some(ShellInput::List)),
        "copy" => {
            let mut words = rest.split_whitespace();
            let (target, mode) =
                match (words.next(), words.next(), words.next()) {
                    (Some(target), mode, None) => (target, mode),
                    (None, _, _) => {
                        return Err("'copy' needs a target".to_string());
                    }
                    _ => {
                        return Err(
                            "'copy' takes a target and an optional mode"
                                .to_string(),
                        );
                    }
                };

            Command::Copy {
                target: resolve_target(target, registry),
                mode: mode.map(str::parse::<Mode>).transpose()?,
            }
        }
        "filter" => {
            let name = single_argument(keyword, rest)?;
            Command::SelectFilter(name.parse::<FilterName>()?)
        }
        "lucky" => Command::FeelingLucky,
        "mode" => {
            let mode = single_argument(keyword, rest)?;
            Command::ChangeMode(mode.parse::<Mode>()?)
        }
        "quit" | "exit" => Command::Quit,
        "reset" => match rest.trim() {
            "" => Command::Reset(ResetScope::Selected),
            "all" => Command::Reset(ResetScope::All),
            other => {
                return Err(format!(
                    "unknown reset scope '{}'; expected nothing or 'all'",
                    other
                ));
            }
        },
        "show" => Command::Describe,
        "state" => Command::Dump,
        "targets" => Command::SelectTargets(
            rest.split(|c: char| c.is_whitespace() || c == ',')
                .filter(|word| !word.is_empty())
                .map(|word| resolve_target(word, registry))
                .collect(),
        ),
        // The remainder is taken verbatim so compound values keep their spaces
        "value" => Command::EditValue(rest.trim_end_matches(['\r', '\n']).to_string()),
        other => return Err(format!("unknown command '{}'; try 'help'", other)),
    };

    Ok(Some(ShellInput::Command(command)))
}

fn single_argument<'a>(keyword: &str, rest: &'a str) -> Result<&'a str, String> {
    let mut words = rest.split_whitespace();
    match (words.next(), words.next()) {
        (Some(word), None) => Ok(word),
        (None, _) => Err(format!("'{}' needs an argument", keyword)),
        (Some(_), Some(_)) => Err(format!("'{}' takes one argument", keyword)),
    }
}

/// Registered ids pass through, labels are matched case-insensitively, and
/// anything else is taken as a new target id
pub fn resolve_target(word: &str, registry: &TargetRegistry) -> TargetId {
    if registry.contains(word) {
        return word.to_string();
    }

    registry
        .entries()
        .find(|entry| entry.label.eq_ignore_ascii_case(word))
        .map(|entry| entry.id.clone())
        .unwrap_or_else(|| word.to_string())
}

/// The questions asked before a reset is sent. Every one must be answered
/// yes for the reset to go ahead.
pub fn reset_prompt(mode: Mode, scope: ResetScope, has_targets: bool) -> Vec<String> {
    if !has_targets {
        return vec![
            format!(
                "Are you sure you want to reset {} values of selected elements?",
                mode.property()
            ),
            "No element is selected. Would you like to reset all filter and \
            backdrop-filter values on all elements?"
                .to_string(),
        ];
    }

    match scope {
        ResetScope::Selected => vec![format!(
            "Are you sure you want to reset {} values of selected elements?",
            mode.property()
        )],
        ResetScope::All => vec![format!(
            "Are you sure you want to reset {} values on all elements, \
            including unselected ones?",
            mode.property()
        )],
    }
}

pub fn list(registry: &TargetRegistry) -> String {
    let mut out = String::from("Filters:\n");
    for name in FilterName::ALL {
        out.push_str(&format!(
            "  {:<12} default {}\n",
            name.as_str(),
            catalog::default_value(name)
        ));
    }

    out.push_str("Targets:\n");
    for entry in registry.entries() {
        out.push_str(&format!("  {:<28} {}\n", entry.id, entry.label));
    }

    out.trim_end().to_string()
}

pub fn format_event(event: &Event, registry: &TargetRegistry) -> Option<String> {
    match event {
        Event::Alert(message) => Some(format!("! {}", message)),
        Event::CopyText(text) => Some(format!("copied: {}", text)),
        Event::FilterSelected {
            name,
            value,
            description,
            doc_url,
        } => Some(format!(
            "{}\n  {}\n  {}\n  value: {}",
            name, description, doc_url, value
        )),
        Event::Rendered { target, mode, css } => {
            let label = registry.label(target).unwrap_or(target);
            Some(format!("{} {}: {}", label, mode.property(), css))
        }
        Event::SelectionCleared {
            title,
            text,
            doc_url,
        } => Some(format!("{}\n  {}\n  {}", title, text, doc_url)),
        Event::State(json) => Some(json.clone()),
        Event::Stopped => None,
    }
}
