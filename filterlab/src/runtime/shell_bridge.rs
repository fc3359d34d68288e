//! Connects the playground's channels to stdin/stdout.
//!
//! # Event Flow
//! ```md
//! stdin line -> shell::parse_line -> Command -> run_playground
//! run_playground -> Event -> shell::format_event -> stdout (and clipboard)
//! ```
use std::io::{self, BufRead, Write};
use std::thread::{self, JoinHandle};

use arboard::Clipboard;
use log::{debug, info, trace, warn};

use super::events::{
    Command, CommandSender, Event, EventReceiver, ResetScope,
};
use super::registry::TargetRegistry;
use super::shell::{self, ShellInput};
use crate::filters::Mode;

#[derive(Clone, Debug)]
pub struct ShellOptions {
    pub copy_to_clipboard: bool,

    /// Skip the reset confirmation prompts
    pub assume_yes: bool,
    pub mode: Mode,
    pub targets: Vec<String>,
}

pub struct ShellBridge {
    outbound_handle: Option<JoinHandle<()>>,
    inbound_handle: Option<JoinHandle<()>>,
}

impl ShellBridge {
    pub fn launch(
        command_tx: CommandSender,
        events: EventReceiver,
        registry: TargetRegistry,
        options: ShellOptions,
    ) -> Self {
        let outbound_handle = {
            let registry = registry.clone();
            let copy_to_clipboard = options.copy_to_clipboard;

            thread::spawn(move || {
                let mut clipboard = None;

                while let Ok(event) = events.recv() {
                    if let Event::CopyText(text) = &event
                        && copy_to_clipboard
                    {
                        write_clipboard(&mut clipboard, text);
                    }

                    if matches!(event, Event::Stopped) {
                        break;
                    }

                    if let Some(line) = shell::format_event(&event, &registry) {
                        println!("{}", line);
                    }
                }
            })
        };

        let inbound_handle = thread::spawn(move || {
            let stdin = io::stdin();
            let mut lines = stdin.lock().lines().map_while(Result::ok);
            let mut mode = options.mode;
            let mut has_targets = !options.targets.is_empty();

            while let Some(line) = lines.next() {
                trace!("received shell line: {:?}", line);

                let command = match shell::parse_line(&line, &registry) {
                    Ok(Some(ShellInput::Command(command))) => command,
                    Ok(Some(ShellInput::Help)) => {
                        println!("{}", shell::HELP);
                        continue;
                    }
                    Ok(Some(ShellInput::List)) => {
                        println!("{}", shell::list(&registry));
                        continue;
                    }
                    Ok(None) => continue,
                    Err(err) => {
                        warn!("{}", err);
                        println!("! {}", err);
                        continue;
                    }
                };

                match &command {
                    Command::ChangeMode(new_mode) => mode = *new_mode,
                    Command::SelectTargets(targets) => {
                        has_targets = !targets.is_empty()
                    }
                    Command::Reset(scope) if !options.assume_yes => {
                        if !confirm_reset(&mut lines, mode, *scope, has_targets)
                        {
                            info!("Reset cancelled");
                            continue;
                        }
                    }
                    _ => {}
                }

                let quit = command == Command::Quit;

                if let Err(err) = command_tx.send(command) {
                    warn!("failed to dispatch command from shell: {}", err);
                    break;
                }

                if quit {
                    return;
                }
            }

            // stdin closed
            let _ = command_tx.send(Command::Quit);
        });

        Self {
            outbound_handle: Some(outbound_handle),
            inbound_handle: Some(inbound_handle),
        }
    }
}

impl Drop for ShellBridge {
    fn drop(&mut self) {
        debug!("shutting down shell bridge");

        if let Some(handle) = self.inbound_handle.take() {
            let _ = handle.join();
        }

        if let Some(handle) = self.outbound_handle.take() {
            let _ = handle.join();
        }
    }
}

fn confirm_reset(
    lines: &mut impl Iterator<Item = String>,
    mode: Mode,
    scope: ResetScope,
    has_targets: bool,
) -> bool {
    for prompt in shell::reset_prompt(mode, scope, has_targets) {
        print!("{} [y/N] ", prompt);
        let _ = io::stdout().flush();

        let answer = lines.next().unwrap_or_default();
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            return false;
        }
    }

    true
}

fn write_clipboard(clipboard: &mut Option<Clipboard>, text: &str) {
    if clipboard.is_none() {
        match Clipboard::new() {
            Ok(instance) => *clipboard = Some(instance),
            Err(err) => {
                warn!("clipboard unavailable: {}", err);
                return;
            }
        }
    }

    if let Some(clipboard) = clipboard.as_mut()
        && let Err(err) = clipboard.set_text(text.to_string())
    {
        warn!("failed to copy to clipboard: {}", err);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(lines: &[&str]) -> std::vec::IntoIter<String> {
        lines
            .iter()
            .map(|line| line.to_string())
            .collect::<Vec<_>>()
            .into_iter()
    }

    #[test]
    fn test_single_prompt_accepts_yes() {
        for answer in ["y", "Y", "yes", "  y  "] {
            let mut lines = answers(&[answer]);
            assert!(
                confirm_reset(&mut lines, Mode::Normal, ResetScope::Selected, true),
                "{:?}",
                answer
            );
        }
    }

    #[test]
    fn test_anything_else_cancels() {
        for answer in ["n", "", "no", "sure"] {
            let mut lines = answers(&[answer]);
            assert!(!confirm_reset(
                &mut lines,
                Mode::Backdrop,
                ResetScope::Selected,
                true
            ));
        }
    }

    #[test]
    fn test_end_of_input_cancels() {
        let mut lines = answers(&[]);
        assert!(!confirm_reset(
            &mut lines,
            Mode::Normal,
            ResetScope::Selected,
            true
        ));
    }

    #[test]
    fn test_no_targets_needs_both_answers() {
        let mut lines = answers(&["y"]);
        assert!(!confirm_reset(
            &mut lines,
            Mode::Normal,
            ResetScope::Selected,
            false
        ));

        let mut lines = answers(&["y", "y"]);
        assert!(confirm_reset(
            &mut lines,
            Mode::Normal,
            ResetScope::Selected,
            false
        ));

        let mut lines = answers(&["y", "n"]);
        assert!(!confirm_reset(&mut lines, Mode::Normal, ResetScope::All, false));
    }

    #[test]
    fn test_reset_all_with_targets_asks_once() {
        let mut lines = answers(&["y", "value 3px"]);

        assert!(confirm_reset(&mut lines, Mode::Normal, ResetScope::All, true));
        assert_eq!(lines.next().as_deref(), Some("value 3px"));
    }

    #[test]
    fn test_cancel_stops_reading_answers() {
        let mut lines = answers(&["n", "filter blur"]);

        assert!(!confirm_reset(
            &mut lines,
            Mode::Normal,
            ResetScope::Selected,
            false
        ));
        assert_eq!(lines.next().as_deref(), Some("filter blur"));
    }
}
