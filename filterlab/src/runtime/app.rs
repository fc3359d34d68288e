use log::{debug, info, trace, warn};

use super::controller::{ActiveFilter, SelectionController};
use super::events::{
    Command, CommandReceiver, Event, EventSender, ResetScope,
};
use crate::core::util::IndexSet;
use crate::filters::catalog::{self, FilterName};
use crate::filters::{FilterStore, Mode, TargetId, copy_text, lucky};

/// Owns the filter state for one session and applies [`Command`]s to it,
/// emitting [`Event`]s for the shell.
pub struct Playground {
    store: FilterStore,
    controller: SelectionController,
    event_tx: Option<EventSender>,
}

impl Playground {
    pub fn new<I, S>(
        targets: I,
        mode: Mode,
        event_tx: Option<EventSender>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<TargetId>,
    {
        Self {
            store: FilterStore::new(),
            controller: SelectionController::new(targets, mode),
            event_tx,
        }
    }

    pub fn store(&self) -> &FilterStore {
        &self.store
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn render(&self, target: &str, mode: Mode) -> String {
        self.store.render(target, mode)
    }

    // Single dispatcher for every state change. Returns true on quit.
    pub fn on_command(&mut self, command: Command) -> bool {
        trace!("on_command: {:?}", command);

        match command {
            Command::ChangeMode(mode) => {
                self.controller.set_mode(mode);
                self.emit_selection_cleared();
                self.emit_rendered_selected();
            }
            Command::Copy { target, mode } => {
                let mode = mode.unwrap_or(self.controller.mode());
                let rendered = self.store.render(&target, mode);
                match copy_text(mode, &rendered) {
                    Some(text) => {
                        debug!("Copy {} for {}", mode.property(), target);
                        self.emit_event(Event::CopyText(text));
                    }
                    None => self.emit_event(Event::Alert(format!(
                        "Nothing to copy: {} has no {} value",
                        target,
                        mode.property()
                    ))),
                }
            }
            Command::Describe => match self.controller.active_filter() {
                ActiveFilter::FilterSelected(name) => {
                    self.emit_filter_selected(name)
                }
                ActiveFilter::NoFilterSelected => {
                    self.emit_selection_cleared()
                }
            },
            Command::Dump => {
                let json = self.state_json();
                self.emit_event(Event::State(json));
            }
            Command::EditValue(text) => {
                let mode = self.controller.mode();
                for target in self.controller.edit_value(&text, &mut self.store)
                {
                    self.emit_rendered(target, mode);
                }
            }
            Command::FeelingLucky => {
                let (name, value) = lucky::pick_random();
                self.apply_random(name, &value);
            }
            Command::Quit => {
                info!("Quitting");
                return true;
            }
            Command::Reset(scope) => {
                self.reset(scope);
            }
            Command::SelectFilter(name) => {
                self.controller.select_filter(name, &self.store);
                self.emit_filter_selected(name);
            }
            Command::SelectTargets(targets) => {
                self.controller.set_targets(targets);
                self.emit_selection_cleared();
            }
        }

        false
    }

    /// Same path as [`Command::FeelingLucky`] with a known pick
    pub fn apply_random(&mut self, name: FilterName, value: &str) {
        self.controller.apply_random(name, value, &mut self.store);
        self.emit_filter_selected(name);
        self.emit_rendered_selected();
    }

    fn reset(&mut self, scope: ResetScope) {
        let mode = self.controller.mode();
        let cleared = self.controller.reset(scope, &mut self.store);

        let mut refreshed: IndexSet<TargetId> = cleared.into_iter().collect();
        refreshed.extend(
            self.controller.selected_targets().map(ToOwned::to_owned),
        );

        self.emit_selection_cleared();
        for target in refreshed {
            self.emit_rendered(target, mode);
        }

        info!("Filters reset. {}", self.state_json());
    }

    fn state_json(&self) -> String {
        serde_json::to_string(&self.store).unwrap_or_else(|err| {
            warn!("failed to serialize filter state: {}", err);
            String::from("{}")
        })
    }

    fn emit_rendered_selected(&self) {
        let mode = self.controller.mode();
        let targets: Vec<TargetId> = self
            .controller
            .selected_targets()
            .map(ToOwned::to_owned)
            .collect();

        for target in targets {
            self.emit_rendered(target, mode);
        }
    }

    fn emit_rendered(&self, target: TargetId, mode: Mode) {
        let css = self.store.render(&target, mode);
        self.emit_event(Event::Rendered { target, mode, css });
    }

    fn emit_filter_selected(&self, name: FilterName) {
        self.emit_event(Event::FilterSelected {
            name,
            value: self.controller.value_field().text.clone(),
            description: catalog::describe(name).description.to_string(),
            doc_url: catalog::mdn_url(Some(name)),
        });
    }

    fn emit_selection_cleared(&self) {
        self.emit_event(Event::SelectionCleared {
            title: catalog::PLACEHOLDER_TITLE.to_string(),
            text: catalog::PLACEHOLDER_DESCRIPTION.to_string(),
            doc_url: catalog::mdn_url(None),
        });
    }

    fn emit_event(&self, event: Event) {
        let Some(event_tx) = self.event_tx.as_ref() else {
            return;
        };

        if let Err(err) = event_tx.send(event) {
            warn!("failed to emit playground event: {}", err);
        }
    }
}

/// Runs `playground` until a [`Command::Quit`] arrives or every sender is
/// gone, handling one command at a time in arrival order.
pub fn run_playground(mut playground: Playground, command_rx: CommandReceiver) {
    while let Ok(command) = command_rx.recv() {
        if playground.on_command(command) {
            break;
        }
    }

    debug!("playground stopped");
    playground.emit_event(Event::Stopped);
}
