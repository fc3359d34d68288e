use std::sync::mpsc;
use std::sync::mpsc::{Receiver, Sender};

use crate::filters::{FilterName, Mode, TargetId};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResetScope {
    /// Clear the active mode's filters of the selected targets. Escalates to
    /// [`ResetScope::All`] when no target is selected.
    Selected,

    /// Clear the active mode's filters of every target
    All,
}

/// Messages from the shell into the playground. Each one is handled to
/// completion before the next is received.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    ChangeMode(Mode),

    /// Copy a target's declaration for `mode`, or for the active mode when
    /// `None`
    Copy {
        target: TargetId,
        mode: Option<Mode>,
    },

    /// Re-emit the description of the current filter selection
    Describe,

    /// Emit a JSON dump of all filter state
    Dump,
    EditValue(String),
    FeelingLucky,
    Quit,
    Reset(ResetScope),
    SelectFilter(FilterName),
    SelectTargets(Vec<TargetId>),
}

/// Messages from the playground out to the shell
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Event {
    Alert(String),

    /// Text ready for the clipboard, e.g. `filter: blur(2px);`
    CopyText(String),

    /// Sent after a filter has been selected, by hand or at random
    FilterSelected {
        name: FilterName,
        value: String,
        description: String,
        doc_url: String,
    },

    /// The current CSS value of a target, sent whenever it may have changed
    Rendered {
        target: TargetId,
        mode: Mode,
        css: String,
    },

    /// Sent when the value field goes back to its disabled placeholder state
    SelectionCleared {
        title: String,
        text: String,
        doc_url: String,
    },
    State(String),
    Stopped,
}

pub type CommandSender = Sender<Command>;
pub type CommandReceiver = Receiver<Command>;
pub type EventSender = Sender<Event>;
pub type EventReceiver = Receiver<Event>;

pub fn command_channel() -> (CommandSender, CommandReceiver) {
    mpsc::channel()
}

pub fn event_channel() -> (EventSender, EventReceiver) {
    mpsc::channel()
}
