pub mod core;
pub mod filters;
pub mod prelude;
pub mod runtime;

pub use crate::filters::{
    FilterName, FilterSpec, FilterStore, FilterValueMap, Mode, TargetId,
    copy_text, describe, synthesize,
};
pub use crate::runtime::app::{Playground, run_playground};
pub use crate::runtime::controller::{
    ActiveFilter, SelectionController, ValueField,
};
pub use crate::runtime::events::{
    Command, CommandReceiver, CommandSender, Event, EventReceiver,
    EventSender, ResetScope, command_channel, event_channel,
};
pub use crate::runtime::registry::TargetRegistry;
