pub use crate::core::logging::init_logger;
pub use crate::core::logging::{debug, error, info, trace, warn};
pub use crate::core::util::{HashMap, IndexMap, IndexSet};
pub use crate::filters::catalog::{self, FilterName, FilterSpec};
pub use crate::filters::lucky;
pub use crate::filters::{
    FilterStore, FilterValueMap, Mode, TargetId, copy_text, synthesize,
};
pub use crate::runtime::app::{Playground, run_playground};
pub use crate::runtime::controller::{ActiveFilter, SelectionController};
pub use crate::runtime::events::*;
pub use crate::runtime::registry::TargetRegistry;
pub use crate::ternary;
