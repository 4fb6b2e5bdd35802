use serde::{Deserialize, Serialize};

/// Driver lifecycle. `Stopped` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunState {
    #[default]
    Running,
    Paused,
    Stopped,
}
