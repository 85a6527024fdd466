//! Headless application core (state/action/effect).

pub mod action;
pub mod assistant;
pub mod editor;
pub mod effect;
pub mod language;
pub mod services;
pub mod state;
pub mod store;
pub mod terminal;
pub mod workspace;

pub use action::Action;
pub use assistant::{AssistantState, ChatMessage, ChatRole, PendingReply, TranscriptLine};
pub use editor::{EditorAction, EditorState};
pub use effect::Effect;
pub use state::{AppState, ExplorerState, FocusTarget, UiState};
pub use store::{DispatchResult, Store};
pub use terminal::{TerminalLine, TerminalLineKind, TerminalState};
pub use workspace::{EditRouting, Workspace};
