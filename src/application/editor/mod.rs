mod session;

pub use session::{Draft, EditorMode, EditorSession, FieldMessages, SubmitOutcome};
