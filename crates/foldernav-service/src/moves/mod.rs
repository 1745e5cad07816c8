//! Move destination picking: validation rules, the session state machine,
//! and the service that connects a session to the data service.

pub mod rows;
pub mod service;
pub mod session;
pub mod validator;

pub use rows::{FolderRow, visible_rows};
pub use service::MoveService;
pub use session::{MoveSession, SelectionOutcome, SessionOutcome, SessionPhase, SessionSettings};
pub use validator::{MoveValidator, RenderHint};
