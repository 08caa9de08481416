//! Pipeline module - the convert-and-merge workflow and its collaborators

pub mod convert;
pub mod error;
pub mod merge;
pub mod naming;
pub mod selection;
pub mod session;
pub mod workspace;

pub use error::SessionError;
pub use session::run_session;
pub use workspace::FileEntry;
