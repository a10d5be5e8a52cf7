pub mod error;
pub mod profile;
pub mod session;
pub mod utils;
pub mod views;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Result, SkylarkError};
pub use profile::{Profile, ProfileData};
pub use session::{AgentSession, Page, PageOptions, RecordRef, SessionError, DEFAULT_PAGE_LIMIT};
pub use views::{Label, ListView, PostView, ProfileView, ViewerState};
