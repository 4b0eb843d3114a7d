//! Page rules shared by the browser frontend: configuration, messages and
//! the pure decisions behind every page interaction.

pub mod anchors;
pub mod busy;
pub mod config;
pub mod counter;
pub mod forms;
pub mod notification;
pub mod schedule;
pub mod shortcuts;
pub mod status;
pub mod upload;

pub use busy::{BusyControl, BusyGuard};
pub use config::{ConfigError, DebounceScope, PageConfig};
pub use counter::CounterReading;
pub use forms::RequiredCheck;
pub use notification::{Notice, Severity};
pub use schedule::AutoSubmitSchedule;
pub use shortcuts::{KeyChord, Shortcut};
pub use status::ComplaintStatus;
pub use upload::{FileCandidate, UploadRejection, check_upload};
