//! Watch Use Case
//!
//! Keeps a generated manifest in sync with a directory of stylesheets and
//! recompiles it on every relevant change:
//! - Preflight (directory checks, overwrite confirmation)
//! - Intake: classify, reconcile, schedule
//! - Serialized rebuilds on the pipeline worker
//!
//! ## Usage
//!
//! ```ignore
//! let options = WatchOptions::new("styles", "styles/_all.scss");
//! let session = WatchSession::new(options, LocalFs::new(), compiler, initial, sink)?;
//! session.run(&notifications, &running);
//! ```

mod event;
mod preflight;
mod session;


pub use event::{WatchEvent, WatchOptions, POLL_INTERVAL};
pub use preflight::{preflight, PreflightOutcome};
pub use session::{EventSink, WatchSession};
