//! Root discovery, directory and time helpers used by the logger

pub mod root;
pub mod time;

pub use root::{ensure_dir, find_project_root, BaseDir, DEFAULT_ROOT_MARKER};
pub use time::{format_date, format_time, Clock, FixedClock, SystemClock};
