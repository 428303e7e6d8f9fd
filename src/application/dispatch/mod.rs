//! Bulk Dispatch Module
//!
//! - `options` - file selection (`DispatchOptions`)
//! - `result` - what ran (`DispatchReport`)
//! - `use_case` - the walk itself (`BulkDispatcher`)

mod options;
mod result;
mod use_case;

pub use options::{DispatchOptions, DEFAULT_EXCLUDED_DIRS, DEFAULT_EXTENSIONS};
pub use result::DispatchReport;
pub use use_case::BulkDispatcher;
