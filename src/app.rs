//! Application module: the list presenter used by the TUI and runtime.
//!
//! The `App` model lives in `app::model` and holds the catalog, the filter
//! query and the selected row. Matching lives in `app::filter`.

mod filter;
mod model;

pub use filter::match_span;
pub use model::*;
