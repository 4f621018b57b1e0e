pub mod catalog;
pub mod table;
pub mod types;

pub use table::IntentTable;
pub use types::{Effect, Intent, Trigger};
