//! Client-side browse state: pagination and input debouncing.
//!
//! These are the explicit state-machine counterparts of what a UI layer
//! would otherwise keep in view-local state. They hold no network or
//! rendering concerns and are testable on their own.

mod debounce;
mod pager;

pub use debounce::Debouncer;
pub use pager::{GridFilter, MovieGridPager, PageRequest, PagerPhase};
