//! Transition cursors: park the current selections, keep working with a
//! single caret, then cycle back through the parked ones or bring them all
//! back at once.
//!
//! The engine talks to the editor through the capability traits in [`host`].
//! [`transition::Transitions`] runs the commands, [`store`] and [`selector`]
//! hold the ordering and lookup rules.
//!
//! ```
//! use transit_core::Region;
//! use transit_lib::{
//!   command::AddArgs,
//!   host::SelectionAccess,
//!   transition::Transitions,
//!   view::View,
//! };
//!
//! let transitions = Transitions::default();
//! let mut view = View::new("one\ntwo\nthree\n").with_selections(&[Region::new(0, 3)]);
//!
//! transitions.add(&mut view, &AddArgs::default());
//! assert!(transitions.is_active(&view));
//! assert_eq!(view.selections().as_slice(), &[Region::point(3)]);
//!
//! transitions.activate_all(&mut view);
//! assert!(!transitions.is_active(&view));
//! assert_eq!(view.selections().as_slice(), &[Region::new(0, 3)]);
//! ```

pub mod command;
pub mod config;
pub mod host;
pub mod query;
pub mod selector;
pub mod store;
pub mod transition;
pub mod view;

pub use transit_core::{
  Position,
  Region,
};
