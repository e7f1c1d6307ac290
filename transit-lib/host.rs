//! Capabilities the transition engine needs from the editor hosting it.
//!
//! The engine never owns buffer text, selections or decorations. A host hands
//! them in through these traits, one view at a time. [`crate::view::View`] is
//! an in-memory implementation.

use smallvec::SmallVec;
use transit_core::{
  Position,
  Region,
};

use crate::config::DecorationStyle;

/// Decoration key holding the parked selections of a view.
pub const TRANSITION_SELS: &str = "transition_sels";
/// Decoration key holding the anchor mark of a restored selection.
pub const MARK: &str = "mark";

pub type Regions = SmallVec<[Region; 1]>;

/// Access to the live selections of a view.
pub trait SelectionAccess {
  fn selections(&self) -> Regions;

  fn clear_selections(&mut self);

  fn add_selection(&mut self, region: Region);

  fn add_selections(&mut self, regions: &[Region]) {
    for region in regions {
      self.add_selection(*region);
    }
  }
}

/// Named, view-scoped region collections drawn by the host.
pub trait Decorations {
  /// Regions stored under `key`, in the order they were set. Empty when the
  /// key is unknown.
  fn regions(&self, key: &str) -> Vec<Region>;

  fn set_regions(&mut self, key: &str, regions: &[Region], style: &DecorationStyle);

  fn erase_regions(&mut self, key: &str);
}

pub trait PositionModel {
  fn coords_at(&self, offset: usize) -> Position;
}

pub trait Viewport {
  /// Scroll so `region` is visible.
  fn reveal(&mut self, region: Region);
}

/// Everything a transition command touches on a view.
pub trait Host: SelectionAccess + Decorations + PositionModel + Viewport {}

impl<T> Host for T where T: SelectionAccess + Decorations + PositionModel + Viewport {}
