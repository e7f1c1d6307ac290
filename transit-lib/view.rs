//! In-memory view implementing every [`crate::host`] capability.
//!
//! A [`View`] owns its text, live selections, named decorations and the last
//! revealed region. Live selections stay normalized: sorted by begin, with
//! touching regions merged, and at most one copy of any region.
//!
//! # Example
//!
//! ```
//! use transit_core::Region;
//! use transit_lib::{
//!   host::SelectionAccess,
//!   view::View,
//! };
//!
//! let mut view = View::new("hello\nworld\n");
//! view.add_selection(Region::new(6, 11));
//! view.add_selection(Region::point(0));
//!
//! assert_eq!(view.selections().as_slice(), &[Region::point(0), Region::new(6, 11)]);
//! ```

use std::collections::HashMap;

use ropey::Rope;
use smallvec::SmallVec;
use transit_core::{
  Position,
  Region,
  position::coords_at_pos,
};

use crate::{
  config::DecorationStyle,
  host::{
    Decorations,
    PositionModel,
    Regions,
    SelectionAccess,
    Viewport,
  },
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
  pub regions: Vec<Region>,
  pub style:   DecorationStyle,
}

#[derive(Debug, Clone)]
pub struct View {
  text:        Rope,
  selection:   Regions,
  decorations: HashMap<String, Decoration>,
  revealed:    Option<Region>,
}

impl View {
  /// New view with a single caret at the start of `text`.
  pub fn new(text: impl Into<Rope>) -> Self {
    Self {
      text:        text.into(),
      selection:   SmallVec::from_elem(Region::point(0), 1),
      decorations: HashMap::new(),
      revealed:    None,
    }
  }

  pub fn with_selections(mut self, regions: &[Region]) -> Self {
    self.clear_selections();
    self.add_selections(regions);
    self
  }

  pub fn text(&self) -> &Rope {
    &self.text
  }

  pub fn decoration(&self, key: &str) -> Option<&Decoration> {
    self.decorations.get(key)
  }

  /// Last region passed to [`Viewport::reveal`].
  pub fn revealed(&self) -> Option<Region> {
    self.revealed
  }

  fn clamp(&self, region: Region) -> Region {
    let len = self.text.len_chars();
    Region::new(region.anchor.min(len), region.head.min(len))
  }
}

impl SelectionAccess for View {
  fn selections(&self) -> Regions {
    self.selection.clone()
  }

  fn clear_selections(&mut self) {
    self.selection.clear();
  }

  fn add_selection(&mut self, region: Region) {
    let mut region = self.clamp(region);
    let mut idx = 0;
    while idx < self.selection.len() {
      if self.selection[idx].touches(&region) {
        region = self.selection.remove(idx).merge(region);
      } else {
        idx += 1;
      }
    }

    let at = self
      .selection
      .partition_point(|existing| existing.begin() < region.begin());
    self.selection.insert(at, region);
  }
}

impl Decorations for View {
  fn regions(&self, key: &str) -> Vec<Region> {
    self
      .decorations
      .get(key)
      .map(|decoration| decoration.regions.clone())
      .unwrap_or_default()
  }

  fn set_regions(&mut self, key: &str, regions: &[Region], style: &DecorationStyle) {
    let regions = regions.iter().map(|region| self.clamp(*region)).collect();
    self.decorations.insert(key.to_string(), Decoration {
      regions,
      style: style.clone(),
    });
  }

  fn erase_regions(&mut self, key: &str) {
    self.decorations.remove(key);
  }
}

impl PositionModel for View {
  fn coords_at(&self, offset: usize) -> Position {
    coords_at_pos(self.text.slice(..), offset)
  }
}

impl Viewport for View {
  fn reveal(&mut self, region: Region) {
    self.revealed = Some(region);
  }
}
