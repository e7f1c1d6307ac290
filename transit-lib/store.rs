//! Parked selections of a single view.
//!
//! The store has two insertion paths:
//!
//! - [`SelectionStore::extend`] appends in the given order, nothing else.
//! - [`SelectionStore::insert`] appends and then normalizes: regions are
//!   sorted by `(begin, end)` and any region starting at or before the end of
//!   its predecessor is merged into it.
//!
//! Lookups that need an ordered view (cycling) go through `insert` first.

use smallvec::SmallVec;
use thiserror::Error;
use transit_core::Region;

pub type Result<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum StoreError {
  #[error("region index {index} out of bounds for store of length {len}")]
  IndexOutOfBounds { index: usize, len: usize },
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SelectionStore {
  regions: SmallVec<[Region; 4]>,
}

impl SelectionStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn regions(&self) -> &[Region] {
    &self.regions
  }

  #[inline(always)]
  pub fn iter(&self) -> std::slice::Iter<'_, Region> {
    self.regions.iter()
  }

  #[inline]
  pub fn len(&self) -> usize {
    self.regions.len()
  }

  #[inline]
  pub fn is_empty(&self) -> bool {
    self.regions.is_empty()
  }

  /// Append regions as they are.
  pub fn extend<I>(&mut self, regions: I)
  where
    I: IntoIterator<Item = Region>,
  {
    self.regions.extend(regions);
  }

  /// Append regions, then sort and merge the whole store.
  pub fn insert<I>(&mut self, regions: I)
  where
    I: IntoIterator<Item = Region>,
  {
    self.regions.extend(regions);
    self.normalize();
  }

  pub fn remove(&mut self, index: usize) -> Result<Region> {
    if index >= self.regions.len() {
      return Err(StoreError::IndexOutOfBounds {
        index,
        len: self.regions.len(),
      });
    }

    Ok(self.regions.remove(index))
  }

  pub fn clear(&mut self) {
    self.regions.clear();
  }

  fn normalize(&mut self) {
    if self.regions.len() < 2 {
      return;
    }
    self
      .regions
      .sort_by_key(|region| (region.begin(), region.end()));

    let mut merged: SmallVec<[Region; 4]> = SmallVec::with_capacity(self.regions.len());
    for region in self.regions.drain(..) {
      if let Some(prev) = merged.last_mut() {
        if region.begin() <= prev.end() {
          *prev = prev.merge(region);
          continue;
        }
      }
      merged.push(region);
    }

    self.regions = merged;
  }
}

impl FromIterator<Region> for SelectionStore {
  fn from_iter<I: IntoIterator<Item = Region>>(iter: I) -> Self {
    Self {
      regions: iter.into_iter().collect(),
    }
  }
}

impl<'a> IntoIterator for &'a SelectionStore {
  type Item = &'a Region;
  type IntoIter = std::slice::Iter<'a, Region>;

  fn into_iter(self) -> std::slice::Iter<'a, Region> {
    self.regions.iter()
  }
}
