//! Selection regions.
//!
//! A [`Region`] has two offsets: `anchor` and `head`. The `head` is where the
//! caret sits, while the `anchor` is where the selection started. When
//! `anchor == head`, the region is a caret (no selection).
//!
//! ```text
//! anchor=2, head=7: "he[llo w]orld"  (forward selection)
//! anchor=7, head=2: "he]llo w[orld"  (backward selection)
//! anchor=5, head=5: "hello|world"    (caret)
//! ```
//!
//! [`Region::begin`] and [`Region::end`] return the bounds regardless of
//! direction.

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Region {
  pub anchor: usize,
  pub head:   usize,
}

impl Region {
  pub const fn new(anchor: usize, head: usize) -> Self {
    Self { anchor, head }
  }

  /// Zero-width region at `offset`.
  #[inline]
  pub const fn point(offset: usize) -> Self {
    Self::new(offset, offset)
  }

  /// Start of the region.
  #[inline]
  #[must_use]
  pub fn begin(&self) -> usize {
    std::cmp::min(self.anchor, self.head)
  }

  /// End of the region.
  #[inline]
  #[must_use]
  pub fn end(&self) -> usize {
    std::cmp::max(self.anchor, self.head)
  }

  #[inline]
  #[must_use]
  pub fn len(&self) -> usize {
    self.end() - self.begin()
  }

  /// When the head and anchor are in the same position we only have a caret.
  #[inline]
  #[must_use]
  pub fn is_caret(&self) -> bool {
    self.anchor == self.head
  }

  #[inline]
  #[must_use]
  pub fn is_backward(&self) -> bool {
    self.head < self.anchor
  }

  /// Check if two regions overlap or share a boundary.
  ///
  /// Unlike a strict overlap test, `[0, 5)` and `[5, 8)` touch, and a caret
  /// at either boundary of a region touches it too.
  pub fn touches(&self, other: &Self) -> bool {
    other.begin() <= self.end() && self.begin() <= other.end()
  }

  /// Returns a `Region` that spans both inputs.
  ///
  /// The result is only backward when both inputs are backward, otherwise it
  /// runs forward from the smaller begin to the larger end.
  #[must_use]
  pub fn merge(&self, other: Self) -> Self {
    if self.is_backward() && other.is_backward() {
      Self {
        anchor: self.anchor.max(other.anchor),
        head:   self.head.min(other.head),
      }
    } else {
      Self {
        anchor: self.begin().min(other.begin()),
        head:   self.end().max(other.end()),
      }
    }
  }
}

impl From<(usize, usize)> for Region {
  fn from(value: (usize, usize)) -> Self {
    Self::new(value.0, value.1)
  }
}
