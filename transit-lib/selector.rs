//! Picking the parked region to restore next.
//!
//! Positional lookups treat the region list as circular: walking past either
//! end wraps to the other one, so cycling never dead-ends. The line-distance
//! lookup compares the two positional candidates by how many lines away from
//! the current selections they sit.

use transit_core::Region;

use crate::host::PositionModel;

/// The last region starting before `reference`, scanning from the back.
///
/// Wraps to the last region when `reference` starts before all of them.
/// Expects `regions` sorted by begin. Returns `None` only for an empty list.
pub fn find_prev(regions: &[Region], reference: Region) -> Option<(usize, Region)> {
  let last = regions.len().checked_sub(1)?;
  let found = regions
    .iter()
    .enumerate()
    .rev()
    .find(|(_, region)| region.begin() < reference.begin());

  Some(match found {
    Some((idx, region)) => (idx, *region),
    None => (last, regions[last]),
  })
}

/// The first region ending after `reference`.
///
/// Wraps to the first region when `reference` ends after all of them.
/// Expects `regions` sorted by begin. Returns `None` only for an empty list.
pub fn find_next(regions: &[Region], reference: Region) -> Option<(usize, Region)> {
  let first = *regions.first()?;
  let found = regions
    .iter()
    .enumerate()
    .find(|(_, region)| region.end() > reference.end());

  Some(match found {
    Some((idx, region)) => (idx, *region),
    None => (0, first),
  })
}

/// Nearest parked region by line distance.
///
/// Candidates are [`find_prev`] of `first` and [`find_next`] of `last`. The
/// previous candidate wins only when its end is strictly fewer lines above
/// `first` than the next candidate's begin is below `last`.
pub fn find_nearest_line<P>(
  regions: &[Region],
  first: Region,
  last: Region,
  positions: &P,
) -> Option<(usize, Region)>
where
  P: PositionModel + ?Sized,
{
  let prev = find_prev(regions, first)?;
  let next = find_next(regions, last)?;

  let prev_row = positions.coords_at(prev.1.end());
  let next_row = positions.coords_at(next.1.begin());
  let first_row = positions.coords_at(first.begin());
  let last_row = positions.coords_at(last.end());

  let prev_distance = first_row.row_distance(prev_row);
  let next_distance = next_row.row_distance(last_row);
  tracing::trace!(
    prev = ?prev.1,
    next = ?next.1,
    prev_distance,
    next_distance,
    "nearest parked region by line"
  );

  if prev_distance < next_distance {
    Some(prev)
  } else {
    Some(next)
  }
}

#[cfg(test)]
mod test {
  use quickcheck::TestResult;
  use ropey::Rope;
  use transit_core::{
    Position,
    position::coords_at_pos,
  };

  use super::*;
  use crate::store::SelectionStore;

  struct Lines(Rope);

  impl PositionModel for Lines {
    fn coords_at(&self, offset: usize) -> Position {
      coords_at_pos(self.0.slice(..), offset)
    }
  }

  fn regions(pairs: &[(usize, usize)]) -> Vec<Region> {
    pairs.iter().copied().map(Region::from).collect()
  }

  #[test]
  fn test_empty() {
    assert_eq!(find_prev(&[], Region::point(3)), None);
    assert_eq!(find_next(&[], Region::point(3)), None);
  }

  #[test]
  fn test_find_prev() {
    let rs = regions(&[(0, 2), (10, 12), (20, 22)]);
    assert_eq!(find_prev(&rs, Region::point(15)), Some((1, Region::new(10, 12))));
    assert_eq!(find_prev(&rs, Region::point(25)), Some((2, Region::new(20, 22))));
    // Equal begins do not count as before.
    assert_eq!(find_prev(&rs, Region::new(10, 11)), Some((0, Region::new(0, 2))));
    // Before everything wraps to the last one.
    assert_eq!(find_prev(&rs, Region::point(0)), Some((2, Region::new(20, 22))));
  }

  #[test]
  fn test_find_next() {
    let rs = regions(&[(0, 2), (10, 12), (20, 22)]);
    assert_eq!(find_next(&rs, Region::point(5)), Some((1, Region::new(10, 12))));
    assert_eq!(find_next(&rs, Region::new(3, 1)), Some((1, Region::new(10, 12))));
    // Equal ends do not count as after.
    assert_eq!(find_next(&rs, Region::point(12)), Some((2, Region::new(20, 22))));
    // After everything wraps to the first one.
    assert_eq!(find_next(&rs, Region::point(22)), Some((0, Region::new(0, 2))));
  }

  #[test]
  fn test_single_region_wraps_to_itself() {
    let rs = regions(&[(10, 10)]);
    assert_eq!(find_prev(&rs, Region::point(10)), Some((0, Region::point(10))));
    assert_eq!(find_next(&rs, Region::point(10)), Some((0, Region::point(10))));
  }

  fn ten_lines() -> Lines {
    // Every line is "xxxxxxxxx\n", so line `n` starts at offset `n * 10`.
    Lines(Rope::from("xxxxxxxxx\n".repeat(10)))
  }

  #[test]
  fn test_nearest_line_prefers_closer_prev() {
    let lines = ten_lines();
    // prev ends on line 4, next begins on line 8, caret on line 5.
    let rs = regions(&[(40, 42), (80, 82)]);
    let caret = Region::point(55);
    assert_eq!(
      find_nearest_line(&rs, caret, caret, &lines),
      Some((0, Region::new(40, 42)))
    );
  }

  #[test]
  fn test_nearest_line_prefers_closer_next() {
    let lines = ten_lines();
    // prev ends on line 1, next begins on line 6, caret on line 5.
    let rs = regions(&[(10, 12), (60, 62)]);
    let caret = Region::point(55);
    assert_eq!(
      find_nearest_line(&rs, caret, caret, &lines),
      Some((1, Region::new(60, 62)))
    );
  }

  #[test]
  fn test_nearest_line_tie_goes_next() {
    let lines = ten_lines();
    // Both candidates are two lines away.
    let rs = regions(&[(30, 31), (70, 71)]);
    let caret = Region::point(50);
    assert_eq!(
      find_nearest_line(&rs, caret, caret, &lines),
      Some((1, Region::new(70, 71)))
    );
  }

  #[test]
  fn test_nearest_line_ignores_columns() {
    let lines = ten_lines();
    // The next candidate is closer in raw offsets, but one line down; the
    // prev candidate shares the caret's line.
    let rs = regions(&[(50, 51), (61, 62)]);
    let caret = Region::point(59);
    assert_eq!(
      find_nearest_line(&rs, caret, caret, &lines),
      Some((0, Region::new(50, 51)))
    );
  }

  #[test]
  fn test_nearest_line_uses_selection_bounds() {
    let lines = ten_lines();
    // Current selections span lines 3 to 6; prev ends on line 1 (distance
    // 2 from the first), next begins on line 9 (distance 3 from the last).
    let rs = regions(&[(10, 12), (90, 92)]);
    let first = Region::new(30, 35);
    let last = Region::new(60, 65);
    assert_eq!(
      find_nearest_line(&rs, first, last, &lines),
      Some((0, Region::new(10, 12)))
    );
  }

  #[test]
  fn test_nearest_line_unsorted_store() {
    let lines = ten_lines();
    // Appended in park order, not sorted.
    let rs = regions(&[(80, 81), (20, 21)]);
    let caret = Region::point(30);
    // prev scans from the back: (20, 21) on line 2, distance 1.
    // next scans from the front: (80, 81) on line 8, distance 5.
    assert_eq!(
      find_nearest_line(&rs, caret, caret, &lines),
      Some((1, Region::new(20, 21)))
    );
  }

  quickcheck::quickcheck! {
      fn prev_wraps_before_all(pairs: Vec<(u16, u16)>) -> TestResult {
          let mut store = SelectionStore::new();
          store.insert(pairs.iter().map(|&(a, b)| Region::new(a as usize, b as usize)));
          let rs = store.regions();
          if rs.is_empty() || rs[0].begin() == 0 {
              return TestResult::discard();
          }
          let reference = Region::point(rs[0].begin() - 1);
          TestResult::from_bool(find_prev(rs, reference) == Some((rs.len() - 1, rs[rs.len() - 1])))
      }

      fn next_wraps_after_all(pairs: Vec<(u16, u16)>) -> TestResult {
          let mut store = SelectionStore::new();
          store.insert(pairs.iter().map(|&(a, b)| Region::new(a as usize, b as usize)));
          let rs = store.regions();
          if rs.is_empty() {
              return TestResult::discard();
          }
          let reference = Region::point(rs[rs.len() - 1].end() + 1);
          TestResult::from_bool(find_next(rs, reference) == Some((0, rs[0])))
      }
  }
}
