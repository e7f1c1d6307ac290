use ropey::RopeSlice;

/// This is a single point in a text buffer.
/// 0-indexed as all things should be.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position {
  pub row: usize,
  pub col: usize,
}

impl Position {
  pub const fn new(row: usize, col: usize) -> Self {
    Self { row, col }
  }

  /// Number of lines between `self` and `other`, ignoring columns.
  #[inline]
  pub fn row_distance(&self, other: Position) -> usize {
    self.row.abs_diff(other.row)
  }
}

impl From<(usize, usize)> for Position {
  fn from(value: (usize, usize)) -> Self {
    Position::new(value.0, value.1)
  }
}

/// Converts a character index into a `Position`.
///
/// Offsets past the end of the text are clamped to the end. The column is a
/// `char` count from the start of the line.
pub fn coords_at_pos(text: RopeSlice, pos: usize) -> Position {
  let pos = pos.min(text.len_chars());
  let line = text.char_to_line(pos);
  let line_start = text.line_to_char(line);

  Position::new(line, pos - line_start)
}
