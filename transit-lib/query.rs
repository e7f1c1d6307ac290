//! Context queries about the transition state of a view.

use serde::{
  Deserialize,
  Serialize,
};

use crate::host::{
  Decorations,
  TRANSITION_SELS,
};

/// Comparison a key binding asks for when it checks a context key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryOperator {
  Equal,
  NotEqual,
  RegexMatch,
  NotRegexMatch,
  RegexContains,
  NotRegexContains,
}

/// Whether the view has any parked selections.
pub fn in_transition<H>(host: &H) -> bool
where
  H: Decorations + ?Sized,
{
  !host.regions(TRANSITION_SELS).is_empty()
}

/// Answer a query against `state`.
///
/// Only [`QueryOperator::Equal`] compares with `operand`; every other
/// operator gets the raw state back.
pub fn evaluate(state: bool, operator: QueryOperator, operand: bool) -> bool {
  match operator {
    QueryOperator::Equal => state == operand,
    _ => state,
  }
}
