//! Transition commands as invoked from key bindings.
//!
//! A binding names a command and passes JSON arguments:
//!
//! ```
//! use serde_json::json;
//! use transit_lib::command::{
//!   AddArgs,
//!   Command,
//! };
//!
//! let command = Command::from_invocation(
//!   "power_cursor_add",
//!   json!({ "keep_alive_cursor_position": "begin" }),
//! )
//! .unwrap();
//!
//! assert_eq!(
//!   command,
//!   Command::Add(AddArgs {
//!     keep_alive_cursor_index:    -1,
//!     keep_alive_cursor_position: "begin".into(),
//!   })
//! );
//! ```

use serde::{
  Deserialize,
  Serialize,
};
use serde_json::Value;
use thiserror::Error;
use transit_core::Region;

#[derive(Debug, Error)]
pub enum CommandError {
  #[error("unknown transition command '{0}'")]
  Unknown(String),
  #[error("invalid arguments for '{name}': {source}")]
  Args {
    name:   String,
    #[source]
    source: serde_json::Error,
  },
}

pub type Result<T> = std::result::Result<T, CommandError>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", content = "args", try_from = "Invocation")]
pub enum Command {
  /// Park every current selection and keep a single caret alive.
  #[serde(rename = "power_cursor_add")]
  Add(AddArgs),
  /// Restore the parked selection closest by line.
  #[serde(rename = "power_cursor_remove")]
  Remove,
  /// Swap the current selections for the previous or next parked one.
  #[serde(rename = "power_cursor_select")]
  CycleSelect(SelectArgs),
  /// Add every parked selection to the current ones.
  #[serde(rename = "power_cursors_activate")]
  ActivateAll,
  /// Drop every parked selection.
  #[serde(rename = "power_cursor_exit")]
  Exit,
}

impl Command {
  pub const ADD: &'static str = "power_cursor_add";
  pub const REMOVE: &'static str = "power_cursor_remove";
  pub const SELECT: &'static str = "power_cursor_select";
  pub const ACTIVATE: &'static str = "power_cursors_activate";
  pub const EXIT: &'static str = "power_cursor_exit";

  pub fn name(&self) -> &'static str {
    match self {
      Self::Add(_) => Self::ADD,
      Self::Remove => Self::REMOVE,
      Self::CycleSelect(_) => Self::SELECT,
      Self::ActivateAll => Self::ACTIVATE,
      Self::Exit => Self::EXIT,
    }
  }

  /// Build a command from a binding's name and arguments. `null` arguments
  /// are treated like an empty object.
  pub fn from_invocation(name: &str, args: Value) -> Result<Self> {
    let args = match args {
      Value::Null => Value::Object(Default::default()),
      args => args,
    };
    let parse_err = |source| {
      CommandError::Args {
        name: name.to_string(),
        source,
      }
    };

    match name {
      Self::ADD => Ok(Self::Add(serde_json::from_value(args).map_err(parse_err)?)),
      Self::REMOVE => Ok(Self::Remove),
      Self::SELECT => {
        Ok(Self::CycleSelect(
          serde_json::from_value(args).map_err(parse_err)?,
        ))
      },
      Self::ACTIVATE => Ok(Self::ActivateAll),
      Self::EXIT => Ok(Self::Exit),
      _ => Err(CommandError::Unknown(name.to_string())),
    }
  }
}

/// A serialized binding. `args` may be left out.
#[derive(Debug, Deserialize)]
struct Invocation {
  command: String,
  #[serde(default)]
  args:    Value,
}

impl TryFrom<Invocation> for Command {
  type Error = CommandError;

  fn try_from(invocation: Invocation) -> Result<Self> {
    Self::from_invocation(&invocation.command, invocation.args)
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AddArgs {
  /// Which current selection keeps a caret. Negative values count from the
  /// end.
  pub keep_alive_cursor_index:    isize,
  /// Which coordinate of that selection the caret lands on, see
  /// [`KeepAlivePosition::from_key`].
  pub keep_alive_cursor_position: String,
}

impl Default for AddArgs {
  fn default() -> Self {
    Self {
      keep_alive_cursor_index:    -1,
      keep_alive_cursor_position: "b".to_string(),
    }
  }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectArgs {
  pub forward: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeepAlivePosition {
  Anchor,
  Head,
  Begin,
  End,
}

const KEEP_ALIVE_KEYS: [(&str, KeepAlivePosition); 4] = [
  ("a", KeepAlivePosition::Anchor),
  ("b", KeepAlivePosition::Head),
  ("begin", KeepAlivePosition::Begin),
  ("end", KeepAlivePosition::End),
];

impl KeepAlivePosition {
  /// `a` is the anchor, `b` the head, `begin` and `end` the bounds.
  pub fn from_key(key: &str) -> Option<Self> {
    KEEP_ALIVE_KEYS
      .iter()
      .find(|(name, _)| *name == key)
      .map(|(_, position)| *position)
  }

  pub fn offset(self, region: Region) -> usize {
    match self {
      Self::Anchor => region.anchor,
      Self::Head => region.head,
      Self::Begin => region.begin(),
      Self::End => region.end(),
    }
  }
}

/// Offset of the caret kept alive by [`Command::Add`].
///
/// `None` when `index` is out of range (negative indices count from the end)
/// or `position` is not a known key.
pub fn resolve_keep_alive(selections: &[Region], index: isize, position: &str) -> Option<usize> {
  let index = if index < 0 {
    index.checked_add_unsigned(selections.len())?
  } else {
    index
  };
  let region = usize::try_from(index)
    .ok()
    .and_then(|idx| selections.get(idx))?;
  let position = KeepAlivePosition::from_key(position)?;

  Some(position.offset(*region))
}

#[cfg(test)]
mod test {
  use serde_json::json;

  use super::*;

  #[test]
  fn test_from_invocation() {
    assert_eq!(
      Command::from_invocation("power_cursor_add", Value::Null).unwrap(),
      Command::Add(AddArgs::default())
    );
    assert_eq!(
      Command::from_invocation("power_cursor_select", json!({ "forward": true })).unwrap(),
      Command::CycleSelect(SelectArgs { forward: true })
    );
    assert_eq!(
      Command::from_invocation("power_cursor_select", json!({})).unwrap(),
      Command::CycleSelect(SelectArgs { forward: false })
    );
    assert_eq!(
      Command::from_invocation("power_cursor_remove", json!({})).unwrap(),
      Command::Remove
    );
    assert_eq!(
      Command::from_invocation("power_cursors_activate", Value::Null).unwrap(),
      Command::ActivateAll
    );
    assert_eq!(
      Command::from_invocation("power_cursor_exit", Value::Null).unwrap(),
      Command::Exit
    );
  }

  #[test]
  fn test_from_invocation_errors() {
    assert!(matches!(
      Command::from_invocation("power_cursor_teleport", Value::Null),
      Err(CommandError::Unknown(name)) if name == "power_cursor_teleport"
    ));
    assert!(matches!(
      Command::from_invocation("power_cursor_select", json!({ "forward": "yes" })),
      Err(CommandError::Args { .. })
    ));
  }

  #[test]
  fn test_name_matches_invocation() {
    for command in [
      Command::Add(AddArgs::default()),
      Command::Remove,
      Command::CycleSelect(SelectArgs::default()),
      Command::ActivateAll,
      Command::Exit,
    ] {
      assert_eq!(
        Command::from_invocation(command.name(), Value::Null).unwrap(),
        command
      );
    }
  }

  #[test]
  fn test_deserialize_binding() {
    let command: Command = serde_json::from_value(json!({
      "command": "power_cursor_add",
      "args": { "keep_alive_cursor_index": 0, "keep_alive_cursor_position": "a" },
    }))
    .unwrap();
    assert_eq!(
      command,
      Command::Add(AddArgs {
        keep_alive_cursor_index:    0,
        keep_alive_cursor_position: "a".into(),
      })
    );
  }

  #[test]
  fn test_deserialize_binding_without_args() {
    let select: Command = serde_json::from_value(json!({ "command": "power_cursor_select" })).unwrap();
    assert_eq!(select, Command::CycleSelect(SelectArgs { forward: false }));

    let remove: Command = serde_json::from_value(json!({ "command": "power_cursor_remove" })).unwrap();
    assert_eq!(remove, Command::Remove);

    let exit: Command =
      serde_json::from_value(json!({ "command": "power_cursor_exit", "args": null })).unwrap();
    assert_eq!(exit, Command::Exit);

    assert!(serde_json::from_value::<Command>(json!({ "command": "power_cursor_teleport" })).is_err());
  }

  #[test]
  fn test_serialized_command_parses_back() {
    for command in [
      Command::Add(AddArgs::default()),
      Command::Remove,
      Command::CycleSelect(SelectArgs { forward: true }),
    ] {
      let value = serde_json::to_value(&command).unwrap();
      assert_eq!(serde_json::from_value::<Command>(value).unwrap(), command);
    }
  }

  #[test]
  fn test_keep_alive_keys() {
    let region = Region::new(9, 4);
    assert_eq!(KeepAlivePosition::from_key("a").map(|p| p.offset(region)), Some(9));
    assert_eq!(KeepAlivePosition::from_key("b").map(|p| p.offset(region)), Some(4));
    assert_eq!(KeepAlivePosition::from_key("begin").map(|p| p.offset(region)), Some(4));
    assert_eq!(KeepAlivePosition::from_key("end").map(|p| p.offset(region)), Some(9));
    assert_eq!(KeepAlivePosition::from_key("B"), None);
    assert_eq!(KeepAlivePosition::from_key(""), None);
  }

  #[test]
  fn test_resolve_keep_alive() {
    let sels = [Region::new(0, 2), Region::new(12, 10), Region::new(20, 25)];
    assert_eq!(resolve_keep_alive(&sels, -1, "b"), Some(25));
    assert_eq!(resolve_keep_alive(&sels, 1, "a"), Some(12));
    assert_eq!(resolve_keep_alive(&sels, 1, "begin"), Some(10));
    assert_eq!(resolve_keep_alive(&sels, -3, "end"), Some(2));
    assert_eq!(resolve_keep_alive(&sels, -4, "b"), None);
    assert_eq!(resolve_keep_alive(&sels, 3, "b"), None);
    assert_eq!(resolve_keep_alive(&sels, 99, "b"), None);
    assert_eq!(resolve_keep_alive(&sels, 0, "middle"), None);
    assert_eq!(resolve_keep_alive(&[], -1, "b"), None);
    assert_eq!(resolve_keep_alive(&sels, isize::MIN, "b"), None);
  }
}
