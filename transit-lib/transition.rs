//! Park, cycle through and restore selections of a view.
//!
//! A view is *in transition* while its parked store is non-empty. The store
//! lives in the view's [`TRANSITION_SELS`] decoration, so every command loads
//! it, works on a [`SelectionStore`] and writes it back before returning.
//!
//! | command                       | store size after              |
//! |-------------------------------|-------------------------------|
//! | [`Transitions::add`]          | before + current count        |
//! | [`Transitions::remove`]       | before - 1                    |
//! | [`Transitions::cycle_select`] | merged(before + current) - 1  |
//! | [`Transitions::activate_all`] | 0                             |
//! | [`Transitions::exit`]         | 0                             |
//!
//! Restoring a non-caret selection drops a hidden [`MARK`] at its anchor, so
//! the host can show where the restored selection started.

use thiserror::Error;
use transit_core::Region;

use crate::{
  command::{
    AddArgs,
    Command,
    resolve_keep_alive,
  },
  config::TransitionConfig,
  host::{
    Decorations,
    Host,
    MARK,
    TRANSITION_SELS,
  },
  query::{
    self,
    QueryOperator,
  },
  selector::{
    find_nearest_line,
    find_next,
    find_prev,
  },
  store::{
    SelectionStore,
    StoreError,
  },
};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransitionError {
  #[error(transparent)]
  Store(#[from] StoreError),
}

pub type Result<T> = std::result::Result<T, TransitionError>;

#[derive(Debug, Default, Clone)]
pub struct Transitions {
  config: TransitionConfig,
}

impl Transitions {
  pub fn new(config: TransitionConfig) -> Self {
    Self { config }
  }

  pub fn config(&self) -> &TransitionConfig {
    &self.config
  }

  pub fn is_active<H: Host>(&self, host: &H) -> bool {
    query::in_transition(host)
  }

  /// Parked selections of `host`, in stored order.
  pub fn parked<H: Host>(&self, host: &H) -> SelectionStore {
    load(host)
  }

  pub fn execute<H: Host>(&self, host: &mut H, command: &Command) -> Result<()> {
    tracing::trace!(command = command.name(), "executing transition command");
    match command {
      Command::Add(args) => self.add(host, args),
      Command::Remove => self.remove(host)?,
      Command::CycleSelect(args) => self.cycle_select(host, args.forward)?,
      Command::ActivateAll => self.activate_all(host),
      Command::Exit => self.exit(host),
    }
    Ok(())
  }

  /// Park every current selection and leave a single caret behind.
  ///
  /// The caret goes to the coordinate `args` picks on one of the parked
  /// selections. When that cannot be resolved it lands on the head of the
  /// last selection.
  pub fn add<H: Host>(&self, host: &mut H, args: &AddArgs) {
    let current = host.selections();
    let Some(last) = current.last().copied() else {
      tracing::debug!("no selections to park");
      return;
    };

    let mut store = load(host);
    store.extend(current.iter().copied());
    self.persist(host, &store);

    host.erase_regions(MARK);
    host.clear_selections();

    let offset = resolve_keep_alive(
      &current,
      args.keep_alive_cursor_index,
      &args.keep_alive_cursor_position,
    )
    .unwrap_or_else(|| {
      tracing::debug!(
        index = args.keep_alive_cursor_index,
        position = %args.keep_alive_cursor_position,
        "keep-alive cursor not found, falling back to last head"
      );
      last.head
    });
    host.add_selection(Region::point(offset));

    tracing::debug!(parked = store.len(), caret = offset, "parked selections");
  }

  /// Restore the parked selection nearest to the current ones by line.
  pub fn remove<H: Host>(&self, host: &mut H) -> Result<()> {
    let mut store = load(host);
    if store.is_empty() {
      tracing::trace!("nothing parked to restore");
      return Ok(());
    }

    let current = host.selections();
    let (Some(&first), Some(&last)) = (current.first(), current.last()) else {
      tracing::debug!("no current selection to measure from");
      return Ok(());
    };
    let Some((index, region)) = find_nearest_line(store.regions(), first, last, &*host) else {
      return Ok(());
    };

    store.remove(index)?;
    self.restore(host, region);
    self.persist(host, &store);

    tracing::debug!(?region, parked = store.len(), "restored parked selection");
    Ok(())
  }

  /// Park the current selections and restore the parked one before
  /// (`forward == false`) or after them.
  pub fn cycle_select<H: Host>(&self, host: &mut H, forward: bool) -> Result<()> {
    let current = host.selections();
    let (Some(&first), Some(&last)) = (current.first(), current.last()) else {
      tracing::debug!("no current selection to cycle from");
      return Ok(());
    };

    let mut store = load(host);
    store.insert(current.iter().copied());

    let found = if forward {
      find_next(store.regions(), last)
    } else {
      find_prev(store.regions(), first)
    };
    let Some((index, region)) = found else {
      return Ok(());
    };

    store.remove(index)?;
    self.restore(host, region);
    self.persist(host, &store);

    tracing::debug!(
      ?region,
      forward,
      parked = store.len(),
      "cycled parked selection"
    );
    Ok(())
  }

  /// Add every parked selection to the current ones and leave transition.
  pub fn activate_all<H: Host>(&self, host: &mut H) {
    let store = load(host);
    host.add_selections(store.regions());
    host.erase_regions(TRANSITION_SELS);
    host.erase_regions(MARK);

    tracing::debug!(activated = store.len(), "activated parked selections");
  }

  /// Drop every parked selection, leaving the current ones untouched.
  pub fn exit<H: Host>(&self, host: &mut H) {
    host.erase_regions(TRANSITION_SELS);
    tracing::debug!("left cursor transition");
  }

  /// Answer a context query for the configured key.
  ///
  /// `None` means the key belongs to someone else.
  pub fn query_context<H: Host>(
    &self,
    host: &H,
    key: &str,
    operator: QueryOperator,
    operand: bool,
  ) -> Option<bool> {
    if key != self.config.context_key {
      return None;
    }

    Some(query::evaluate(query::in_transition(host), operator, operand))
  }

  fn restore<H: Host>(&self, host: &mut H, region: Region) {
    host.clear_selections();
    host.add_selection(region);
    host.reveal(region);

    if region.is_caret() {
      host.erase_regions(MARK);
    } else {
      host.set_regions(MARK, &[Region::point(region.anchor)], &self.config.mark);
    }
  }

  fn persist<H: Host>(&self, host: &mut H, store: &SelectionStore) {
    if store.is_empty() {
      host.erase_regions(TRANSITION_SELS);
    } else {
      host.set_regions(TRANSITION_SELS, store.regions(), &self.config.parked);
    }
  }
}

fn load<H: Decorations + ?Sized>(host: &H) -> SelectionStore {
  host.regions(TRANSITION_SELS).into_iter().collect()
}
