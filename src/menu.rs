//! Chooser menu rendering and selection reconciliation
//!
//! The menu is plain text, one sink name per line, with the current default
//! prefixed by a speaker glyph. The chooser hands back one of those lines and
//! [`reconcile`] maps it back onto the snapshot it was rendered from.

use tracing::{debug, trace};

use crate::error::SinkError;
use crate::status::Sink;

/// Glyph shown in front of the current default sink
pub const SELECTED_GLYPH: char = '🔊';

/// Render the chooser menu, one newline-terminated line per sink
#[must_use]
pub fn render_menu(sinks: &[Sink]) -> String {
    let capacity = sinks.iter().map(|s| s.name.len() + 6).sum();
    let mut menu = String::with_capacity(capacity);

    for sink in sinks {
        if sink.selected {
            menu.push(SELECTED_GLYPH);
            menu.push(' ');
        }
        menu.push_str(&sink.name);
        menu.push('\n');
    }

    menu
}

/// Result of reconciling a chosen menu line against a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    /// The chosen sink already is the default; nothing to do
    Unchanged(&'a Sink),
    /// The chosen sink should become the new default
    Switch(&'a Sink),
}

impl<'a> Selection<'a> {
    /// The sink the user picked
    #[must_use]
    pub fn sink(&self) -> &'a Sink {
        match *self {
            Self::Unchanged(sink) | Self::Switch(sink) => sink,
        }
    }

    /// Identifier to hand to `wpctl set-default`, if a change is needed
    #[must_use]
    pub fn target_id(&self) -> Option<u32> {
        match *self {
            Self::Unchanged(_) => None,
            Self::Switch(sink) => Some(sink.id),
        }
    }
}

/// Map the chooser's output back to a sink
///
/// The speaker glyph is stripped first so the current default matches its own
/// menu line. An exact name match wins; otherwise the first sink whose name
/// contains the choice is taken.
///
/// # Errors
/// Returns [`SinkError::NoMatchingSink`] if the choice is empty or matches no
/// sink name.
pub fn reconcile<'a>(sinks: &'a [Sink], choice: &str) -> Result<Selection<'a>, SinkError> {
    let needle = choice.trim();
    let needle = needle
        .strip_prefix(SELECTED_GLYPH)
        .map_or(needle, str::trim_start);

    let no_match = || SinkError::NoMatchingSink {
        choice: choice.trim().to_string(),
    };

    if needle.is_empty() {
        return Err(no_match());
    }

    let target = sinks
        .iter()
        .find(|s| s.name == needle)
        .or_else(|| sinks.iter().find(|s| s.name.contains(needle)))
        .ok_or_else(no_match)?;

    if target.selected {
        debug!("'{}' is already the default sink", target.name);
        Ok(Selection::Unchanged(target))
    } else {
        trace!("Choice {needle:?} resolved to sink {}", target.id);
        Ok(Selection::Switch(target))
    }
}

/// The snapshot as it looks once `target_id` is the default
///
/// Returns a fresh vector; `sinks` itself is left untouched.
#[must_use]
pub fn selection_view(sinks: &[Sink], target_id: u32) -> Vec<Sink> {
    sinks
        .iter()
        .map(|s| Sink {
            selected: s.id == target_id,
            ..s.clone()
        })
        .collect()
}
