//! Sink selection flow
//!
//! `wpctl status` → parse → menu → chooser → reconcile → `wpctl set-default`.
//! Every step is fail-fast: nothing is retried and `set-default` only runs
//! once a single target sink has been identified.

use color_eyre::eyre::{self, Context, Result};
use crossterm::style::Stylize;
use tracing::{debug, info, trace, warn};

use crate::chooser::{Chooser, DmenuChooser};
use crate::config::Config;
use crate::menu::{self, Selection};
use crate::notification::{get_sink_icon, send_notification};
use crate::status;
use crate::style::SoundwrapStyle;
use crate::wpctl::{AudioControl, Wpctl};

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The chosen sink already was the default
    Unchanged { name: String },
    /// The default sink was changed
    Switched { id: u32, name: String },
}

/// Run one selection round against the given audio control and chooser
///
/// # Errors
/// Returns an error if any external tool fails, the status output contains no
/// usable sinks, or the choice matches no sink.
pub fn select_sink(audio: &impl AudioControl, chooser: &impl Chooser) -> Result<Outcome> {
    let status_text = audio.status().context("Failed to query sinks")?;
    let sinks = status::parse_status(&status_text).context("Failed to parse wpctl status")?;

    let menu_text = menu::render_menu(&sinks);
    trace!("Menu:\n{menu_text}");

    let choice = chooser.choose(&menu_text).context("No sink chosen")?;
    let selection = menu::reconcile(&sinks, &choice)?;

    match selection {
        Selection::Unchanged(sink) => Ok(Outcome::Unchanged {
            name: sink.name.clone(),
        }),
        Selection::Switch(sink) => {
            info!("Switching to: {} ({})", sink.name, sink.id);
            audio
                .set_default(sink.id)
                .with_context(|| format!("Failed to set default sink to {}", sink.id))?;

            for entry in menu::selection_view(&sinks, sink.id) {
                trace!("{entry}");
            }

            Ok(Outcome::Switched {
                id: sink.id,
                name: sink.name.clone(),
            })
        }
    }
}

/// Run the interactive flow with the configured tools and report the result
///
/// # Errors
/// Returns an error if the chooser is not configured or [`select_sink`] fails.
pub fn run(config: &Config) -> Result<()> {
    let audio = Wpctl::new(config.commands.wpctl.as_str());
    let chooser = DmenuChooser::from_command_line(&config.commands.chooser)
        .ok_or_else(|| eyre::eyre!("No chooser command configured"))?;
    debug!("Using chooser: {:?}", config.commands.chooser);

    match select_sink(&audio, &chooser)? {
        Outcome::Unchanged { name } => {
            println!("{} {}", "Already on:".warning(), name.as_str().bold());
        }
        Outcome::Switched { id, name } => {
            println!(
                "{} {} {}",
                "Switched to:".success(),
                name.as_str().bold(),
                format!("({id})").technical()
            );

            if config.settings.notify
                && let Err(e) = send_notification("Audio Output", &name, get_sink_icon(&name))
            {
                warn!("Notification failed: {}", e);
            }
        }
    }

    Ok(())
}
