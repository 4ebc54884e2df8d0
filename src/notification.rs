//! Desktop notifications
//!
//! Sends a notification via notify-rust after the default sink changes, using
//! `FreeDesktop` standard icon names picked from the sink name.

use color_eyre::eyre::{Context, Result};
use notify_rust::Notification;

/// Send a desktop notification
///
/// # Errors
/// Returns an error if the notification cannot be sent (e.g., no notification daemon running).
pub fn send_notification(summary: &str, body: &str, icon: &str) -> Result<()> {
    Notification::new()
        .summary(summary)
        .body(body)
        .appname("soundwrap")
        .icon(icon)
        .timeout(3000)
        .show()
        .context("Failed to show notification")?;

    Ok(())
}

/// Pick a `FreeDesktop` icon name from a sink's display name
#[must_use]
pub fn get_sink_icon(sink_name: &str) -> &'static str {
    let name = sink_name.to_lowercase();

    if name.contains("hdmi") || name.contains("displayport") || name.contains("/dp") {
        "video-display"
    } else if name.contains("headphone")
        || name.contains("headset")
        || name.contains("bluetooth")
        || name.contains("bluez")
    {
        "audio-headphones"
    } else {
        "audio-speakers"
    }
}
