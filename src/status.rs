//! `wpctl status` parsing
//!
//! Turns the tree-drawn status dump printed by `wpctl status` into an ordered
//! list of [`Sink`] records:
//! - [`filter_sink_lines`]: strips the tree glyphs and isolates the `Sinks:` section
//! - [`parse_sinks`]: splits each line into identifier, name and default marker
//!
//! A typical section looks like this once the glyphs are gone:
//!
//! ```text
//!   Sinks:
//!    *   53. Navi 21/23 HDMI/DP Audio Controller Digital Stereo (HDMI 5) [vol: 0.40]
//!        54. Family 17h HD Audio Controller Analog Stereo [vol: 1.00]
//!
//! ```
//!
//! The section ends at the first line consisting of exactly three spaces.

use std::fmt;

use tracing::{debug, trace};

use crate::error::SinkError;

// ============================================================================
// Constants
// ============================================================================

/// Box-drawing connectors `wpctl` uses to draw its tree
const TREE_GLYPHS: [char; 4] = ['├', '└', '│', '─'];

/// Header text that opens the sink section
const SINKS_HEADER: &str = "Sinks";

/// A line of exactly three spaces closes a section once the glyphs are removed
const SECTION_TERMINATOR: &str = "   ";

/// Volume annotation appended to every sink line
const VOLUME_MARKER: &str = "[vol:";

/// Marker `wpctl` puts in front of the current default
const DEFAULT_MARKER: char = '*';

// ============================================================================
// Sink
// ============================================================================

/// An audio sink from one status snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sink {
    /// Object id assigned by `PipeWire`; what `wpctl set-default` expects
    pub id: u32,
    /// Display name with glyphs and volume annotation removed
    pub name: String,
    /// Whether this sink was the default when the snapshot was taken
    pub selected: bool,
}

impl fmt::Display for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.selected { DEFAULT_MARKER } else { ' ' };
        write!(f, "{marker} {}. {}", self.id, self.name)
    }
}

// ============================================================================
// Section Filtering
// ============================================================================

/// Extract the candidate sink lines from raw `wpctl status` output
///
/// Lines are returned in status order with everything from `[vol:` onward
/// removed. Returns an empty vector when there is no `Sinks` header at all.
#[must_use]
pub fn filter_sink_lines(output: &str) -> Vec<String> {
    let stripped: String = output
        .chars()
        .filter(|c| !TREE_GLYPHS.contains(c))
        .collect();

    let mut lines = stripped.split('\n');

    if !lines.by_ref().any(|line| line.contains(SINKS_HEADER)) {
        debug!("No '{SINKS_HEADER}' section in status output");
        return Vec::new();
    }

    let candidates: Vec<String> = lines
        .take_while(|line| *line != SECTION_TERMINATOR)
        .map(|line| {
            line.split_once(VOLUME_MARKER)
                .map_or(line, |(head, _)| head)
                .to_string()
        })
        .collect();

    trace!("Sinks section has {} candidate lines", candidates.len());
    candidates
}

// ============================================================================
// Record Parsing
// ============================================================================

/// Parse candidate lines into sink records
///
/// Lines without a `.` are skipped as noise. Only the first `.` separates the
/// identifier from the name, so names may contain further dots.
///
/// # Errors
/// - [`SinkError::MalformedSinkIdentifier`] on the first line whose identifier
///   is not a decimal number; nothing from the batch is returned.
/// - [`SinkError::EmptySinkList`] if no line yields a sink.
pub fn parse_sinks<S: AsRef<str>>(lines: &[S]) -> Result<Vec<Sink>, SinkError> {
    let mut sinks = Vec::with_capacity(lines.len());

    for line in lines {
        let line = line.as_ref();
        let Some((id_part, name_part)) = line.split_once('.') else {
            trace!("Skipping line without separator: {line:?}");
            continue;
        };

        let selected = id_part.contains(DEFAULT_MARKER);
        let id_part = id_part.replace(DEFAULT_MARKER, "");

        let id = id_part
            .trim()
            .parse::<u32>()
            .map_err(|_| SinkError::MalformedSinkIdentifier {
                line: line.to_string(),
            })?;

        let sink = Sink {
            id,
            name: name_part.trim().to_string(),
            selected,
        };
        trace!("Parsed sink: {sink}");
        sinks.push(sink);
    }

    if sinks.is_empty() {
        return Err(SinkError::EmptySinkList);
    }

    debug!("Parsed {} sinks", sinks.len());
    Ok(sinks)
}

/// Filter and parse a full `wpctl status` dump
///
/// # Errors
/// Same as [`parse_sinks`]; a dump without a sinks section is reported as
/// [`SinkError::EmptySinkList`].
pub fn parse_status(output: &str) -> Result<Vec<Sink>, SinkError> {
    parse_sinks(filter_sink_lines(output).as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const STATUS_DUMP: &str = concat!(
        "PipeWire 'pipewire-0' [1.2.7, user@host, cookie:1234]\n",
        " └─ Clients:\n",
        "        33. WirePlumber                         [1.2.7, user@host, pid:1001]\n",
        "\n",
        "Audio\n",
        " ├─ Devices:\n",
        " │      42. Navi 21/23 HDMI/DP Audio Controller [alsa]\n",
        " │      43. Family 17h HD Audio Controller      [alsa]\n",
        " │  \n",
        " ├─ Sinks:\n",
        " │  *   53. Navi 21/23 HDMI/DP Audio Controller Digital Stereo (HDMI 5) [vol: 0.40]\n",
        " │      54. Family 17h HD Audio Controller Analog Stereo [vol: 1.00]\n",
        " │  \n",
        " ├─ Sources:\n",
        " │      55. Family 17h HD Audio Controller Analog Stereo [vol: 1.00]\n",
        " │  \n",
    );

    fn sink(id: u32, name: &str, selected: bool) -> Sink {
        Sink {
            id,
            name: name.to_string(),
            selected,
        }
    }

    // filter_sink_lines() tests
    #[test]
    fn test_filter_isolates_sinks_section() {
        let lines = filter_sink_lines(STATUS_DUMP);
        assert_eq!(
            lines,
            vec![
                "   *   53. Navi 21/23 HDMI/DP Audio Controller Digital Stereo (HDMI 5) ",
                "       54. Family 17h HD Audio Controller Analog Stereo ",
            ]
        );
    }

    #[test]
    fn test_filter_strips_tree_glyphs() {
        let lines = filter_sink_lines(STATUS_DUMP);
        assert!(
            lines
                .iter()
                .all(|l| !l.chars().any(|c| TREE_GLYPHS.contains(&c)))
        );
    }

    #[test]
    fn test_filter_without_header_is_empty() {
        let lines = filter_sink_lines("Audio\n ├─ Devices:\n │      42. Card [alsa]\n");
        assert!(lines.is_empty());
    }

    #[test]
    fn test_filter_runs_to_end_without_terminator() {
        let lines = filter_sink_lines(" ├─ Sinks:\n │      53. Device A [vol: 0.45]");
        assert_eq!(lines, vec!["       53. Device A "]);
    }

    #[test]
    fn test_filter_truncates_at_first_volume_marker() {
        let lines = filter_sink_lines("Sinks:\n  7. Out [vol: 0.5] [vol: 0.6]\n   ");
        assert_eq!(lines, vec!["  7. Out "]);
    }

    // parse_sinks() tests
    #[rstest]
    #[case("  53. Some Device ", 53, "Some Device", false)]
    #[case("* 12. Built-in Audio", 12, "Built-in Audio", true)]
    #[case("  *   53. Navi 21/23 HDMI/DP (HDMI 5) ", 53, "Navi 21/23 HDMI/DP (HDMI 5)", true)]
    #[case("  9. ", 9, "", false)]
    fn test_parse_single_line(
        #[case] line: &str,
        #[case] id: u32,
        #[case] name: &str,
        #[case] selected: bool,
    ) {
        let sinks = parse_sinks(&[line]).unwrap();
        assert_eq!(sinks, vec![sink(id, name, selected)]);
    }

    #[test]
    fn test_parse_keeps_dots_in_name() {
        let sinks = parse_sinks(&["  60. USB Audio v2.0 Analog Stereo"]).unwrap();
        assert_eq!(sinks[0].name, "USB Audio v2.0 Analog Stereo");
    }

    #[test]
    fn test_parse_skips_lines_without_separator() {
        let sinks = parse_sinks(&["", "  53. Device A", "noise"]).unwrap();
        assert_eq!(sinks, vec![sink(53, "Device A", false)]);
    }

    #[test]
    fn test_parse_rejects_malformed_identifier() {
        let err = parse_sinks(&["  53. Device A", "abc. Some Device"]).unwrap_err();
        assert_eq!(
            err,
            SinkError::MalformedSinkIdentifier {
                line: "abc. Some Device".to_string()
            }
        );
    }

    #[test]
    fn test_parse_all_noise_is_empty_list() {
        assert_eq!(
            parse_sinks(&["", "no separator here"]).unwrap_err(),
            SinkError::EmptySinkList
        );
    }

    #[test]
    fn test_parse_empty_input_is_empty_list() {
        let empty: [&str; 0] = [];
        assert_eq!(parse_sinks(&empty).unwrap_err(), SinkError::EmptySinkList);
    }

    #[test]
    fn test_parse_passes_duplicate_ids_through() {
        let sinks = parse_sinks(&["1. A", "1. B"]).unwrap();
        assert_eq!(sinks.len(), 2);
        assert!(sinks.iter().all(|s| s.id == 1));
    }

    // parse_status() tests
    #[test]
    fn test_parse_status_full_dump() {
        let sinks = parse_status(STATUS_DUMP).unwrap();
        assert_eq!(
            sinks,
            vec![
                sink(
                    53,
                    "Navi 21/23 HDMI/DP Audio Controller Digital Stereo (HDMI 5)",
                    true
                ),
                sink(54, "Family 17h HD Audio Controller Analog Stereo", false),
            ]
        );
    }

    #[test]
    fn test_parse_status_without_section_is_empty_list() {
        assert_eq!(
            parse_status("Video\n └─ Devices:\n").unwrap_err(),
            SinkError::EmptySinkList
        );
    }

    #[test]
    fn test_display_marks_default() {
        assert_eq!(sink(12, "Built-in Audio", true).to_string(), "* 12. Built-in Audio");
        assert_eq!(sink(53, "Device A", false).to_string(), "  53. Device A");
    }
}
