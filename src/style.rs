//! Terminal styling utilities
//!
//! Semantic colors for CLI output: green for a switch, yellow for the
//! "already on" notice, cyan for sink identifiers.

use crossterm::style::Stylize;

/// Extension trait for consistent soundwrap styling
///
/// # Examples
///
/// ```
/// use soundwrap::style::SoundwrapStyle;
///
/// println!("{}", "Switched to:".success());
/// println!("{}", "53".technical());
/// ```
pub trait SoundwrapStyle: Stylize {
    /// Style for success messages (green)
    fn success(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.green()
    }

    /// Style for warnings and no-op notices (yellow)
    fn warning(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.yellow()
    }

    /// Style for identifiers and paths (cyan)
    fn technical(self) -> <Self as Stylize>::Styled
    where
        Self: Sized,
    {
        self.cyan()
    }
}

impl<T: Stylize> SoundwrapStyle for T {}
