//! Color theme for rendered listings

use termcolor::{Color, ColorSpec};

/// Immutable color configuration handed to the renderer.
///
/// A disabled theme writes no escape sequences at all, which keeps output
/// byte-exact for tests and `--color never`.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Directory labels.
    pub dir_label: ColorSpec,
    /// File labels.
    pub file_label: ColorSpec,
    /// Authored descriptions. Placeholders always render unstyled.
    pub description: ColorSpec,
    /// Master switch; when false the renderer never touches the sink's
    /// color state.
    pub enabled: bool,
}

impl Theme {
    /// The standard palette: directories cyan and underlined, files white,
    /// authored descriptions yellow.
    pub fn colored() -> Self {
        let mut dir_label = ColorSpec::new();
        dir_label.set_fg(Some(Color::Cyan)).set_underline(true);
        let mut file_label = ColorSpec::new();
        file_label.set_fg(Some(Color::White));
        let mut description = ColorSpec::new();
        description.set_fg(Some(Color::Yellow));
        Self {
            dir_label,
            file_label,
            description,
            enabled: true,
        }
    }

    /// A theme that styles nothing.
    pub fn plain() -> Self {
        Self {
            dir_label: ColorSpec::new(),
            file_label: ColorSpec::new(),
            description: ColorSpec::new(),
            enabled: false,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}
