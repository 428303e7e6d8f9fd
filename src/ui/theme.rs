use crossterm::style::Color;

/// Semantic colors for build and dispatch output
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #EF4444
    pub const ERROR: Color = Color::Red;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const ERROR: &str = "✗";
    pub const WARNING: &str = "⚠";
    pub const PROGRESS: &str = "●";
    pub const PENDING: &str = "○";
    pub const SKIPPED: &str = "·";
    pub const ARROW: &str = "↳";

    // Command identifiers (used in headers).
    pub const BUILD: &str = "⚙";
    pub const DISPATCH: &str = "▶";
    pub const TRASH: &str = "🗑";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const ERROR: &str = "[FAIL]";
    pub const WARNING: &str = "[WARN]";
    pub const PROGRESS: &str = "[..]";
    pub const PENDING: &str = "[ ]";
    pub const SKIPPED: &str = "[--]";
    pub const ARROW: &str = "[>]";

    pub const BUILD: &str = "[BUILD]";
    pub const DISPATCH: &str = "[RUN]";
    pub const TRASH: &str = "[DEL]";
}
