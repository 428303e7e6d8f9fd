use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: u8,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: u8, cli_color: Option<ColorWhen>) -> Self {
        Self::from_caps(json, verbose, cli_color, detect_capabilities())
    }

    pub fn from_caps(
        json: bool,
        verbose: u8,
        cli_color: Option<ColorWhen>,
        caps: TerminalCapabilities,
    ) -> Self {
        let color = match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => caps.supports_color && !caps.is_ci,
        };

        Self {
            json,
            verbose,
            caps,
            color: color && !json,
            unicode: caps.supports_unicode,
        }
    }

    /// Plain output: no color, ASCII icons
    pub fn plain() -> Self {
        Self::from_caps(
            false,
            0,
            Some(ColorWhen::Never),
            TerminalCapabilities {
                is_tty: false,
                supports_color: false,
                supports_unicode: false,
                is_ci: false,
            },
        )
    }

    pub fn with_verbose(mut self, verbose: u8) -> Self {
        self.verbose = verbose;
        self
    }
}
