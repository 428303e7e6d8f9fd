use crossterm::style::Stylize;

use crate::ui::theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Success,
    Error,
    Warning,
    Progress,
    Pending,
    Skipped,
    Arrow,
    Build,
    Dispatch,
    Trash,
}

impl Icon {
    pub fn render(&self, supports_unicode: bool) -> &'static str {
        match (supports_unicode, self) {
            (true, Icon::Success) => theme::icons::SUCCESS,
            (true, Icon::Error) => theme::icons::ERROR,
            (true, Icon::Warning) => theme::icons::WARNING,
            (true, Icon::Progress) => theme::icons::PROGRESS,
            (true, Icon::Pending) => theme::icons::PENDING,
            (true, Icon::Skipped) => theme::icons::SKIPPED,
            (true, Icon::Arrow) => theme::icons::ARROW,
            (true, Icon::Build) => theme::icons::BUILD,
            (true, Icon::Dispatch) => theme::icons::DISPATCH,
            (true, Icon::Trash) => theme::icons::TRASH,
            (false, Icon::Success) => theme::icons_ascii::SUCCESS,
            (false, Icon::Error) => theme::icons_ascii::ERROR,
            (false, Icon::Warning) => theme::icons_ascii::WARNING,
            (false, Icon::Progress) => theme::icons_ascii::PROGRESS,
            (false, Icon::Pending) => theme::icons_ascii::PENDING,
            (false, Icon::Skipped) => theme::icons_ascii::SKIPPED,
            (false, Icon::Arrow) => theme::icons_ascii::ARROW,
            (false, Icon::Build) => theme::icons_ascii::BUILD,
            (false, Icon::Dispatch) => theme::icons_ascii::DISPATCH,
            (false, Icon::Trash) => theme::icons_ascii::TRASH,
        }
    }

    pub fn colored(&self, supports_color: bool, supports_unicode: bool) -> String {
        let s = self.render(supports_unicode);
        if !supports_color {
            return s.to_string();
        }
        let color = match self {
            Icon::Success => theme::colors::SUCCESS,
            Icon::Error => theme::colors::ERROR,
            Icon::Warning | Icon::Progress | Icon::Trash => theme::colors::WARNING,
            Icon::Pending | Icon::Skipped | Icon::Arrow => theme::colors::DIM,
            Icon::Build | Icon::Dispatch => theme::colors::INFO,
        };
        format!("{}", s.with(color))
    }
}
