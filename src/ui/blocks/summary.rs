use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

#[derive(Debug, Clone)]
pub struct ResultSummary {
    title: String,
    success: bool,
    stats: Vec<(String, usize)>,
    infos: Vec<String>,
    warnings: Vec<String>,
}

impl ResultSummary {
    pub fn success(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            success: true,
            stats: Vec::new(),
            infos: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn partial(title: impl Into<String>) -> Self {
        Self {
            success: false,
            ..Self::success(title)
        }
    }

    pub fn add_stat(&mut self, label: impl Into<String>, count: usize) {
        self.stats.push((label.into(), count));
    }

    /// Add an informational message (shown with success icon)
    pub fn add_info(&mut self, message: impl Into<String>) {
        self.infos.push(message.into());
    }

    pub fn add_warning(&mut self, message: impl Into<String>) {
        self.warnings.push(message.into());
    }

    pub fn render(&self, supports_color: bool, supports_unicode: bool) -> String {
        let (icon, title) = if self.success {
            (Icon::Success, ColoredText::success(self.title.as_str()))
        } else {
            (Icon::Warning, ColoredText::warning(self.title.as_str()))
        };

        let mut out = format!(
            "{} {}\n",
            icon.colored(supports_color, supports_unicode),
            title.bold().render(supports_color)
        );

        let stats: Vec<String> = self
            .stats
            .iter()
            .map(|(label, count)| format!("{} {}", count, label))
            .collect();
        if !stats.is_empty() {
            out.push_str(&format!("  {}\n", stats.join(", ")));
        }

        for info in &self.infos {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Success.colored(supports_color, supports_unicode),
                info
            ));
        }
        for warning in &self.warnings {
            out.push_str(&format!(
                "  {} {}\n",
                Icon::Warning.colored(supports_color, supports_unicode),
                warning
            ));
        }
        out
    }
}
