use crate::config::ConfigWarning;
use crate::ui::context::UiContext;
use crate::ui::primitives::icon::Icon;

/// Render unknown-key warnings from the config file
pub fn render_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) -> String {
    let mut out = String::new();
    for w in warnings {
        let location = match w.line {
            Some(line) => format!("{}:{}", w.file.display(), line),
            None => w.file.display().to_string(),
        };
        out.push_str(&format!(
            "{} Unknown config key '{}' in {}\n",
            Icon::Warning.colored(ui.color, ui.unicode),
            w.key,
            location
        ));
        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

pub fn print_config_warnings(warnings: &[ConfigWarning], ui: &UiContext) {
    if ui.json {
        for w in warnings {
            let _ = crate::ui::json::emit(serde_json::json!({
                "event": "warning",
                "kind": "unknown_config_key",
                "key": w.key,
                "file": w.file.display().to_string(),
                "line": w.line,
                "suggestion": w.suggestion,
            }));
        }
        return;
    }

    eprint!("{}", render_config_warnings(warnings, ui));
}
