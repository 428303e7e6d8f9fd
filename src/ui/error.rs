use crate::error::BuildError;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::terminal::detect_capabilities;

/// Render an error for the terminal, with a hint for known failures
pub fn format_error(err: &anyhow::Error) -> String {
    let caps = detect_capabilities();
    format_error_with(err, caps.supports_color, caps.supports_unicode)
}

pub fn format_error_with(
    err: &anyhow::Error,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(err.to_string()).bold().render(supports_color)
    );

    if let Some(hint) = err.downcast_ref::<BuildError>().and_then(hint_for) {
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Arrow.colored(supports_color, supports_unicode),
            ColoredText::dim(hint).render(supports_color)
        ));
    }
    out
}

fn hint_for(err: &BuildError) -> Option<String> {
    match err {
        BuildError::ToolsDirUnset { .. } => Some(format!(
            "pass --tools-dir or set {}",
            crate::config::TOOLS_DIR_ENV
        )),
        BuildError::ToolSpawn { .. } => {
            Some("check that the tool directories contain the expected executables".to_string())
        }
        BuildError::ToolFailed { .. } => {
            Some("the tool output above explains the failure".to_string())
        }
        _ => None,
    }
}

pub fn print_error(err: &anyhow::Error, json: bool) {
    if json {
        let mut output = serde_json::json!({
            "event": "error",
            "message": err.to_string(),
        });
        if let Some(file) = err.downcast_ref::<BuildError>().and_then(BuildError::source_file) {
            output["file"] = serde_json::Value::String(file.display().to_string());
        }
        let _ = crate::ui::json::emit(output);
        return;
    }

    eprint!("{}", format_error(err));
}
