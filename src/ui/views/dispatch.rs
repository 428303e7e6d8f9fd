use std::path::Path;

use crate::application::DispatchReport;
use crate::domain::ports::{ToolInvocation, ToolOutput};
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

/// Command line followed by everything it printed
pub fn render_dispatch_result(
    invocation: &ToolInvocation,
    output: &ToolOutput,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut out = format!(
        "{} {}\n",
        Icon::Dispatch.colored(supports_color, supports_unicode),
        invocation.display()
    );
    for line in output.stdout.lines() {
        out.push_str(&format!("  {}\n", line));
    }
    for line in output.stderr.lines() {
        out.push_str(&format!(
            "  {}\n",
            ColoredText::warning(line).render(supports_color)
        ));
    }
    if !output.success() {
        let status = match output.code {
            Some(code) => format!("exit code {code}"),
            None => "terminated by signal".to_string(),
        };
        out.push_str(&format!(
            "  {} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::dim(status).render(supports_color)
        ));
    }
    out
}

pub fn render_spawn_failure(
    file: &Path,
    invocation: &ToolInvocation,
    message: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "{} {}\n  {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        invocation.display(),
        ColoredText::error(format!("could not run on {}: {}", file.display(), message))
            .render(supports_color)
    )
}

pub fn render_dispatch_summary(
    report: &DispatchReport,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let clean = report.nonzero_exit.is_empty() && report.spawn_failures.is_empty();
    let mut block = if clean {
        ResultSummary::success("Dispatch Complete")
    } else {
        ResultSummary::partial("Dispatch Results")
    };

    block.add_stat("files", report.dispatched.len());
    block.add_stat("excluded", report.excluded);
    if !report.nonzero_exit.is_empty() {
        block.add_warning(format!("{} exited non-zero", report.nonzero_exit.len()));
    }
    if !report.spawn_failures.is_empty() {
        block.add_warning(format!("{} could not be started", report.spawn_failures.len()));
    }

    block.render(supports_color, supports_unicode)
}
