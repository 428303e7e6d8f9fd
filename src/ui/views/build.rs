use std::path::Path;

use crate::application::BuildSummary;
use crate::domain::value_objects::AssetCategory;
use crate::ui::blocks::header::CommandHeader;
use crate::ui::blocks::summary::ResultSummary;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

pub fn render_build_header(
    assets_root: &Path,
    output_root: &Path,
    modes: &[&str],
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let mut header = CommandHeader::new(Icon::Build, "Asset Build");
    header.add("Assets", assets_root.display().to_string());
    header.add("Output", output_root.display().to_string());
    for mode in modes {
        header.add("Mode", *mode);
    }
    header.render(supports_color, supports_unicode)
}

pub fn render_purge(
    path: &Path,
    existed: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if existed {
        format!(
            "{} purged {}\n",
            Icon::Trash.colored(supports_color, supports_unicode),
            path.display()
        )
    } else {
        format!(
            "{} {}\n",
            Icon::Skipped.colored(supports_color, supports_unicode),
            ColoredText::dim(format!("nothing to purge at {}", path.display()))
                .render(supports_color)
        )
    }
}

pub fn render_category(category: AssetCategory, dir: &Path, supports_color: bool) -> String {
    format!(
        "\n{} {}\n",
        ColoredText::info(category.label()).bold().render(supports_color),
        ColoredText::dim(dir.display().to_string()).render(supports_color)
    )
}

/// Progress line for a unit about to be built, with the staleness reason
pub fn render_unit_started(
    source: &Path,
    newer: bool,
    dest_exists: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let reason = ColoredText::dim(format!("(newer: {newer}, exists: {dest_exists})"));
    format!(
        "  {} building {} {}\n",
        Icon::Progress.colored(supports_color, supports_unicode),
        source.display(),
        reason.render(supports_color)
    )
}

pub fn render_command(command: &str, supports_color: bool) -> String {
    format!("    {}\n", ColoredText::dim(format!("$ {command}")).render(supports_color))
}

/// Captured tool output, indented under the unit it belongs to
pub fn render_tool_output(stdout: &str, stderr: &str, supports_color: bool) -> String {
    let mut out = String::new();
    for line in stdout.lines() {
        out.push_str(&format!("    {}\n", line));
    }
    for line in stderr.lines() {
        out.push_str(&format!(
            "    {}\n",
            ColoredText::warning(line).render(supports_color)
        ));
    }
    out
}

pub fn render_unit_built(
    destination: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "  {} {}\n",
        Icon::Success.colored(supports_color, supports_unicode),
        destination.display()
    )
}

pub fn render_unit_would_build(
    destination: &Path,
    command: &str,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "  {} would build {}\n{}",
        Icon::Pending.colored(supports_color, supports_unicode),
        destination.display(),
        render_command(command, supports_color)
    )
}

pub fn render_unit_skipped(
    destination: &Path,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    format!(
        "  {} {}\n",
        Icon::Skipped.colored(supports_color, supports_unicode),
        ColoredText::dim(format!("{} is up to date", destination.display())).render(supports_color)
    )
}

pub fn render_unit_failed(
    source: &Path,
    code: Option<i32>,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let status = match code {
        Some(code) => format!("exit code {code}"),
        None => "terminated by signal".to_string(),
    };
    format!(
        "  {} {}\n",
        Icon::Error.colored(supports_color, supports_unicode),
        ColoredText::error(format!("building {} failed: {}", source.display(), status))
            .render(supports_color)
    )
}

pub fn render_intermediate_removed(path: &Path, supports_color: bool) -> String {
    format!(
        "    {}\n",
        ColoredText::dim(format!("removed {}", path.display())).render(supports_color)
    )
}

pub fn render_build_summary(
    summary: &BuildSummary,
    dry_run: bool,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = if dry_run {
        "Dry Run Complete"
    } else if summary.is_up_to_date() {
        "Everything Up To Date"
    } else {
        "Build Complete"
    };

    let mut block = ResultSummary::success(title);
    if dry_run {
        block.add_stat("would build", summary.would_build.len());
    } else {
        block.add_stat("built", summary.built.len());
    }
    block.add_stat("up to date", summary.skipped.len());

    if summary.purged {
        block.add_info("output directory purged");
    }
    if !summary.removed_intermediates.is_empty() {
        block.add_info(format!(
            "{} intermediate files removed",
            summary.removed_intermediates.len()
        ));
    }

    block.render(supports_color, supports_unicode)
}
