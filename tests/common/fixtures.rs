//! Test fixtures - fake tool scripts and sample sources.
//!
//! Each fake tool appends one line `<name> <args...>` to the invocation log
//! named by `$PURPL_TEST_LOG` and writes the outputs a real tool would.

/// `meshtool to <src> <dest>` / `texturetool to <src> <dest>`
pub const CONVERTER_SCRIPT: &str = r#"#!/bin/sh
echo "$(basename "$0") $*" >> "$PURPL_TEST_LOG"
echo "converted $2"
printf 'packed\n' > "$3"
"#;

/// `glslc <src> -o <dest>`
pub const GLSLC_SCRIPT: &str = r#"#!/bin/sh
echo "$(basename "$0") $*" >> "$PURPL_TEST_LOG"
printf 'spirv\n' > "$3"
"#;

/// `msdf-atlas-gen -font <f> -imageout <png> -json <json> -charset <txt>`
pub const ATLAS_SCRIPT: &str = r#"#!/bin/sh
echo "$(basename "$0") $*" >> "$PURPL_TEST_LOG"
printf 'png\n' > "$4"
printf '{}\n' > "$6"
"#;

/// Any tool that reports a conversion error
pub const FAILING_SCRIPT: &str = r#"#!/bin/sh
echo "$(basename "$0") $*" >> "$PURPL_TEST_LOG"
echo "cannot convert $2" >&2
exit 3
"#;

pub const SAMPLE_OBJ: &str = "v 0 0 0\nv 1 0 0\nv 0 1 0\nf 1 2 3\n";

pub const SAMPLE_SHADER: &str = "#version 450\nvoid main() {}\n";
