//! Text patch registering the Reanimated plugin in babel.config.js
//!
//! The generators emit a fixed layout, so the plugin line goes at a fixed
//! line index per template. The line before it must be the `presets` entry;
//! anything else means the generator output changed and the patch refuses to
//! guess.

use crate::error::{Result, ScaffoldError};
use crate::request::Template;
use crate::templates::BABEL_PLUGIN_LINE;
use std::path::Path;

const PLUGIN_MARKER: &str = "react-native-reanimated/plugin";

/// Zero-based line index where the plugin line is inserted
pub fn insertion_index(template: Template) -> usize {
    if template.is_expo() {
        4
    } else {
        2
    }
}

/// Patch `source`; `Ok(None)` means the plugin is already registered.
pub fn patch(source: &str, template: Template, path: &Path) -> Result<Option<String>> {
    if source.contains(PLUGIN_MARKER) {
        return Ok(None);
    }

    let mut lines: Vec<&str> = source.split('\n').collect();
    let index = insertion_index(template);

    let presets = match lines.get(index - 1) {
        Some(line) if line.contains("presets") => *line,
        _ => {
            return Err(ScaffoldError::UnexpectedBabelLayout {
                path: path.to_path_buf(),
                line: index,
            })
        }
    };

    let indent_len = presets.len() - presets.trim_start().len();
    let plugin_line = format!("{}{}", &presets[..indent_len], BABEL_PLUGIN_LINE);
    lines.insert(index, &plugin_line);

    Ok(Some(lines.join("\n")))
}
