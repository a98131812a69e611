//! Label sidecar
//!
//! One class per line, in model output order: `name[, default portion]`.
//! A leading class index is ignored: "12: rice" always, "12 rice" only when
//! every line carries one, so names like "7 layer dip" survive. Blank lines
//! and `#` comments are skipped.

use std::path::Path;

use crate::error::{Error, Result};

/// Portion assumed when a label line does not name one
pub const DEFAULT_PORTION: &str = "100g";

/// One model class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    pub name: String,
    /// Typical visible portion, e.g. "150g" or "1 tbsp"
    pub portion: String,
}

/// Load and parse a label file
pub fn load_labels(path: &Path) -> Result<Vec<LabelEntry>> {
    let contents = std::fs::read_to_string(path).map_err(|e| {
        Error::Config(format!("Failed to read labels from {}: {}", path.display(), e))
    })?;
    let labels = parse_labels(&contents);
    if labels.is_empty() {
        return Err(Error::Config(format!(
            "Label file is empty or invalid: {}",
            path.display()
        )));
    }
    tracing::info!("Loaded {} ingredient labels from {}", labels.len(), path.display());
    Ok(labels)
}

pub fn parse_labels(contents: &str) -> Vec<LabelEntry> {
    let lines: Vec<&str> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .collect();
    let space_indexed = !lines.is_empty() && lines.iter().all(|line| split_index(line).is_some());

    lines
        .into_iter()
        .filter_map(|line| parse_label_line(line, space_indexed))
        .collect()
}

/// "12: rice" or "12 rice" -> "rice"
fn split_index(line: &str) -> Option<&str> {
    let end = line
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(line.len());
    if end == 0 {
        return None;
    }
    let rest = &line[end..];
    let rest = match rest.trim_start().strip_prefix(':') {
        Some(after_colon) => after_colon,
        None if rest.starts_with(char::is_whitespace) => rest,
        None => return None,
    };
    let rest = rest.trim();
    (!rest.is_empty()).then_some(rest)
}

fn parse_label_line(line: &str, space_indexed: bool) -> Option<LabelEntry> {
    let mut label = line;

    if let Some(rest) = split_index(label) {
        let colon = label[..label.len() - rest.len()].contains(':');
        if colon || space_indexed {
            label = rest;
        }
    }

    let (name, portion) = match label.split_once(',') {
        Some((name, portion)) => (name, portion.trim()),
        None => (label, ""),
    };
    let name = name.trim().trim_matches('"').trim_matches('\'').to_lowercase();
    if name.is_empty() {
        return None;
    }

    let portion = if portion.is_empty() {
        DEFAULT_PORTION.to_string()
    } else {
        portion.to_string()
    };

    Some(LabelEntry { name, portion })
}
