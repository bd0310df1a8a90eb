use regex::Regex;
use std::sync::LazyLock;

use crate::model::InstructionStep;

static NUMBERED: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s*").unwrap());

static STEP_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^step\s+\d+:\s*").unwrap());

/// Parse a raw instructions section into ordered steps
///
/// Leading "1." and "Step 1:" markers are removed, in that order. Lines that
/// are blank, or become blank once the marker is gone, are dropped.
pub fn parse_instructions(section: &str) -> Vec<InstructionStep> {
    section
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(clean_step)
        .collect()
}

fn clean_step(line: &str) -> Option<InstructionStep> {
    let line = NUMBERED.replace(line, "");
    let line = STEP_LABEL.replace(&line, "");
    let line = line.trim();

    if line.is_empty() {
        None
    } else {
        Some(line.to_string())
    }
}
