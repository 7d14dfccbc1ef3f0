//! Shared display helpers for gap reports and prerequisite chains.
//!
//! Used by `gap`, `recommend`, and `cost` so requirement lines render the
//! same way everywhere.

use crate::gap::{format_credits, MissingItem, MissingStatus, RuleReport};
use crate::prereq::{Chain, ChainStatus};
use crate::ui::UserInterface;

/// One-line rendering of a missing requirement.
pub fn missing_line(item: &MissingItem) -> String {
    let mut line = item.text.clone();
    if let Some(credits) = item.credits {
        if item.status == MissingStatus::Missing {
            line.push_str(&format!(" [{} cr]", format_credits(credits)));
        }
    }
    line
}

/// Print a missing requirement, with its prerequisites and options.
///
/// Major-covered lines are informational; everything else is a warning.
pub fn show_missing_item(ui: &mut dyn UserInterface, item: &MissingItem, details: bool) {
    let line = format!("  {}", missing_line(item));
    match item.status {
        MissingStatus::MajorCovered => ui.success(&line),
        MissingStatus::Missing | MissingStatus::SubsetMissing => ui.warning(&line),
    }

    if let Some(prereqs) = &item.prereqs {
        ui.message(&format!("      prerequisites: {}", prereqs));
    }
    if details {
        if let Some(options) = &item.options {
            ui.message(&format!("      options: {}", options.join(", ")));
        }
    }
}

/// One-line summary of a rule: kind, optional name, gap, chosen option.
pub fn rule_line(index: usize, rule: &RuleReport) -> String {
    let mut line = format!("{}. {}", index + 1, rule.kind);
    if let Some(name) = &rule.name {
        line.push_str(&format!(" \"{}\"", name));
    }
    line.push_str(&format!(": {} cr", format_credits(rule.gap_credits)));
    if let Some(option) = &rule.chosen_option {
        line.push_str(&format!(" (via {})", option));
    }
    line
}

/// Status marker shown next to a chain node.
pub fn chain_marker(status: ChainStatus) -> &'static str {
    match status {
        ChainStatus::Satisfied => "satisfied",
        ChainStatus::Cycle => "cycle",
        ChainStatus::Uncatalogued => "not in catalog",
        ChainStatus::Required => "take",
    }
}

/// Indented tree of a resolved chain, one node per line.
pub fn chain_tree(chain: &Chain) -> Vec<String> {
    let mut lines = Vec::new();
    push_chain(chain, 0, &mut lines);
    lines
}

fn push_chain(chain: &Chain, depth: usize, lines: &mut Vec<String>) {
    lines.push(format!(
        "{}{} ({} cr, {})",
        "  ".repeat(depth),
        chain.code,
        format_credits(chain.credits),
        chain_marker(chain.status)
    ));
    for prereq in &chain.prerequisites {
        push_chain(prereq, depth + 1, lines);
    }
}
