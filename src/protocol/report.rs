//! Report formatting.
//!
//! Text output has two framed blocks: the troop optimization result and the
//! best attack order. JSON output is the whole `PlanReport`, one object per
//! line.

use std::io::{self, Write};

use crate::board::unit::Troops;
use crate::engine::PlanReport;

const RULE: &str = "==========================";

/// Formats an optional combination, `none` when absent.
pub fn format_combination(combination: Option<Troops>) -> String {
    match combination {
        Some(c) => c.to_string(),
        None => "none".to_string(),
    }
}

/// Formats an attack order as its defense values, e.g. `(5, 10, 15)`.
pub fn format_order(report: &PlanReport) -> String {
    let defenses: Vec<String> = report
        .attack
        .order
        .iter()
        .map(|t| t.defense.to_string())
        .collect();
    format!("({})", defenses.join(", "))
}

/// Writes the human-readable report.
pub fn write_text<W: Write>(report: &PlanReport, out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Troop optimization:")?;
    writeln!(
        out,
        "Best troop combination: {}",
        format_combination(report.optimization.combination)
    )?;
    writeln!(
        out,
        "Maximum territories conquered: {}",
        report.optimization.conquered
    )?;
    writeln!(out, "{}", RULE)?;
    writeln!(out)?;
    writeln!(out, "{}", RULE)?;
    writeln!(out, "Best attack order: {}", format_order(report))?;
    writeln!(
        out,
        "Best troop combination (strategy): {}",
        format_combination(report.attack.strategy.combination)
    )?;
    writeln!(
        out,
        "Territories conquered in strategy: {}",
        report.attack.strategy.conquered
    )?;
    writeln!(out, "{}", RULE)?;
    out.flush()
}

/// Writes the report as a single JSON line.
pub fn write_json<W: Write>(report: &PlanReport, out: &mut W) -> io::Result<()> {
    serde_json::to_writer(&mut *out, report)?;
    writeln!(out)?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::territory::{Terrain, Territory};
    use crate::board::unit::UnitTable;
    use crate::engine::run_plan;
    use crate::plan::PlanConfig;
    use crate::search::SearchOptions;

    fn report(budget: u32) -> PlanReport {
        let cfg = PlanConfig {
            budget,
            costs: UnitTable::new(1, 3, 5),
            strengths: UnitTable::new(1, 3, 5),
            territories: vec![
                Territory::new(15, Terrain::Plain),
                Territory::new(5, Terrain::Plain),
            ],
            options: SearchOptions::default(),
        };
        run_plan(&cfg.validate().unwrap())
    }

    #[test]
    fn text_contains_both_blocks() {
        let mut out = Vec::new();
        write_text(&report(9), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Best troop combination: (1, 1, 1)"));
        assert!(text.contains("Maximum territories conquered: 1"));
        assert!(text.contains("Best attack order: (15, 5)"));
        assert!(text.contains("Territories conquered in strategy: 1"));
        assert_eq!(text.matches(RULE).count(), 4);
    }

    #[test]
    fn text_prints_none_without_combination() {
        let mut out = Vec::new();
        write_text(&report(2), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Best troop combination: none"));
        assert!(text.contains("Best troop combination (strategy): none"));
    }

    #[test]
    fn json_is_one_parseable_line() {
        let mut out = Vec::new();
        write_json(&report(9), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 1);
        let value: serde_json::Value = serde_json::from_str(text.trim()).unwrap();
        assert_eq!(value["optimization"]["conquered"], 1);
        assert_eq!(value["attack"]["positions"], serde_json::json!([0, 1]));
        assert_eq!(value["board"]["entries"][0]["band"], "red");
    }
}
