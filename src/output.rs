use anyhow::Result;
use owo_colors::OwoColorize;

use crate::config::EffectiveConfig;
use crate::model::{OutputFormat, Report, UsageTier};

pub fn print_report(report: &Report, cfg: &EffectiveConfig) -> Result<()> {
    match cfg.format {
        OutputFormat::Ai => print_ai(report),
        OutputFormat::Human => print_human(report, cfg.color.enabled()),
    }
}

fn print_ai(report: &Report) -> Result<()> {
    for h in &report.unused_external {
        let tier = if report.unused_everywhere.contains(h) {
            UsageTier::UnusedEverywhere
        } else {
            UsageTier::UsedInternallyOnly
        };
        let obj = serde_json::json!({ "h": h, "tier": tier });
        println!("{}", serde_json::to_string(&obj)?);
    }

    let summary = serde_json::json!({
        "total": report.total,
        "unused_external": report.unused_external.len(),
        "removal_candidates": report.unused_everywhere.len(),
    });
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

fn print_human(report: &Report, color: bool) -> Result<()> {
    println!();
    println!("Total headers: {}", report.total);

    let external_label = format!(
        "Headers not referenced by any consumer: {}",
        report.unused_external.len()
    );
    if color {
        println!("{}", external_label.bold().cyan());
    } else {
        println!("{external_label}");
    }
    for h in &report.unused_external {
        println!("  - {h}");
    }

    println!();
    let removal_label = format!(
        "Headers not referenced anywhere (removal candidates): {}",
        report.unused_everywhere.len()
    );
    if color {
        println!("{}", removal_label.bold().red());
    } else {
        println!("{removal_label}");
    }
    for h in &report.unused_everywhere {
        println!("  - {h}");
    }

    Ok(())
}
