use std::path::PathBuf;

use anyhow::Result;
use colored::*;
use serde::Serialize;

use crate::core::parsing::FillPolicy;
use crate::reports::completeness::{self, BranchAudit, Snapshot};

use super::{apply_color_mode, load_records, report_options};

pub struct AuditConfig {
    pub path: PathBuf,
    pub branch: Option<String>,
    pub max_incomplete: Option<f64>,
    pub detailed: bool,
    pub json: bool,
    pub fill: FillPolicy,
    pub plain: bool,
}

#[derive(Serialize)]
struct AuditReport {
    snapshot: Snapshot,
    branches: Vec<BranchAudit>,
}

pub fn handle_audit(config: AuditConfig) -> Result<()> {
    apply_color_mode(config.plain || config.json);

    let records = load_records(&config.path, config.fill);
    let options = report_options();
    let snapshot = completeness::snapshot(&records, &options.checklist);

    let branches = match &config.branch {
        Some(branch) => {
            let Some(summary) =
                completeness::branch_summary(&records, &options.checklist, branch)
            else {
                anyhow::bail!("no leads found for branch '{branch}'");
            };
            vec![summary]
        }
        None => completeness::audit(&records, &options.checklist),
    };

    if config.json {
        let report = AuditReport { snapshot: snapshot.clone(), branches: branches.clone() };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_audit(&snapshot, &branches, config.branch.is_some(), config.detailed);
    }

    // The threshold turns a data state into an exit code, nothing more.
    if let Some(max_incomplete) = config.max_incomplete {
        let observed = match branches.first() {
            Some(branch) if config.branch.is_some() => branch.incomplete_percent,
            _ => snapshot.incomplete_percent,
        };
        if observed > max_incomplete {
            anyhow::bail!(
                "incomplete lead percentage {observed:.2}% exceeds maximum {max_incomplete:.2}%"
            );
        }
    }

    Ok(())
}

fn print_audit(snapshot: &Snapshot, branches: &[BranchAudit], scoped: bool, detailed: bool) {
    if !scoped {
        println!("{}", "Company Snapshot".bold().blue());
        println!("  Total leads: {}", snapshot.total);
        println!(
            "  Complete: {} ({:.2}%)",
            snapshot.complete.to_string().green(),
            snapshot.complete_percent
        );
        println!(
            "  Incomplete: {} ({:.2}%)",
            snapshot.incomplete.to_string().red(),
            snapshot.incomplete_percent
        );
        println!("  Branches: {}", snapshot.branches);
        println!("  Employees: {}", snapshot.employees);
    }

    if snapshot.total == 0 {
        println!();
        println!("{}", "No data rows found in the export.".yellow());
        return;
    }

    for branch in branches {
        println!();
        println!(
            "{} ({} leads, {} incomplete, {:.2}%)",
            branch.branch.bold(),
            branch.total,
            branch.incomplete,
            branch.incomplete_percent
        );
        for employee in &branch.employees {
            println!(
                "  {:<30} {:>5} leads  {:>5} incomplete  {:>7}",
                employee.employee,
                employee.total,
                employee.incomplete,
                format!("{:.2}%", employee.incomplete_percent)
            );
            if detailed {
                for lead in &employee.incomplete_leads {
                    println!("    - {}", lead.customer.yellow());
                    for field in &lead.missing {
                        println!("        Missing: {field}");
                    }
                }
            }
        }
    }
}
