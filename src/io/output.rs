//! Rendering of computed aggregates.
//!
//! Writers consume the [`Dashboard`] alone and re-derive nothing from raw
//! records. Table content is built once, format-independently, so every
//! writer renders exactly the same columns.

use std::io::Write;

use anyhow::Result;
use colored::*;

use crate::reports::Dashboard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportSection {
    Performance,
    Lifecycle,
    Product,
    Demographics,
    Completeness,
}

/// Display options resolved from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Restrict output to these sections; `None` renders everything.
    pub sections: Option<Vec<ReportSection>>,
    /// Show at most this many rows per ranked/grouped table.
    pub top: Option<usize>,
}

impl RenderOptions {
    pub fn includes(&self, section: ReportSection) -> bool {
        self.sections
            .as_ref()
            .map_or(true, |sections| sections.contains(&section))
    }
}

pub trait OutputWriter {
    fn write_dashboard(&mut self, dashboard: &Dashboard, options: &RenderOptions) -> Result<()>;
}

pub fn create_writer(
    format: crate::cli::OutputFormat,
    writer: Box<dyn Write>,
) -> Box<dyn OutputWriter> {
    match format {
        crate::cli::OutputFormat::Json => Box::new(JsonWriter::new(writer)),
        crate::cli::OutputFormat::Markdown => Box::new(MarkdownWriter::new(writer)),
        crate::cli::OutputFormat::Terminal => Box::new(TerminalWriter::new(writer)),
    }
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_dashboard(&mut self, dashboard: &Dashboard, options: &RenderOptions) -> Result<()> {
        let mut value = serde_json::to_value(dashboard)?;
        if let (Some(object), Some(_)) = (value.as_object_mut(), options.sections.as_ref()) {
            let keep: Vec<&str> = std::iter::once("generated_at")
                .chain(
                    ALL_SECTIONS
                        .iter()
                        .filter(|section| options.includes(**section))
                        .flat_map(|section| section_keys(*section).iter().copied()),
                )
                .collect();
            object.retain(|key, _| keep.contains(&key.as_str()));
        }
        writeln!(self.writer, "{}", serde_json::to_string_pretty(&value)?)?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_dashboard(&mut self, dashboard: &Dashboard, options: &RenderOptions) -> Result<()> {
        writeln!(self.writer, "# Leadmap Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            dashboard.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
        )?;

        for (_, table) in dashboard_tables(dashboard, options) {
            writeln!(self.writer)?;
            writeln!(self.writer, "## {}", table.title)?;
            writeln!(self.writer)?;
            writeln!(self.writer, "| {} |", table.headers.join(" | "))?;
            writeln!(
                self.writer,
                "|{}|",
                table.headers.iter().map(|_| "---").collect::<Vec<_>>().join("|")
            )?;
            for row in &table.rows {
                writeln!(self.writer, "| {} |", row.join(" | "))?;
            }
        }
        Ok(())
    }
}

pub struct TerminalWriter<W: Write> {
    writer: W,
}

impl<W: Write> TerminalWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for TerminalWriter<W> {
    fn write_dashboard(&mut self, dashboard: &Dashboard, options: &RenderOptions) -> Result<()> {
        writeln!(self.writer, "{}", "Leadmap Report".bold().blue())?;
        writeln!(self.writer, "{}", "==============".blue())?;

        if dashboard.snapshot.total == 0 {
            writeln!(self.writer)?;
            writeln!(
                self.writer,
                "{}",
                "No data rows found in the export.".yellow()
            )?;
            return Ok(());
        }

        for (_, table) in dashboard_tables(dashboard, options) {
            writeln!(self.writer)?;
            writeln!(self.writer, "{}", table.title.bold())?;
            write_aligned(&mut self.writer, &table.headers, &table.rows)?;
        }
        Ok(())
    }
}

fn write_aligned<W: Write>(writer: &mut W, headers: &[&str], rows: &[Vec<String>]) -> Result<()> {
    let mut widths: Vec<usize> = headers.iter().map(|header| header.len()).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            if index < widths.len() {
                widths[index] = widths[index].max(cell.len());
            }
        }
    }

    let render_row = |cells: Vec<&str>| -> String {
        cells
            .iter()
            .enumerate()
            .map(|(index, cell)| format!("{:<width$}", cell, width = widths[index]))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    writeln!(writer, "  {}", render_row(headers.to_vec()).dimmed())?;
    for row in rows {
        writeln!(
            writer,
            "  {}",
            render_row(row.iter().map(String::as_str).collect())
        )?;
    }
    Ok(())
}

struct Table {
    title: &'static str,
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

const ALL_SECTIONS: [ReportSection; 5] = [
    ReportSection::Completeness,
    ReportSection::Performance,
    ReportSection::Lifecycle,
    ReportSection::Product,
    ReportSection::Demographics,
];

/// JSON keys of the dashboard belonging to each section.
fn section_keys(section: ReportSection) -> &'static [&'static str] {
    match section {
        ReportSection::Performance => &[
            "conversion_by_employee",
            "conversion_by_branch",
            "closed_amount_by_branch",
            "closed_amount_by_employee",
            "visit_conversion",
        ],
        ReportSection::Lifecycle => &["time_to_close", "follow_up_frequency", "pipeline_health"],
        ReportSection::Product => &[
            "closed_by_product",
            "most_pitched",
            "most_closed",
            "preferred_by_age",
            "preferred_by_income",
            "most_easily_closed",
        ],
        ReportSection::Demographics => &[
            "job_categories",
            "age_distribution",
            "income_distribution",
            "districts",
            "pincodes",
            "family_status",
        ],
        ReportSection::Completeness => &["snapshot", "audit"],
    }
}

fn limit(rows: Vec<Vec<String>>, top: Option<usize>) -> Vec<Vec<String>> {
    match top {
        Some(top) if top < rows.len() => rows.into_iter().take(top).collect(),
        _ => rows,
    }
}

fn rate_cell(rate: f64) -> String {
    format!("{rate:.2}%")
}

/// Every table of the dashboard, in render order, filtered and truncated
/// per the options.
fn dashboard_tables(dashboard: &Dashboard, options: &RenderOptions) -> Vec<(ReportSection, Table)> {
    let mut tables: Vec<(ReportSection, Table)> = Vec::new();
    let mut push = |section: ReportSection, title, headers, rows, truncate| {
        if options.includes(section) {
            let rows = if truncate { limit(rows, options.top) } else { rows };
            tables.push((section, Table { title, headers, rows }));
        }
    };

    let snapshot = &dashboard.snapshot;
    push(
        ReportSection::Completeness,
        "Company Snapshot",
        vec!["Metric", "Value"],
        vec![
            vec!["Total Leads".to_string(), snapshot.total.to_string()],
            vec![
                "Complete Leads".to_string(),
                format!("{} ({:.2}%)", snapshot.complete, snapshot.complete_percent),
            ],
            vec![
                "Incomplete Leads".to_string(),
                format!("{} ({:.2}%)", snapshot.incomplete, snapshot.incomplete_percent),
            ],
            vec!["Branches".to_string(), snapshot.branches.to_string()],
            vec!["Employees".to_string(), snapshot.employees.to_string()],
        ],
        false,
    );
    push(
        ReportSection::Completeness,
        "Record Completeness by Employee",
        vec!["Branch", "Employee", "Total Leads", "Incomplete", "% Incomplete"],
        dashboard
            .audit
            .iter()
            .flat_map(|branch| {
                branch.employees.iter().map(|employee| {
                    vec![
                        branch.branch.clone(),
                        employee.employee.clone(),
                        employee.total.to_string(),
                        employee.incomplete.to_string(),
                        rate_cell(employee.incomplete_percent),
                    ]
                })
            })
            .collect(),
        true,
    );

    push(
        ReportSection::Performance,
        "Lead Conversion Rate by Employee",
        vec!["Employee Name", "Total Leads", "Closed Leads", "Conversion Rate"],
        dashboard
            .conversion_by_employee
            .iter()
            .map(|row| {
                vec![
                    row.name.clone(),
                    row.total.to_string(),
                    row.closed.to_string(),
                    rate_cell(row.rate),
                ]
            })
            .collect(),
        true,
    );
    push(
        ReportSection::Performance,
        "Lead Conversion Rate by Branch",
        vec!["Branch Name", "Total Leads", "Closed Leads", "Conversion Rate"],
        dashboard
            .conversion_by_branch
            .iter()
            .map(|row| {
                vec![
                    row.name.clone(),
                    row.total.to_string(),
                    row.closed.to_string(),
                    rate_cell(row.rate),
                ]
            })
            .collect(),
        true,
    );
    push(
        ReportSection::Performance,
        "Closed Amount by Branch",
        vec!["Branch Name", "Total Closed Amount"],
        dashboard
            .closed_amount_by_branch
            .iter()
            .map(|row| vec![row.name.clone(), format!("Rs. {:.2}", row.amount)])
            .collect(),
        true,
    );
    push(
        ReportSection::Performance,
        "Closed Amount by Employee",
        vec!["Employee Name", "Total Closed Amount"],
        dashboard
            .closed_amount_by_employee
            .iter()
            .map(|row| vec![row.name.clone(), format!("Rs. {:.2}", row.amount)])
            .collect(),
        true,
    );
    push(
        ReportSection::Performance,
        "Visit-to-Conversion Analysis",
        vec!["Number of Visits", "Total Leads", "Closed Leads", "Conversion Rate"],
        dashboard
            .visit_conversion
            .iter()
            .map(|row| {
                vec![
                    row.visits.to_string(),
                    row.total.to_string(),
                    row.closed.to_string(),
                    rate_cell(row.rate),
                ]
            })
            .collect(),
        true,
    );

    push(
        ReportSection::Lifecycle,
        "Time-to-Close Analysis",
        vec!["Average Days to Close", "Closed Leads Considered"],
        vec![vec![
            dashboard
                .time_to_close
                .average_days
                .map_or("N/A".to_string(), |days| format!("{days:.2}")),
            dashboard.time_to_close.samples.to_string(),
        ]],
        false,
    );
    push(
        ReportSection::Lifecycle,
        "Follow-up Frequency by Employee",
        vec!["Employee Name", "Total Follow-ups"],
        dashboard
            .follow_up_frequency
            .iter()
            .map(|row| vec![row.employee.clone(), row.follow_ups.to_string()])
            .collect(),
        true,
    );
    push(
        ReportSection::Lifecycle,
        "Pipeline Health",
        vec!["Lead Status", "Number of Leads"],
        dashboard
            .pipeline_health
            .iter()
            .map(|row| vec![row.status.clone(), row.count.to_string()])
            .collect(),
        true,
    );

    push(
        ReportSection::Product,
        "Closed Leads by Product",
        vec!["Product", "Closed Leads"],
        dashboard
            .closed_by_product
            .iter()
            .map(|row| vec![row.product.clone(), row.count.to_string()])
            .collect(),
        true,
    );
    push(
        ReportSection::Product,
        "Most Pitched Products",
        vec!["Product", "Pitched Count"],
        dashboard
            .most_pitched
            .iter()
            .map(|row| vec![row.product.clone(), row.count.to_string()])
            .collect(),
        true,
    );
    push(
        ReportSection::Product,
        "Most Closed Products",
        vec!["Product", "Closed Leads"],
        dashboard
            .most_closed
            .iter()
            .map(|row| vec![row.product.clone(), row.count.to_string()])
            .collect(),
        true,
    );
    push(
        ReportSection::Product,
        "Most Preferred Product by Age Group",
        vec!["Age Group", "Most Preferred Product", "Count"],
        dashboard
            .preferred_by_age
            .iter()
            .map(|row| vec![row.band.clone(), row.product.clone(), row.count.to_string()])
            .collect(),
        true,
    );
    push(
        ReportSection::Product,
        "Most Preferred Product by Income Group",
        vec!["Income Group", "Most Preferred Product", "Count"],
        dashboard
            .preferred_by_income
            .iter()
            .map(|row| vec![row.band.clone(), row.product.clone(), row.count.to_string()])
            .collect(),
        true,
    );
    push(
        ReportSection::Product,
        "Most Easily Closed Products",
        vec!["Product", "Total Leads", "Closed Leads", "Conversion Rate"],
        dashboard
            .most_easily_closed
            .iter()
            .map(|row| {
                vec![
                    row.product.clone(),
                    row.total.to_string(),
                    row.closed.to_string(),
                    rate_cell(row.rate),
                ]
            })
            .collect(),
        true,
    );

    push(
        ReportSection::Demographics,
        "Customer Profile by Job Category",
        vec!["Job Category", "Number of Leads"],
        dashboard
            .job_categories
            .iter()
            .map(|row| vec![row.name.clone(), row.count.to_string()])
            .collect(),
        true,
    );
    push(
        ReportSection::Demographics,
        "Age Distribution",
        vec!["Age Group", "Number of Leads"],
        dashboard
            .age_distribution
            .iter()
            .map(|row| vec![row.band.clone(), row.count.to_string()])
            .collect(),
        false,
    );
    push(
        ReportSection::Demographics,
        "Income Distribution",
        vec!["Income Group", "Number of Leads"],
        dashboard
            .income_distribution
            .iter()
            .map(|row| vec![row.band.clone(), row.count.to_string()])
            .collect(),
        false,
    );
    push(
        ReportSection::Demographics,
        "Leads by District",
        vec!["District", "Number of Leads"],
        dashboard
            .districts
            .iter()
            .map(|row| vec![row.name.clone(), row.count.to_string()])
            .collect(),
        true,
    );
    push(
        ReportSection::Demographics,
        "Leads by Pincode",
        vec!["Pincode", "Number of Leads"],
        dashboard
            .pincodes
            .iter()
            .map(|row| vec![row.name.clone(), row.count.to_string()])
            .collect(),
        true,
    );
    push(
        ReportSection::Demographics,
        "Family Status Analysis",
        vec!["Family Status", "Number of Leads"],
        vec![
            vec![
                "Married (Husband/Wife Name)".to_string(),
                dashboard.family_status.has_spouse.to_string(),
            ],
            vec![
                "Has Children".to_string(),
                dashboard.family_status.has_children.to_string(),
            ],
            vec!["Other".to_string(), dashboard.family_status.other.to_string()],
        ],
        false,
    );

    tables
}
