use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::core::parsing::FillPolicy;
use crate::io::output::ReportSection;

#[derive(Parser, Debug)]
#[command(name = "leadmap")]
#[command(about = "Sales lead analytics over a published spreadsheet export", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase verbosity level (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Parse the export and render the report dashboard
    Report {
        /// Path to the delimited export, or `-` for stdin
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Limit output to the named report sections
        #[arg(long = "only", value_enum, value_delimiter = ',')]
        only: Option<Vec<SectionArg>>,

        /// Show at most N rows per table
        #[arg(long)]
        top: Option<usize>,

        /// Fill value for short data rows
        #[arg(long, value_enum)]
        fill: Option<FillArg>,

        /// Disable colors (ASCII-only output)
        #[arg(long)]
        plain: bool,
    },

    /// Run the record-completeness audit, optionally enforcing a threshold
    Audit {
        /// Path to the delimited export, or `-` for stdin
        path: PathBuf,

        /// Restrict the audit to one branch
        #[arg(long)]
        branch: Option<String>,

        /// Fail when the overall incomplete percentage exceeds this value
        #[arg(long = "max-incomplete")]
        max_incomplete: Option<f64>,

        /// List each incomplete lead with its missing fields
        #[arg(long)]
        detailed: bool,

        /// Emit the audit as JSON instead of tables
        #[arg(long)]
        json: bool,

        /// Fill value for short data rows
        #[arg(long, value_enum)]
        fill: Option<FillArg>,

        /// Disable colors (ASCII-only output)
        #[arg(long)]
        plain: bool,
    },

    /// Browse branches, employees, customers, and customer detail cards
    Customers {
        /// Path to the delimited export, or `-` for stdin
        path: PathBuf,

        /// Branch to list employees for
        #[arg(long)]
        branch: Option<String>,

        /// Employee to list customers for (requires --branch)
        #[arg(long, requires = "branch")]
        employee: Option<String>,

        /// Customer to show the detail card for
        #[arg(long)]
        customer: Option<String>,

        /// Fill value for short data rows
        #[arg(long, value_enum)]
        fill: Option<FillArg>,

        /// Disable colors (ASCII-only output)
        #[arg(long)]
        plain: bool,
    },

    /// Initialize configuration file
    Init {
        /// Force overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
    Markdown,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "terminal" => Some(Self::Terminal),
            "json" => Some(Self::Json),
            "markdown" => Some(Self::Markdown),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FillArg {
    /// Fill short rows with the empty string
    Empty,
    /// Fill short rows with the literal `N/A`
    Na,
}

impl From<FillArg> for FillPolicy {
    fn from(arg: FillArg) -> Self {
        match arg {
            FillArg::Empty => FillPolicy::Empty,
            FillArg::Na => FillPolicy::NotAvailable,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SectionArg {
    Performance,
    Lifecycle,
    Product,
    Demographics,
    Completeness,
}

impl From<SectionArg> for ReportSection {
    fn from(arg: SectionArg) -> Self {
        match arg {
            SectionArg::Performance => ReportSection::Performance,
            SectionArg::Lifecycle => ReportSection::Lifecycle,
            SectionArg::Product => ReportSection::Product,
            SectionArg::Demographics => ReportSection::Demographics,
            SectionArg::Completeness => ReportSection::Completeness,
        }
    }
}
