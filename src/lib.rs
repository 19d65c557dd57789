// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod io;
pub mod reports;

// Re-export commonly used types
pub use crate::core::{
    as_date, as_decimal, as_integer, days_between, is_closed, is_placeholder, is_present,
    parse_records, AgeBand, FillPolicy, Header, IncomeBand, Record, Tally,
};

pub use crate::core::grouping::{arg_max, count_by, group_by, percentage, round2, tally_by};

pub use crate::reports::{
    BranchAudit, Checklist, Dashboard, EmployeeAudit, FamilyStatus, IncompleteLead,
    ReportOptions, Snapshot, TimeToClose,
};

pub use crate::io::output::{create_writer, OutputWriter, RenderOptions, ReportSection};

pub use crate::io::source::{source_for, FileSource, SourceError, StdinSource, TextSource};
