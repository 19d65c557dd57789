use anyhow::Result;
use clap::Parser;
use leadmap::cli::{Cli, Commands};
use leadmap::commands::{self, AuditConfig, CustomersConfig, ReportConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    match cli.command {
        Commands::Report {
            path,
            format,
            output,
            only,
            top,
            fill,
            plain,
        } => commands::handle_report(ReportConfig {
            path,
            format: commands::resolve_format(format),
            output,
            sections: only.map(|sections| sections.into_iter().map(Into::into).collect()),
            top: commands::resolve_top(top),
            fill: commands::resolve_fill(fill),
            plain,
        }),
        Commands::Audit {
            path,
            branch,
            max_incomplete,
            detailed,
            json,
            fill,
            plain,
        } => commands::handle_audit(AuditConfig {
            path,
            branch,
            max_incomplete,
            detailed,
            json,
            fill: commands::resolve_fill(fill),
            plain,
        }),
        Commands::Customers {
            path,
            branch,
            employee,
            customer,
            fill,
            plain,
        } => commands::handle_customers(CustomersConfig {
            path,
            branch,
            employee,
            customer,
            fill: commands::resolve_fill(fill),
            plain,
        }),
        Commands::Init { force } => commands::init_config(force),
    }
}

// Map -v counts onto the log filter; RUST_LOG still wins when set.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
