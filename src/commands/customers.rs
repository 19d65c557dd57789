use std::path::PathBuf;

use anyhow::Result;
use colored::*;

use crate::core::parsing::FillPolicy;
use crate::reports::directory;

use super::{apply_color_mode, load_records};

pub struct CustomersConfig {
    pub path: PathBuf,
    pub branch: Option<String>,
    pub employee: Option<String>,
    pub customer: Option<String>,
    pub fill: FillPolicy,
    pub plain: bool,
}

pub fn handle_customers(config: CustomersConfig) -> Result<()> {
    apply_color_mode(config.plain);

    let records = load_records(&config.path, config.fill);
    if records.is_empty() {
        println!("{}", "No data rows found in the export.".yellow());
        return Ok(());
    }

    if let Some(customer) = &config.customer {
        return print_detail(&records, customer);
    }

    match (&config.branch, &config.employee) {
        (None, _) => {
            println!("{}", "Branches".bold().blue());
            for branch in directory::branches(&records) {
                println!("  {branch}");
            }
        }
        (Some(branch), None) => {
            println!("{}", format!("Employees of {branch}").bold().blue());
            let employees = directory::employees(&records, branch);
            if employees.is_empty() {
                anyhow::bail!("no leads found for branch '{branch}'");
            }
            for employee in employees {
                println!("  {employee}");
            }
        }
        (Some(branch), Some(employee)) => {
            println!(
                "{}",
                format!("Customers of {employee} ({branch})").bold().blue()
            );
            let customers = directory::customers(&records, branch, employee);
            if customers.is_empty() {
                anyhow::bail!("no leads found for employee '{employee}' in branch '{branch}'");
            }
            for customer in customers {
                println!("  {customer}");
            }
        }
    }
    Ok(())
}

fn print_detail(records: &[crate::core::parsing::Record], customer: &str) -> Result<()> {
    let Some(detail) = directory::customer_detail(records, customer) else {
        anyhow::bail!("no lead found for customer '{customer}'");
    };

    println!("{}", detail.customer.bold().blue());
    for section in &detail.sections {
        println!();
        println!("{}", section.title.bold());
        for item in &section.items {
            println!("  {:<32} {}", item.label, item.value);
        }
    }
    Ok(())
}
