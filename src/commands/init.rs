use crate::io;
use anyhow::Result;
use std::path::PathBuf;

pub fn init_config(force: bool) -> Result<()> {
    let config_path = PathBuf::from(".leadmap.toml");

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    let default_config = r#"# Leadmap Configuration

[parser]
# Fill value for short data rows: "not-available" or "empty"
fill = "not-available"

[reports]
# Fields counted by the follow-up frequency report
follow_up_fields = ["VisitDays", "Mention2ndvisit", "Mention3rdvisit", "Mention4thvisit"]
# Uncomment to replace the built-in completeness checklist
# checklist = ["BRANCHNAME", "EMPLOYEENAME", "CustomerName", "District"]

[output]
default_format = "terminal"
# Uncomment to cap rows per ranked table
# top = 20
"#;

    io::write_file(&config_path, default_config)?;
    println!("Created .leadmap.toml configuration file");

    Ok(())
}
