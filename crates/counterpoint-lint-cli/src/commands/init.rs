//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# counterpoint-lint configuration

# Lowest severity that makes `check` exit with status 1
# fail_on = "error"

[analyzer]
# Key used when `--key` is not given
key = "C major"

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.parallel-motion]
enabled = true

[rules.leap-over-octave]
enabled = true
# severity = "warning"  # Override default severity
max_leap = 12

[rules.unresolved-leading-tone]
enabled = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("counterpoint-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created counterpoint-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit counterpoint-lint.toml to configure rules");
    println!("  2. Run: counterpoint-lint check \"E4 D4 C4\" \"C3 G3 C3\"");

    Ok(())
}
