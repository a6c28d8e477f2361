//! List rules command implementation.

use counterpoint_lint_rules::default_rules;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in default_rules() {
        println!(
            "{:<10} {:<25} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nParse errors and voice length mismatches are always reported.");

    println!("\nUse --rules to filter specific rules, e.g.:");
    println!("  counterpoint-lint check --rules parallel-motion \"C4 D4\" \"F3 G3\"");
    println!("  counterpoint-lint check --rules CP001,CP003 \"B3 C4\" \"G3 E3\"");
}
