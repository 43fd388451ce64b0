//! Task breakdown command.

use tasksense_core::suggest_breakdown;

pub fn run(title: &str, description: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let plan = suggest_breakdown(title, description);
    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}
