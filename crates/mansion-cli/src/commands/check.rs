use std::path::Path;

use colored::Colorize;
use mansion_core::validate_story;

pub fn run(manifest: &Path) -> Result<(), String> {
    let story = super::load_story(manifest)?;
    let issues = validate_story(&story.store, story.start());

    for issue in &issues {
        let level = if issue.is_error {
            "error".red().bold()
        } else {
            "warning".yellow().bold()
        };
        eprintln!("  {level}: {}: {}", issue.scene, issue.message);
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;

    if errors > 0 {
        return Err(format!(
            "{} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        ));
    }

    let endings = story
        .store
        .scenes()
        .flat_map(|s| s.choices())
        .filter(|c| c.target.scene().is_none())
        .count();

    println!("  All checks passed for '{}'.", story.title());
    println!("  {} scenes, {} endings", story.store.len(), endings);
    if warnings > 0 {
        println!(
            "  {} warning{}",
            warnings,
            if warnings == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
