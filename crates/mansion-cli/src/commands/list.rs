use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use mansion_core::{ChoiceTarget, Progression, Scene};

pub fn run(manifest: &Path) -> Result<(), String> {
    let story = super::load_story(manifest)?;

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Title", "Leads to"]);

    for scene in story.store.scenes() {
        let marker = if scene.id == *story.start() { " *" } else { "" };
        table.add_row(vec![
            format!("{}{marker}", scene.id),
            scene.title.clone(),
            exits(scene),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} scenes (* = start)", story.store.len());

    Ok(())
}

fn exits(scene: &Scene) -> String {
    match &scene.progression {
        Progression::Choices(choices) => choices
            .iter()
            .map(|c| match &c.target {
                ChoiceTarget::Scene(id) => id.to_string(),
                ChoiceTarget::Ending(_) => "(ending)".to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        Progression::Continue(next) => format!("{next} (continue)"),
        Progression::DeadEnd => "—".to_string(),
    }
}
