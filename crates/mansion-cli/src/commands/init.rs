use std::fs;
use std::path::{Path, PathBuf};

use mansion_core::Manifest;

const ARRIVAL: &str = r#"{
  "id": "arrival",
  "title": "Arrival at the Mansion",
  "description": "A sedan chair sets you down before a red lacquered gate.",
  "choices": [
    { "text": "Greet the gatekeeper politely", "luckChange": 10, "nextScene": "garden" },
    { "text": "Slip in through the side door", "luckChange": -10, "nextScene": "garden" },
    {
      "text": "Turn back home",
      "luckChange": 0,
      "nextScene": "end",
      "endingText": "You never learn what lay behind the gate."
    }
  ]
}
"#;

const GARDEN: &str = r#"[
  {
    "id": "garden",
    "title": "The Garden",
    "description": "Willows bend over a quiet pond. A servant leads you onward.",
    "nextScene": "hall"
  },
  {
    "id": "hall",
    "title": "The Great Hall",
    "description": "The matriarch looks up from her tea.",
    "choices": [
      {
        "text": "Bow deeply",
        "luckChange": 5,
        "nextScene": "end",
        "endingText": "You are welcomed into the household."
      },
      {
        "text": "Speak out of turn",
        "luckChange": -20,
        "nextScene": "end",
        "endingText": "The room falls silent. Your stay will be short."
      }
    ]
  }
]
"#;

pub fn run(name: &str) -> Result<(), String> {
    let dir = Path::new(name);

    if dir.exists() {
        return Err(format!("directory '{}' already exists", name));
    }

    let scenes_dir = dir.join("scenes");
    fs::create_dir_all(&scenes_dir).map_err(|e| format!("cannot create directory: {e}"))?;

    let manifest = Manifest {
        title: Some(name.to_string()),
        start: "arrival".into(),
        initial_luck: Some(50),
        scenes: vec![
            PathBuf::from("scenes/arrival.json"),
            PathBuf::from("scenes/garden.json"),
        ],
    };
    let manifest = serde_json::to_string_pretty(&manifest)
        .map_err(|e| format!("cannot serialize manifest: {e}"))?;

    fs::write(dir.join("story.json"), manifest)
        .map_err(|e| format!("cannot write story.json: {e}"))?;
    fs::write(scenes_dir.join("arrival.json"), ARRIVAL)
        .map_err(|e| format!("cannot write scenes/arrival.json: {e}"))?;
    fs::write(scenes_dir.join("garden.json"), GARDEN)
        .map_err(|e| format!("cannot write scenes/garden.json: {e}"))?;

    println!("Created story '{}' in {}/", name, name);
    println!("  story.json          — manifest: start scene and scene files");
    println!("  scenes/arrival.json — a scene with three choices");
    println!("  scenes/garden.json  — two scenes in one file");
    println!();
    println!("Get started:");
    println!("  cd {}", name);
    println!("  mansion check   # Look for broken links and dead ends");
    println!("  mansion list    # List all scenes");
    println!("  mansion play    # Play the story");

    Ok(())
}
