pub mod check;
pub mod init;
pub mod list;
pub mod play;

use std::path::Path;

use mansion_core::Story;

/// Load a story manifest and every scene it lists.
fn load_story(manifest: &Path) -> Result<Story, String> {
    Story::load(manifest).map_err(|e| format!("cannot load story: {e}"))
}
