pub mod check;
pub mod list;
pub mod play;

use std::path::Path;

use al_story::{StoryDocument, StoryError, discover_stories};

/// Load a story by name, turning errors into a printable message.
/// An unknown name lists the stories that do exist.
fn load(dir: &Path, name: &str) -> Result<StoryDocument, String> {
    al_story::load_story(dir, name).map_err(|e| match e {
        StoryError::NotFound(_) => {
            let available: Vec<_> = discover_stories(dir).into_keys().collect();
            if available.is_empty() {
                format!("{e} (no stories in '{}')", dir.display())
            } else {
                format!("{e} (available: {})", available.join(", "))
            }
        }
        other => other.to_string(),
    })
}
