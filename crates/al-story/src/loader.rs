use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::error::{StoryError, StoryResult};
use crate::story::StoryDocument;

/// Directory searched for stories when none is given.
pub const DEFAULT_STORIES_DIR: &str = "stories";

/// File that marks a subdirectory as a story.
pub const STORY_FILE_NAME: &str = "story.yml";

/// Find every story under `dir`.
///
/// A story is a subdirectory containing a `story.yml` file; its name is the
/// subdirectory name. A missing or unreadable `dir` yields no stories.
pub fn discover_stories(dir: &Path) -> BTreeMap<String, PathBuf> {
    let mut stories = BTreeMap::new();

    let Ok(entries) = std::fs::read_dir(dir) else {
        debug!(dir = %dir.display(), "stories directory not readable");
        return stories;
    };

    for entry in entries.filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let story_file = path.join(STORY_FILE_NAME);
        if !story_file.is_file() {
            continue;
        }
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            stories.insert(name.to_string(), story_file);
        }
    }

    debug!(dir = %dir.display(), count = stories.len(), "discovered stories");
    stories
}

/// Load and validate the story called `name` from `dir`.
pub fn load_story(dir: &Path, name: &str) -> StoryResult<StoryDocument> {
    let stories = discover_stories(dir);
    let path = stories
        .get(name)
        .ok_or_else(|| StoryError::NotFound(name.to_string()))?;
    load_story_file(path)
}

/// Load and validate a single `story.yml` file.
pub fn load_story_file(path: &Path) -> StoryResult<StoryDocument> {
    let source = std::fs::read_to_string(path).map_err(|source| StoryError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let story = StoryDocument::from_yaml_str(&source)?;
    info!(
        path = %path.display(),
        title = %story.title,
        scenes = story.scenes.len(),
        "loaded story"
    );
    Ok(story)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    fn write_story(root: &Path, name: &str, body: &str) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(STORY_FILE_NAME), body).unwrap();
    }

    const MINIMAL: &str = "title: Minimal\nstart_scene_id: a\nscenes:\n  a:\n    description: Done.\n";

    #[test]
    fn discovers_only_directories_with_story_file() {
        let root = TempDir::new().unwrap();
        write_story(root.path(), "zeta", MINIMAL);
        write_story(root.path(), "alpha", MINIMAL);
        fs::create_dir_all(root.path().join("empty")).unwrap();
        fs::write(root.path().join("loose.yml"), MINIMAL).unwrap();

        let stories = discover_stories(root.path());
        let names: Vec<_> = stories.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["alpha", "zeta"]);
        assert!(stories["alpha"].ends_with("alpha/story.yml"));
    }

    #[test]
    fn missing_directory_has_no_stories() {
        let root = TempDir::new().unwrap();
        assert!(discover_stories(&root.path().join("nope")).is_empty());
    }

    #[test]
    fn load_by_name() {
        let root = TempDir::new().unwrap();
        write_story(root.path(), "minimal", MINIMAL);

        let story = load_story(root.path(), "minimal").unwrap();
        assert_eq!(story.title, "Minimal");
    }

    #[test]
    fn unknown_name_is_not_found() {
        let root = TempDir::new().unwrap();
        assert!(matches!(
            load_story(root.path(), "ghost"),
            Err(StoryError::NotFound(name)) if name == "ghost"
        ));
    }

    #[test]
    fn empty_file_is_rejected() {
        let root = TempDir::new().unwrap();
        write_story(root.path(), "blank", "");
        assert!(matches!(
            load_story(root.path(), "blank"),
            Err(StoryError::Empty)
        ));
    }
}
