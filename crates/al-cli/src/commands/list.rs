use std::path::Path;

use al_story::{discover_stories, load_story_file};
use comfy_table::{ContentArrangement, Table};

pub fn run(dir: &Path) -> Result<(), String> {
    let stories = discover_stories(dir);

    if stories.is_empty() {
        println!("  No stories found in '{}'.", dir.display());
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Name", "Title", "Author", "Version", "Scenes"]);

    for (name, path) in &stories {
        match load_story_file(path) {
            Ok(story) => {
                let author = if story.author.is_empty() {
                    "—".to_string()
                } else {
                    story.author.clone()
                };
                let version = if story.version.is_empty() {
                    "—".to_string()
                } else {
                    story.version.clone()
                };
                table.add_row(vec![
                    name.clone(),
                    story.title.clone(),
                    author,
                    version,
                    story.scenes.len().to_string(),
                ]);
            }
            Err(e) => {
                table.add_row(vec![
                    name.clone(),
                    format!("(invalid: {e})"),
                    "—".to_string(),
                    "—".to_string(),
                    "—".to_string(),
                ]);
            }
        }
    }

    println!("{table}");
    println!();
    println!("  {} stories", stories.len());

    Ok(())
}
