use std::path::Path;

use colored::Colorize;
use serde::Serialize;

use al_story::StoryDocument;

#[derive(Serialize)]
struct Summary<'a> {
    name: &'a str,
    title: &'a str,
    author: &'a str,
    version: &'a str,
    start_scene_id: &'a str,
    scenes: usize,
    endings: Vec<&'a str>,
    choices: usize,
    unreachable: Vec<&'a str>,
}

impl<'a> Summary<'a> {
    fn new(name: &'a str, story: &'a StoryDocument) -> Self {
        Self {
            name,
            title: &story.title,
            author: &story.author,
            version: &story.version,
            start_scene_id: &story.start_scene_id,
            scenes: story.scenes.len(),
            endings: story.terminal_scenes(),
            choices: story.choice_count(),
            unreachable: story.unreachable_scenes(),
        }
    }
}

pub fn run(dir: &Path, name: &str, json: bool) -> Result<(), String> {
    let story = super::load(dir, name)?;
    let summary = Summary::new(name, &story);

    if json {
        let out = serde_json::to_string_pretty(&summary).map_err(|e| e.to_string())?;
        println!("{out}");
        return Ok(());
    }

    for id in &summary.unreachable {
        eprintln!(
            "  {} scene '{id}' is unreachable from '{}'",
            "warning:".yellow().bold(),
            summary.start_scene_id
        );
    }

    println!("  All checks passed for '{}'.", summary.title);
    println!(
        "  {} scenes, {} choices, {} endings",
        summary.scenes,
        summary.choices,
        summary.endings.len()
    );

    Ok(())
}
