use std::io::{self, IsTerminal};
use std::path::Path;

use al_engine::{Outcome, Session};
use al_story::discover_stories;

use crate::terminal::{PresenterConfig, TerminalPresenter};

pub fn run(dir: &Path, name: Option<&str>, clear_screen: bool) -> Result<(), String> {
    let stdout = io::stdout();
    let config = PresenterConfig::default().with_clear_screen(clear_screen && stdout.is_terminal());
    let mut presenter = TerminalPresenter::new(io::stdin().lock(), stdout.lock(), config);

    let name = match name {
        Some(name) => name.to_string(),
        None => {
            let stories = discover_stories(dir);
            if stories.is_empty() {
                return Err(format!(
                    "no stories found in '{}'. Please create a story to begin.",
                    dir.display()
                ));
            }
            let names: Vec<&str> = stories.keys().map(String::as_str).collect();
            let Ok(index) = presenter.choose_story(&names) else {
                presenter.farewell();
                return Ok(());
            };
            names
                .get(index)
                .map(|n| n.to_string())
                .ok_or_else(|| format!("invalid story number {}", index + 1))?
        }
    };

    presenter.loading(&name);
    let story = super::load(dir, &name)?;

    let mut session = Session::new(&story);
    match session.run(&mut presenter) {
        Outcome::Completed | Outcome::Stuck => Ok(()),
        Outcome::Aborted => {
            presenter.farewell();
            Ok(())
        }
        Outcome::Failed => Err(format!("'{name}' stopped on a broken story")),
    }
}
