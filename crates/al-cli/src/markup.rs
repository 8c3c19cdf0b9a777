//! Render the light Markdown used in scene text as styled terminal text.

use colored::Colorize;
use pulldown_cmark::{Event, Parser, Tag, TagEnd};

#[derive(Default)]
struct Style {
    emphasis: u32,
    strong: u32,
    heading: u32,
}

impl Style {
    fn paint(&self, text: &str) -> String {
        let mut s = text.normal();
        if self.heading > 0 {
            s = s.bold().underline();
        }
        if self.strong > 0 {
            s = s.bold();
        }
        if self.emphasis > 0 {
            s = s.italic();
        }
        s.to_string()
    }
}

/// Render Markdown to terminal text. Unsupported constructs degrade to
/// their plain text.
pub fn render(source: &str) -> String {
    let mut out = String::new();
    let mut style = Style::default();
    // next number for ordered lists, None for bullet lists
    let mut lists: Vec<Option<u64>> = Vec::new();

    for event in Parser::new(source) {
        match event {
            Event::Start(Tag::Emphasis) => style.emphasis += 1,
            Event::End(TagEnd::Emphasis) => style.emphasis = style.emphasis.saturating_sub(1),
            Event::Start(Tag::Strong) => style.strong += 1,
            Event::End(TagEnd::Strong) => style.strong = style.strong.saturating_sub(1),
            Event::Start(Tag::Heading { .. }) => style.heading += 1,
            Event::End(TagEnd::Heading(_)) => {
                style.heading = style.heading.saturating_sub(1);
                out.push_str("\n\n");
            }
            Event::End(TagEnd::Paragraph) => {
                if lists.is_empty() {
                    out.push_str("\n\n");
                } else {
                    out.push('\n');
                }
            }
            Event::Start(Tag::List(start)) => {
                if !lists.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                lists.push(start);
            }
            Event::End(TagEnd::List(_)) => {
                lists.pop();
                if lists.is_empty() {
                    out.push('\n');
                }
            }
            Event::Start(Tag::Item) => {
                out.push_str(&"  ".repeat(lists.len().saturating_sub(1)));
                match lists.last_mut() {
                    Some(Some(n)) => {
                        out.push_str(&format!("{n}. "));
                        *n += 1;
                    }
                    _ => out.push_str("• "),
                }
            }
            Event::End(TagEnd::Item) => {
                if !out.ends_with('\n') {
                    out.push('\n');
                }
            }
            Event::End(TagEnd::CodeBlock) => out.push('\n'),
            Event::Text(text) => out.push_str(&style.paint(&text)),
            Event::Code(code) => out.push_str(&code.cyan().to_string()),
            Event::SoftBreak | Event::HardBreak => out.push('\n'),
            Event::Rule => out.push_str(&format!("{}\n\n", "─".repeat(40).dimmed())),
            _ => {}
        }
    }

    out.trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(source: &str) -> String {
        colored::control::set_override(false);
        render(source)
    }

    #[test]
    fn paragraphs_and_emphasis() {
        assert_eq!(
            plain("You see a *dark* cave.\n\nIt is **cold**."),
            "You see a dark cave.\n\nIt is cold."
        );
    }

    #[test]
    fn line_breaks_are_kept() {
        assert_eq!(plain("One line\nanother line"), "One line\nanother line");
    }

    #[test]
    fn heading_then_body() {
        assert_eq!(plain("# The Cave\n\nDrip."), "The Cave\n\nDrip.");
    }

    #[test]
    fn bullet_and_ordered_lists() {
        assert_eq!(plain("- sword\n- shield"), "• sword\n• shield");
        assert_eq!(plain("1. north\n2. south"), "1. north\n2. south");
    }

    #[test]
    fn inline_code_is_kept() {
        assert_eq!(plain("Say `xyzzy`."), "Say xyzzy.");
    }

    #[test]
    fn empty_text_renders_empty() {
        assert_eq!(plain(""), "");
    }
}
