//! Markdown rendering for post bodies

use pulldown_cmark::{html, CowStr, Event, Options, Parser, Tag, TagEnd};

/// Markdown renderer
///
/// Headings without an explicit `{#id}` get one derived from their text, so
/// the table of contents can link to them.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    heading_ids: bool,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer
    pub fn new() -> Self {
        Self { heading_ids: true }
    }

    /// Create with custom settings
    pub fn with_options(heading_ids: bool) -> Self {
        Self { heading_ids }
    }

    /// Render markdown to HTML
    pub fn render(&self, markdown: &str) -> String {
        // Front-matter is handled separately in FrontMatter::parse()
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_FOOTNOTES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS
            | Options::ENABLE_SMART_PUNCTUATION
            | Options::ENABLE_HEADING_ATTRIBUTES;
        let parser = Parser::new_ext(markdown, options);

        let mut events: Vec<Event> = Vec::new();
        // (index of the heading start event, collected heading text)
        let mut heading: Option<(usize, String)> = None;

        for event in parser {
            match &event {
                Event::Start(Tag::Heading { .. }) if self.heading_ids => {
                    heading = Some((events.len(), String::new()));
                }
                Event::Text(text) | Event::Code(text) => {
                    if let Some((_, buf)) = heading.as_mut() {
                        buf.push_str(text);
                    }
                }
                Event::End(TagEnd::Heading(_)) => {
                    if let Some((start, text)) = heading.take() {
                        if let Event::Start(Tag::Heading { id, .. }) = &mut events[start] {
                            if id.is_none() {
                                *id = Some(CowStr::from(slug::slugify(&text)));
                            }
                        }
                    }
                }
                _ => {}
            }
            events.push(event);
        }

        let mut html_output = String::with_capacity(markdown.len() * 3 / 2);
        html::push_html(&mut html_output, events.into_iter());
        html_output
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}
