//! Text helpers: tag stripping, word counts, read time, excerpts

/// Strip HTML tags from content
pub fn strip_html(html: &str) -> String {
    let mut result = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => in_tag = false,
            _ if !in_tag => result.push(c),
            _ => {}
        }
    }

    result
}

/// Count whitespace-separated words in HTML content (tags stripped first)
pub fn count_words(html: &str) -> usize {
    strip_html(html).split_whitespace().count()
}

/// Estimated reading time in whole minutes, never less than one
pub fn calculate_read_time(content: &str, words_per_minute: usize) -> u32 {
    let wpm = words_per_minute.max(1);
    let minutes = count_words(content).div_ceil(wpm).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// Plain-text excerpt of at most `max_length` characters, plus "..." when cut
pub fn generate_excerpt(content: &str, max_length: usize) -> String {
    let text = strip_html(content);
    let text = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if text.chars().count() <= max_length {
        return text;
    }

    let cut: String = text.chars().take(max_length).collect();
    format!("{}...", cut.trim_end())
}
