/// Greedy word wrap. Whole words are appended while the joined line stays
/// within `max_width` characters; a word that alone exceeds the width gets a
/// line of its own, unbroken.
pub fn wrap_words(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_len = 0usize;
    for word in text.split_whitespace() {
        let word_len = word.chars().count();
        if line.is_empty() {
            line.push_str(word);
            line_len = word_len;
        } else if line_len + word_len + 1 <= max_width {
            line.push(' ');
            line.push_str(word);
            line_len += word_len + 1;
        } else {
            lines.push(std::mem::take(&mut line));
            line.push_str(word);
            line_len = word_len;
        }
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// [`wrap_words`] joined with newlines, ready for a text annotation.
pub fn wrap_text(text: &str, max_width: usize) -> String {
    wrap_words(text, max_width).join("\n")
}
