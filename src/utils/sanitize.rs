//! Log-safe previews of response bodies.

/// Returns at most `max_chars` characters of `body`, with control characters and
/// line breaks collapsed to single spaces so the preview stays on one log line.
///
/// A `...` suffix marks truncation.
pub fn body_preview(body: &str, max_chars: usize) -> String {
    let mut preview = String::with_capacity(max_chars.min(body.len()) + 3);
    let mut last_was_space = false;
    let mut taken = 0;

    for c in body.chars() {
        if taken == max_chars {
            preview.push_str("...");
            return preview;
        }
        if c.is_control() || c.is_whitespace() {
            if !last_was_space {
                preview.push(' ');
                last_was_space = true;
                taken += 1;
            }
        } else {
            preview.push(c);
            last_was_space = false;
            taken += 1;
        }
    }
    preview
}
