//! Outgoing message helpers.

/// Split `text` into chunks of at most `limit` characters, breaking on line
/// boundaries where possible.
///
/// Joining the chunks with `\n` restores the input, except where a line
/// longer than `limit` had to be hard-split on char boundaries. Runs of empty
/// lines may produce empty or blank chunks.
pub fn split_message(text: &str, limit: usize) -> Vec<String> {
    let limit = limit.max(1);
    if text.chars().count() <= limit {
        return vec![text.to_string()];
    }

    let mut out = Vec::new();
    // `None` until the first line; an open chunk may legitimately be empty.
    let mut chunk: Option<(String, usize)> = None;

    for line in text.split('\n') {
        let line_len = line.chars().count();

        if let Some((buf, len)) = chunk.as_mut() {
            if *len + 1 + line_len <= limit {
                buf.push('\n');
                buf.push_str(line);
                *len += 1 + line_len;
                continue;
            }
        }

        if let Some((buf, _)) = chunk.take() {
            out.push(buf);
        }

        if line_len <= limit {
            chunk = Some((line.to_string(), line_len));
            continue;
        }

        // Overlong line.
        let chars: Vec<char> = line.chars().collect();
        let mut pieces = chars.chunks(limit).peekable();
        while let Some(piece) = pieces.next() {
            let s: String = piece.iter().collect();
            if pieces.peek().is_some() {
                out.push(s);
            } else {
                chunk = Some((s, piece.len()));
            }
        }
    }

    if let Some((buf, _)) = chunk {
        out.push(buf);
    }
    out
}
