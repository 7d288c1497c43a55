/*!
 * Text segmentation for forced alignment.
 *
 * Cuts free-form transcript text into short, subtitle-sized fragments that
 * the alignment engine can map to timestamp ranges, one fragment per line.
 * The splitter is a generic heuristic: it knows a fixed set of punctuation
 * markers and a word-count target, nothing about grammar or language.
 */

/// Punctuation markers used to find natural break points, applied in this
/// order (sentence-level before clause-level). Each marker stays attached to
/// the end of the piece it terminates.
pub const SEPARATORS: [&str; 4] = [". ", ", ", "; ", ": "];

/// Target maximum number of words per output fragment.
pub const MAX_WORDS_PER_FRAGMENT: usize = 6;

/// Split `text` at every occurrence of `sep`, keeping the marker at the end
/// of the preceding piece. Concatenating the returned pieces reproduces
/// `text` byte-for-byte.
///
/// Adjacent markers produce empty pieces between them; those are harmless
/// here and are filtered out later in the pipeline.
pub fn split_keep_separator(text: &str, sep: &str) -> Vec<String> {
    debug_assert!(!sep.is_empty());

    let mut pieces = Vec::new();
    let mut buffer = String::new();

    // Left-to-right scan; the marker is matched as a literal substring, not
    // a pattern, so overlapping markers cannot interact.
    for ch in text.chars() {
        buffer.push(ch);
        if buffer.ends_with(sep) {
            pieces.push(std::mem::take(&mut buffer));
        }
    }

    if !buffer.is_empty() {
        pieces.push(buffer);
    }

    pieces
}

/// Apply every marker in [`SEPARATORS`] in order, re-splitting each piece
/// produced by the previous marker. A piece that already ends with an
/// earlier marker is never cut mid-marker by a later pass.
fn split_by_separators(text: &str) -> Vec<String> {
    let mut pieces = vec![text.to_string()];

    for sep in SEPARATORS {
        let mut next = Vec::with_capacity(pieces.len());
        for piece in &pieces {
            next.extend(split_keep_separator(piece, sep));
        }
        pieces = next;
    }

    pieces
}

/// Split one chunk into roughly balanced parts of at most
/// [`MAX_WORDS_PER_FRAGMENT`] words each.
///
/// Rather than slicing fixed-size prefixes (which leaves one long remainder),
/// each oversized part is divided into `max(2, words / 6)` groups of
/// `ceil(words / groups)` words: the first group is emitted and the rest is
/// queued for the next pass. The loop terminates because every split
/// strictly shrinks the oversized part.
///
/// Words are rejoined with single ASCII spaces, so any multi-space or tab
/// formatting inside a chunk collapses. This matches the original behavior
/// and is accepted as a lossy normalization.
pub fn balance_words(chunk: &str) -> Vec<String> {
    let word_count = chunk.split_whitespace().count();
    if word_count <= MAX_WORDS_PER_FRAGMENT {
        return vec![chunk.to_string()];
    }

    let mut parts = vec![chunk.to_string()];
    let mut changed = true;

    while changed {
        changed = false;
        let mut next = Vec::with_capacity(parts.len() + 1);

        for part in &parts {
            let words: Vec<&str> = part.split_whitespace().collect();
            if words.len() <= MAX_WORDS_PER_FRAGMENT {
                next.push(part.clone());
                continue;
            }

            let num_parts = (words.len() / MAX_WORDS_PER_FRAGMENT).max(2);
            let words_per_part = words.len().div_ceil(num_parts);

            let (head, rest) = words.split_at(words_per_part.min(words.len()));
            next.push(head.join(" "));
            if !rest.is_empty() {
                next.push(rest.join(" "));
                changed = true;
            }
        }

        parts = next;
    }

    parts
}

/// Segment transcript text into an ordered sequence of non-empty,
/// whitespace-trimmed fragments, each destined to become one timed subtitle
/// line.
///
/// Total over all inputs: any UTF-8 string is valid, and the empty string
/// yields an empty sequence. Apart from redundant whitespace, no characters
/// are discarded.
pub fn segment(text: &str) -> Vec<String> {
    // Pass 1: cut at punctuation markers, keeping each marker attached.
    let pieces = split_by_separators(text);

    // Pass 2: drop whitespace-only artifacts from adjacent markers.
    let pieces = trim_and_filter(pieces);

    // Pass 3: balance any piece still over the word target.
    let mut fragments = Vec::with_capacity(pieces.len());
    for piece in &pieces {
        fragments.extend(balance_words(piece));
    }

    // Final clean so no fragment is empty or carries stray whitespace.
    trim_and_filter(fragments)
}

fn trim_and_filter(pieces: Vec<String>) -> Vec<String> {
    pieces
        .into_iter()
        .map(|piece| piece.trim().to_string())
        .filter(|piece| !piece.is_empty())
        .collect()
}
