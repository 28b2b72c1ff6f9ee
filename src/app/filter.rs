//! Text filtering over the catalog.
//!
//! A track matches when its title or artist contains the query as a
//! case-insensitive substring. The result is always recomputed from the full
//! catalog, never narrowed incrementally.

use std::ops::Range;

use crate::catalog::Track;

pub fn track_matches(track: &Track, query_lower: &str) -> bool {
    track.title.to_lowercase().contains(query_lower)
        || track.artist.to_lowercase().contains(query_lower)
}

/// Catalog indices of the tracks matching `query`, in catalog order.
pub fn filter_indices(tracks: &[Track], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..tracks.len()).collect();
    }
    let query_lower = query.to_lowercase();
    tracks
        .iter()
        .enumerate()
        .filter(|(_, t)| track_matches(t, &query_lower))
        .map(|(i, _)| i)
        .collect()
}

/// Byte range of the first case-insensitive occurrence of `query` in `text`,
/// used to highlight the match in a row.
pub fn match_span(text: &str, query: &str) -> Option<Range<usize>> {
    let needle: Vec<char> = query.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return None;
    }

    let chars: Vec<(usize, char)> = text.char_indices().collect();
    for start in 0..chars.len() {
        let mut folded: Vec<char> = Vec::with_capacity(needle.len());
        for &(offset, c) in &chars[start..] {
            folded.extend(c.to_lowercase());
            if folded.len() >= needle.len() {
                if folded == needle {
                    return Some(chars[start].0..offset + c.len_utf8());
                }
                break;
            }
        }
    }
    None
}
