//! Normalized edit-distance similarity.
//!
//! Callers lower-case both inputs first; this module compares characters
//! exactly.

/// Levenshtein distance with unit insert/delete/substitute costs.
///
/// Uses a single row sized to the shorter input, so memory is
/// `O(min(len(a), len(b)))`.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let (long, short) = if a.len() >= b.len() { (a, b) } else { (b, a) };

    if short.is_empty() {
        return long.len();
    }

    let mut row: Vec<usize> = (0..=short.len()).collect();
    for (i, lc) in long.iter().enumerate() {
        // `diag` holds row[j] from the previous iteration (the top-left cell).
        let mut diag = row[0];
        row[0] = i + 1;
        for (j, sc) in short.iter().enumerate() {
            let above = row[j + 1];
            row[j + 1] = if lc == sc {
                diag
            } else {
                diag.min(above).min(row[j]) + 1
            };
            diag = above;
        }
    }
    row[short.len()]
}

/// Similarity in `[0, 1]`: `1 - distance / max(len(a), len(b))`, measured in
/// characters. Two empty strings are identical (`1.0`).
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    1.0 - edit_distance(a, b) as f64 / max_len as f64
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
