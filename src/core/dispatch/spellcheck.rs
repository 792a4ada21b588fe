//=========================================================================
// Hook Name Spellcheck
//=========================================================================
//
// Pure fuzzy comparison of registered hook names against the expected
// list. Only ever invoked on the "hook not found" branch of dispatch,
// never in the hot path of a found hook.
//
// A suggestion is produced when a registered name is within edit distance
// 2 of an expected name without matching any expected name exactly.
//
//=========================================================================

/// Maximum edit distance that still counts as a near miss.
const MAX_DISTANCE: usize = 2;

//=== Comparison ==========================================================

/// Compares registered names against expected hook names.
///
/// Returns `(found, suggestion)` pairs for every registered name that is
/// a near miss of some expected name. Exact matches produce nothing.
pub fn compare(registered: &[&str], expected: &[&'static str]) -> Vec<(String, &'static str)> {
    let mut suggestions = Vec::new();

    for &found in registered {
        if expected.contains(&found) {
            continue;
        }

        let best = expected
            .iter()
            .map(|&e| (levenshtein(found, e), e))
            .min_by_key(|&(d, _)| d);

        if let Some((distance, suggestion)) = best {
            if distance > 0 && distance <= MAX_DISTANCE {
                suggestions.push((found.to_string(), suggestion));
            }
        }
    }

    suggestions
}

//=== Edit Distance =======================================================

/// Classic two-row Levenshtein distance.
fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            let cost = if ca == cb { 0 } else { 1 };
            curr[j + 1] = (prev[j] + cost)
                .min(prev[j + 1] + 1)
                .min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

//=========================================================================
// Unit Tests
//=========================================================================
