//! Approximate String Matching
//!
//! Case-insensitive approximate substring search: the pattern is aligned
//! against every substring of the text with unit-cost edits (Sellers'
//! algorithm), and the best alignment is scored as
//!
//! ```text
//! score = errors / pattern_len + start_offset / distance
//! ```
//!
//! clamped to `[0, 1]`. `0.0` is an exact match at the start of the text.

/// Matching knobs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyOptions {
    /// Highest accepted score
    pub threshold: f64,
    /// Characters of offset from the start that add a full point of score
    pub distance: usize,
    /// Fewest pattern characters the alignment must match exactly
    pub min_match_char_length: usize,
}

impl Default for FuzzyOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            distance: 100,
            min_match_char_length: 2,
        }
    }
}

/// Best accepted alignment of a pattern in a text
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FuzzyMatch {
    pub score: f64,
    /// Edit operations in the alignment
    pub errors: usize,
    /// Char offset in the text where the alignment starts
    pub start: usize,
    /// Pattern chars matched exactly
    pub matched_chars: usize,
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    cost: usize,
    start: usize,
    matches: usize,
}

impl Cell {
    /// Fewer edits, then more exact matches, then earlier start
    fn better(self, other: Self) -> Self {
        let key = |c: &Self| (c.cost, usize::MAX - c.matches, c.start);
        if key(&other) < key(&self) { other } else { self }
    }
}

/// Find the best-scoring alignment of `pattern` in `text`.
///
/// Returns `None` for an empty pattern or when no alignment is within
/// `options.threshold` with at least `options.min_match_char_length` exact
/// matches.
pub fn match_pattern(pattern: &str, text: &str, options: &FuzzyOptions) -> Option<FuzzyMatch> {
    let pattern: Vec<char> = pattern.trim().to_lowercase().chars().collect();
    let text: Vec<char> = text.to_lowercase().chars().collect();
    let m = pattern.len();
    if m == 0 {
        return None;
    }

    // Row 0: empty pattern aligns for free after any text prefix
    let mut prev: Vec<Cell> = (0..=text.len())
        .map(|j| Cell {
            cost: 0,
            start: j,
            matches: 0,
        })
        .collect();

    for (i, &p) in pattern.iter().enumerate() {
        let mut cur = Vec::with_capacity(text.len() + 1);
        cur.push(Cell {
            cost: i + 1,
            start: 0,
            matches: 0,
        });
        for (j, &t) in text.iter().enumerate() {
            let same = p == t;
            let diagonal = Cell {
                cost: prev[j].cost + usize::from(!same),
                matches: prev[j].matches + usize::from(same),
                ..prev[j]
            };
            let skip_pattern = Cell {
                cost: prev[j + 1].cost + 1,
                ..prev[j + 1]
            };
            let skip_text = Cell {
                cost: cur[j].cost + 1,
                ..cur[j]
            };
            cur.push(diagonal.better(skip_pattern).better(skip_text));
        }
        prev = cur;
    }

    prev.into_iter()
        .filter(|cell| cell.matches >= options.min_match_char_length)
        .map(|cell| FuzzyMatch {
            score: score(cell.cost, m, cell.start, options.distance),
            errors: cell.cost,
            start: cell.start,
            matched_chars: cell.matches,
        })
        .filter(|found| found.score <= options.threshold)
        .min_by(|a, b| {
            a.score
                .total_cmp(&b.score)
                .then(b.matched_chars.cmp(&a.matched_chars))
        })
}

fn score(errors: usize, pattern_len: usize, start: usize, distance: usize) -> f64 {
    let accuracy = errors as f64 / pattern_len as f64;
    let proximity = match (start, distance) {
        (0, _) => 0.0,
        (_, 0) => 1.0,
        (s, d) => s as f64 / d as f64,
    };
    (accuracy + proximity).min(1.0)
}
