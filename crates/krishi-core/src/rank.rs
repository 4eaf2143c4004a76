//! Top-K probabilistic ranking engine.
//!
//! Turns a classifier's probability vector into an ordered, formatted
//! recommendation list. Ordering is fully deterministic: probabilities
//! descend, and equal probabilities fall back to ascending original label
//! index, so the same input always produces the same output across runs.

use serde::Serialize;

/// Fixed, ordered set of labels the classifier can output.
///
/// The index↔label mapping is established when the label-encoder artifact is
/// loaded and never changes for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelSet {
    labels: Vec<String>,
}

impl LabelSet {
    pub fn new(labels: Vec<String>) -> Self {
        Self { labels }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.labels.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(String::as_str)
    }
}

/// One ranked entry: label plus confidence as a two-decimal percentage
/// string, e.g. `"42.37%"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CropScore {
    pub label: String,
    pub confidence: String,
}

/// Ordered recommendation list, at most K entries, descending confidence.
pub type RankedRecommendation = Vec<CropScore>;

/// Rank the top `k` labels by probability.
///
/// - Sort order: probability descending; ties broken by ascending original
///   label index.
/// - `k <= 0` yields an empty list (not an error); `k` beyond the label
///   count clamps silently to the full set.
/// - Confidence is `probability * 100` formatted with exactly two decimals
///   via `{:.2}` (Rust's default formatting, which rounds exact ties
///   half-to-even).
///
/// `probs` shorter than the label set ranks only the scored prefix; callers
/// are expected to pass one probability per label.
pub fn rank_top_k(probs: &[f64], labels: &LabelSet, k: i64) -> RankedRecommendation {
    if k <= 0 {
        return Vec::new();
    }

    let scored = probs.len().min(labels.len());
    let mut indices: Vec<usize> = (0..scored).collect();
    indices.sort_by(|&a, &b| probs[b].total_cmp(&probs[a]).then(a.cmp(&b)));

    let take = (k as usize).min(scored);
    indices
        .into_iter()
        .take(take)
        .map(|i| CropScore {
            // Index is < labels.len() by construction.
            label: labels.get(i).unwrap_or_default().to_string(),
            confidence: format!("{:.2}%", probs[i] * 100.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(names: &[&str]) -> LabelSet {
        LabelSet::new(names.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn ranks_descending_with_formatted_scores() {
        let set = labels(&["rice", "wheat", "maize"]);
        let ranked = rank_top_k(&[0.1, 0.5, 0.4], &set, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].label, "wheat");
        assert_eq!(ranked[0].confidence, "50.00%");
        assert_eq!(ranked[1].label, "maize");
        assert_eq!(ranked[1].confidence, "40.00%");
    }

    #[test]
    fn k_larger_than_label_count_clamps() {
        let set = labels(&["rice", "wheat", "maize"]);
        let ranked = rank_top_k(&[0.2, 0.3, 0.5], &set, 10);
        assert_eq!(ranked.len(), 3);
    }

    #[test]
    fn non_positive_k_yields_empty() {
        let set = labels(&["rice", "wheat"]);
        assert!(rank_top_k(&[0.4, 0.6], &set, 0).is_empty());
        assert!(rank_top_k(&[0.4, 0.6], &set, -3).is_empty());
    }

    #[test]
    fn ties_break_by_ascending_label_index() {
        let set = labels(&["d", "c", "b", "a"]);
        let ranked = rank_top_k(&[0.25, 0.25, 0.25, 0.25], &set, 4);
        let order: Vec<&str> = ranked.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(order, ["d", "c", "b", "a"]);
    }

    #[test]
    fn output_is_non_increasing_and_tie_stable() {
        let set = labels(&["a", "b", "c", "d", "e"]);
        let probs = [0.3, 0.1, 0.3, 0.2, 0.1];
        let ranked = rank_top_k(&probs, &set, 5);
        // Recover original indices to check both halves of the invariant.
        let indices: Vec<usize> = ranked
            .iter()
            .map(|r| set.iter().position(|l| l == r.label).unwrap())
            .collect();
        for w in indices.windows(2) {
            let (p0, p1) = (probs[w[0]], probs[w[1]]);
            assert!(p0 >= p1);
            if p0 == p1 {
                assert!(w[0] < w[1]);
            }
        }
    }

    #[test]
    fn formats_two_decimals() {
        let set = labels(&["a"]);
        let ranked = rank_top_k(&[0.42371], &set, 1);
        assert_eq!(ranked[0].confidence, "42.37%");
        let ranked = rank_top_k(&[1.0], &set, 1);
        assert_eq!(ranked[0].confidence, "100.00%");
        let ranked = rank_top_k(&[0.0], &set, 1);
        assert_eq!(ranked[0].confidence, "0.00%");
    }

    #[test]
    fn empty_label_set_yields_empty() {
        let set = labels(&[]);
        assert!(rank_top_k(&[], &set, 5).is_empty());
    }
}
