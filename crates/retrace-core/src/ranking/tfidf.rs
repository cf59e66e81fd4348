use std::collections::{HashMap, HashSet};

/// Sparse token-weight vector. Absent tokens are implicitly zero.
pub(crate) type WeightVector = HashMap<String, f64>;

/// Within-document term frequency, normalized by the document's maximum raw
/// count: the most frequent token always weighs exactly 1.0, an empty
/// document yields an empty vector.
#[must_use]
pub(crate) fn term_frequency(tokens: &[String]) -> WeightVector {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let max_count = counts.values().copied().max().unwrap_or(1).max(1) as f64;
    counts
        .into_iter()
        .map(|(token, count)| (token.to_string(), count as f64 / max_count))
        .collect()
}

/// Per-token count of documents containing it at least once. Each distinct
/// token counts once per document regardless of repetition.
#[must_use]
pub(crate) fn document_frequency(documents: &[&[String]]) -> HashMap<String, usize> {
    let mut table: HashMap<String, usize> = HashMap::new();
    for tokens in documents {
        let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
        for token in distinct {
            *table.entry(token.to_string()).or_insert(0) += 1;
        }
    }
    table
}

/// TF-IDF weights with smoothed idf: `tf * (ln((N+1)/(df+1)) + 1)`. Always
/// positive, no division by zero for tokens the table has never seen.
///
/// The caller must have built `df_table` over the same document set being
/// scored; that contract is not checked here.
#[must_use]
pub(crate) fn tfidf_weights(
    tokens: &[String],
    df_table: &HashMap<String, usize>,
    total_docs: usize,
) -> WeightVector {
    let total = total_docs as f64;
    term_frequency(tokens)
        .into_iter()
        .map(|(token, tf)| {
            let df = df_table.get(&token).copied().unwrap_or(0) as f64;
            let idf = ((total + 1.0) / (df + 1.0)).ln() + 1.0;
            (token, tf * idf)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| (*t).to_string()).collect()
    }

    #[test]
    fn term_frequency_is_bounded_and_max_normalized() {
        let tf = term_frequency(&doc(&["token", "token", "token", "refresh", "jwt"]));
        assert_eq!(tf.len(), 3);
        for weight in tf.values() {
            assert!(*weight > 0.0 && *weight <= 1.0);
        }
        assert_eq!(tf["token"], 1.0);
        assert!((tf["refresh"] - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn term_frequency_of_empty_document_is_empty() {
        assert!(term_frequency(&[]).is_empty());
    }

    #[test]
    fn document_frequency_counts_distinct_tokens_once_per_document() {
        let a = doc(&["auth", "auth", "login"]);
        let b = doc(&["auth", "css"]);
        let table = document_frequency(&[&a, &b]);
        assert_eq!(table["auth"], 2);
        assert_eq!(table["login"], 1);
        assert_eq!(table["css"], 1);
    }

    #[test]
    fn document_frequency_never_decreases_when_a_document_is_added() {
        let a = doc(&["auth", "login"]);
        let b = doc(&["css"]);
        let extra = doc(&["auth", "flow"]);

        let before = document_frequency(&[&a, &b]);
        let after = document_frequency(&[&a, &b, &extra]);

        for (token, count) in &before {
            assert!(after[token] >= *count, "df({token}) decreased");
        }
    }

    #[test]
    fn tfidf_weights_stay_positive_even_for_unseen_tokens() {
        let tokens = doc(&["auth", "phantom"]);
        let table = document_frequency(&[&doc(&["auth"])]);
        let weights = tfidf_weights(&tokens, &table, 1);
        // df(phantom) = 0 resolves through the smoothing, not a crash.
        assert!(weights["phantom"] > 0.0);
        assert!(weights["auth"] > 0.0);
    }

    #[test]
    fn rare_tokens_outweigh_common_tokens_at_equal_term_frequency() {
        let a = doc(&["auth", "login"]);
        let b = doc(&["auth", "css"]);
        let c = doc(&["auth", "flow"]);
        let table = document_frequency(&[&a, &b, &c]);
        let weights = tfidf_weights(&a, &table, 3);
        assert!(weights["login"] > weights["auth"]);
    }
}
