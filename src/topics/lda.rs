// Latent Dirichlet Allocation fitted by collapsed Gibbs sampling.
//
// Every token in the document-term matrix carries a topic assignment. Each
// sweep resamples every assignment from
//
//   p(t) ∝ (n_dt + alpha) * (n_tw + beta) / (n_t + V * beta)
//
// using a seeded RNG, so the same matrix and seed always give the same
// model. After the final sweep:
//
//   topic_word[t][w] = n_tw + beta                       (pseudo-counts)
//   doc_topic[d][t]  = (n_dt + alpha) / (N_d + K * alpha)

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::error::TopicModelError;
use super::vectorizer::DocumentTermMatrix;

/// Hyper-parameters for the sampler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LdaSettings {
    pub n_topics: usize,
    pub iterations: usize,
    /// Document-topic prior; `None` means `1 / n_topics`
    pub alpha: Option<f64>,
    /// Topic-word prior; `None` means `1 / n_topics`
    pub beta: Option<f64>,
    pub seed: u64,
}

impl Default for LdaSettings {
    fn default() -> Self {
        Self {
            n_topics: 3,
            iterations: 200,
            alpha: None,
            beta: None,
            seed: 42,
        }
    }
}

/// A fitted topic model.
#[derive(Debug, Clone, PartialEq)]
pub struct LdaModel {
    /// `n_topics` rows of `n_terms` weights
    topic_word: Vec<Vec<f64>>,
    /// `n_docs` rows of `n_topics` probabilities, each row summing to 1
    doc_topic: Vec<Vec<f64>>,
}

impl LdaModel {
    /// Fit a model to a document-term matrix.
    pub fn fit(dtm: &DocumentTermMatrix, settings: &LdaSettings) -> Result<Self, TopicModelError> {
        let k = settings.n_topics;
        if k == 0 {
            return Err(TopicModelError::InvalidParameters(
                "n_topics must be at least 1".to_string(),
            ));
        }
        let alpha = settings.alpha.unwrap_or(1.0 / k as f64);
        let beta = settings.beta.unwrap_or(1.0 / k as f64);
        if !(alpha > 0.0 && beta > 0.0) {
            return Err(TopicModelError::InvalidParameters(format!(
                "priors must be positive (alpha = {alpha}, beta = {beta})"
            )));
        }

        let n_docs = dtm.n_docs();
        let n_terms = dtm.n_terms();
        let v_beta = n_terms as f64 * beta;

        // Expand counts into one word id per token
        let docs: Vec<Vec<usize>> = (0..n_docs)
            .map(|d| {
                dtm.row(d)
                    .iter()
                    .flat_map(|&(w, c)| std::iter::repeat(w).take(c as usize))
                    .collect()
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(settings.seed);
        let mut ndk = vec![vec![0usize; k]; n_docs];
        let mut nkw = vec![vec![0usize; n_terms]; k];
        let mut nk = vec![0usize; k];
        let mut z: Vec<Vec<usize>> = Vec::with_capacity(n_docs);

        for (d, doc) in docs.iter().enumerate() {
            let mut assignments = Vec::with_capacity(doc.len());
            for &w in doc {
                let t = rng.random_range(0..k);
                assignments.push(t);
                ndk[d][t] += 1;
                nkw[t][w] += 1;
                nk[t] += 1;
            }
            z.push(assignments);
        }

        let mut weights = vec![0.0f64; k];
        for iteration in 0..settings.iterations {
            for (d, doc) in docs.iter().enumerate() {
                for (pos, &w) in doc.iter().enumerate() {
                    let old = z[d][pos];
                    ndk[d][old] -= 1;
                    nkw[old][w] -= 1;
                    nk[old] -= 1;

                    let mut total = 0.0;
                    for t in 0..k {
                        let p = (ndk[d][t] as f64 + alpha) * (nkw[t][w] as f64 + beta)
                            / (nk[t] as f64 + v_beta);
                        total += p;
                        weights[t] = total;
                    }

                    let u = rng.random::<f64>() * total;
                    let new = weights.iter().position(|&cum| u < cum).unwrap_or(k - 1);

                    z[d][pos] = new;
                    ndk[d][new] += 1;
                    nkw[new][w] += 1;
                    nk[new] += 1;
                }
            }

            if (iteration + 1) % 50 == 0 {
                debug!(iteration = iteration + 1, total = settings.iterations, "LDA sweep");
            }
        }

        let topic_word: Vec<Vec<f64>> = nkw
            .iter()
            .map(|row| row.iter().map(|&c| c as f64 + beta).collect())
            .collect();

        let doc_topic: Vec<Vec<f64>> = ndk
            .iter()
            .zip(&docs)
            .map(|(row, doc)| {
                let denom = doc.len() as f64 + k as f64 * alpha;
                row.iter().map(|&c| (c as f64 + alpha) / denom).collect()
            })
            .collect();

        let finite = topic_word
            .iter()
            .chain(doc_topic.iter())
            .all(|row| row.iter().all(|x| x.is_finite()));
        if !finite {
            return Err(TopicModelError::Numerical(format!(
                "{k} topics over {n_docs} documents and {n_terms} terms"
            )));
        }

        Ok(Self { topic_word, doc_topic })
    }

    pub fn n_topics(&self) -> usize {
        self.topic_word.len()
    }

    /// Topic-word weights, one row per topic.
    pub fn topic_word(&self) -> &[Vec<f64>] {
        &self.topic_word
    }

    /// Per-document topic distributions, one row per document.
    pub fn doc_topic(&self) -> &[Vec<f64>] {
        &self.doc_topic
    }

    /// The `n` highest-weighted words of each topic, heaviest first.
    ///
    /// Equal weights keep vocabulary order.
    pub fn top_words(&self, vocabulary: &[String], n: usize) -> Vec<Vec<(String, f64)>> {
        self.topic_word
            .iter()
            .map(|row| {
                let mut ranked: Vec<(usize, f64)> = row.iter().copied().enumerate().collect();
                // sort_by is stable, so ties stay in feature order
                ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
                ranked
                    .into_iter()
                    .take(n)
                    .map(|(w, weight)| (vocabulary[w].clone(), weight))
                    .collect()
            })
            .collect()
    }

    /// Most probable topic for each document; ties go to the lowest index.
    pub fn dominant_topics(&self) -> Vec<usize> {
        self.doc_topic.iter().map(|row| argmax(row)).collect()
    }
}

/// Index of the largest value, preferring the first on ties.
pub fn argmax(values: &[f64]) -> usize {
    let mut best = 0;
    for (i, &v) in values.iter().enumerate().skip(1) {
        if v > values[best] {
            best = i;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::topics::vectorizer::{CountVectorizer, VectorizerSettings};

    fn matrix(texts: &[&str]) -> DocumentTermMatrix {
        let docs: Vec<String> = texts.iter().map(|t| t.to_string()).collect();
        CountVectorizer::with_stop_words(
            VectorizerSettings {
                max_df: 1.0,
                min_df: 1,
            },
            Vec::<String>::new(),
        )
        .unwrap()
        .fit_transform(&docs)
        .unwrap()
    }

    #[test]
    fn test_argmax_prefers_lowest_index() {
        assert_eq!(argmax(&[0.2, 0.4, 0.4]), 1);
        assert_eq!(argmax(&[0.5, 0.5]), 0);
        assert_eq!(argmax(&[0.1]), 0);
    }

    #[test]
    fn test_doc_topic_rows_sum_to_one() {
        let dtm = matrix(&["apple banana apple", "car truck car", "apple truck", ""]);
        let model = LdaModel::fit(&dtm, &LdaSettings { n_topics: 2, ..Default::default() }).unwrap();
        assert_eq!(model.doc_topic().len(), 4);
        for row in model.doc_topic() {
            let sum: f64 = row.iter().sum();
            assert!((sum - 1.0).abs() < 1e-9, "row sums to {sum}");
        }
        // A document with no terms keeps the uniform prior
        assert!((model.doc_topic()[3][0] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_fit_is_deterministic_for_a_seed() {
        let dtm = matrix(&["apple banana apple", "car truck car", "banana apple", "truck car"]);
        let settings = LdaSettings { n_topics: 2, iterations: 50, ..Default::default() };
        let a = LdaModel::fit(&dtm, &settings).unwrap();
        let b = LdaModel::fit(&dtm, &settings).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_topic_word_mass_matches_token_count() {
        let dtm = matrix(&["apple banana apple", "car truck"]);
        let settings = LdaSettings { n_topics: 2, beta: Some(0.5), ..Default::default() };
        let model = LdaModel::fit(&dtm, &settings).unwrap();
        let total: f64 = model.topic_word().iter().flatten().sum();
        // 5 tokens plus beta for each of 2 topics x 4 terms
        assert!((total - (5.0 + 0.5 * 8.0)).abs() < 1e-9);
    }

    #[test]
    fn test_top_words_ties_keep_vocabulary_order() {
        let dtm = matrix(&["apple banana cherry"]);
        // No sweeps: weights are whatever the random init gave, but a single
        // topic holds every token once, so all weights tie
        let settings = LdaSettings { n_topics: 1, iterations: 0, ..Default::default() };
        let model = LdaModel::fit(&dtm, &settings).unwrap();
        let top = model.top_words(dtm.vocabulary(), 2);
        let words: Vec<&str> = top[0].iter().map(|(w, _)| w.as_str()).collect();
        assert_eq!(words, vec!["apple", "banana"]);
    }

    #[test]
    fn test_zero_topics_rejected() {
        let dtm = matrix(&["apple"]);
        let err = LdaModel::fit(&dtm, &LdaSettings { n_topics: 0, ..Default::default() }).unwrap_err();
        assert!(matches!(err, TopicModelError::InvalidParameters(_)));
    }
}
