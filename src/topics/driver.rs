// Topic modeling driver: vectorize, fit LDA, label topics, assign reviews.

use serde::Serialize;
use tracing::info;

use super::error::TopicModelError;
use super::labeler::{CategoryLabel, TopicLabeler};
use super::lda::{LdaModel, LdaSettings};
use super::traits::TopicModeler;
use super::vectorizer::{CountVectorizer, VectorizerSettings};

/// Tunable parameters for one topic modeling pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TopicSettings {
    pub n_topics: usize,
    /// How many words describe each topic (and feed the labeler)
    pub n_top_words: usize,
    pub max_df: f64,
    pub min_df: usize,
    pub iterations: usize,
    pub seed: u64,
}

impl Default for TopicSettings {
    fn default() -> Self {
        let vectorizer = VectorizerSettings::default();
        let lda = LdaSettings::default();
        Self {
            n_topics: lda.n_topics,
            n_top_words: 6,
            max_df: vectorizer.max_df,
            min_df: vectorizer.min_df,
            iterations: lda.iterations,
            seed: lda.seed,
        }
    }
}

impl TopicSettings {
    fn vectorizer(&self) -> VectorizerSettings {
        VectorizerSettings {
            max_df: self.max_df,
            min_df: self.min_df,
        }
    }

    fn lda(&self) -> LdaSettings {
        LdaSettings {
            n_topics: self.n_topics,
            iterations: self.iterations,
            seed: self.seed,
            ..Default::default()
        }
    }
}

/// One fitted topic with its category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabeledTopic {
    pub id: usize,
    pub label: CategoryLabel,
    /// Top words with their topic weights, heaviest first
    pub top_words: Vec<(String, f64)>,
}

impl LabeledTopic {
    /// `"Label: word1, word2, ..."`
    pub fn description(&self) -> String {
        let words: Vec<&str> = self.top_words.iter().map(|(w, _)| w.as_str()).collect();
        format!("{}: {}", self.label, words.join(", "))
    }
}

/// Everything a topic modeling pass produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopicModelOutput {
    pub topics: Vec<LabeledTopic>,
    /// Winning topic id per input text
    pub dominant_topics: Vec<usize>,
    /// Category of the winning topic per input text
    pub assignments: Vec<CategoryLabel>,
}

impl TopicModelOutput {
    pub fn descriptions(&self) -> Vec<String> {
        self.topics.iter().map(|t| t.description()).collect()
    }
}

/// LDA-backed topic modeler, the default.
#[derive(Debug, Clone, Default)]
pub struct LdaTopicModeler {
    pub settings: TopicSettings,
    pub labeler: TopicLabeler,
}

impl LdaTopicModeler {
    pub fn new(settings: TopicSettings) -> Self {
        Self {
            settings,
            labeler: TopicLabeler::default(),
        }
    }
}

impl TopicModeler for LdaTopicModeler {
    fn model(&self, texts: &[String]) -> Result<TopicModelOutput, TopicModelError> {
        let settings = &self.settings;
        if settings.n_topics == 0 {
            return Err(TopicModelError::InvalidParameters(
                "n_topics must be at least 1".to_string(),
            ));
        }
        if settings.n_top_words == 0 {
            return Err(TopicModelError::InvalidParameters(
                "n_top_words must be at least 1".to_string(),
            ));
        }
        let vectorizer = CountVectorizer::new(settings.vectorizer())?;
        if texts.len() < settings.n_topics {
            return Err(TopicModelError::InsufficientData(format!(
                "{} documents is fewer than the {} topics requested",
                texts.len(),
                settings.n_topics
            )));
        }

        let dtm = vectorizer.fit_transform(texts)?;
        let model = LdaModel::fit(&dtm, &settings.lda())?;

        let topics: Vec<LabeledTopic> = model
            .top_words(dtm.vocabulary(), settings.n_top_words)
            .into_iter()
            .enumerate()
            .map(|(id, top_words)| {
                let words: Vec<&str> = top_words.iter().map(|(w, _)| w.as_str()).collect();
                let label = self.labeler.label(&words);
                LabeledTopic { id, label, top_words }
            })
            .collect();

        let dominant_topics = model.dominant_topics();
        let assignments = dominant_topics.iter().map(|&t| topics[t].label).collect();

        info!(
            documents = texts.len(),
            vocabulary = dtm.n_terms(),
            topics = topics.len(),
            "Fitted topic model"
        );

        Ok(TopicModelOutput {
            topics,
            dominant_topics,
            assignments,
        })
    }
}

/// Run the default modeler and return descriptions plus per-text labels.
pub fn perform_topic_modeling(
    texts: &[String],
    settings: TopicSettings,
) -> Result<(Vec<String>, Vec<CategoryLabel>), TopicModelError> {
    let output = LdaTopicModeler::new(settings).model(texts)?;
    Ok((output.descriptions(), output.assignments))
}
