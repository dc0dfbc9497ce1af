// Topic modeler trait: swap-ready abstraction over the topic model.
//
// The default implementation fits LDA over word counts, but the bulk
// pipeline only sees labeled topics and per-review assignments.

use super::driver::TopicModelOutput;
use super::error::TopicModelError;

/// Trait for clustering a review collection into labeled topics.
pub trait TopicModeler {
    /// Fit topics over the texts and assign every text a category.
    fn model(&self, texts: &[String]) -> Result<TopicModelOutput, TopicModelError>;
}
