// Topic modeling: count vectorizer, LDA, category labeling.

pub mod driver;
pub mod error;
pub mod labeler;
pub mod lda;
pub mod traits;
pub mod vectorizer;

pub use driver::{perform_topic_modeling, LabeledTopic, LdaTopicModeler, TopicModelOutput, TopicSettings};
pub use error::TopicModelError;
pub use labeler::{label_topic, CategoryLabel, TopicLabeler};
pub use traits::TopicModeler;
