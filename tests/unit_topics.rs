// Unit tests for topic labeling and the topic modeling driver.
//
// The driver tests use tiny corpora whose pruned vocabulary is small enough
// that every topic's top words are the whole vocabulary, which makes the
// labels independent of how the sampler splits words between topics.

use reputation::topics::{
    label_topic, perform_topic_modeling, CategoryLabel, LdaTopicModeler, TopicModelError, TopicModeler,
    TopicSettings,
};

fn texts(items: &[&str]) -> Vec<String> {
    items.iter().map(|t| t.to_string()).collect()
}

// ============================================================
// Topic labeler
// ============================================================

#[test]
fn labeler_delivery_has_priority_over_quality() {
    assert_eq!(label_topic(&["delivery", "quality"]), CategoryLabel::Delivery);
}

#[test]
fn labeler_no_overlap_is_general_feedback() {
    assert_eq!(label_topic(&["zebra", "giraffe"]), CategoryLabel::GeneralFeedback);
}

#[test]
fn labeler_is_order_independent() {
    let words = ["rude", "design", "price", "value"];
    let expected = label_topic(&words);
    assert_eq!(expected, CategoryLabel::ProductQuality);
    let permutations = [
        ["design", "rude", "price", "value"],
        ["value", "price", "design", "rude"],
        ["price", "value", "rude", "design"],
    ];
    for p in permutations {
        assert_eq!(label_topic(&p), expected, "{p:?}");
    }
}

#[test]
fn labeler_support_category() {
    assert_eq!(
        label_topic(&["agent", "helpful", "refund"]),
        CategoryLabel::CustomerSupport
    );
}

// ============================================================
// Topic modeling driver
// ============================================================

#[test]
fn two_documents_three_topics_is_insufficient_data() {
    let err = perform_topic_modeling(
        &texts(&["delivery was late", "delivery was late again"]),
        TopicSettings::default(),
    )
    .unwrap_err();
    assert!(err.is_insufficient_data(), "got {err:?}");
}

#[test]
fn empty_vocabulary_is_insufficient_data() {
    // Every word appears in only one review, so min_df = 2 prunes them all
    let err = perform_topic_modeling(
        &texts(&["zebra", "giraffe", "walrus", "pelican"]),
        TopicSettings::default(),
    )
    .unwrap_err();
    assert!(matches!(err, TopicModelError::InsufficientData(_)));
}

#[test]
fn delivery_corpus_labels_every_review_delivery() {
    let corpus = texts(&[
        "delivery shipping courier",
        "delivery courier",
        "shipping courier",
        "delivery shipping",
    ]);
    let (descriptions, assignments) = perform_topic_modeling(&corpus, TopicSettings::default()).unwrap();

    assert_eq!(descriptions.len(), 3);
    for d in &descriptions {
        assert!(d.starts_with("Delivery: "), "{d}");
    }
    assert_eq!(assignments, vec![CategoryLabel::Delivery; 4]);
}

#[test]
fn unrelated_corpus_is_general_feedback() {
    let corpus = texts(&["zebra giraffe", "zebra walrus", "giraffe walrus", "zebra giraffe walrus"]);
    let settings = TopicSettings {
        n_topics: 2,
        ..Default::default()
    };
    let (descriptions, assignments) = perform_topic_modeling(&corpus, settings).unwrap();
    assert_eq!(descriptions.len(), 2);
    assert!(assignments.iter().all(|a| *a == CategoryLabel::GeneralFeedback));
}

#[test]
fn top_words_are_limited_and_sorted() {
    let corpus = texts(&[
        "courier parcel refund warehouse",
        "courier parcel refund",
        "warehouse refund blender",
        "blender warehouse courier",
        "parcel blender",
    ]);
    let settings = TopicSettings {
        n_topics: 2,
        n_top_words: 3,
        ..Default::default()
    };
    let output = LdaTopicModeler::new(settings).model(&corpus).unwrap();
    assert_eq!(output.topics.len(), 2);
    for topic in &output.topics {
        assert_eq!(topic.top_words.len(), 3);
        assert!(topic.top_words.windows(2).all(|w| w[0].1 >= w[1].1));
    }
    assert_eq!(output.assignments.len(), corpus.len());
    for (assigned, &dominant) in output.assignments.iter().zip(&output.dominant_topics) {
        assert_eq!(*assigned, output.topics[dominant].label);
    }
}

#[test]
fn same_seed_gives_same_topics() {
    let corpus = texts(&[
        "courier parcel refund warehouse",
        "courier parcel refund",
        "warehouse refund blender",
        "blender warehouse courier",
        "parcel blender",
    ]);
    let modeler = LdaTopicModeler::new(TopicSettings {
        n_topics: 2,
        ..Default::default()
    });
    let a = modeler.model(&corpus).unwrap();
    let b = modeler.model(&corpus).unwrap();
    assert_eq!(a, b);
}

#[test]
fn category_keywords_survive_stop_word_removal() {
    // "late" must reach the labeler even though generic stop lists drop it
    let corpus = texts(&["late courier", "late parcel", "courier parcel", "late courier parcel"]);
    let (descriptions, assignments) = perform_topic_modeling(&corpus, TopicSettings::default()).unwrap();
    for d in &descriptions {
        assert!(d.starts_with("Delivery: ") && d.contains("late"), "{d}");
    }
    assert_eq!(assignments, vec![CategoryLabel::Delivery; 4]);
}
