use crate::domain::model::{CategorySummary, ClassifiedMessage, SentimentSummary};

/// Frequency counts over the full result set, recomputed from scratch.
/// Only observed labels appear; entries are ordered by descending count and
/// ties keep first-encounter order (the sort is stable).
pub fn aggregate(messages: &[ClassifiedMessage]) -> (CategorySummary, SentimentSummary) {
    let mut by_category: CategorySummary = Vec::new();
    let mut by_sentiment: SentimentSummary = Vec::new();

    for message in messages {
        bump(&mut by_category, message.category);
        bump(&mut by_sentiment, message.sentiment);
    }

    by_category.sort_by(|a, b| b.1.cmp(&a.1));
    by_sentiment.sort_by(|a, b| b.1.cmp(&a.1));

    (by_category, by_sentiment)
}

fn bump<T: PartialEq + Copy>(counts: &mut Vec<(T, usize)>, label: T) {
    if let Some(entry) = counts.iter_mut().find(|(seen, _)| *seen == label) {
        entry.1 += 1;
    } else {
        counts.push((label, 1));
    }
}
