use std::collections::{BTreeMap, HashSet};

use rand::seq::index::sample;
use sn_core::{Article, CoverageDifference, TopicOverlap};

pub trait PairSelector: Send + Sync {
    /// Picks two distinct indices in `0..count`. Callers guarantee count >= 2.
    fn select_pair(&self, count: usize) -> (usize, usize);
}

/// Uniformly random distinct pair, the production selector.
pub struct RandomPairSelector;

impl PairSelector for RandomPairSelector {
    fn select_pair(&self, count: usize) -> (usize, usize) {
        let mut rng = rand::thread_rng();
        let picked = sample(&mut rng, count, 2);
        (picked.index(0), picked.index(1))
    }
}

/// Contrasts two articles from the set, named by their 1-based ordinals.
///
/// With fewer than two articles a single placeholder entry is returned;
/// otherwise exactly one comparison is produced, never more.
pub fn coverage_differences(
    articles: &[Article],
    selector: &dyn PairSelector,
) -> Vec<CoverageDifference> {
    if articles.len() < 2 {
        return vec![CoverageDifference {
            comparison: "Not enough articles to compare.".to_string(),
            impact: "More data needed.".to_string(),
        }];
    }

    let (first, second) = selector.select_pair(articles.len());

    vec![CoverageDifference {
        comparison: format!(
            "Article {}: '{}' vs Article {}: '{}'.",
            first + 1,
            articles[first].title,
            second + 1,
            articles[second].title
        ),
        impact: format!(
            "Article {} is {}, while Article {} is {}.",
            first + 1,
            articles[first].sentiment.label().to_lowercase(),
            second + 1,
            articles[second].sentiment.label().to_lowercase()
        ),
    }]
}

/// Splits topics into the set shared by every article and each article's
/// leftovers, keyed "Article N" in scrape order.
pub fn topic_overlap(articles: &[Article]) -> TopicOverlap {
    if articles.len() < 2 {
        return TopicOverlap::default();
    }

    let topic_sets: Vec<HashSet<&str>> = articles
        .iter()
        .map(|article| article.topics.iter().map(String::as_str).collect())
        .collect();

    let common: HashSet<&str> = topic_sets
        .iter()
        .skip(1)
        .fold(topic_sets[0].clone(), |acc, set| {
            acc.intersection(set).copied().collect()
        });

    // First article's ordering for the shared set, each article's own
    // ordering for its leftovers.
    let common_topics: Vec<String> = articles[0]
        .topics
        .iter()
        .filter(|topic| common.contains(topic.as_str()))
        .cloned()
        .collect();

    let unique_topics: BTreeMap<String, Vec<String>> = articles
        .iter()
        .enumerate()
        .map(|(idx, article)| {
            let unique: Vec<String> = article
                .topics
                .iter()
                .filter(|topic| !common.contains(topic.as_str()))
                .cloned()
                .collect();
            (format!("Article {}", idx + 1), unique)
        })
        .collect();

    TopicOverlap {
        common_topics,
        unique_topics,
    }
}
