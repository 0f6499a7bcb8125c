use rake::Rake;

pub const MAX_TOPICS: usize = 3;

const FALLBACK_TOPIC: &str = "General News";

pub trait KeywordRanker: Send + Sync {
    /// Returns candidate phrases, best-ranked first
    fn ranked_phrases(&self, text: &str) -> Vec<String>;
}

/// Ranked keyphrase extraction backed by the RAKE algorithm.
pub struct RakeRanker {
    rake: Rake,
}

impl RakeRanker {
    pub fn new() -> Self {
        let stop_words = STOP_WORDS
            .iter()
            .map(|word| word.to_string())
            .collect::<std::collections::HashSet<String>>()
            .into();
        Self {
            rake: Rake::new(stop_words),
        }
    }
}

impl Default for RakeRanker {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordRanker for RakeRanker {
    fn ranked_phrases(&self, text: &str) -> Vec<String> {
        self.rake
            .run(text)
            .into_iter()
            .map(|scored| scored.keyword)
            .collect()
    }
}

/// Derives up to `max_topics` title-cased topic phrases for one article.
///
/// Ranked phrases are kept in rank order and must survive every filter:
/// at least two words, no "summary available" leftover, no standalone
/// number, no punctuation besides hyphens, and some alphabetic content.
/// When nothing survives, the single placeholder topic "General News" is
/// returned so every article carries at least one topic.
pub fn extract_topics(ranker: &dyn KeywordRanker, text: &str, max_topics: usize) -> Vec<String> {
    let ranked = ranker.ranked_phrases(text);

    let topics: Vec<String> = ranked
        .iter()
        .map(|phrase| phrase.trim())
        .filter(|phrase| is_topic_candidate(phrase))
        .map(title_case)
        .take(max_topics)
        .collect();

    if topics.is_empty() {
        vec![FALLBACK_TOPIC.to_string()]
    } else {
        topics
    }
}

fn is_topic_candidate(phrase: &str) -> bool {
    phrase.split_whitespace().count() > 1
        && !phrase.to_lowercase().contains("summary available")
        && !has_standalone_number(phrase)
        && !has_disallowed_punctuation(phrase)
        && alphabetic_residue(phrase).chars().count() > 1
}

/// True when the phrase contains a digit run not attached to a word, e.g.
/// "top 10 stocks" or "covid-19" but not "q3".
fn has_standalone_number(phrase: &str) -> bool {
    let chars: Vec<char> = phrase.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let detached_before = start == 0 || !is_word_char(chars[start - 1]);
            let detached_after = i == chars.len() || !is_word_char(chars[i]);
            if detached_before && detached_after {
                return true;
            }
        } else {
            i += 1;
        }
    }
    false
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn has_disallowed_punctuation(phrase: &str) -> bool {
    phrase
        .chars()
        .any(|c| !(c.is_alphanumeric() || c.is_whitespace() || c == '-' || c == '_'))
}

fn alphabetic_residue(phrase: &str) -> String {
    phrase
        .chars()
        .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
        .collect::<String>()
        .trim()
        .to_string()
}

fn title_case(phrase: &str) -> String {
    let mut out = String::with_capacity(phrase.len());
    let mut in_word = false;
    for c in phrase.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

const STOP_WORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];
