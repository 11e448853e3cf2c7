//! Keyword rule matching.
//!
//! Both classifiers in the engine are ordered lists of
//! (trigger substrings -> outcome) rules evaluated by a single
//! first-match-wins scan. Precedence is purely positional: earlier rules
//! win, and within a rule earlier triggers win. No scoring, no weights.

/// Normalizes a piece of user text for matching.
///
/// Matching is plain substring containment over the lowercased text.
/// Nothing is trimmed or tokenized here; a trigger inside a longer word
/// still counts as a hit.
pub fn normalize(input: &str) -> String {
    input.to_lowercase()
}

/// One rule: a set of trigger substrings and the outcome they select.
#[derive(Debug, Clone)]
pub struct KeywordRule<T> {
    triggers: Vec<String>,
    outcome: T,
}

impl<T> KeywordRule<T> {
    /// Creates a rule from trigger substrings.
    ///
    /// Triggers are stored lowercased. Empty triggers are discarded; an
    /// empty string is a substring of everything and would short-circuit
    /// the whole scan.
    pub fn new<I, S>(triggers: I, outcome: T) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let triggers = triggers
            .into_iter()
            .map(|trigger| trigger.into().to_lowercase())
            .filter(|trigger| !trigger.is_empty())
            .collect();

        Self { triggers, outcome }
    }

    /// Returns the first trigger that occurs in the normalized text, if any.
    fn matched_trigger(&self, normalized: &str) -> Option<&str> {
        self.triggers
            .iter()
            .map(String::as_str)
            .find(|trigger| normalized.contains(trigger))
    }
}

/// A successful scan: the selected outcome plus which trigger and rule hit.
#[derive(Debug)]
pub struct RuleMatch<'a, T> {
    /// Outcome of the winning rule.
    pub outcome: &'a T,
    /// The trigger substring that occurred in the text.
    pub trigger: &'a str,
    /// Position of the winning rule in the set.
    pub index: usize,
}

/// An ordered list of keyword rules.
#[derive(Debug, Clone)]
pub struct RuleSet<T> {
    rules: Vec<KeywordRule<T>>,
}

impl<T> RuleSet<T> {
    pub fn new(rules: Vec<KeywordRule<T>>) -> Self {
        Self { rules }
    }

    /// Scans the rules in order and returns the first whose trigger occurs
    /// in the (already normalized) text.
    pub fn first_match<'a>(&'a self, normalized: &str) -> Option<RuleMatch<'a, T>> {
        for (index, rule) in self.rules.iter().enumerate() {
            if let Some(trigger) = rule.matched_trigger(normalized) {
                return Some(RuleMatch {
                    outcome: &rule.outcome,
                    trigger,
                    index,
                });
            }
        }
        None
    }

    /// Number of rules in the set.
    #[allow(dead_code)]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
