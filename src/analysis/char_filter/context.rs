use super::CharFilter;

/// Removes every occurrence of the configured lead-in phrases, then trims
/// surrounding whitespace.
///
/// Phrases are removed in configuration order, so a phrase that only
/// appears after an earlier removal is removed as well.
#[derive(Clone, Debug, Default)]
pub struct ContextCharFilter {
    phrases: Vec<String>,
}

impl ContextCharFilter {
    pub fn new<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let phrases = phrases
            .into_iter()
            .map(Into::into)
            .filter(|phrase: &String| !phrase.is_empty())
            .collect();
        Self { phrases }
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }
}

impl CharFilter for ContextCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = input.to_string();
        for phrase in &self.phrases {
            if output.contains(phrase.as_str()) {
                output = output.replace(phrase.as_str(), "");
            }
        }
        output.trim().to_string()
    }

    fn name(&self) -> &'static str {
        "context"
    }
}
