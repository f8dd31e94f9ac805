// Copyright 2024 Felix Engl
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.


use crate::error::ResourceError;
use crate::tokenizer::Tokenizer;
use crate::vocabulary::Vocabulary;
use itertools::Itertools;
use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::hash::Hash;

/// Collects the frequencies in a corpus
#[derive(Debug, Default, Clone)]
pub struct CorpusStatisticsCollector<W> {
    document_count: u64,
    word_count: u64,
    word_counts: HashMap<W, u64>,
}

impl<W> CorpusStatisticsCollector<W>
where
    W: Hash + Eq,
{
    pub fn add<D: IntoIterator<Item = W>>(&mut self, doc: D) {
        self.document_count = self.document_count.saturating_add(1);
        for value in doc {
            self.word_count = self.word_count.saturating_add(1);
            self.word_counts
                .entry(value)
                .and_modify(|value| *value = value.saturating_add(1))
                .or_insert(1);
        }
    }

    /// The number of documents in the corpus
    #[inline]
    pub fn document_count(&self) -> u64 {
        self.document_count
    }

    /// The number of words in the corpus
    #[inline]
    pub fn word_count(&self) -> u64 {
        self.word_count
    }

    /// The number of unique words in the corpus
    #[inline]
    pub fn unique_word_count(&self) -> usize {
        self.word_counts.len()
    }

    /// The frequency of a [word] in a corpus
    pub fn word_frequency(&self, word: &W) -> Option<u64> {
        self.word_counts.get(word).copied()
    }
}

impl<W> CorpusStatisticsCollector<W>
where
    W: Hash + Eq + Ord + AsRef<str>,
{
    /// Keeps the [max_terms] most frequent words, ties are broken alphabetically.
    /// The resulting columns are sorted alphabetically.
    pub fn provide_vocabulary(&self, max_terms: usize) -> Result<Vocabulary, ResourceError> {
        let kept = self
            .word_counts
            .iter()
            .sorted_by(|(word_a, count_a), (word_b, count_b)| {
                count_b.cmp(count_a).then_with(|| word_a.cmp(word_b))
            })
            .take(max_terms)
            .map(|(word, _)| word)
            .sorted()
            .map(|word| AsRef::<str>::as_ref(word));
        Vocabulary::from_terms(kept)
    }
}

impl CorpusStatisticsCollector<String> {
    /// Tokenizes every document with [tokenizer] and collects the statistics.
    pub fn from_documents<I, T>(documents: I, tokenizer: &Tokenizer) -> Self
    where
        I: IntoIterator<Item = T>,
        T: AsRef<str>,
    {
        let mut collector = Self::default();
        for document in documents {
            collector.add(tokenizer.tokenize(document.as_ref()));
        }
        collector
    }
}

impl<W> Display for CorpusStatisticsCollector<W>
where
    W: Hash + Eq,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Document Count: {}", self.document_count)?;
        writeln!(f, "Word Count: {}", self.word_count)?;
        write!(f, "Unique Word Count: {}", self.word_counts.len())
    }
}

#[cfg(test)]
mod test {
    use crate::corpus::CorpusStatisticsCollector;
    use crate::tokenizer::Tokenizer;

    #[test]
    fn collects_statistics() {
        let collector = CorpusStatisticsCollector::from_documents(
            ["The senate votes", "the SENATE the end"],
            &Tokenizer::default(),
        );
        assert_eq!(2, collector.document_count());
        assert_eq!(7, collector.word_count());
        assert_eq!(4, collector.unique_word_count());
        assert_eq!(Some(3), collector.word_frequency(&"the".to_string()));
    }

    #[test]
    fn keeps_the_most_frequent_terms_in_alphabetical_order() {
        let collector = CorpusStatisticsCollector::from_documents(
            ["zebra zebra zebra apple", "mango mango apple kiwi"],
            &Tokenizer::default(),
        );
        let vocabulary = collector.provide_vocabulary(3).unwrap();
        assert_eq!(
            vec!["apple", "mango", "zebra"],
            vocabulary.iter().map(|value| value.as_str()).collect::<Vec<_>>()
        );
    }

    #[test]
    fn small_corpora_keep_every_term() {
        let collector =
            CorpusStatisticsCollector::from_documents(["one two"], &Tokenizer::default());
        assert_eq!(2, collector.provide_vocabulary(300).unwrap().len());
    }
}
