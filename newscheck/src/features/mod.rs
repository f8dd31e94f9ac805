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


mod assembler;
mod domain;
mod keywords;
mod layout;

pub use assembler::{AssemblyError, FeatureAssembler, FeatureBlocks};
pub use domain::DomainFeaturizer;
pub use keywords::KeywordFeaturizer;
pub use layout::{FeatureBlock, FeatureLayout};

use crate::config::FeatureConfig;
use crate::extraction::{DescriptionExtractor, HtmlDescriptionExtractor};
use serde::Serialize;
use std::sync::Arc;
use text_processing::embeddings::{EmbeddingAverager, EmbeddingTable};
use text_processing::tokenizer::Tokenizer;
use text_processing::vectorizer::BagOfWordsEncoder;
use text_processing::vocabulary::Vocabulary;

/// The feature vector of a page and the description it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Features {
    pub description: String,
    pub values: Vec<f64>,
}

/// Turns an url and its html into a feature vector.
#[derive(Debug)]
pub struct Featurizer<E = HtmlDescriptionExtractor> {
    domains: DomainFeaturizer,
    keywords: KeywordFeaturizer,
    extractor: E,
    bag_of_words: BagOfWordsEncoder,
    embeddings: EmbeddingAverager,
    assembler: FeatureAssembler,
}

impl<E> Featurizer<E>
where
    E: DescriptionExtractor,
{
    pub fn new(
        config: &FeatureConfig,
        vocabulary: Arc<Vocabulary>,
        embeddings: Arc<EmbeddingTable>,
        extractor: E,
    ) -> Self {
        let domains = DomainFeaturizer::new(config.domain_suffixes.iter().cloned());
        let keywords = KeywordFeaturizer::new(&config.keywords, config.lowercase_html);
        let bag_of_words =
            BagOfWordsEncoder::new(vocabulary, Tokenizer::from_config(&config.tokenizer));
        let embeddings = EmbeddingAverager::new(embeddings);
        let layout = FeatureLayout::new(
            domains.width(),
            keywords.width(),
            bag_of_words.width(),
            embeddings.width(),
        );
        log::debug!("Feature layout: {layout:?}");
        Self {
            domains,
            keywords,
            extractor,
            bag_of_words,
            embeddings,
            assembler: FeatureAssembler::new(layout),
        }
    }

    pub fn layout(&self) -> &FeatureLayout {
        self.assembler.layout()
    }

    pub fn assembler(&self) -> &FeatureAssembler {
        &self.assembler
    }

    /// The names of the columns, prefixed with the block.
    pub fn column_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.layout().total());
        names.extend(
            self.domains
                .suffixes()
                .iter()
                .map(|suffix| format!("{}:{suffix}", FeatureBlock::Domain)),
        );
        names.extend(
            self.keywords
                .keywords()
                .iter()
                .map(|keyword| format!("{}:{keyword}", FeatureBlock::Keywords)),
        );
        names.extend(
            self.bag_of_words
                .vocabulary()
                .iter()
                .map(|term| format!("{}:{term}", FeatureBlock::BagOfWords)),
        );
        names.extend(
            (0..self.embeddings.width())
                .map(|dimension| format!("{}:{dimension}", FeatureBlock::Embedding)),
        );
        names
    }

    /// Runs every featurizer without assembling the results.
    pub fn blocks(&self, url: &str, html: &str) -> (String, FeatureBlocks) {
        let description = self.extractor.extract(html);
        log::trace!("Description of {url}: {description:?}");
        let blocks = FeatureBlocks {
            domain: self.domains.featurize(url),
            keywords: self.keywords.featurize(html),
            bag_of_words: self.bag_of_words.encode(&description),
            embedding: self.embeddings.average(&description),
        };
        (description, blocks)
    }

    pub fn featurize(&self, url: &str, html: &str) -> Result<Features, AssemblyError> {
        let (description, blocks) = self.blocks(url, html);
        let values = self.assembler.assemble(&blocks)?;
        Ok(Features {
            description,
            values,
        })
    }
}

#[cfg(test)]
pub(crate) mod test {
    use super::Featurizer;
    use crate::config::FeatureConfig;
    use crate::extraction::{HtmlDescriptionExtractor, NoopDescriptionExtractor};
    use float_cmp::approx_eq;
    use std::sync::Arc;
    use text_processing::embeddings::EmbeddingTable;
    use text_processing::vocabulary::Vocabulary;

    pub const GOLDEN_URL: &str = "http://breaking.news";

    pub const GOLDEN_PAGE: &str = r#"<html><head><title>Trump</title>
        <meta name="og:description" content="Senate votes on election fraud claims">
        <meta name="description" content="Nothing to see here">
        </head><body><p>Trump and Biden talk finance. trump</p></body></html>"#;

    pub fn toy_vocabulary() -> Arc<Vocabulary> {
        Arc::new(
            Vocabulary::from_terms(["claims", "election", "fraud", "senate", "vote"]).unwrap(),
        )
    }

    pub fn toy_embeddings() -> Arc<EmbeddingTable> {
        Arc::new(
            EmbeddingTable::from_entries(
                2,
                [
                    ("senate", vec![1.0f32, 0.0]),
                    ("election", vec![0.0, 1.0]),
                    ("fraud", vec![1.0, 1.0]),
                ],
            )
            .unwrap(),
        )
    }

    pub fn golden_vector() -> Vec<f64> {
        let ln2 = 2f64.ln();
        let mut expected = vec![0.0; 9];
        expected.push(1.0);
        expected.extend([ln2, 0.0, 0.0, 0.0, ln2]);
        expected.extend([1.0, 1.0, 1.0, 1.0, 0.0]);
        expected.extend([2.0 / 3.0, 2.0 / 3.0]);
        expected
    }

    pub fn toy_featurizer() -> Featurizer {
        Featurizer::new(
            &FeatureConfig::default(),
            toy_vocabulary(),
            toy_embeddings(),
            HtmlDescriptionExtractor,
        )
    }

    #[test]
    fn golden_page() {
        let featurizer = toy_featurizer();
        let features = featurizer.featurize(GOLDEN_URL, GOLDEN_PAGE).unwrap();
        assert_eq!("Senate votes on election fraud claims", features.description);
        let expected = golden_vector();
        assert_eq!(22, featurizer.layout().total());
        assert_eq!(expected.len(), features.values.len());
        for (column, (expected, found)) in expected.iter().zip(&features.values).enumerate() {
            assert!(
                approx_eq!(f64, *expected, *found, epsilon = 1e-9),
                "column {column}: {expected} != {found}"
            );
        }
    }

    #[test]
    fn column_names_match_the_layout() {
        let featurizer = toy_featurizer();
        let names = featurizer.column_names();
        assert_eq!(featurizer.layout().total(), names.len());
        assert_eq!("domain:.com", names[0]);
        assert_eq!("keywords:trump", names[10]);
        assert_eq!("bag_of_words:claims", names[15]);
        assert_eq!("embedding:1", names[21]);
    }

    #[test]
    fn without_description_the_text_blocks_are_zero() {
        let featurizer = Featurizer::new(
            &FeatureConfig::default(),
            toy_vocabulary(),
            toy_embeddings(),
            NoopDescriptionExtractor,
        );
        let features = featurizer.featurize(GOLDEN_URL, GOLDEN_PAGE).unwrap();
        assert_eq!("", features.description);
        assert_eq!(22, features.values.len());
        assert!(features.values[15..].iter().all(|value| *value == 0.0));
        assert_eq!(1.0, features.values[9]);
    }

    #[test]
    fn empty_page_only_has_domain_features() {
        let featurizer = toy_featurizer();
        let features = featurizer.featurize("http://example.com", "").unwrap();
        assert_eq!(1.0, features.values[0]);
        assert_eq!(1.0, features.values.iter().sum::<f64>());
    }
}
