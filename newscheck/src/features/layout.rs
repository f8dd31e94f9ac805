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


use serde::Serialize;
use strum::{Display, EnumIter, IntoEnumIterator};

/// The blocks of a feature vector, in column order.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Display, EnumIter)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FeatureBlock {
    Domain,
    Keywords,
    BagOfWords,
    Embedding,
}

/// The widths of the feature blocks.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize)]
pub struct FeatureLayout {
    pub domain: usize,
    pub keywords: usize,
    pub bag_of_words: usize,
    pub embedding: usize,
}

impl FeatureLayout {
    pub fn new(domain: usize, keywords: usize, bag_of_words: usize, embedding: usize) -> Self {
        Self {
            domain,
            keywords,
            bag_of_words,
            embedding,
        }
    }

    pub fn width_of(&self, block: FeatureBlock) -> usize {
        match block {
            FeatureBlock::Domain => self.domain,
            FeatureBlock::Keywords => self.keywords,
            FeatureBlock::BagOfWords => self.bag_of_words,
            FeatureBlock::Embedding => self.embedding,
        }
    }

    /// The length of a feature vector
    pub fn total(&self) -> usize {
        FeatureBlock::iter().map(|block| self.width_of(block)).sum()
    }
}
