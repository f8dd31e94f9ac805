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


use crate::tokenizer::Tokenizer;
use crate::vocabulary::Vocabulary;
use std::sync::Arc;

/// Maps a document to the dense term counts of a fixed vocabulary.
#[derive(Debug, Clone)]
pub struct BagOfWordsEncoder {
    vocabulary: Arc<Vocabulary>,
    tokenizer: Tokenizer,
}

impl BagOfWordsEncoder {
    pub fn new(vocabulary: Arc<Vocabulary>, tokenizer: Tokenizer) -> Self {
        Self {
            vocabulary,
            tokenizer,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// The number of columns produced by [`BagOfWordsEncoder::encode`]
    #[inline]
    pub fn width(&self) -> usize {
        self.vocabulary.len()
    }

    /// Column `j` holds how often the term `j` of the vocabulary occurs in [doc].
    /// Unknown tokens are ignored.
    pub fn encode(&self, doc: &str) -> Vec<f64> {
        let mut counts = vec![0.0; self.width()];
        for token in self.tokenizer.tokenize(doc) {
            if let Some(column) = self.vocabulary.index_of(&token) {
                counts[column] += 1.0;
            }
        }
        counts
    }
}
