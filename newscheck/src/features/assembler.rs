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


use crate::features::layout::{FeatureBlock, FeatureLayout};
use strum::IntoEnumIterator;
use thiserror::Error;

/// The widths of the parts do not fit together.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum AssemblyError {
    #[error("The {block} block has {found} columns but {expected} are expected!")]
    DimensionMismatch {
        block: FeatureBlock,
        expected: usize,
        found: usize,
    },
    #[error("The model expects {model} features but the featurizer produces {features}!")]
    ModelMismatch { model: usize, features: usize },
}

/// The outputs of the single featurizers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureBlocks {
    pub domain: Vec<f64>,
    pub keywords: Vec<f64>,
    pub bag_of_words: Vec<f64>,
    pub embedding: Vec<f64>,
}

impl FeatureBlocks {
    fn get(&self, block: FeatureBlock) -> &[f64] {
        match block {
            FeatureBlock::Domain => &self.domain,
            FeatureBlock::Keywords => &self.keywords,
            FeatureBlock::BagOfWords => &self.bag_of_words,
            FeatureBlock::Embedding => &self.embedding,
        }
    }
}

/// Concatenates [FeatureBlocks] in the column order of the [FeatureLayout].
#[derive(Debug, Copy, Clone)]
pub struct FeatureAssembler {
    layout: FeatureLayout,
}

impl FeatureAssembler {
    pub fn new(layout: FeatureLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &FeatureLayout {
        &self.layout
    }

    pub fn assemble(&self, blocks: &FeatureBlocks) -> Result<Vec<f64>, AssemblyError> {
        let mut features = Vec::with_capacity(self.layout.total());
        for block in FeatureBlock::iter() {
            let values = blocks.get(block);
            let expected = self.layout.width_of(block);
            if values.len() != expected {
                return Err(AssemblyError::DimensionMismatch {
                    block,
                    expected,
                    found: values.len(),
                });
            }
            features.extend_from_slice(values);
        }
        Ok(features)
    }

    /// Checks that a model with [model_dimension] inputs can score the assembled vectors.
    pub fn check_model(&self, model_dimension: usize) -> Result<(), AssemblyError> {
        let features = self.layout.total();
        if model_dimension == features {
            Ok(())
        } else {
            Err(AssemblyError::ModelMismatch {
                model: model_dimension,
                features,
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::{AssemblyError, FeatureAssembler, FeatureBlocks};
    use crate::features::layout::{FeatureBlock, FeatureLayout};

    fn blocks() -> FeatureBlocks {
        FeatureBlocks {
            domain: vec![1.0, 0.0],
            keywords: vec![0.5],
            bag_of_words: vec![2.0, 0.0, 1.0],
            embedding: vec![0.25, 0.75],
        }
    }

    #[test]
    fn concatenates_in_order() {
        let assembler = FeatureAssembler::new(FeatureLayout::new(2, 1, 3, 2));
        let features = assembler.assemble(&blocks()).unwrap();
        assert_eq!(assembler.layout().total(), features.len());
        assert_eq!(vec![1.0, 0.0, 0.5, 2.0, 0.0, 1.0, 0.25, 0.75], features);
    }

    #[test]
    fn a_short_block_is_a_mismatch() {
        let assembler = FeatureAssembler::new(FeatureLayout::new(2, 1, 3, 2));
        let mut blocks = blocks();
        blocks.embedding.pop();
        assert_eq!(
            Err(AssemblyError::DimensionMismatch {
                block: FeatureBlock::Embedding,
                expected: 2,
                found: 1
            }),
            assembler.assemble(&blocks)
        );
    }

    #[test]
    fn a_long_block_is_a_mismatch() {
        let assembler = FeatureAssembler::new(FeatureLayout::new(2, 1, 3, 2));
        let mut blocks = blocks();
        blocks.keywords.push(0.0);
        assert!(matches!(
            assembler.assemble(&blocks),
            Err(AssemblyError::DimensionMismatch {
                block: FeatureBlock::Keywords,
                ..
            })
        ));
    }

    #[test]
    fn checks_the_model_dimension() {
        let assembler = FeatureAssembler::new(FeatureLayout::new(2, 1, 3, 2));
        assert_eq!(Ok(()), assembler.check_model(8));
        assert_eq!(
            Err(AssemblyError::ModelMismatch {
                model: 7,
                features: 8
            }),
            assembler.check_model(7)
        );
    }
}
