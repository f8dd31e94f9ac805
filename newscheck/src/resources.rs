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


use crate::config::{Configs, FeatureConfig, ResourcesConfig};
use crate::extraction::DescriptionExtractor;
use crate::features::{AssemblyError, Featurizer};
use camino::{Utf8Path, Utf8PathBuf};
use classifier::error::ModelError;
use classifier::{load_model, Classifier};
use std::sync::Arc;
use text_processing::embeddings::EmbeddingTable;
use text_processing::error::ResourceError;
use text_processing::vocabulary::Vocabulary;
use thiserror::Error;

/// Failed to prepare the read-only resources.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to load the vocabulary from {path}: {source}")]
    Vocabulary {
        path: Utf8PathBuf,
        source: ResourceError,
    },
    #[error("Failed to load the embeddings from {path}: {source}")]
    Embeddings {
        path: Utf8PathBuf,
        source: ResourceError,
    },
    #[error("Failed to load the model from {path}: {source}")]
    Model { path: Utf8PathBuf, source: ModelError },
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

/// The vocabulary and the embeddings used for the description.
#[derive(Debug, Clone)]
pub struct TextResources {
    pub vocabulary: Arc<Vocabulary>,
    pub embeddings: Arc<EmbeddingTable>,
}

impl TextResources {
    pub fn load(config: &ResourcesConfig) -> Result<Self, StartupError> {
        let vocabulary =
            Vocabulary::load(&config.vocabulary).map_err(|source| StartupError::Vocabulary {
                path: config.vocabulary.clone(),
                source,
            })?;
        let embeddings =
            EmbeddingTable::load(&config.embeddings).map_err(|source| StartupError::Embeddings {
                path: config.embeddings.clone(),
                source,
            })?;
        log::info!(
            "Loaded {} terms and {} embeddings with {} dimensions.",
            vocabulary.len(),
            embeddings.len(),
            embeddings.dimension()
        );
        Ok(Self {
            vocabulary: Arc::new(vocabulary),
            embeddings: Arc::new(embeddings),
        })
    }

    pub fn featurizer<E: DescriptionExtractor>(
        &self,
        config: &FeatureConfig,
        extractor: E,
    ) -> Featurizer<E> {
        Featurizer::new(
            config,
            self.vocabulary.clone(),
            self.embeddings.clone(),
            extractor,
        )
    }
}

/// All read-only resources, shared by every request.
#[derive(Debug, Clone)]
pub struct Resources {
    pub text: TextResources,
    pub model: Arc<dyn Classifier>,
}

impl Resources {
    /// Creates the resources and checks that the model fits the features of [config].
    pub fn new(
        text: TextResources,
        model: Arc<dyn Classifier>,
        config: &FeatureConfig,
    ) -> Result<Self, StartupError> {
        let resources = Self { text, model };
        resources.validate(config)?;
        Ok(resources)
    }

    /// Loads everything configured in [configs] and validates the dimensions.
    pub fn load(configs: &Configs) -> Result<Self, StartupError> {
        let text = TextResources::load(&configs.resources)?;
        let model = load_model_from(&configs.resources.model)?;
        Self::new(text, model, &configs.features)
    }

    /// Fails if the model can not score the vectors created with [config].
    pub fn validate(&self, config: &FeatureConfig) -> Result<(), AssemblyError> {
        let featurizer = self.featurizer(config, crate::extraction::NoopDescriptionExtractor);
        featurizer.assembler().check_model(self.model.dimension())
    }

    pub fn featurizer<E: DescriptionExtractor>(
        &self,
        config: &FeatureConfig,
        extractor: E,
    ) -> Featurizer<E> {
        self.text.featurizer(config, extractor)
    }
}

fn load_model_from(path: &Utf8Path) -> Result<Arc<dyn Classifier>, StartupError> {
    match load_model(path) {
        Ok(model) => Ok(Arc::new(model)),
        Err(source) => Err(StartupError::Model {
            path: path.to_path_buf(),
            source,
        }),
    }
}
