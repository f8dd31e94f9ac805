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


pub mod error;
pub mod linear;

use crate::error::ModelError;
use crate::linear::LinearModel;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::fs::File;
use std::io::BufReader;
use strum::{Display, EnumString};

/// Scores below this value are real news.
pub const DECISION_THRESHOLD: f64 = 0.5;

/// The verdict of a classifier
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    /// Maps the raw model output to a label, `< 0.5` is [Label::Real].
    pub fn from_score(score: f64) -> Result<Self, ModelError> {
        if score.is_nan() {
            Err(ModelError::NotANumber)
        } else if score < DECISION_THRESHOLD {
            Ok(Self::Real)
        } else {
            Ok(Self::Fake)
        }
    }
}

/// A trained model that scores a feature vector.
pub trait Classifier: Debug + Send + Sync {
    /// The number of features expected by [Classifier::predict]
    fn dimension(&self) -> usize;

    /// The raw score of the model for [features]
    fn predict(&self, features: &[f64]) -> Result<f64, ModelError>;

    /// Scores [features] and converts the score to a [Label]
    fn classify(&self, features: &[f64]) -> Result<(Label, f64), ModelError> {
        let score = self.predict(features)?;
        Ok((Label::from_score(score)?, score))
    }
}

/// Loads a serialized model. Files ending with `.json` are read as JSON,
/// everything else as bincode.
pub fn load_model(path: impl AsRef<Utf8Path>) -> Result<LinearModel, ModelError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::options().read(true).open(path)?);
    let model: LinearModel = match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("json") => serde_json::from_reader(reader)?,
        _ => bincode::deserialize_from(reader)?,
    };
    if model.dimension() == 0 {
        return Err(ModelError::NoWeights);
    }
    if !model.bias().is_finite() || model.weights().iter().any(|weight| !weight.is_finite()) {
        return Err(ModelError::NotANumber);
    }
    log::info!(
        "Loaded a {:?} model with {} features from {path}",
        model.link(),
        model.dimension()
    );
    Ok(model)
}
