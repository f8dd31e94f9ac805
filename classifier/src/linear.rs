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


use crate::error::ModelError;
use crate::Classifier;
use serde::{Deserialize, Serialize};

/// The function applied to the decision value of a [LinearModel].
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default, Serialize, Deserialize)]
pub enum Link {
    /// `1 / (1 + e^-z)`, the score is a probability
    #[default]
    Logistic,
    /// The decision value is the score
    Identity,
}

/// A linear model `link(w·x + b)`, e.g. an exported logistic regression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    weights: Vec<f64>,
    #[serde(default)]
    bias: f64,
    #[serde(default)]
    link: Link,
}

impl LinearModel {
    pub fn new(weights: Vec<f64>, bias: f64, link: Link) -> Self {
        Self {
            weights,
            bias,
            link,
        }
    }

    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    pub fn bias(&self) -> f64 {
        self.bias
    }

    pub fn link(&self) -> Link {
        self.link
    }
}

impl Classifier for LinearModel {
    #[inline]
    fn dimension(&self) -> usize {
        self.weights.len()
    }

    fn predict(&self, features: &[f64]) -> Result<f64, ModelError> {
        if features.len() != self.weights.len() {
            return Err(ModelError::DimensionMismatch {
                expected: self.weights.len(),
                found: features.len(),
            });
        }
        let decision = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;
        Ok(match self.link {
            Link::Logistic => 1.0 / (1.0 + (-decision).exp()),
            Link::Identity => decision,
        })
    }
}

#[cfg(test)]
mod test {
    use crate::error::ModelError;
    use crate::linear::{LinearModel, Link};
    use crate::{Classifier, Label};
    use float_cmp::approx_eq;

    #[test]
    fn logistic_of_zero_is_one_half() {
        let model = LinearModel::new(vec![1.0, 1.0], 0.0, Link::Logistic);
        assert!(approx_eq!(f64, 0.5, model.predict(&[1.0, -1.0]).unwrap()));
        assert_eq!(Label::Fake, model.classify(&[1.0, -1.0]).unwrap().0);
    }

    #[test]
    fn identity_returns_the_decision_value() {
        let model = LinearModel::new(vec![0.5, 2.0], -1.0, Link::Identity);
        assert!(approx_eq!(f64, 2.0, model.predict(&[2.0, 1.0]).unwrap()));
        let (label, score) = model.classify(&[0.0, 0.75]).unwrap();
        assert_eq!(Label::Fake, label);
        assert!(approx_eq!(f64, 0.5, score));
        assert_eq!(Label::Real, model.classify(&[0.0, 0.0]).unwrap().0);
    }

    #[test]
    fn wrong_width_is_an_error() {
        let model = LinearModel::new(vec![1.0, 2.0, 3.0], 0.0, Link::Logistic);
        assert!(matches!(
            model.predict(&[1.0]),
            Err(ModelError::DimensionMismatch {
                expected: 3,
                found: 1
            })
        ));
    }

    #[test]
    fn missing_fields_use_defaults() {
        let model: LinearModel = serde_json::from_str(r#"{"weights": [1.0]}"#).unwrap();
        assert_eq!(Link::Logistic, model.link());
        assert_eq!(0.0, model.bias());
    }
}
