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


use thiserror::Error;

/// An error from loading or evaluating a model
#[derive(Debug, Error)]
pub enum ModelError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Serialisation(#[from] bincode::Error),
    #[error("The model expects {expected} features but got {found}!")]
    DimensionMismatch { expected: usize, found: usize },
    #[error("The model has no weights!")]
    NoWeights,
    #[error("The model contains or produced a value that is not a finite number!")]
    NotANumber,
}
