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

/// An error while loading or building one of the read-only text resources.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error(transparent)]
    IO(#[from] std::io::Error),
    #[error("The term {0:?} appears more than once in the vocabulary!")]
    DuplicateTerm(String),
    #[error("Line {line}: {reason}")]
    Malformed { line: usize, reason: String },
    #[error("Line {line}: expected {expected} values but found {found}!")]
    WidthMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },
    #[error("The resource {0} does not contain any entries!")]
    Empty(String),
}
