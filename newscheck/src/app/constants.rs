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


use crate::config::Configs;

/// The name of the file written by `init`.
pub const EXAMPLE_CONFIG_FILE: &str = "newscheck.json";

/// The config written by `init`, the defaults with every field spelled out.
pub fn create_example_config() -> Configs {
    let mut configs = Configs::default();
    configs.fetch.user_agent = "My User Agent".to_string();
    configs
}
