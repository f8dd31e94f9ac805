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


/// Declares lazily parsed css selectors.
///
/// ```ignore
/// static_selectors! {
///     pub [
///         BASE = "base"
///         META = "meta[name]"
///     ]
/// }
/// ```
#[macro_export]
macro_rules! static_selectors {
    ($vis:vis [$($name:ident = $selector:literal)+]) => {
        $(
            $vis static $name: std::sync::LazyLock<scraper::Selector> =
                std::sync::LazyLock::new(|| {
                    scraper::Selector::parse($selector)
                        .expect(concat!("The selector ", $selector, " is invalid!"))
                });
        )+
    };
}
