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


use crate::static_selectors;
use scraper::{Html, Selector};
use std::fmt::Debug;

static_selectors! {
    [
        OG_DESCRIPTION = r#"meta[name="og:description"]"#
        PROPERTY_DESCRIPTION = r#"meta[property="description"]"#
        NAME_DESCRIPTION = r#"meta[name="description"]"#
    ]
}

/// Recovers a short description of a page.
pub trait DescriptionExtractor: Debug + Send + Sync {
    /// Returns the description of [html] or an empty string. Never fails.
    fn extract(&self, html: &str) -> String;
}

/// Reads the description from the meta tags of the html.
///
/// The first present tag of `meta[name=og:description]`,
/// `meta[property=description]` and `meta[name=description]` wins, a tag
/// without `content` results in an empty description.
#[derive(Debug, Default, Copy, Clone)]
pub struct HtmlDescriptionExtractor;

impl HtmlDescriptionExtractor {
    fn find_content(document: &Html) -> Option<String> {
        let selectors: [&Selector; 3] =
            [&OG_DESCRIPTION, &PROPERTY_DESCRIPTION, &NAME_DESCRIPTION];
        let element = selectors
            .into_iter()
            .find_map(|selector| document.select(selector).next())?;
        element.value().attr("content").map(str::to_string)
    }
}

impl DescriptionExtractor for HtmlDescriptionExtractor {
    fn extract(&self, html: &str) -> String {
        let document = Html::parse_document(html);
        if !document.errors.is_empty() {
            log::trace!("Recovered from {} html errors.", document.errors.len());
        }
        Self::find_content(&document).unwrap_or_default()
    }
}

/// Always returns an empty description.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopDescriptionExtractor;

impl DescriptionExtractor for NoopDescriptionExtractor {
    fn extract(&self, _: &str) -> String {
        String::new()
    }
}
