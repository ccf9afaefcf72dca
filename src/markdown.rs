// Copyright 2025 Fernando Borretti
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

use pulldown_cmark::Parser;
use pulldown_cmark::html::push_html;

/// Render lesson theory markdown to HTML.
pub fn markdown_to_html(markdown: &str) -> String {
    let parser = Parser::new(markdown);
    let mut html_output = String::new();
    push_html(&mut html_output, parser);
    html_output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_to_html() {
        let markdown = "This is **bold** text.";
        let html = markdown_to_html(markdown);
        assert_eq!(html, "<p>This is <strong>bold</strong> text.</p>\n");
    }

    #[test]
    fn test_markdown_to_html_heading() {
        let markdown = "# Foo";
        let html = markdown_to_html(markdown);
        assert_eq!(html, "<h1>Foo</h1>\n");
    }

    #[test]
    fn test_markdown_to_html_code_block() {
        let markdown = "```js\nlet x = 1\n```";
        let html = markdown_to_html(markdown);
        assert_eq!(
            html,
            "<pre><code class=\"language-js\">let x = 1\n</code></pre>\n"
        );
    }
}
