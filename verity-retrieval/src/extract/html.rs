//! HTML to main-text extraction.
//!
//! Walks the most article-like root (`article`, then `main`, then `body`)
//! and collects paragraph and list-item text. Boilerplate-heavy chrome
//! outside those blocks never reaches the sentence splitter.

use scraper::{ElementRef, Html, Selector};

fn text_content(elem: ElementRef<'_>) -> String {
    elem.text().collect::<Vec<_>>().join(" ")
}

fn compact_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract readable main text from an HTML document.
///
/// Returns one block per paragraph or list item, newline-joined. An
/// unparseable or empty document yields an empty string.
pub fn extract_main_text(html: &str) -> String {
    let document = Html::parse_document(html);

    let root = Selector::parse("article")
        .ok()
        .and_then(|sel| document.select(&sel).next())
        .or_else(|| {
            Selector::parse("main")
                .ok()
                .and_then(|sel| document.select(&sel).next())
        })
        .or_else(|| {
            Selector::parse("body")
                .ok()
                .and_then(|sel| document.select(&sel).next())
        });

    let Some(root) = root else {
        return String::new();
    };

    let Ok(block_sel) = Selector::parse("p, li") else {
        return String::new();
    };

    let mut blocks: Vec<String> = Vec::new();
    for elem in root.select(&block_sel) {
        let raw = compact_ws(&text_content(elem));
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        blocks.push(text.to_string());
    }

    blocks.join("\n")
}
