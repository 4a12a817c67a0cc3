use readability::extractor;
use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::extractor::model::ReadabilityResult;

/// Minimum text length (chars) for a content block to be trusted as the
/// main text rather than a teaser.
const MIN_CONTAINER_TEXT: usize = 100;

/// Subtrees whose text never counts as readable content.
const SKIPPED_TAGS: &[&str] = &[
    "script", "style", "noscript", "template", "nav", "header", "footer", "aside", "iframe",
    "svg", "button",
];

const CONTENT_SELECTORS: &[&str] = &[
    "article",
    "main",
    "[role='main']",
    ".content",
    ".post",
    ".article",
    "#content",
    "#main",
    ".entry-content",
];

static SITE_NAME: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[property='og:site_name']").unwrap());
static OG_TITLE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("meta[property='og:title']").unwrap());
static TITLE: LazyLock<Selector> = LazyLock::new(|| Selector::parse("title").unwrap());
static H1: LazyLock<Selector> = LazyLock::new(|| Selector::parse("h1").unwrap());
static BODY: LazyLock<Selector> = LazyLock::new(|| Selector::parse("body").unwrap());
static BOILERPLATE: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(&SKIPPED_TAGS.join(", ")).unwrap());

pub fn extract(html: &str, url: &Url) -> Option<ReadabilityResult> {
    let document = Html::parse_document(html);
    let cleaned = strip_boilerplate(html);

    // Readability is trusted when it found a substantial block
    if let Ok(article) = extractor::extract(&mut cleaned.as_bytes(), url)
        && article.text.trim().chars().count() >= MIN_CONTAINER_TEXT
    {
        return Some(ReadabilityResult {
            title: article.title,
            site_name: extract_site_name(&document),
            text: article.text,
        });
    }

    // Short or unscorable pages go through the selector heuristics
    fallback_extract(&document)
}

/// Re-serializes `html` without navigation, chrome and script subtrees so
/// readability cannot score link lists as the article.
fn strip_boilerplate(html: &str) -> String {
    let mut document = Html::parse_document(html);
    let ids: Vec<_> = document.select(&BOILERPLATE).map(|element| element.id()).collect();
    for id in ids {
        if let Some(mut node) = document.tree.get_mut(id) {
            node.detach();
        }
    }
    document.html()
}

fn extract_site_name(document: &Html) -> Option<String> {
    if let Some(content) = document
        .select(&SITE_NAME)
        .next()
        .and_then(|element| element.value().attr("content"))
    {
        return Some(content.trim().to_string());
    }

    // "Article Title - Site Name" or "Article Title | Site Name"
    let title = document.select(&TITLE).next()?.text().collect::<String>();
    title
        .rfind(" - ")
        .or_else(|| title.rfind(" | "))
        .map(|pos| title[pos + 3..].trim().to_string())
}

fn fallback_extract(document: &Html) -> Option<ReadabilityResult> {
    let text = extract_main_content(document)?;
    if text.trim().is_empty() {
        return None;
    }

    Some(ReadabilityResult {
        title: extract_title(document).unwrap_or_default(),
        site_name: extract_site_name(document),
        text,
    })
}

fn extract_title(document: &Html) -> Option<String> {
    if let Some(content) = document
        .select(&OG_TITLE)
        .find_map(|element| element.value().attr("content"))
    {
        return Some(content.to_string());
    }

    [&*TITLE, &*H1].into_iter().find_map(|selector| {
        document
            .select(selector)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .find(|title| !title.is_empty())
    })
}

fn extract_main_content(document: &Html) -> Option<String> {
    for selector_str in CONTENT_SELECTORS {
        let Ok(selector) = Selector::parse(selector_str) else {
            continue;
        };
        for element in document.select(&selector) {
            let text = visible_text(element);
            if text.trim().chars().count() > MIN_CONTAINER_TEXT {
                return Some(text);
            }
        }
    }

    // Last resort: the whole body minus boilerplate subtrees
    document.select(&BODY).next().map(visible_text)
}

/// Text of `root`, skipping anything inside a boilerplate subtree.
fn visible_text(root: ElementRef<'_>) -> String {
    let mut out = String::new();
    for node in root.descendants() {
        let Some(text) = node.value().as_text() else {
            continue;
        };
        let skipped = node
            .ancestors()
            .filter_map(ElementRef::wrap)
            .any(|element| SKIPPED_TAGS.contains(&element.value().name()));
        if !skipped {
            out.push_str(text);
            out.push(' ');
        }
    }
    out
}
