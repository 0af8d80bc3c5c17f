use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};

static ID_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("[id]").unwrap());
static LI_SEL: LazyLock<Selector> = LazyLock::new(|| Selector::parse("li").unwrap());

/// What the section walker needs from a document node.
pub trait SectionNode: Sized {
    /// Top-level heading that closes the previous section.
    fn is_section_heading(&self) -> bool;
    /// Element siblings after this node, in document order.
    fn following_siblings(&self) -> impl Iterator<Item = Self>;
    /// Descendant list items (nested ones included), in document order.
    fn list_items(&self) -> impl Iterator<Item = Self>;
    /// Flattened text content.
    fn text(&self) -> String;
}

impl<'a> SectionNode for ElementRef<'a> {
    fn is_section_heading(&self) -> bool {
        let el = self.value();
        match el.name() {
            "h2" => true,
            "div" => el.classes().any(|c| c == "mw-heading2"),
            _ => false,
        }
    }

    fn following_siblings(&self) -> impl Iterator<Item = Self> {
        self.next_siblings().filter_map(ElementRef::wrap)
    }

    fn list_items(&self) -> impl Iterator<Item = Self> {
        self.select(&LI_SEL)
    }

    fn text(&self) -> String {
        ElementRef::text(self).collect()
    }
}

/// Find the element carrying `heading_id` and resolve the node whose siblings
/// hold that section's content.
///
/// Handles both MediaWiki heading layouts:
/// - `<h2><span class="mw-headline" id="X">` (anchor: the `h2`)
/// - `<div class="mw-heading mw-heading2"><h2 id="X">` (anchor: the `div`)
pub fn find_section_anchor<'a>(doc: &'a Html, heading_id: &str) -> Option<ElementRef<'a>> {
    let target = doc
        .select(&ID_SEL)
        .find(|el| el.value().attr("id") == Some(heading_id))?;

    let parent = target.parent().and_then(ElementRef::wrap);
    let anchor = match parent {
        Some(p) if is_legacy_headline(&target) || is_heading_wrapper(&p) => p,
        _ => target,
    };
    Some(anchor)
}

fn is_legacy_headline(el: &ElementRef) -> bool {
    el.value().name() == "span" && el.value().classes().any(|c| c == "mw-headline")
}

fn is_heading_wrapper(el: &ElementRef) -> bool {
    el.value().name() == "div" && el.value().classes().any(|c| c == "mw-heading")
}
