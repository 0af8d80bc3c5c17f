use tracing::debug;

use super::document::SectionNode;
use super::event::{parse_event, HistoricalEvent};

/// The three lists a date page carries, keyed by their heading id on es.wikipedia.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Occurrences,
    Births,
    Deaths,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Occurrences, Category::Births, Category::Deaths];

    pub fn heading_id(self) -> &'static str {
        match self {
            Category::Occurrences => "Acontecimientos",
            Category::Births => "Nacimientos",
            Category::Deaths => "Fallecimientos",
        }
    }

    /// Field name in the serialised collection and in CLI summaries.
    pub fn key(self) -> &'static str {
        match self {
            Category::Occurrences => "occurrences",
            Category::Births => "births",
            Category::Deaths => "deaths",
        }
    }
}

/// Collect events from the siblings after `anchor` up to the next top-level heading.
/// Items whose description comes out empty are dropped.
pub fn walk_section<N: SectionNode>(anchor: &N, category: Category) -> Vec<HistoricalEvent> {
    let mut events = Vec::new();

    for sibling in anchor.following_siblings() {
        if sibling.is_section_heading() {
            break;
        }
        for item in sibling.list_items() {
            let event = parse_event(&item.text());
            if event.description.is_empty() {
                continue;
            }
            debug!(
                category = category.key(),
                year = event.year,
                before_era = event.is_before_era,
                "event found: {}",
                event.description
            );
            events.push(event);
        }
    }

    events
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::document::find_section_anchor;
    use scraper::Html;

    fn walk(html: &str, category: Category) -> Vec<HistoricalEvent> {
        let doc = Html::parse_document(html);
        find_section_anchor(&doc, category.heading_id())
            .map(|anchor| walk_section(&anchor, category))
            .unwrap_or_default()
    }

    #[test]
    fn no_leak_across_boundary() {
        let html = r#"
            <h2><span class="mw-headline" id="Acontecimientos">A</span></h2>
            <ul><li>1900: uno</li><li>1901: dos</li></ul>
            <h2><span class="mw-headline" id="Otro_tema">B</span></h2>
            <ul><li>1902: tres</li></ul>
        "#;
        let events = walk(html, Category::Occurrences);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].description, "uno");
        assert_eq!(events[1].description, "dos");
    }

    #[test]
    fn subheadings_do_not_close_the_section() {
        let html = r#"
            <h2><span class="mw-headline" id="Nacimientos">N</span></h2>
            <ul><li>1800: uno</li></ul>
            <h3><span class="mw-headline" id="Siglo_XX">Siglo XX</span></h3>
            <ul><li>1950: dos</li></ul>
            <h2><span class="mw-headline" id="Fallecimientos">F</span></h2>
        "#;
        let years: Vec<u32> = walk(html, Category::Births).iter().map(|e| e.year).collect();
        assert_eq!(years, vec![1800, 1950]);
    }

    #[test]
    fn nested_items_each_count_once() {
        let html = r#"
            <h2 id="Acontecimientos">A</h2>
            <ul><li>1500: padre<ul><li>1501: hijo</li></ul></li></ul>
        "#;
        let events = walk(html, Category::Occurrences);
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].year, 1500);
        assert_eq!(events[1].year, 1501);
        assert_eq!(events[1].description, "hijo");
    }

    #[test]
    fn empty_items_are_dropped() {
        let html = r#"
            <h2 id="Fallecimientos">F</h2>
            <ul><li></li><li>   </li><li>1937: Lovecraft</li><li>2001:</li></ul>
        "#;
        let events = walk(html, Category::Deaths);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].description, "Lovecraft");
    }

    #[test]
    fn content_without_lists_yields_nothing() {
        let html = r#"<h2 id="Nacimientos">N</h2><p>Sin datos.</p><table><tr><td>x</td></tr></table>"#;
        assert!(walk(html, Category::Births).is_empty());
    }

    #[test]
    fn heading_ids_and_keys() {
        assert_eq!(Category::Occurrences.heading_id(), "Acontecimientos");
        assert_eq!(Category::Births.heading_id(), "Nacimientos");
        assert_eq!(Category::Deaths.heading_id(), "Fallecimientos");
        let keys: Vec<_> = Category::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec!["occurrences", "births", "deaths"]);
    }

    /// Minimal in-memory tree: a flat list of top-level nodes.
    #[derive(Clone)]
    struct FlatNode {
        nodes: std::rc::Rc<Vec<(bool, Vec<&'static str>)>>,
        idx: usize,
        item: Option<&'static str>,
    }

    impl SectionNode for FlatNode {
        fn is_section_heading(&self) -> bool {
            self.item.is_none() && self.nodes[self.idx].0
        }

        fn following_siblings(&self) -> impl Iterator<Item = Self> {
            let nodes = self.nodes.clone();
            (self.idx + 1..nodes.len()).map(move |idx| FlatNode {
                nodes: nodes.clone(),
                idx,
                item: None,
            })
        }

        fn list_items(&self) -> impl Iterator<Item = Self> {
            let this = self.clone();
            self.nodes[self.idx].1.clone().into_iter().map(move |text| FlatNode {
                item: Some(text),
                ..this.clone()
            })
        }

        fn text(&self) -> String {
            self.item.unwrap_or_default().to_string()
        }
    }

    #[test]
    fn walker_works_over_any_tree() {
        let nodes = std::rc::Rc::new(vec![
            (true, vec![]),
            (false, vec!["10 a.C.: antes", "sin año"]),
            (false, vec!["2020: después"]),
            (true, vec![]),
            (false, vec!["1999: fuera"]),
        ]);
        let anchor = FlatNode { nodes, idx: 0, item: None };
        let events = walk_section(&anchor, Category::Occurrences);
        assert_eq!(events.len(), 3);
        assert!(events[0].is_before_era);
        assert_eq!(events[0].year, 10);
        assert_eq!(events[1].year, 0);
        assert_eq!(events[2].description, "después");
    }
}
