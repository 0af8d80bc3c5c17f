pub mod document;
pub mod event;
pub mod sections;

use scraper::Html;
use serde::ser::{Serialize, SerializeMap, Serializer};
use tracing::debug;

pub use event::HistoricalEvent;
pub use sections::Category;

/// Events of a date page, each list in document order. Serialises as one
/// array per [`Category::key`], in [`Category::ALL`] order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventCollection {
    pub occurrences: Vec<HistoricalEvent>,
    pub births: Vec<HistoricalEvent>,
    pub deaths: Vec<HistoricalEvent>,
}

impl EventCollection {
    pub fn get(&self, category: Category) -> &[HistoricalEvent] {
        match category {
            Category::Occurrences => &self.occurrences,
            Category::Births => &self.births,
            Category::Deaths => &self.deaths,
        }
    }

    fn slot_mut(&mut self, category: Category) -> &mut Vec<HistoricalEvent> {
        match category {
            Category::Occurrences => &mut self.occurrences,
            Category::Births => &mut self.births,
            Category::Deaths => &mut self.deaths,
        }
    }

    pub fn total(&self) -> usize {
        self.occurrences.len() + self.births.len() + self.deaths.len()
    }
}

impl Serialize for EventCollection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for category in Category::ALL {
            map.serialize_entry(category.key(), self.get(category))?;
        }
        map.end()
    }
}

/// Two-pass pipeline: html → section anchors → events per category.
/// A missing heading leaves that category empty.
pub fn extract_events(html: &str) -> EventCollection {
    let doc = Html::parse_document(html);
    let mut collection = EventCollection::default();

    for category in Category::ALL {
        match document::find_section_anchor(&doc, category.heading_id()) {
            Some(anchor) => {
                *collection.slot_mut(category) = sections::walk_section(&anchor, category);
            }
            None => debug!("No '{}' heading on page", category.heading_id()),
        }
    }

    collection
}

// ── Tests ──
