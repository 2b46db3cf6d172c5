//! SEO metadata duplicate detection

use scraper::{Html, Selector};
use std::fmt;

/// Attribute a meta tag is looked up by
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaKey {
    /// `<meta name="...">`
    Name,
    /// `<meta property="...">`
    Property,
}

/// One metadata slot inspected by the analyzer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MetadataSlot {
    pub id: &'static str,
    pub key: MetaKey,
}

impl MetadataSlot {
    const fn name(id: &'static str) -> Self {
        Self {
            id,
            key: MetaKey::Name,
        }
    }

    const fn property(id: &'static str) -> Self {
        Self {
            id,
            key: MetaKey::Property,
        }
    }

    fn selector(&self) -> String {
        let attribute = match self.key {
            MetaKey::Name => "name",
            MetaKey::Property => "property",
        };
        format!(r#"meta[{}="{}"]"#, attribute, self.id)
    }

    /// Reads the `content` attribute of the first matching meta tag
    fn read(&self, document: &Html) -> Option<String> {
        let selector = Selector::parse(&self.selector()).ok()?;
        document
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr("content"))
            .map(str::to_string)
    }
}

/// Slots in scan order; duplicates always reference the earlier slot
pub const METADATA_SLOTS: [MetadataSlot; 6] = [
    MetadataSlot::name("description"),
    MetadataSlot::property("og:description"),
    MetadataSlot::name("twitter:description"),
    MetadataSlot::name("keywords"),
    MetadataSlot::property("og:title"),
    MetadataSlot::name("twitter:title"),
];

/// A slot whose content repeats an earlier slot's content
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuplicateReport {
    pub slot: &'static str,
    pub first_slot: &'static str,
    pub content: String,
}

impl fmt::Display for DuplicateReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} duplicates with {}: \"{}\"",
            self.slot, self.first_slot, self.content
        )
    }
}

/// Maps each content value to the first slot that produced it, in scan order
#[derive(Debug, Default)]
struct FirstSeen {
    entries: Vec<(String, &'static str)>,
}

impl FirstSeen {
    fn get(&self, content: &str) -> Option<&'static str> {
        self.entries
            .iter()
            .find(|(seen, _)| seen == content)
            .map(|(_, slot)| *slot)
    }

    fn insert(&mut self, content: String, slot: &'static str) {
        self.entries.push((content, slot));
    }
}

/// Scans the metadata slots of a document and reports repeated content
///
/// Slots with absent or empty content are skipped. Reports follow the slot
/// scan order.
pub fn find_duplicates(document: &Html) -> Vec<DuplicateReport> {
    let mut first_seen = FirstSeen::default();
    let mut duplicates = Vec::new();

    for slot in &METADATA_SLOTS {
        let Some(content) = slot.read(document).filter(|c| !c.is_empty()) else {
            continue;
        };

        match first_seen.get(&content) {
            Some(first_slot) => duplicates.push(DuplicateReport {
                slot: slot.id,
                first_slot,
                content,
            }),
            None => first_seen.insert(content, slot.id),
        }
    }

    duplicates
}

/// Parses HTML and returns the duplicate reports as display strings
///
/// # Example
///
/// ```
/// use linkprobe::extract::find_duplicate_descriptions;
///
/// let html = r#"<meta name="description" content="Buy now">
///               <meta property="og:description" content="Buy now">"#;
/// assert_eq!(
///     find_duplicate_descriptions(html),
///     vec![r#"og:description duplicates with description: "Buy now""#]
/// );
/// ```
pub fn find_duplicate_descriptions(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    find_duplicates(&document)
        .iter()
        .map(ToString::to_string)
        .collect()
}
