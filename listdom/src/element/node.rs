use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicU64, Ordering};

use super::Content;
use crate::types::{Direction, Style};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

fn generate_id(prefix: &str) -> String {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    format!("{prefix}-{id}")
}

/// A node in the render tree.
///
/// Besides its ordinary content an element can carry named slots. Container
/// primitives (cards, list items) use them for regions that are laid out
/// apart from the body, such as a card's `actions` row or a list item's
/// trailing `extra` column.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    // Identity
    pub id: String,

    // Content
    pub content: Content,
    pub slots: BTreeMap<String, Vec<Element>>,

    // Layout
    pub direction: Direction,
    pub gap: u16,

    // Visual
    pub classes: Vec<String>,
    pub style: Style,

    // Interaction
    pub clickable: bool,

    // Custom data storage (widget kind, flags for the host, etc.)
    pub data: HashMap<String, String>,
}

impl Default for Element {
    fn default() -> Self {
        Self {
            id: generate_id("el"),
            content: Content::None,
            slots: BTreeMap::new(),
            direction: Direction::Column,
            gap: 0,
            classes: Vec::new(),
            style: Style::default(),
            clickable: false,
            data: HashMap::new(),
        }
    }
}

impl Element {
    pub fn box_() -> Self {
        Self {
            id: generate_id("box"),
            ..Default::default()
        }
    }

    pub fn text(content: impl Into<String>) -> Self {
        Self {
            id: generate_id("text"),
            content: Content::Text(content.into()),
            ..Default::default()
        }
    }

    pub fn col() -> Self {
        Self {
            id: generate_id("col"),
            direction: Direction::Column,
            ..Default::default()
        }
    }

    pub fn row() -> Self {
        Self {
            id: generate_id("row"),
            direction: Direction::Row,
            ..Default::default()
        }
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    // Layout
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    // Visual
    /// Add a class name. Empty names are ignored.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        if !class.is_empty() && !self.classes.contains(&class) {
            self.classes.push(class);
        }
        self
    }

    pub fn classes<I, S>(self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        classes.into_iter().fold(self, |elem, class| elem.class(class))
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    // Interaction
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    // Custom data
    pub fn data(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(key.into(), value.into());
        self
    }

    pub fn get_data(&self, key: &str) -> Option<&String> {
        self.data.get(key)
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    /// Append a child only when one is given.
    pub fn maybe_child(self, child: Option<Element>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    // Slots
    /// Place elements into a named slot, appending to anything already there.
    /// An empty list leaves the slot absent.
    pub fn slot(mut self, name: impl Into<String>, elements: impl IntoIterator<Item = Element>) -> Self {
        let elements: Vec<Element> = elements.into_iter().collect();
        if !elements.is_empty() {
            self.slots.entry(name.into()).or_default().extend(elements);
        }
        self
    }

    /// Replace a named slot outright. `None` removes it.
    pub fn set_slot(mut self, name: impl Into<String>, elements: Option<Vec<Element>>) -> Self {
        let name = name.into();
        match elements {
            Some(elements) if !elements.is_empty() => {
                self.slots.insert(name, elements);
            }
            _ => {
                self.slots.remove(&name);
            }
        }
        self
    }

    pub fn slot_children(&self, name: &str) -> &[Element] {
        self.slots.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn has_slot(&self, name: &str) -> bool {
        !self.slot_children(name).is_empty()
    }

    /// Children followed by every slot's elements, in slot-name order.
    pub fn descendants(&self) -> impl Iterator<Item = &Element> {
        self.content
            .children()
            .iter()
            .chain(self.slots.values().flatten())
    }

    pub fn text_content(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<&str> for Element {
    fn from(text: &str) -> Self {
        Element::text(text)
    }
}

impl From<String> for Element {
    fn from(text: String) -> Self {
        Element::text(text)
    }
}
