//! List item container - the plain row a list renders per record.

use listdom::Element;

/// A list item container builder.
///
/// Holds the row body plus a trailing `extra` slot.
#[derive(Clone, Debug, Default)]
pub struct ListItemContainer {
    id: Option<String>,
    classes: Vec<String>,
    children: Vec<Element>,
    extra: Vec<Element>,
}

impl ListItemContainer {
    /// Create a new list item builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the element id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Set the class names.
    pub fn classes(mut self, classes: Vec<String>) -> Self {
        self.classes = classes;
        self
    }

    /// Add a single child.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append to the trailing slot.
    pub fn extra(mut self, extra: impl IntoIterator<Item = Element>) -> Self {
        self.extra.extend(extra);
        self
    }

    /// Build the list item element.
    pub fn build(self) -> Element {
        let id = self.id.unwrap_or_else(|| "list-item".into());

        Element::col()
            .id(id)
            .clickable(true)
            .data("widget", "list-item")
            .classes(self.classes)
            .children(self.children)
            .slot("extra", self.extra)
    }
}
