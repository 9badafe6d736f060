//! Avatar widget - a small image or initials badge.

use listdom::{Element, Style};

/// An avatar widget builder.
#[derive(Clone, Debug, Default)]
pub struct Avatar {
    src: String,
    size: Option<u16>,
    class: Option<String>,
}

impl Avatar {
    /// Create an avatar showing `src` (an image location or initials).
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            ..Default::default()
        }
    }

    /// Set the rendered size in cells.
    pub fn size(mut self, size: u16) -> Self {
        self.size = Some(size);
        self
    }

    /// Add a class name.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Build the avatar element.
    pub fn build(self) -> Element {
        let mut elem = Element::box_()
            .data("widget", "avatar")
            .data("src", self.src.as_str())
            .child(Element::text(self.src));

        if let Some(size) = self.size {
            elem = elem
                .data("size", size.to_string())
                .style(Style::new().width(size));
        }
        if let Some(class) = self.class {
            elem = elem.class(class);
        }

        elem
    }
}
