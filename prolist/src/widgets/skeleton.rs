//! Skeleton widget - loading placeholder that stands in for its children.

use listdom::Element;

/// A skeleton widget builder.
///
/// While `loading` is set the children are dropped and a fixed-shape
/// placeholder (optional avatar plus `rows` body lines) is produced instead.
#[derive(Clone, Debug)]
pub struct Skeleton {
    prefix: String,
    loading: bool,
    avatar: bool,
    active: bool,
    rows: u16,
    children: Vec<Element>,
}

impl Default for Skeleton {
    fn default() -> Self {
        Self {
            prefix: "ant".into(),
            loading: false,
            avatar: false,
            active: false,
            rows: 3,
            children: Vec::new(),
        }
    }
}

impl Skeleton {
    /// Create a new skeleton builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the class prefix.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Show the placeholder instead of the children.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Include an avatar placeholder.
    pub fn avatar(mut self, avatar: bool) -> Self {
        self.avatar = avatar;
        self
    }

    /// Animate the placeholder.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Number of body lines in the placeholder.
    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = rows;
        self
    }

    /// Set the real content.
    pub fn children(mut self, children: Vec<Element>) -> Self {
        self.children = children;
        self
    }

    /// Add a single child.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Build the skeleton element.
    pub fn build(self) -> Element {
        if !self.loading {
            return Element::col()
                .data("widget", "skeleton")
                .data("loading", "false")
                .children(self.children);
        }

        let base = format!("{}-skeleton", self.prefix);
        let mut placeholder = Element::row()
            .gap(1)
            .class(base.as_str())
            .data("widget", "skeleton")
            .data("loading", "true");
        if self.active {
            placeholder = placeholder.class(format!("{base}-active"));
        }
        if self.avatar {
            placeholder = placeholder.child(Element::box_().class(format!("{base}-avatar")));
        }

        let paragraph = Element::col()
            .class(format!("{base}-paragraph"))
            .children((0..self.rows).map(|_| Element::text("░░░░░░░░").class(format!("{base}-line"))));

        placeholder.child(Element::col().class(format!("{base}-content")).child(paragraph))
    }
}
