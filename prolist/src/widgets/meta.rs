//! Meta widget - avatar, title and description block of a list item.

use listdom::{Direction, Element};

/// A list item meta builder.
#[derive(Clone, Debug)]
pub struct Meta {
    prefix: String,
    avatar: Option<Element>,
    title: Option<Element>,
    description: Option<Element>,
}

impl Meta {
    /// Create a meta block using `prefix` for its class names.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            avatar: None,
            title: None,
            description: None,
        }
    }

    pub fn avatar(mut self, avatar: Option<Element>) -> Self {
        self.avatar = avatar;
        self
    }

    pub fn title(mut self, title: Option<Element>) -> Self {
        self.title = title;
        self
    }

    pub fn description(mut self, description: Option<Element>) -> Self {
        self.description = description;
        self
    }

    /// Build the meta element. Absent parts leave no wrapper behind.
    pub fn build(self) -> Element {
        let base = format!("{}-list-item-meta", self.prefix);

        let avatar = self
            .avatar
            .map(|avatar| Element::box_().class(format!("{base}-avatar")).child(avatar));

        let mut content = Element::col().class(format!("{base}-content"));
        if let Some(title) = self.title {
            content = content.child(Element::box_().class(format!("{base}-title")).child(title));
        }
        if let Some(description) = self.description {
            content = content.child(
                Element::box_()
                    .class(format!("{base}-description"))
                    .child(description),
            );
        }

        Element::box_()
            .direction(Direction::Row)
            .gap(1)
            .class(base.as_str())
            .data("widget", "meta")
            .maybe_child(avatar)
            .child(content)
    }
}
