//! Card widget - a bordered container with title, extra and actions regions.

use listdom::{Border, Element, Style};

/// Caller overrides for a card.
///
/// Every field left `None` keeps the value the row derived; every field that
/// is set replaces it.
#[derive(Clone, Debug, Default)]
pub struct CardProps {
    pub id: Option<String>,
    pub class_name: Option<String>,
    pub style: Option<Style>,
    pub bordered: Option<bool>,
    pub hoverable: Option<bool>,
    pub loading: Option<bool>,
    pub title: Option<Element>,
    pub sub_title: Option<Element>,
    pub extra: Option<Vec<Element>>,
    pub actions: Option<Vec<Element>>,
}

impl CardProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = Some(bordered);
        self
    }

    pub fn hoverable(mut self, hoverable: bool) -> Self {
        self.hoverable = Some(hoverable);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = Some(loading);
        self
    }

    pub fn title(mut self, title: impl Into<Element>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn sub_title(mut self, sub_title: impl Into<Element>) -> Self {
        self.sub_title = Some(sub_title.into());
        self
    }

    pub fn extra(mut self, extra: Vec<Element>) -> Self {
        self.extra = Some(extra);
        self
    }

    pub fn actions(mut self, actions: Vec<Element>) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = Some(style);
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Apply the overrides on top of `card`.
    pub fn apply(self, mut card: Card) -> Card {
        if let Some(id) = self.id {
            card.id = Some(id);
        }
        if let Some(class_name) = self.class_name {
            card.classes.push(class_name);
        }
        if let Some(style) = self.style {
            card.style = Some(style);
        }
        if let Some(bordered) = self.bordered {
            card.bordered = bordered;
        }
        if let Some(hoverable) = self.hoverable {
            card.hoverable = hoverable;
        }
        if let Some(loading) = self.loading {
            card.loading = loading;
        }
        if self.title.is_some() {
            card.title = self.title;
        }
        if self.sub_title.is_some() {
            card.sub_title = self.sub_title;
        }
        if let Some(extra) = self.extra {
            card.extra = extra;
        }
        if let Some(actions) = self.actions {
            card.actions = actions;
        }
        card
    }
}

/// A card container widget builder.
#[derive(Clone, Debug)]
pub struct Card {
    prefix: String,
    id: Option<String>,
    classes: Vec<String>,
    style: Option<Style>,
    bordered: bool,
    hoverable: bool,
    loading: bool,
    title: Option<Element>,
    sub_title: Option<Element>,
    extra: Vec<Element>,
    actions: Vec<Element>,
    children: Vec<Element>,
}

impl Card {
    /// Create a new card builder using `prefix` for its class names.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            id: None,
            classes: Vec::new(),
            style: None,
            bordered: false,
            hoverable: false,
            loading: false,
            title: None,
            sub_title: None,
            extra: Vec::new(),
            actions: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Set the card id.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn bordered(mut self, bordered: bool) -> Self {
        self.bordered = bordered;
        self
    }

    pub fn hoverable(mut self, hoverable: bool) -> Self {
        self.hoverable = hoverable;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn title(mut self, title: Option<Element>) -> Self {
        self.title = title;
        self
    }

    pub fn sub_title(mut self, sub_title: Option<Element>) -> Self {
        self.sub_title = sub_title;
        self
    }

    pub fn extra(mut self, extra: Vec<Element>) -> Self {
        self.extra = extra;
        self
    }

    pub fn actions(mut self, actions: Vec<Element>) -> Self {
        self.actions = actions;
        self
    }

    /// Add a single child to the card.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Build the card element.
    pub fn build(self) -> Element {
        let base = format!("{}-pro-card", self.prefix);
        let id = self.id.unwrap_or_else(|| "card".into());

        let mut style = Style::new();
        if self.bordered {
            style = style.border(Border::Rounded);
        }
        if let Some(custom) = &self.style {
            style = style.merge(custom);
        }

        let mut elem = Element::col()
            .id(id)
            .class(base.as_str())
            .classes(self.classes)
            .style(style)
            .data("widget", "card")
            .data("bordered", self.bordered.to_string())
            .data("hoverable", self.hoverable.to_string())
            .data("loading", self.loading.to_string());

        if self.bordered {
            elem = elem.class(format!("{base}-bordered"));
        }
        if self.hoverable {
            elem = elem.class(format!("{base}-hoverable"));
        }
        if self.loading {
            elem = elem.class(format!("{base}-loading"));
        }

        elem.slot("title", self.title)
            .slot("sub_title", self.sub_title)
            .slot("extra", self.extra)
            .slot("actions", self.actions)
            .children(self.children)
    }
}
