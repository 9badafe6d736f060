//! Everything a caller hands to a row for one render.

use std::fmt;
use std::sync::Arc;

use listdom::{Element, Style};
use serde::Deserialize;

use crate::error::RenderError;
use crate::handler_context::{EventKind, Handler};
use crate::state::OnChange;
use crate::widgets::CardProps;

/// What an override callback decided for the node it was offered.
#[derive(Debug, Clone, PartialEq)]
pub enum Rendered {
    /// Keep the default node.
    Default,
    /// Use this node instead.
    Node(Element),
    /// Render nothing, even though a default exists.
    Suppressed,
}

impl Rendered {
    /// Resolve against the default node that was offered.
    pub fn resolve(self, default: Option<Element>) -> Option<Element> {
        match self {
            Rendered::Default => default,
            Rendered::Node(node) => Some(node),
            Rendered::Suppressed => None,
        }
    }
}

/// Header/title override: `(record, index, default) -> decision`.
pub type ItemRender<R> =
    Arc<dyn Fn(&R, usize, Option<Element>) -> Result<Rendered, RenderError> + Send + Sync>;

/// Detail renderer: `(record, index, indent, expanded) -> node`.
pub type ExpandedRowRender<R> = Arc<dyn Fn(&R, usize, u16, bool) -> Option<Element> + Send + Sync>;

/// Class of the detail wrapper: `(record, index, indent) -> class`.
pub type ExpandedRowClassName<R> = Arc<dyn Fn(&R, usize, u16) -> String + Send + Sync>;

/// Per-row handler bundle factory: `(record, index) -> handlers`.
pub type OnRow<R> = Arc<dyn Fn(&R, usize) -> RowHandlers + Send + Sync>;

/// When a hover-revealed region is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShowMode {
    Hover,
    Always,
}

/// Row variant, surfaced as a `type-*` class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    New,
    Top,
    Inline,
    Subheader,
}

impl ItemType {
    pub fn as_str(self) -> &'static str {
        match self {
            ItemType::New => "new",
            ItemType::Top => "top",
            ItemType::Inline => "inline",
            ItemType::Subheader => "subheader",
        }
    }
}

/// Where a row's actions go.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardActionPlacement {
    /// The trailing extra slot (any layout).
    #[default]
    Extra,
    /// The card's own actions region (card layout only).
    Actions,
}

/// Icon for the expand affordance.
pub enum ExpandIcon<R> {
    Node(Element),
    Render(Arc<dyn Fn(&ExpandIconContext<'_, R>) -> Element + Send + Sync>),
}

/// What a custom expand icon renderer gets to see.
#[derive(Debug)]
pub struct ExpandIconContext<'a, R> {
    pub expanded: bool,
    pub record: &'a R,
}

impl<R> Clone for ExpandIcon<R> {
    fn clone(&self) -> Self {
        match self {
            ExpandIcon::Node(node) => ExpandIcon::Node(node.clone()),
            ExpandIcon::Render(render) => ExpandIcon::Render(Arc::clone(render)),
        }
    }
}

impl<R> fmt::Debug for ExpandIcon<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExpandIcon::Node(node) => f.debug_tuple("Node").field(node).finish(),
            ExpandIcon::Render(_) => write!(f, "Render(...)"),
        }
    }
}

/// Expand/collapse configuration of a row.
///
/// A config with no field set counts as absent: the row shows no expand
/// icon and never hides its content.
pub struct ExpandableConfig<R> {
    pub expanded_row_render: Option<ExpandedRowRender<R>>,
    pub expand_icon: Option<ExpandIcon<R>>,
    pub expand_row_by_click: Option<bool>,
    pub indent_size: Option<u16>,
    pub expanded_row_class_name: Option<ExpandedRowClassName<R>>,
}

impl<R> ExpandableConfig<R> {
    pub fn new() -> Self {
        Self {
            expanded_row_render: None,
            expand_icon: None,
            expand_row_by_click: None,
            indent_size: None,
            expanded_row_class_name: None,
        }
    }

    pub fn expanded_row_render(
        mut self,
        render: impl Fn(&R, usize, u16, bool) -> Option<Element> + Send + Sync + 'static,
    ) -> Self {
        self.expanded_row_render = Some(Arc::new(render));
        self
    }

    pub fn expand_icon(mut self, icon: ExpandIcon<R>) -> Self {
        self.expand_icon = Some(icon);
        self
    }

    pub fn expand_row_by_click(mut self, by_click: bool) -> Self {
        self.expand_row_by_click = Some(by_click);
        self
    }

    pub fn indent_size(mut self, indent: u16) -> Self {
        self.indent_size = Some(indent);
        self
    }

    pub fn expanded_row_class_name(
        mut self,
        class_name: impl Fn(&R, usize, u16) -> String + Send + Sync + 'static,
    ) -> Self {
        self.expanded_row_class_name = Some(Arc::new(class_name));
        self
    }

    /// True when no key is set.
    pub fn is_empty(&self) -> bool {
        self.expanded_row_render.is_none()
            && self.expand_icon.is_none()
            && self.expand_row_by_click.is_none()
            && self.indent_size.is_none()
            && self.expanded_row_class_name.is_none()
    }
}

impl<R> Default for ExpandableConfig<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for ExpandableConfig<R> {
    fn clone(&self) -> Self {
        Self {
            expanded_row_render: self.expanded_row_render.clone(),
            expand_icon: self.expand_icon.clone(),
            expand_row_by_click: self.expand_row_by_click,
            indent_size: self.indent_size,
            expanded_row_class_name: self.expanded_row_class_name.clone(),
        }
    }
}

impl<R> fmt::Debug for ExpandableConfig<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpandableConfig")
            .field("expanded_row_render", &self.expanded_row_render.is_some())
            .field("expand_icon", &self.expand_icon)
            .field("expand_row_by_click", &self.expand_row_by_click)
            .field("indent_size", &self.indent_size)
            .field("expanded_row_class_name", &self.expanded_row_class_name.is_some())
            .finish()
    }
}

/// Handlers a caller attaches to the row container.
#[derive(Clone, Default)]
pub struct RowHandlers {
    pub on_click: Option<Handler>,
    pub on_double_click: Option<Handler>,
    pub on_context_menu: Option<Handler>,
    pub on_mouse_enter: Option<Handler>,
    pub on_mouse_leave: Option<Handler>,
}

impl RowHandlers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_click(mut self, handler: Handler) -> Self {
        self.on_click = Some(handler);
        self
    }

    pub fn on_double_click(mut self, handler: Handler) -> Self {
        self.on_double_click = Some(handler);
        self
    }

    pub fn on_context_menu(mut self, handler: Handler) -> Self {
        self.on_context_menu = Some(handler);
        self
    }

    pub fn on_mouse_enter(mut self, handler: Handler) -> Self {
        self.on_mouse_enter = Some(handler);
        self
    }

    pub fn on_mouse_leave(mut self, handler: Handler) -> Self {
        self.on_mouse_leave = Some(handler);
        self
    }

    /// Every handler except the click one, keyed by event.
    pub fn non_click(&self) -> impl Iterator<Item = (EventKind, &Handler)> {
        [
            (EventKind::DoubleClick, &self.on_double_click),
            (EventKind::ContextMenu, &self.on_context_menu),
            (EventKind::MouseEnter, &self.on_mouse_enter),
            (EventKind::MouseLeave, &self.on_mouse_leave),
        ]
        .into_iter()
        .filter_map(|(kind, handler)| handler.as_ref().map(|h| (kind, h)))
    }
}

impl fmt::Debug for RowHandlers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RowHandlers")
            .field("on_click", &self.on_click.is_some())
            .field("on_double_click", &self.on_double_click.is_some())
            .field("on_context_menu", &self.on_context_menu.is_some())
            .field("on_mouse_enter", &self.on_mouse_enter.is_some())
            .field("on_mouse_leave", &self.on_mouse_leave.is_some())
            .finish()
    }
}

/// Input of one row render.
///
/// Built fresh on every render; only the expand state outlives it (see
/// [`ProListItem`](super::ProListItem)).
///
/// # Example
///
/// ```
/// use prolist::item::ItemProps;
/// use listdom::Element;
///
/// let props = ItemProps::new("record-1", 0)
///     .title("Alpha")
///     .description("First entry")
///     .actions(vec![Element::text("Edit")]);
/// assert!(props.card_props.is_none());
/// ```
pub struct ItemProps<R> {
    pub record: R,
    pub index: usize,
    pub record_key: Option<String>,

    pub title: Option<Element>,
    pub sub_title: Option<Element>,
    pub avatar: Option<String>,
    pub description: Option<Element>,
    pub content: Option<Element>,
    pub actions: Option<Vec<Element>>,
    pub extra: Option<Element>,
    pub checkbox: Option<Element>,

    pub loading: bool,
    pub selected: bool,
    pub show_actions: Option<ShowMode>,
    pub show_extra: Option<ShowMode>,
    pub item_type: Option<ItemType>,
    pub is_editable: bool,

    pub expand: Option<bool>,
    pub default_expand: Option<bool>,
    pub on_expand: Option<OnChange<bool>>,
    pub expandable: Option<ExpandableConfig<R>>,
    pub row_support_expand: bool,

    pub card_props: Option<CardProps>,
    pub card_action_props: Option<CardActionPlacement>,

    pub on_row: Option<OnRow<R>>,
    pub item_header_render: Option<ItemRender<R>>,
    pub item_title_render: Option<ItemRender<R>>,

    pub prefix_cls: Option<String>,
    pub class_name: Option<String>,
    pub style: Option<Style>,
}

impl<R> ItemProps<R> {
    pub fn new(record: R, index: usize) -> Self {
        Self {
            record,
            index,
            record_key: None,
            title: None,
            sub_title: None,
            avatar: None,
            description: None,
            content: None,
            actions: None,
            extra: None,
            checkbox: None,
            loading: false,
            selected: false,
            show_actions: None,
            show_extra: None,
            item_type: None,
            is_editable: false,
            expand: None,
            default_expand: None,
            on_expand: None,
            expandable: None,
            row_support_expand: false,
            card_props: None,
            card_action_props: None,
            on_row: None,
            item_header_render: None,
            item_title_render: None,
            prefix_cls: None,
            class_name: None,
            style: None,
        }
    }

    pub fn record_key(mut self, key: impl Into<String>) -> Self {
        self.record_key = Some(key.into());
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

    pub fn avatar(mut self, src: impl Into<String>) -> Self {
        self.avatar = Some(src.into());
        self
    }

    pub fn description(mut self, description: impl Into<Element>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn content(mut self, content: impl Into<Element>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn actions(mut self, actions: Vec<Element>) -> Self {
        self.actions = Some(actions);
        self
    }

    pub fn extra(mut self, extra: impl Into<Element>) -> Self {
        self.extra = Some(extra.into());
        self
    }

    pub fn checkbox(mut self, checkbox: Element) -> Self {
        self.checkbox = Some(checkbox);
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn show_actions(mut self, mode: ShowMode) -> Self {
        self.show_actions = Some(mode);
        self
    }

    pub fn show_extra(mut self, mode: ShowMode) -> Self {
        self.show_extra = Some(mode);
        self
    }

    pub fn item_type(mut self, item_type: ItemType) -> Self {
        self.item_type = Some(item_type);
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.is_editable = editable;
        self
    }

    /// Take control of the expand state with the caller's current value.
    pub fn expand(mut self, expanded: bool) -> Self {
        self.expand = Some(expanded);
        self
    }

    /// Initial expand state when the row manages it itself.
    pub fn default_expand(mut self, expanded: bool) -> Self {
        self.default_expand = Some(expanded);
        self
    }

    pub fn on_expand(mut self, on_expand: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.on_expand = Some(Arc::new(on_expand));
        self
    }

    pub fn expandable(mut self, config: ExpandableConfig<R>) -> Self {
        self.expandable = Some(config);
        self
    }

    pub fn row_support_expand(mut self, supported: bool) -> Self {
        self.row_support_expand = supported;
        self
    }

    /// Switch to the card layout, with `props` overriding derived card props.
    pub fn card_props(mut self, props: CardProps) -> Self {
        self.card_props = Some(props);
        self
    }

    pub fn card_action_props(mut self, placement: CardActionPlacement) -> Self {
        self.card_action_props = Some(placement);
        self
    }

    pub fn on_row(mut self, on_row: impl Fn(&R, usize) -> RowHandlers + Send + Sync + 'static) -> Self {
        self.on_row = Some(Arc::new(on_row));
        self
    }

    pub fn item_header_render(
        mut self,
        render: impl Fn(&R, usize, Option<Element>) -> Result<Rendered, RenderError> + Send + Sync + 'static,
    ) -> Self {
        self.item_header_render = Some(Arc::new(render));
        self
    }

    pub fn item_title_render(
        mut self,
        render: impl Fn(&R, usize, Option<Element>) -> Result<Rendered, RenderError> + Send + Sync + 'static,
    ) -> Self {
        self.item_title_render = Some(Arc::new(render));
        self
    }

    pub fn prefix_cls(mut self, prefix_cls: impl Into<String>) -> Self {
        self.prefix_cls = Some(prefix_cls.into());
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

    /// The expandable config, unless it is absent or has no key set.
    pub fn active_expandable(&self) -> Option<&ExpandableConfig<R>> {
        self.expandable.as_ref().filter(|config| !config.is_empty())
    }

    pub fn is_card(&self) -> bool {
        self.card_props.is_some()
    }
}

impl<R: fmt::Debug> fmt::Debug for ItemProps<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemProps")
            .field("record", &self.record)
            .field("index", &self.index)
            .field("record_key", &self.record_key)
            .field("expand", &self.expand)
            .field("expandable", &self.expandable)
            .field("row_support_expand", &self.row_support_expand)
            .field("card", &self.card_props.is_some())
            .field("card_action_props", &self.card_action_props)
            .field("loading", &self.loading)
            .finish_non_exhaustive()
    }
}
