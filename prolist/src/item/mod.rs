//! The list row component.
//!
//! A row is rendered from [`ItemProps`] in four steps:
//!
//! 1. the expand state is merged with the caller's `expand`/`on_expand`,
//! 2. [`resolve_slots`] works out which parts exist,
//! 3. [`Layout::select`] picks the plain row or the card,
//! 4. the chosen layout is assembled and its handlers registered.
//!
//! # Example
//!
//! ```
//! use listdom::{find_by_class, Element};
//! use prolist::config::ListConfig;
//! use prolist::handler_context::HandlerRegistry;
//! use prolist::item::{ExpandableConfig, ItemProps, ProListItem};
//!
//! let row = ProListItem::new();
//! let registry = HandlerRegistry::new();
//! let config = ListConfig::default();
//!
//! let props = || {
//!     ItemProps::new(1u32, 0)
//!         .record_key("1")
//!         .title("Alpha")
//!         .description("details")
//!         .row_support_expand(true)
//!         .expandable(ExpandableConfig::new().expanded_row_render(|_, _, _, _| {
//!             Some(Element::text("more"))
//!         }))
//! };
//!
//! let root = row.render(&props(), &config, &registry).unwrap();
//! assert!(find_by_class(&root, "pro-list-row-description").is_none());
//!
//! registry.click(&root, "pro-list-row-1-expand-icon");
//! let root = row.render(&props(), &config, &registry).unwrap();
//! assert!(find_by_class(&root, "pro-list-row-description").is_some());
//! ```

mod expand;
mod layout;
mod props;
mod slots;

use std::fmt;
use std::sync::Arc;

use listdom::Element;
use log::debug;
use uuid::Uuid;

pub use expand::{register_expand_toggle, render_expand_icon};
pub use layout::{compose_card, compose_plain_row, Layout};
pub use props::{
    CardActionPlacement, ExpandIcon, ExpandIconContext, ExpandableConfig, ExpandedRowClassName,
    ExpandedRowRender, ItemProps, ItemRender, ItemType, OnRow, Rendered, RowHandlers, ShowMode,
};
pub use slots::{actions_id, expand_icon_id, resolve_slots, RowSlots};

use crate::config::ListConfig;
use crate::error::RenderError;
use crate::handler_context::{EventKind, Handler, HandlerContext, HandlerRegistry};
use crate::state::{MergedSetter, MergedState};

/// Unique identifier for a row instance.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ItemInstanceId(Uuid);

impl ItemInstanceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemInstanceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemInstanceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One mounted row.
///
/// Holds the only state that outlives a render: the expand flag. Keep the
/// same `ProListItem` for as long as the row is on screen; dropping it is
/// what resets the flag. Separate instances never share state.
#[derive(Debug, Clone, Default)]
pub struct ProListItem {
    id: ItemInstanceId,
    expanded: MergedState<bool>,
}

impl ProListItem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> ItemInstanceId {
        self.id
    }

    /// The expand cell, for hosts that want to watch its dirty flag.
    pub fn expand_state(&self) -> &MergedState<bool> {
        &self.expanded
    }

    /// Whether an expand toggle is waiting for the next render.
    pub fn needs_render(&self) -> bool {
        self.expanded.is_dirty()
    }

    /// Id of the row's outermost element.
    ///
    /// Based on the record key when there is one, else on the instance id.
    pub fn row_id<R>(&self, props: &ItemProps<R>, config: &ListConfig) -> String {
        match &props.record_key {
            Some(key) => format!("{}-{key}", config.row_class()),
            None => format!("{}-{}", config.row_class(), self.id),
        }
    }

    /// Render the row and register its handlers.
    ///
    /// Handlers left in `registry` by this row's previous render are dropped
    /// first, so the same registry can serve every render of the row.
    ///
    /// Only override callbacks can make this fail; their errors are
    /// returned as-is.
    pub fn render<R>(
        &self,
        props: &ItemProps<R>,
        config: &ListConfig,
        registry: &HandlerRegistry,
    ) -> Result<Element, RenderError> {
        let config = match &props.prefix_cls {
            Some(prefix) => config.with_prefix(prefix.as_str()),
            None => config.clone(),
        };
        let row_id = self.row_id(props, &config);

        let merged = self.expanded.merge(
            props.expand,
            props.default_expand.unwrap_or(false),
            props.on_expand.clone(),
        );
        self.expanded.clear_dirty();

        let slots = resolve_slots(props, merged.value, &config, &row_id)?;

        for id in [row_id.clone(), actions_id(&row_id), expand_icon_id(&row_id)] {
            registry.remove_element(&id);
        }
        if slots.actions_as_extra.is_some() || slots.actions_as_card_actions.is_some() {
            register_stop_propagation(registry, &actions_id(&row_id));
        }
        if slots.show_expand_icon {
            register_expand_toggle(
                registry,
                &expand_icon_id(&row_id),
                merged.setter.clone(),
                merged.value,
            );
        }

        let layout = Layout::select(props);
        debug!("{row_id}: rendering {} layout (expanded={})", layout.as_str(), merged.value);

        let root = match layout {
            Layout::PlainRow => {
                register_row_handlers(registry, props, &row_id, merged.setter, merged.value);
                compose_plain_row(slots, &row_id, props.loading, &config)
            }
            Layout::Card => compose_card(slots, props, &row_id, &config),
        };

        Ok(root)
    }
}

fn register_stop_propagation(registry: &HandlerRegistry, id: &str) {
    registry.register(id, EventKind::Click, Arc::new(|cx: &HandlerContext| cx.stop_propagation()));
}

/// Attach the caller's `on_row` bundle to the row container.
///
/// The click handler is merged: the caller's runs first, then the expand
/// toggle when the row expands on click.
fn register_row_handlers<R>(
    registry: &HandlerRegistry,
    props: &ItemProps<R>,
    row_id: &str,
    setter: MergedSetter<bool>,
    expanded: bool,
) {
    let handlers = props
        .on_row
        .as_ref()
        .map(|on_row| on_row(&props.record, props.index))
        .unwrap_or_default();

    for (kind, handler) in handlers.non_click() {
        registry.register(row_id, kind, Arc::clone(handler));
    }

    let expand_by_click = props
        .active_expandable()
        .and_then(|e| e.expand_row_by_click)
        .unwrap_or(false);
    if handlers.on_click.is_none() && !expand_by_click {
        return;
    }

    let caller: Option<Handler> = handlers.on_click;
    let id = row_id.to_string();
    registry.register(
        row_id,
        EventKind::Click,
        Arc::new(move |cx: &HandlerContext| {
            if let Some(caller) = &caller {
                caller(cx);
            }
            if expand_by_click {
                debug!("{id}: row click toggles expand to {}", !expanded);
                setter.set(!expanded);
            }
        }),
    );
}
