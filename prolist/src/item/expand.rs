//! The expand/collapse affordance shown in a row's header.

use std::sync::Arc;

use listdom::Element;
use log::debug;

use super::props::{ExpandIcon, ExpandIconContext};
use crate::handler_context::{EventKind, HandlerContext, HandlerRegistry};
use crate::state::MergedSetter;

const EXPANDED_GLYPH: &str = "▼";
const COLLAPSED_GLYPH: &str = "▶";

/// Build the expand icon element for a row.
///
/// The wrapper carries `{prefix}-row-expand-icon` plus an expanded or
/// collapsed modifier; a custom `icon` replaces only the glyph inside it.
pub fn render_expand_icon<R>(
    id: &str,
    prefix_cls: &str,
    icon: Option<&ExpandIcon<R>>,
    expanded: bool,
    record: &R,
) -> Element {
    let glyph = match icon {
        Some(ExpandIcon::Node(node)) => node.clone(),
        Some(ExpandIcon::Render(render)) => render(&ExpandIconContext { expanded, record }),
        None => Element::text(if expanded { EXPANDED_GLYPH } else { COLLAPSED_GLYPH }),
    };

    let state_class = if expanded {
        format!("{prefix_cls}-row-expanded")
    } else {
        format!("{prefix_cls}-row-collapsed")
    };

    Element::box_()
        .id(id)
        .clickable(true)
        .class(format!("{prefix_cls}-row-expand-icon"))
        .class(state_class)
        .child(glyph)
}

/// Register the icon's click handler: toggle, then keep the click away from
/// the row.
pub fn register_expand_toggle(
    registry: &HandlerRegistry,
    id: &str,
    setter: MergedSetter<bool>,
    expanded: bool,
) {
    let icon_id = id.to_string();
    registry.register(
        id,
        EventKind::Click,
        Arc::new(move |cx: &HandlerContext| {
            debug!("{icon_id}: expand toggled to {}", !expanded);
            setter.set(!expanded);
            cx.stop_propagation();
        }),
    );
}
