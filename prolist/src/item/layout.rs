//! Assembly of the two row layouts from resolved slots.

use listdom::{Direction, Element, Style};

use super::props::ItemProps;
use super::slots::RowSlots;
use crate::config::ListConfig;
use crate::widgets::{Card, ListItemContainer, Skeleton};

/// Which composition a row render produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    PlainRow,
    Card,
}

impl Layout {
    /// The one predicate that picks the layout: card props present or not.
    pub fn select<R>(props: &ItemProps<R>) -> Self {
        if props.is_card() { Layout::Card } else { Layout::PlainRow }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Layout::PlainRow => "plain-row",
            Layout::Card => "card",
        }
    }
}

fn skeleton(config: &ListConfig, loading: bool) -> Skeleton {
    Skeleton::new()
        .prefix(config.ant_prefix.as_str())
        .avatar(true)
        .active(true)
        .rows(config.skeleton_rows)
        .loading(loading)
}

/// Plain row: header and content region inside a skeleton, inside the list
/// item container. Actions routed to extra come first in the trailing slot.
pub fn compose_plain_row(
    slots: RowSlots,
    row_id: &str,
    loading: bool,
    config: &ListConfig,
) -> Element {
    let base = &slots.base_class;

    let header_option = Element::row()
        .class(format!("{base}-header-option"))
        .maybe_child(slots.checkbox)
        .maybe_child(slots.expand_icon);

    let header = Element::row()
        .gap(1)
        .class(format!("{base}-header"))
        .child(header_option)
        .maybe_child(slots.header);

    let content_region = slots.show_content_region.then(|| {
        Element::col()
            .class(format!("{base}-content"))
            .maybe_child(slots.content)
            .maybe_child(slots.expanded_detail)
    });

    let mut parts = vec![header];
    parts.extend(content_region);
    let body = skeleton(config, loading).children(parts).build();

    ListItemContainer::new()
        .id(row_id)
        .classes(slots.row_classes)
        .child(body)
        .extra(slots.actions_as_extra)
        .extra(slots.extra)
        .build()
        .data("layout", Layout::PlainRow.as_str())
}

/// Card: card title, extra and actions regions filled from the slots, the
/// caller's card props applied on top, and the whole thing wrapped in an
/// outer container carrying the card classes and inline style.
pub fn compose_card<R>(
    slots: RowSlots,
    props: &ItemProps<R>,
    row_id: &str,
    config: &ListConfig,
) -> Element {
    let base = &slots.base_class;

    let body_header = Element::col()
        .class(format!("{base}-header"))
        .maybe_child(slots.card_body_title)
        .maybe_child(props.content.clone());

    let body = skeleton(config, props.loading).child(body_header).build();

    let derived = Card::new(config.ant_prefix.as_str())
        .id(format!("{row_id}-card"))
        .bordered(true)
        .hoverable(true)
        .loading(props.loading)
        .title(slots.card_title)
        .sub_title(props.sub_title.clone())
        .extra(slots.actions_as_extra.into_iter().chain(slots.extra).collect())
        .actions(slots.actions_as_card_actions.into_iter().collect())
        .child(body);

    let card = match props.card_props.clone() {
        Some(overrides) => overrides.apply(derived),
        None => derived,
    };

    Element::box_()
        .id(row_id)
        .direction(Direction::Column)
        .classes(slots.card_wrapper_classes)
        .style(props.style.clone().unwrap_or_else(Style::new))
        .data("layout", Layout::Card.as_str())
        .child(card.build())
}
