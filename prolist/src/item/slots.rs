//! Slot resolution: which parts of a row exist for one render.
//!
//! Everything here is a pure function of the props, the current expand
//! state and the list config. Both layouts consume the same [`RowSlots`].

use listdom::{Direction, Element};
use log::trace;

use super::expand::render_expand_icon;
use super::props::{CardActionPlacement, ItemProps, ItemRender, ShowMode};
use crate::class_names::ClassNames;
use crate::config::ListConfig;
use crate::error::RenderError;
use crate::widgets::{Avatar, Meta};

/// The resolved slots of one row render.
///
/// Each node is either present or absent; the flags record the decisions
/// that produced them.
#[derive(Debug, Clone, Default)]
pub struct RowSlots {
    /// Description and detail content may be shown.
    pub need_expanded: bool,
    /// The expand icon is part of the header.
    pub show_expand_icon: bool,

    /// `{prefix}-row`, the stem of every row class.
    pub base_class: String,
    /// Classes of the row container.
    pub row_classes: Vec<String>,
    /// Classes of the card wrapper.
    pub card_wrapper_classes: Vec<String>,

    pub checkbox: Option<Element>,
    pub expand_icon: Option<Element>,
    /// Default title block (title + subtitle), before any override.
    pub title: Option<Element>,
    /// Header content: the meta block after the header override.
    pub header: Option<Element>,
    /// Avatar and title shown inline in a card's title region.
    pub card_title: Option<Element>,
    /// Title override output placed at the top of a card's body.
    pub card_body_title: Option<Element>,
    pub content: Option<Element>,
    pub expanded_detail: Option<Element>,
    /// Whether the content region (content and/or detail) is shown.
    pub show_content_region: bool,
    /// Actions routed to the trailing extra slot.
    pub actions_as_extra: Option<Element>,
    /// Actions routed to the card's actions region.
    pub actions_as_card_actions: Option<Element>,
    pub extra: Option<Element>,
}

/// Stable element ids derived from a row id.
pub fn actions_id(row_id: &str) -> String {
    format!("{row_id}-actions")
}

pub fn expand_icon_id(row_id: &str) -> String {
    format!("{row_id}-expand-icon")
}

fn apply_override<R>(
    render: Option<&ItemRender<R>>,
    props: &ItemProps<R>,
    default: Option<Element>,
) -> Result<Option<Element>, RenderError> {
    match render {
        Some(render) => Ok(render(&props.record, props.index, default.clone())?.resolve(default)),
        None => Ok(default),
    }
}

/// Compute every slot of a row.
///
/// `config` is the effective config (row-level prefix already applied) and
/// `row_id` the id the row container will carry. Fails only when an
/// override callback fails.
pub fn resolve_slots<R>(
    props: &ItemProps<R>,
    expanded: bool,
    config: &ListConfig,
    row_id: &str,
) -> Result<RowSlots, RenderError> {
    let is_card = props.is_card();
    let base = config.row_class();
    let expandable = props.active_expandable();

    // No expand config means nothing could ever reveal hidden content.
    let need_expanded = expanded || expandable.is_none();
    let show_expand_icon = expandable.is_some() && props.row_support_expand;
    trace!("{row_id}: expanded={expanded} need_expanded={need_expanded} card={is_card}");

    // Classes
    let custom_class = props.class_name.clone().filter(|class| *class != base);
    let modifiers = ClassNames::new()
        .add_if(!is_card && props.selected, format!("{base}-selected"))
        .add_if(props.show_actions == Some(ShowMode::Hover), format!("{base}-show-action-hover"))
        .add_opt(props.item_type.map(|t| format!("{base}-type-{}", t.as_str())))
        .add_if(props.is_editable, format!("{base}-editable"))
        .add_if(props.show_extra == Some(ShowMode::Hover), format!("{base}-show-extra-hover"))
        .add(base.as_str())
        .build();
    let row_classes = modifiers
        .into_iter()
        .fold(
            ClassNames::new()
                .add_if(props.checkbox.is_some(), format!("{base}-item-has-checkbox"))
                .add_if(props.avatar.is_some(), format!("{base}-item-has-avatar")),
            |names, class| names.add(class),
        )
        .add_opt(custom_class.clone())
        .build();
    let card_wrapper_classes = ClassNames::new()
        .add(format!("{base}-card"))
        .add_opt(custom_class)
        .build();

    // Header option
    let checkbox = props
        .checkbox
        .clone()
        .map(|checkbox| Element::box_().class(format!("{base}-checkbox")).child(checkbox));
    let expand_icon = match expandable {
        Some(expandable) if show_expand_icon => Some(render_expand_icon(
            &expand_icon_id(row_id),
            &config.prefix_cls,
            expandable.expand_icon.as_ref(),
            expanded,
            &props.record,
        )),
        _ => None,
    };

    // Title and meta
    let title = if props.title.is_some() || props.sub_title.is_some() {
        let title_part = props
            .title
            .clone()
            .map(|title| Element::box_().class(format!("{base}-title")).child(title));
        let sub_title_part = props
            .sub_title
            .clone()
            .map(|sub| Element::box_().class(format!("{base}-subTitle")).child(sub));
        Some(
            Element::box_()
                .direction(Direction::Row)
                .gap(1)
                .class(format!("{base}-header-title"))
                .maybe_child(title_part)
                .maybe_child(sub_title_part),
        )
    } else {
        None
    };

    // One call serves both layouts.
    let title_decision = match &props.item_title_render {
        Some(render) => Some(render(&props.record, props.index, title.clone())?),
        None => None,
    };
    let meta_title = match title_decision.clone() {
        Some(decision) => decision.resolve(title.clone()),
        None => title.clone(),
    };
    let card_body_title = title_decision.and_then(|decision| decision.resolve(title.clone()));

    let description = props
        .description
        .clone()
        .filter(|_| need_expanded)
        .map(|d| Element::box_().class(format!("{base}-description")).child(d));
    let has_meta = meta_title.is_some()
        || props.avatar.is_some()
        || props.sub_title.is_some()
        || props.description.is_some();
    let meta = has_meta.then(|| {
        Meta::new(config.ant_prefix.as_str())
            .avatar(props.avatar.as_ref().map(|src| Avatar::new(src.as_str()).build()))
            .title(meta_title)
            .description(description)
            .build()
    });
    let header = apply_override(props.item_header_render.as_ref(), props, meta)?;

    let card_title = (props.avatar.is_some() || props.title.is_some()).then(|| {
        let avatar = props.avatar.as_ref().map(|src| {
            Avatar::new(src.as_str())
                .size(config.card_avatar_size)
                .class(config.ant_class("list-item-meta-avatar"))
                .build()
        });
        let mut title_span = Element::box_().class(config.ant_class("list-item-meta-title"));
        if let Some(title) = props.title.clone() {
            title_span = title_span.child(title);
        }
        Element::row().gap(1).maybe_child(avatar).child(title_span)
    });

    // Content and detail
    let indent = expandable
        .and_then(|e| e.indent_size)
        .unwrap_or(config.indent_size);
    let expanded_row_dom = expandable
        .and_then(|e| e.expanded_row_render.as_ref())
        .and_then(|render| render(&props.record, props.index, indent, expanded));
    let show_content_region =
        need_expanded && (props.content.is_some() || expanded_row_dom.is_some());

    let content = props.content.clone().filter(|_| need_expanded);
    let expanded_detail = match expandable {
        Some(e) if need_expanded && e.expanded_row_render.is_some() && props.row_support_expand => {
            let class = e
                .expanded_row_class_name
                .as_ref()
                .map(|class_name| class_name(&props.record, props.index, indent));
            Some(
                Element::box_()
                    .class(class.unwrap_or_default())
                    .data("indent", indent.to_string())
                    .maybe_child(expanded_row_dom),
            )
        }
        _ => None,
    };

    // Actions routing
    let placement = props.card_action_props.unwrap_or_default();
    let actions_wrapper = props.actions.as_ref().map(|actions| {
        Element::row()
            .id(actions_id(row_id))
            .gap(1)
            .clickable(true)
            .class(format!("{base}-action"))
            .children(actions.iter().cloned())
    });
    let (actions_as_extra, actions_as_card_actions) = match placement {
        CardActionPlacement::Extra => (actions_wrapper, None),
        CardActionPlacement::Actions => (None, actions_wrapper),
    };

    let extra_class = ClassNames::new()
        .add_if(
            props.show_extra == Some(ShowMode::Hover),
            format!("{}-extra", props.class_name.as_deref().unwrap_or(&base)),
        )
        .build();
    let extra = props
        .extra
        .clone()
        .map(|extra| Element::box_().classes(extra_class).child(extra));

    Ok(RowSlots {
        need_expanded,
        show_expand_icon,
        base_class: base,
        row_classes,
        card_wrapper_classes,
        checkbox,
        expand_icon,
        title,
        header,
        card_title,
        card_body_title,
        content,
        expanded_detail,
        show_content_region,
        actions_as_extra,
        actions_as_card_actions,
        extra,
    })
}
