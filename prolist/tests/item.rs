//! Tests for row rendering: layout selection, expand state and slot routing.

use std::sync::{Arc, Mutex};

use listdom::{collect_text, find_all_by_class, find_by_class, find_element, Element};
use prolist::item::{actions_id, expand_icon_id};
use prolist::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Record {
    id: u32,
}

fn init_logging() {
    let _ = simplelog::TestLogger::init(simplelog::LevelFilter::Trace, simplelog::Config::default());
}

fn render(row: &ProListItem, props: &ItemProps<Record>, registry: &HandlerRegistry) -> Element {
    row.render(props, &ListConfig::default(), registry).unwrap()
}

fn layout_of(root: &Element) -> &str {
    root.get_data("layout").map(String::as_str).unwrap_or("")
}

fn detail_config() -> ExpandableConfig<Record> {
    ExpandableConfig::new()
        .expanded_row_render(|record: &Record, _, _, _| Some(Element::text(format!("Detail {}", record.id))))
}

fn collapsible_props() -> ItemProps<Record> {
    ItemProps::new(Record { id: 1 }, 0)
        .record_key("1")
        .title("Alpha")
        .description("Described")
        .content("Body")
        .row_support_expand(true)
        .expandable(detail_config())
}

fn recorder<T: Send + 'static>() -> Arc<Mutex<Vec<T>>> {
    Arc::new(Mutex::new(Vec::new()))
}

// ============================================================================
// Layout Selection Tests
// ============================================================================

#[test]
fn test_without_card_props_renders_plain_row() {
    init_logging();
    let registry = HandlerRegistry::new();
    let root = render(&ProListItem::new(), &ItemProps::new(Record { id: 1 }, 0).title("Alpha"), &registry);

    assert_eq!(layout_of(&root), "plain-row");
    assert_eq!(root.get_data("widget").map(String::as_str), Some("list-item"));
    assert!(find_by_class(&root, "ant-pro-card").is_none());
    assert!(!root.has_class("pro-list-row-card"));
}

#[test]
fn test_with_card_props_renders_card() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .title("Alpha")
        .card_props(CardProps::new());
    let root = render(&ProListItem::new(), &props, &registry);

    assert_eq!(layout_of(&root), "card");
    assert!(root.has_class("pro-list-row-card"));
    let card = find_by_class(&root, "ant-pro-card").unwrap();
    assert!(card.has_class("ant-pro-card-bordered"));
    assert!(card.has_class("ant-pro-card-hoverable"));
    assert!(root.get_data("widget").is_none());
    assert_eq!(Layout::select(&props), Layout::Card);
}

// ============================================================================
// Plain Row Composition Tests
// ============================================================================

#[test]
fn test_plain_row_title_and_actions_in_extra() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .record_key("1")
        .title("Alpha")
        .content("Body")
        .actions(vec![Element::text("Edit")]);
    let root = render(&ProListItem::new(), &props, &registry);

    let title = find_by_class(&root, "pro-list-row-title").unwrap();
    assert_eq!(collect_text(title), "Alpha");

    let extra = root.slot_children("extra");
    assert_eq!(extra.len(), 1);
    assert_eq!(extra[0].id, actions_id("pro-list-row-1"));
    assert_eq!(collect_text(&extra[0]), "Edit");
    assert!(!root.has_slot("actions"));

    assert!(find_by_class(&root, "pro-list-row-expand-icon").is_none());
    let content = find_by_class(&root, "pro-list-row-content").unwrap();
    assert_eq!(collect_text(content), "Body");
}

#[test]
fn test_plain_row_extra_follows_actions() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .actions(vec![Element::text("Edit")])
        .extra("Trailing");
    let root = render(&ProListItem::new(), &props, &registry);

    let extra = root.slot_children("extra");
    assert_eq!(extra.len(), 2);
    assert_eq!(collect_text(&extra[0]), "Edit");
    assert_eq!(collect_text(&extra[1]), "Trailing");
}

#[test]
fn test_header_order_checkbox_then_icon() {
    let registry = HandlerRegistry::new();
    let props = collapsible_props().checkbox(Element::text("[ ]").id("check"));
    let root = render(&ProListItem::new(), &props, &registry);

    let option = find_by_class(&root, "pro-list-row-header-option").unwrap();
    let children = option.content.children();
    assert_eq!(children.len(), 2);
    assert!(children[0].has_class("pro-list-row-checkbox"));
    assert!(children[1].has_class("pro-list-row-expand-icon"));
    assert!(root.has_class("pro-list-row-item-has-checkbox"));
}

#[test]
fn test_avatar_goes_into_meta() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0).avatar("AB");
    let root = render(&ProListItem::new(), &props, &registry);

    assert!(root.has_class("pro-list-row-item-has-avatar"));
    let avatar = find_by_class(&root, "ant-list-item-meta-avatar").unwrap();
    assert_eq!(collect_text(avatar), "AB");
}

#[test]
fn test_loading_swaps_body_for_placeholder() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .title("Alpha")
        .actions(vec![Element::text("Edit")])
        .loading(true);
    let root = render(&ProListItem::new(), &props, &registry);

    assert!(find_by_class(&root, "ant-skeleton").is_some());
    assert!(find_by_class(&root, "ant-skeleton-avatar").is_some());
    assert_eq!(find_all_by_class(&root, "ant-skeleton-line").len(), 3);
    assert!(find_by_class(&root, "pro-list-row-title").is_none());
    // Slot computation still ran.
    assert_eq!(collect_text(&root.slot_children("extra")[0]), "Edit");
}

// ============================================================================
// Expand State Tests
// ============================================================================

#[test]
fn test_uncontrolled_starts_collapsed_and_toggles() {
    init_logging();
    let row = ProListItem::new();
    let registry = HandlerRegistry::new();

    let root = render(&row, &collapsible_props(), &registry);
    assert!(find_by_class(&root, "pro-list-row-description").is_none());
    assert!(find_by_class(&root, "pro-list-row-content").is_none());
    assert!(!collect_text(&root).contains("Detail"));
    assert!(find_by_class(&root, "pro-list-row-collapsed").is_some());

    let icon = expand_icon_id("pro-list-row-1");
    assert_eq!(registry.click(&root, &icon), EventResult::Consumed);
    assert!(row.needs_render());

    let root = render(&row, &collapsible_props(), &registry);
    assert!(!row.needs_render());
    let description = find_by_class(&root, "pro-list-row-description").unwrap();
    assert_eq!(collect_text(description), "Described");
    let content = find_by_class(&root, "pro-list-row-content").unwrap();
    assert_eq!(collect_text(content), "Body Detail 1");
    assert!(find_by_class(&root, "pro-list-row-expanded").is_some());

    registry.click(&root, &icon);
    let root = render(&row, &collapsible_props(), &registry);
    assert!(find_by_class(&root, "pro-list-row-content").is_none());
}

#[test]
fn test_default_expand_seeds_uncontrolled_state() {
    let registry = HandlerRegistry::new();
    let root = render(&ProListItem::new(), &collapsible_props().default_expand(true), &registry);
    assert!(find_by_class(&root, "pro-list-row-description").is_some());
}

#[test]
fn test_controlled_value_always_wins() {
    let row = ProListItem::new();
    let registry = HandlerRegistry::new();
    let calls = recorder::<bool>();
    let sink = Arc::clone(&calls);
    let props = || {
        let sink = Arc::clone(&sink);
        collapsible_props()
            .expand(false)
            .on_expand(move |v| sink.lock().unwrap().push(v))
    };

    let root = render(&row, &props(), &registry);
    registry.click(&root, &expand_icon_id("pro-list-row-1"));
    assert_eq!(*calls.lock().unwrap(), vec![true]);
    assert!(!row.needs_render());

    // Caller did not update its value: still collapsed.
    let root = render(&row, &props(), &registry);
    assert!(find_by_class(&root, "pro-list-row-description").is_none());

    // Caller flips its value.
    let root = render(&row, &props().expand(true), &registry);
    assert!(find_by_class(&root, "pro-list-row-description").is_some());
    registry.click(&root, &expand_icon_id("pro-list-row-1"));
    assert_eq!(*calls.lock().unwrap(), vec![true, false]);
}

#[test]
fn test_controlled_value_ignores_prior_toggles() {
    let row = ProListItem::new();
    let registry = HandlerRegistry::new();

    let root = render(&row, &collapsible_props(), &registry);
    registry.click(&root, &expand_icon_id("pro-list-row-1"));
    assert_eq!(row.expand_state().peek(), Some(true));

    let root = render(&row, &collapsible_props().expand(false), &registry);
    assert!(find_by_class(&root, "pro-list-row-content").is_none());
}

#[test]
fn test_releasing_control_resets_expand_state() {
    let row = ProListItem::new();
    let registry = HandlerRegistry::new();

    let root = render(&row, &collapsible_props().expand(true), &registry);
    assert!(find_by_class(&root, "pro-list-row-description").is_some());

    // Caller drops its value: the row is collapsed again, not left open.
    let root = render(&row, &collapsible_props(), &registry);
    assert!(find_by_class(&root, "pro-list-row-description").is_none());
    assert_eq!(row.expand_state().peek(), Some(false));

    // And it toggles locally from there.
    registry.click(&root, &expand_icon_id("pro-list-row-1"));
    let root = render(&row, &collapsible_props(), &registry);
    assert!(find_by_class(&root, "pro-list-row-description").is_some());
}

#[test]
fn test_releasing_control_restarts_from_default_expand() {
    let row = ProListItem::new();
    let registry = HandlerRegistry::new();

    render(&row, &collapsible_props().expand(false).default_expand(true), &registry);
    let root = render(&row, &collapsible_props().default_expand(true), &registry);
    assert!(find_by_class(&root, "pro-list-row-description").is_some());
}

#[test]
fn test_uncontrolled_toggle_still_notifies() {
    let row = ProListItem::new();
    let registry = HandlerRegistry::new();
    let calls = recorder::<bool>();
    let sink = Arc::clone(&calls);
    let props = collapsible_props().on_expand(move |v| sink.lock().unwrap().push(v));

    let root = render(&row, &props, &registry);
    registry.click(&root, &expand_icon_id("pro-list-row-1"));
    assert_eq!(*calls.lock().unwrap(), vec![true]);
    assert_eq!(row.expand_state().peek(), Some(true));
}

#[test]
fn test_empty_expandable_always_shows_content() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .description("Described")
        .content("Body")
        .row_support_expand(true)
        .expandable(ExpandableConfig::new());
    let root = render(&ProListItem::new(), &props, &registry);

    assert!(find_by_class(&root, "pro-list-row-expand-icon").is_none());
    assert!(find_by_class(&root, "pro-list-row-description").is_some());
    assert!(find_by_class(&root, "pro-list-row-content").is_some());
}

#[test]
fn test_expandable_without_row_support_hides_icon_and_detail() {
    let registry = HandlerRegistry::new();
    let row = ProListItem::new();
    let props = collapsible_props().row_support_expand(false).default_expand(true);
    let root = render(&row, &props, &registry);

    assert!(find_by_class(&root, "pro-list-row-expand-icon").is_none());
    let content = find_by_class(&root, "pro-list-row-content").unwrap();
    // Content shows, the detail wrapper does not.
    assert_eq!(collect_text(content), "Body");
}

#[test]
fn test_detail_wrapper_class_and_indent() {
    let registry = HandlerRegistry::new();
    let expandable = ExpandableConfig::new()
        .indent_size(4)
        .expanded_row_render(|_: &Record, _, indent, expanded| {
            Some(Element::text(format!("indent {indent} expanded {expanded}")))
        })
        .expanded_row_class_name(|record: &Record, index, indent| {
            format!("detail-{}-{index}-{indent}", record.id)
        });
    let props = ItemProps::new(Record { id: 7 }, 2)
        .row_support_expand(true)
        .default_expand(true)
        .expandable(expandable);
    let root = render(&ProListItem::new(), &props, &registry);

    let detail = find_by_class(&root, "detail-7-2-4").unwrap();
    assert_eq!(collect_text(detail), "indent 4 expanded true");
}

#[test]
fn test_custom_expand_icon() {
    let registry = HandlerRegistry::new();
    let expandable = detail_config().expand_icon(ExpandIcon::Node(Element::text("+")));
    let props = ItemProps::new(Record { id: 1 }, 0)
        .row_support_expand(true)
        .expandable(expandable);
    let root = render(&ProListItem::new(), &props, &registry);

    let icon = find_by_class(&root, "pro-list-row-expand-icon").unwrap();
    assert_eq!(collect_text(icon), "+");
}

#[test]
fn test_instances_are_independent() {
    let registry = HandlerRegistry::new();
    let first = ProListItem::new();
    let second = ProListItem::new();
    let second_props = || collapsible_props().record_key("2");

    let root = render(&first, &collapsible_props(), &registry);
    render(&second, &second_props(), &registry);
    registry.click(&root, &expand_icon_id("pro-list-row-1"));

    let root = render(&second, &second_props(), &registry);
    assert!(find_by_class(&root, "pro-list-row-description").is_none());
    assert_ne!(first.id(), second.id());
}

// ============================================================================
// Event Propagation Tests
// ============================================================================

#[test]
fn test_row_click_runs_caller_then_toggles() {
    let row = ProListItem::new();
    let registry = HandlerRegistry::new();
    let log = recorder::<String>();
    let caller_log = Arc::clone(&log);
    let expand_log = Arc::clone(&log);
    let props = collapsible_props()
        .expandable(detail_config().expand_row_by_click(true))
        .on_expand(move |v| expand_log.lock().unwrap().push(format!("expand {v}")))
        .on_row(move |record: &Record, index| {
            let caller_log = Arc::clone(&caller_log);
            let tag = format!("row {} at {index}", record.id);
            RowHandlers::new().on_click(Arc::new(move |_: &HandlerContext| {
                caller_log.lock().unwrap().push(tag.clone());
            }))
        });

    let root = render(&row, &props, &registry);
    let title = find_by_class(&root, "pro-list-row-title").unwrap().id.clone();
    registry.click(&root, &title);

    assert_eq!(*log.lock().unwrap(), vec!["row 1 at 0", "expand true"]);
    assert_eq!(row.expand_state().peek(), Some(true));
}

#[test]
fn test_row_click_without_expand_by_click_leaves_state() {
    let row = ProListItem::new();
    let registry = HandlerRegistry::new();
    let clicks = recorder::<u32>();
    let sink = Arc::clone(&clicks);
    let props = collapsible_props().on_row(move |record: &Record, _| {
        let sink = Arc::clone(&sink);
        let id = record.id;
        RowHandlers::new().on_click(Arc::new(move |_: &HandlerContext| sink.lock().unwrap().push(id)))
    });

    let root = render(&row, &props, &registry);
    registry.click(&root, "pro-list-row-1");
    assert_eq!(*clicks.lock().unwrap(), vec![1]);
    assert_eq!(row.expand_state().peek(), Some(false));
}

#[test]
fn test_action_click_does_not_reach_row() {
    let row = ProListItem::new();
    let registry = HandlerRegistry::new();
    let clicks = recorder::<u32>();
    let sink = Arc::clone(&clicks);
    let props = collapsible_props()
        .expandable(detail_config().expand_row_by_click(true))
        .actions(vec![Element::text("Edit").id("edit-button").clickable(true)])
        .on_row(move |_: &Record, _| {
            let sink = Arc::clone(&sink);
            RowHandlers::new().on_click(Arc::new(move |_: &HandlerContext| sink.lock().unwrap().push(1)))
        });

    let root = render(&row, &props, &registry);
    assert!(find_element(&root, "edit-button").is_some());
    registry.click(&root, "edit-button");

    assert!(clicks.lock().unwrap().is_empty());
    assert_eq!(row.expand_state().peek(), Some(false));
}

#[test]
fn test_expand_icon_click_does_not_reach_row() {
    let row = ProListItem::new();
    let registry = HandlerRegistry::new();
    let clicks = recorder::<u32>();
    let sink = Arc::clone(&clicks);
    let props = collapsible_props().on_row(move |_: &Record, _| {
        let sink = Arc::clone(&sink);
        RowHandlers::new().on_click(Arc::new(move |_: &HandlerContext| sink.lock().unwrap().push(1)))
    });

    let root = render(&row, &props, &registry);
    registry.click(&root, &expand_icon_id("pro-list-row-1"));

    assert!(clicks.lock().unwrap().is_empty());
    assert_eq!(row.expand_state().peek(), Some(true));
}

#[test]
fn test_rerender_without_on_row_drops_its_handler() {
    let row = ProListItem::new();
    let registry = HandlerRegistry::new();
    let clicks = recorder::<u32>();
    let sink = Arc::clone(&clicks);
    let with_handler = collapsible_props().on_row(move |_: &Record, _| {
        let sink = Arc::clone(&sink);
        RowHandlers::new().on_click(Arc::new(move |_: &HandlerContext| sink.lock().unwrap().push(1)))
    });

    render(&row, &with_handler, &registry);
    let root = render(&row, &collapsible_props(), &registry);

    assert_eq!(registry.click(&root, "pro-list-row-1"), EventResult::Ignored);
    assert!(clicks.lock().unwrap().is_empty());
}

#[test]
fn test_switch_to_card_drops_row_click_toggle() {
    let row = ProListItem::new();
    let registry = HandlerRegistry::new();
    let props = || collapsible_props().expandable(detail_config().expand_row_by_click(true));

    render(&row, &props(), &registry);
    let root = render(&row, &props().card_props(CardProps::new()), &registry);

    assert_eq!(root.id, "pro-list-row-1");
    assert_eq!(registry.click(&root, "pro-list-row-1"), EventResult::Ignored);
    assert_eq!(row.expand_state().peek(), Some(false));
}

#[test]
fn test_dropping_actions_drops_their_stop_handler() {
    let row = ProListItem::new();
    let registry = HandlerRegistry::new();

    render(&row, &collapsible_props().actions(vec![Element::text("Edit")]), &registry);
    assert!(registry.get(&actions_id("pro-list-row-1"), EventKind::Click).is_some());

    render(&row, &collapsible_props(), &registry);
    assert!(registry.get(&actions_id("pro-list-row-1"), EventKind::Click).is_none());
}

#[test]
fn test_on_row_other_events_are_attached() {
    let registry = HandlerRegistry::new();
    let hovered = recorder::<&'static str>();
    let sink = Arc::clone(&hovered);
    let props = ItemProps::new(Record { id: 1 }, 0)
        .record_key("1")
        .on_row(move |_: &Record, _| {
            let sink = Arc::clone(&sink);
            RowHandlers::new().on_mouse_enter(Arc::new(move |_: &HandlerContext| {
                sink.lock().unwrap().push("enter")
            }))
        });

    let root = render(&ProListItem::new(), &props, &registry);
    let result = registry.dispatch(&root, "pro-list-row-1", EventKind::MouseEnter);
    assert!(result.is_handled());
    assert_eq!(*hovered.lock().unwrap(), vec!["enter"]);
    assert_eq!(registry.click(&root, "pro-list-row-1"), EventResult::Ignored);
}

// ============================================================================
// Override Callback Tests
// ============================================================================

#[test]
fn test_title_override_suppresses_title() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .title("Alpha")
        .item_title_render(|_, _, default| {
            assert!(default.is_some());
            Ok(Rendered::Suppressed)
        });
    let root = render(&ProListItem::new(), &props, &registry);

    assert!(find_by_class(&root, "pro-list-row-header-title").is_none());
    assert!(!collect_text(&root).contains("Alpha"));
}

#[test]
fn test_title_override_default_keeps_title() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .title("Alpha")
        .item_title_render(|_, _, _| Ok(Rendered::Default));
    let root = render(&ProListItem::new(), &props, &registry);
    assert!(find_by_class(&root, "pro-list-row-header-title").is_some());
}

#[test]
fn test_title_override_replaces_title() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 3 }, 5)
        .title("Alpha")
        .item_title_render(|record: &Record, index, _| {
            Ok(Rendered::Node(Element::text(format!("#{} at {index}", record.id))))
        });
    let root = render(&ProListItem::new(), &props, &registry);

    let title = find_by_class(&root, "ant-list-item-meta-title").unwrap();
    assert_eq!(collect_text(title), "#3 at 5");
}

#[test]
fn test_header_override_wraps_meta() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .title("Alpha")
        .item_header_render(|_, _, default| {
            let meta = default.expect("meta present");
            Ok(Rendered::Node(Element::col().class("custom-header").child(meta)))
        });
    let root = render(&ProListItem::new(), &props, &registry);

    let header = find_by_class(&root, "custom-header").unwrap();
    assert!(find_by_class(header, "ant-list-item-meta").is_some());
    assert_eq!(collect_text(header), "Alpha");
}

#[test]
fn test_header_override_gets_none_without_meta() {
    let registry = HandlerRegistry::new();
    let seen = recorder::<bool>();
    let sink = Arc::clone(&seen);
    let props = ItemProps::new(Record { id: 1 }, 0).item_header_render(move |_, _, default| {
        sink.lock().unwrap().push(default.is_some());
        Ok(Rendered::Default)
    });
    render(&ProListItem::new(), &props, &registry);
    assert_eq!(*seen.lock().unwrap(), vec![false]);
}

#[test]
fn test_override_failure_propagates() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .title("Alpha")
        .item_title_render(|_, _, _| Err(RenderError::callback("item_title_render", "boom")));
    let err = ProListItem::new()
        .render(&props, &ListConfig::default(), &registry)
        .unwrap_err();

    assert_eq!(err, RenderError::callback("item_title_render", "boom"));
    assert_eq!(err.to_string(), "item_title_render failed: boom");
}

// ============================================================================
// Card Layout Tests
// ============================================================================

#[test]
fn test_card_actions_routed_to_card_actions() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .actions(vec![Element::text("Edit")])
        .card_action_props(CardActionPlacement::Actions)
        .card_props(CardProps::new());
    let root = render(&ProListItem::new(), &props, &registry);

    let card = find_by_class(&root, "ant-pro-card").unwrap();
    assert_eq!(collect_text(&card.slot_children("actions")[0]), "Edit");
    assert!(!card.has_slot("extra"));
}

#[test]
fn test_card_actions_default_to_extra() {
    for placement in [None, Some(CardActionPlacement::Extra)] {
        let registry = HandlerRegistry::new();
        let mut props = ItemProps::new(Record { id: 1 }, 0)
            .actions(vec![Element::text("Edit")])
            .card_props(CardProps::new());
        props.card_action_props = placement;
        let root = render(&ProListItem::new(), &props, &registry);

        let card = find_by_class(&root, "ant-pro-card").unwrap();
        assert_eq!(collect_text(&card.slot_children("extra")[0]), "Edit");
        assert!(!card.has_slot("actions"));
    }
}

#[test]
fn test_card_placement_without_card_drops_actions() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .title("Alpha")
        .actions(vec![Element::text("Edit")])
        .card_action_props(CardActionPlacement::Actions);
    let root = render(&ProListItem::new(), &props, &registry);

    assert_eq!(layout_of(&root), "plain-row");
    assert!(!collect_text(&root).contains("Edit"));
    assert!(!root.has_slot("extra"));
}

#[test]
fn test_card_title_and_body() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .title("Alpha")
        .sub_title("Beta")
        .avatar("AB")
        .content("Body")
        .card_props(CardProps::new());
    let root = render(&ProListItem::new(), &props, &registry);

    let card = find_by_class(&root, "ant-pro-card").unwrap();
    let title = &card.slot_children("title")[0];
    assert_eq!(collect_text(title), "AB Alpha");
    let avatar = find_by_class(title, "ant-list-item-meta-avatar").unwrap();
    assert_eq!(avatar.get_data("size").map(String::as_str), Some("22"));
    assert_eq!(collect_text(&card.slot_children("sub_title")[0]), "Beta");

    let body = find_by_class(card, "pro-list-row-header").unwrap();
    assert_eq!(collect_text(body), "Body");
}

#[test]
fn test_card_body_shows_title_override() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .title("Alpha")
        .content("Body")
        .item_title_render(|_, _, _| Ok(Rendered::Node(Element::text("Custom"))))
        .card_props(CardProps::new());
    let root = render(&ProListItem::new(), &props, &registry);

    let body = find_by_class(&root, "pro-list-row-header").unwrap();
    assert_eq!(collect_text(body), "Custom Body");
}

#[test]
fn test_card_props_override_derived() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .title("Alpha")
        .actions(vec![Element::text("Edit")])
        .card_props(CardProps::new().bordered(false).title("Replaced").extra(Vec::new()));
    let root = render(&ProListItem::new(), &props, &registry);

    let card = find_by_class(&root, "ant-pro-card").unwrap();
    assert!(!card.has_class("ant-pro-card-bordered"));
    assert!(card.has_class("ant-pro-card-hoverable"));
    assert_eq!(collect_text(&card.slot_children("title")[0]), "Replaced");
    assert!(!card.has_slot("extra"));
}

#[test]
fn test_card_wrapper_style_and_class() {
    let registry = HandlerRegistry::new();
    let style = Style::new().width(40);
    let props = ItemProps::new(Record { id: 1 }, 0)
        .class_name("featured")
        .style(style.clone())
        .card_props(CardProps::new());
    let root = render(&ProListItem::new(), &props, &registry);

    assert!(root.has_class("pro-list-row-card"));
    assert!(root.has_class("featured"));
    assert_eq!(root.style, style);
}

#[test]
fn test_card_action_click_stops_at_wrapper() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .record_key("1")
        .actions(vec![Element::text("Edit").id("edit-button")])
        .card_action_props(CardActionPlacement::Actions)
        .card_props(CardProps::new());
    let root = render(&ProListItem::new(), &props, &registry);

    assert!(registry.get(&actions_id("pro-list-row-1"), EventKind::Click).is_some());
    assert_eq!(registry.click(&root, "edit-button"), EventResult::Consumed);
}

#[test]
fn test_card_loading_marks_card_and_swaps_body() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .content("Body")
        .loading(true)
        .card_props(CardProps::new());
    let root = render(&ProListItem::new(), &props, &registry);

    let card = find_by_class(&root, "ant-pro-card").unwrap();
    assert!(card.has_class("ant-pro-card-loading"));
    assert!(find_by_class(card, "ant-skeleton").is_some());
    assert!(!collect_text(card).contains("Body"));
}

// ============================================================================
// Class Name Tests
// ============================================================================

#[test]
fn test_prefix_override_changes_classes_and_ids() {
    let registry = HandlerRegistry::new();
    let props = ItemProps::new(Record { id: 1 }, 0)
        .record_key("1")
        .title("Alpha")
        .prefix_cls("acme");
    let root = render(&ProListItem::new(), &props, &registry);

    assert_eq!(root.id, "acme-row-1");
    assert!(root.has_class("acme-row"));
    assert!(find_by_class(&root, "acme-row-title").is_some());
}

#[test]
fn test_row_id_falls_back_to_instance() {
    let registry = HandlerRegistry::new();
    let row = ProListItem::new();
    let root = render(&row, &ItemProps::new(Record { id: 1 }, 0), &registry);
    assert_eq!(root.id, format!("pro-list-row-{}", row.id()));
}
