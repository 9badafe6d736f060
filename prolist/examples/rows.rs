//! Renders a few rows, clicks them, and prints what each render produced.
//!
//! Usage: `cargo run -p prolist --example rows [config.json]`

use std::fs::File;

use listdom::{collect_text, Element};
use prolist::item::expand_icon_id;
use prolist::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

#[derive(Debug, Clone)]
struct Task {
    id: u32,
    name: &'static str,
    notes: &'static str,
}

fn task_props(task: &Task, index: usize) -> ItemProps<Task> {
    ItemProps::new(task.clone(), index)
        .record_key(task.id.to_string())
        .title(task.name)
        .description(task.notes)
        .actions(vec![Element::text("Edit").id(format!("edit-{}", task.id))])
        .row_support_expand(true)
        .expandable(
            ExpandableConfig::new()
                .expand_row_by_click(true)
                .expanded_row_render(|task: &Task, _, indent, _| {
                    Some(Element::text(format!("{:indent$}#{} details", "", task.id, indent = indent as usize)))
                }),
        )
}

fn print_row(label: &str, root: &Element) {
    let layout = root.get_data("layout").map(String::as_str).unwrap_or("?");
    println!("{label:<10} [{layout}] {}", collect_text(root));
}

fn main() {
    let log_file = File::create("prolist-rows.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Trace, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let config = match std::env::args().nth(1) {
        Some(path) => ListConfig::from_path(&path).expect("Failed to load config"),
        None => ListConfig::default(),
    };

    let tasks = [
        Task { id: 1, name: "Write docs", notes: "Cover the expand flow" },
        Task { id: 2, name: "Review", notes: "Second pass on layouts" },
    ];
    let rows: Vec<ProListItem> = tasks.iter().map(|_| ProListItem::new()).collect();
    let registry = HandlerRegistry::new();

    let render_all = |label: &str| -> Vec<Element> {
        registry.clear();
        tasks
            .iter()
            .zip(&rows)
            .enumerate()
            .map(|(index, (task, row))| {
                let root = row
                    .render(&task_props(task, index), &config, &registry)
                    .expect("Failed to render row");
                print_row(label, &root);
                root
            })
            .collect()
    };

    let roots = render_all("initial");

    // Icon click on the first row, plain click on the second.
    registry.click(&roots[0], &expand_icon_id(&roots[0].id));
    registry.click(&roots[1], &roots[1].id);
    let roots = render_all("expanded");

    // Actions never reach the row.
    registry.click(&roots[0], "edit-1");
    render_all("after edit");

    let card = ProListItem::new();
    let props = task_props(&tasks[0], 0)
        .card_props(CardProps::new())
        .card_action_props(CardActionPlacement::Actions);
    let root = card.render(&props, &config, &registry).expect("Failed to render card");
    print_row("card", &root);
}
