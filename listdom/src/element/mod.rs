mod content;
mod node;

pub use content::Content;
pub use node::Element;

/// Find an element by ID in the tree, slots included.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id == id {
        return Some(root);
    }

    root.descendants().find_map(|child| find_element(child, id))
}

/// Find the first element (depth first) carrying the given class.
pub fn find_by_class<'a>(root: &'a Element, class: &str) -> Option<&'a Element> {
    if root.has_class(class) {
        return Some(root);
    }

    root.descendants().find_map(|child| find_by_class(child, class))
}

/// Find every element carrying the given class, in depth-first order.
pub fn find_all_by_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    let mut found = Vec::new();
    collect_by_class(root, class, &mut found);
    found
}

fn collect_by_class<'a>(element: &'a Element, class: &str, found: &mut Vec<&'a Element>) {
    if element.has_class(class) {
        found.push(element);
    }
    for child in element.descendants() {
        collect_by_class(child, class, found);
    }
}

/// IDs of the elements from `root` down to `target`, both inclusive.
///
/// Returns an empty list when the target is not in the tree. Event dispatch
/// walks this path backwards to bubble from the target to the root.
pub fn path_to(root: &Element, target: &str) -> Vec<String> {
    let mut path = Vec::new();
    if build_path(root, target, &mut path) {
        path
    } else {
        log::trace!("path_to: {target} not found under {}", root.id);
        Vec::new()
    }
}

fn build_path(element: &Element, target: &str, path: &mut Vec<String>) -> bool {
    path.push(element.id.clone());
    if element.id == target {
        return true;
    }

    for child in element.descendants() {
        if build_path(child, target, path) {
            return true;
        }
    }

    path.pop();
    false
}

/// Concatenate all text in the tree, depth first, separated by spaces.
pub fn collect_text(root: &Element) -> String {
    let mut parts = Vec::new();
    gather_text(root, &mut parts);
    parts.join(" ")
}

fn gather_text<'a>(element: &'a Element, parts: &mut Vec<&'a str>) {
    if let Some(text) = element.text_content() {
        parts.push(text);
    }
    for child in element.descendants() {
        gather_text(child, parts);
    }
}
