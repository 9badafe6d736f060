pub mod element;
pub mod types;

pub use element::{
    collect_text, find_all_by_class, find_by_class, find_element, path_to, Content, Element,
};
pub use types::*;
