//! Primitive widgets a row is assembled from.
//!
//! Each widget is a builder that produces a listdom `Element`. They carry no
//! row logic of their own; the row decides what goes where and these only
//! fix the shape and class names of the result.

pub mod avatar;
pub mod card;
pub mod list_item;
pub mod meta;
pub mod skeleton;

pub use avatar::Avatar;
pub use card::{Card, CardProps};
pub use list_item::ListItemContainer;
pub use meta::Meta;
pub use skeleton::Skeleton;
