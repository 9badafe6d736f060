//! Rendering of a single list row, as a plain list item or as a card.
//!
//! The row itself lives in [`item`]; [`widgets`] holds the primitives it is
//! assembled from and [`handler_context`] the event plumbing hosts use to
//! deliver clicks back to it.

pub mod class_names;
pub mod config;
pub mod error;
pub mod handler_context;
pub mod item;
pub mod state;
pub mod widgets;

pub mod prelude {
    pub use crate::config::ListConfig;
    pub use crate::error::{ConfigError, RenderError};
    pub use crate::handler_context::{
        EventKind, EventResult, Handler, HandlerContext, HandlerRegistry,
    };
    pub use crate::item::{
        CardActionPlacement, ExpandIcon, ExpandableConfig, ItemProps, ItemType, Layout,
        ProListItem, Rendered, RowHandlers, ShowMode,
    };
    pub use crate::state::MergedState;
    pub use crate::widgets::CardProps;

    pub use listdom::{Element, Style};
}
