use super::Border;

/// Inline style of an element.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Style {
    pub border: Border,
    pub width: Option<u16>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn border(mut self, border: Border) -> Self {
        self.border = border;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    /// Overlay `other` on top of `self`: set fields in `other` win.
    pub fn merge(mut self, other: &Style) -> Self {
        if other.border != Border::None {
            self.border = other.border;
        }
        if other.width.is_some() {
            self.width = other.width;
        }
        self
    }
}
