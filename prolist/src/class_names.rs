/// Accumulates class names, skipping empty ones and duplicates.
///
/// ```
/// use prolist::class_names::ClassNames;
///
/// let classes = ClassNames::new()
///     .add("pro-list-row")
///     .add_if(true, "pro-list-row-editable")
///     .add_if(false, "pro-list-row-selected")
///     .build();
/// assert_eq!(classes, vec!["pro-list-row", "pro-list-row-editable"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ClassNames {
    names: Vec<String>,
}

impl ClassNames {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() && !self.names.contains(&name) {
            self.names.push(name);
        }
        self
    }

    pub fn add_if(self, condition: bool, name: impl Into<String>) -> Self {
        if condition { self.add(name) } else { self }
    }

    pub fn add_opt(self, name: Option<impl Into<String>>) -> Self {
        match name {
            Some(name) => self.add(name),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn build(self) -> Vec<String> {
        self.names
    }
}
