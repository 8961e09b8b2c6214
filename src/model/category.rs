use std::fmt;

/// The fixed set of body parts a model library is organised by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Heart,
    Foot,
    Lungs,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Heart, Category::Foot, Category::Lungs];

    /// Directory leaf used by the default library layout.
    pub fn folder_name(&self) -> &'static str {
        match self {
            Category::Heart => "heart",
            Category::Foot => "foot",
            Category::Lungs => "lungs",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Heart => "Heart",
            Category::Foot => "Foot",
            Category::Lungs => "Lungs",
        };
        f.write_str(label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_lists_every_category_once() {
        assert_eq!(Category::ALL.len(), 3);
        for category in Category::ALL {
            assert_eq!(
                Category::ALL.iter().filter(|c| **c == category).count(),
                1
            );
        }
    }

    #[test]
    fn labels_match_dropdown_entries() {
        assert_eq!(Category::Heart.to_string(), "Heart");
        assert_eq!(Category::Foot.to_string(), "Foot");
        assert_eq!(Category::Lungs.to_string(), "Lungs");
    }

    #[test]
    fn folder_names_are_lowercase_leaves() {
        for category in Category::ALL {
            let name = category.folder_name();
            assert_eq!(name, name.to_lowercase());
            assert!(!name.contains('/'));
        }
    }
}
