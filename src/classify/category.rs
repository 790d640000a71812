// Category resolution: mapping a source file name to a risk tier.
//
// A corpus file declares its tier through a convention token in its name
// ("Green_Industry_List.txt" carries GREEN). These types are the report's
// compatibility surface: the category tokens and the distinction between
// UNCATEGORIZED and an empty field must not change.

/// Environmental-risk categories propagated from corpus file names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Green,
    Red,
    Orange,
    Grey,
    Unknown,
}

impl Category {
    /// Resolve a category from a source name: case-insensitive substring
    /// test in a fixed order, first convention token wins, none → Unknown.
    pub fn from_source_name(name: &str) -> Self {
        let name = name.to_lowercase();
        if name.contains("green") {
            Category::Green
        } else if name.contains("red") {
            Category::Red
        } else if name.contains("orange") {
            Category::Orange
        } else if name.contains("grey") {
            Category::Grey
        } else {
            Category::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Green => "GREEN",
            Category::Red => "RED",
            Category::Orange => "ORANGE",
            Category::Grey => "GREY",
            Category::Unknown => "UNKNOWN",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// How a sector ended up after the engine's two stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// A match cleared the acceptance threshold in one of the stages.
    Categorized(Category),
    /// Stage 1 found nothing acceptable; stage 2 has not yet run.
    Uncategorized,
    /// Both stages ran and neither cleared the threshold.
    Unresolved,
}

impl Resolution {
    /// The token written to the report's Category column. Unresolved
    /// renders as an empty field, distinct from UNCATEGORIZED.
    pub fn as_report_str(&self) -> &'static str {
        match self {
            Resolution::Categorized(category) => category.as_str(),
            Resolution::Uncategorized => "UNCATEGORIZED",
            Resolution::Unresolved => "",
        }
    }
}

/// Per-category acceptance counters, reported in a fixed order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CategoryTally {
    pub green: usize,
    pub red: usize,
    pub orange: usize,
    pub grey: usize,
    pub unknown: usize,
}

impl CategoryTally {
    pub fn bump(&mut self, category: Category) {
        match category {
            Category::Green => self.green += 1,
            Category::Red => self.red += 1,
            Category::Orange => self.orange += 1,
            Category::Grey => self.grey += 1,
            Category::Unknown => self.unknown += 1,
        }
    }

    /// (category, count) pairs in display order.
    pub fn entries(&self) -> [(Category, usize); 5] {
        [
            (Category::Green, self.green),
            (Category::Red, self.red),
            (Category::Orange, self.orange),
            (Category::Grey, self.grey),
            (Category::Unknown, self.unknown),
        ]
    }
}
