use serde::{Deserialize, Serialize};

/// A boolean text format flag carried by a text leaf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    Strong,
    Emphasis,
    Underline,
    Strikethrough,
    Superscript,
    Subscript,
}

impl Mark {
    /// Every mark, in the order the serializer visits them.
    pub const ALL: [Mark; 6] = [
        Mark::Strong,
        Mark::Emphasis,
        Mark::Underline,
        Mark::Strikethrough,
        Mark::Superscript,
        Mark::Subscript,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Mark::Strong => "strong",
            Mark::Emphasis => "emphasis",
            Mark::Underline => "underline",
            Mark::Strikethrough => "strikethrough",
            Mark::Superscript => "superscript",
            Mark::Subscript => "subscript",
        }
    }
}

fn is_false(flag: &bool) -> bool {
    !*flag
}

/// The format flags of a text leaf.
///
/// Flags that are off are omitted from JSON entirely; the editor never
/// writes `{"strong": false}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Marks {
    #[serde(default, skip_serializing_if = "is_false")]
    pub strong: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub emphasis: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strikethrough: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub superscript: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub subscript: bool,
}

impl Marks {
    pub fn get(&self, mark: Mark) -> bool {
        match mark {
            Mark::Strong => self.strong,
            Mark::Emphasis => self.emphasis,
            Mark::Underline => self.underline,
            Mark::Strikethrough => self.strikethrough,
            Mark::Superscript => self.superscript,
            Mark::Subscript => self.subscript,
        }
    }

    pub fn set(&mut self, mark: Mark) {
        let flag = match mark {
            Mark::Strong => &mut self.strong,
            Mark::Emphasis => &mut self.emphasis,
            Mark::Underline => &mut self.underline,
            Mark::Strikethrough => &mut self.strikethrough,
            Mark::Superscript => &mut self.superscript,
            Mark::Subscript => &mut self.subscript,
        };
        *flag = true;
    }

    /// Marks that are switched on, in [`Mark::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = Mark> + '_ {
        Mark::ALL.into_iter().filter(move |mark| self.get(*mark))
    }

    /// True when no flag is set.
    pub fn is_plain(&self) -> bool {
        self.iter().next().is_none()
    }
}

impl FromIterator<Mark> for Marks {
    fn from_iter<I: IntoIterator<Item = Mark>>(iter: I) -> Self {
        let mut marks = Marks::default();
        for mark in iter {
            marks.set(mark);
        }
        marks
    }
}
