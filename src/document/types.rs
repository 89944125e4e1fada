//! Transient state shared by the line-scanning passes.

/// Kind of an open list, which also names its HTML element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Unordered => "ul",
            Self::Ordered => "ol",
        }
    }
}

/// One open list on the nesting stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListFrame {
    pub kind: ListKind,
    /// Raw count of leading whitespace characters on the item line that opened it.
    pub indent: usize,
}

/// Horizontal alignment of a table column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Read the alignment from a delimiter-row cell such as `:---:`.
    ///
    /// Center wins over right, anything else is left.
    pub fn from_delimiter(cell: &str) -> Self {
        let cell = cell.trim();
        if cell.starts_with(':') && cell.ends_with(':') && cell.len() > 1 {
            Self::Center
        } else if cell.ends_with(':') {
            Self::Right
        } else {
            Self::Left
        }
    }

    pub const fn as_css(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alignment_from_delimiter_cells() {
        assert_eq!(Alignment::from_delimiter(":---:"), Alignment::Center);
        assert_eq!(Alignment::from_delimiter("---:"), Alignment::Right);
        assert_eq!(Alignment::from_delimiter(":---"), Alignment::Left);
        assert_eq!(Alignment::from_delimiter("---"), Alignment::Left);
        assert_eq!(Alignment::from_delimiter(" :-: "), Alignment::Center);
    }

    #[test]
    fn test_list_kind_tags() {
        assert_eq!(ListKind::Unordered.tag(), "ul");
        assert_eq!(ListKind::Ordered.tag(), "ol");
    }
}
