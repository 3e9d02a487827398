use thiserror::Error;

/// A move that cannot be applied to the board it was played on.
///
/// The board is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("column {column} is already full")]
    ColumnFull { column: usize },
    #[error("column {column} is not on the board")]
    NoSuchColumn { column: usize },
}

impl IllegalMove {
    /// the column the rejected move targeted
    pub fn column(&self) -> usize {
        match self {
            IllegalMove::ColumnFull { column } => *column,
            IllegalMove::NoSuchColumn { column } => *column,
        }
    }
}

#[cfg(test)]
mod test_error {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            IllegalMove::ColumnFull { column: 3 }.to_string(),
            "column 3 is already full"
        );
        assert_eq!(
            IllegalMove::NoSuchColumn { column: 9 }.to_string(),
            "column 9 is not on the board"
        );
    }

    #[test]
    fn test_column() {
        assert_eq!(IllegalMove::ColumnFull { column: 2 }.column(), 2);
        assert_eq!(IllegalMove::NoSuchColumn { column: 7 }.column(), 7);
    }
}
