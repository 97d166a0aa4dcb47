pub mod trip_sorter;

/// Direction of a sort
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    /// Whether `a` may stay in front of `b`. Equal keys are always in order,
    /// which keeps merges stable in both directions.
    pub fn in_order<T: PartialOrd>(self, a: T, b: T) -> bool {
        match self {
            SortOrder::Ascending => a <= b,
            SortOrder::Descending => a >= b,
        }
    }
}
