//! Paging, sorting and filtering parameters driving a remote fetch.

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    pub fn is_ascending(self) -> bool {
        self == Self::Asc
    }
}

/// The single active sort: backend field name plus direction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sort {
    pub field: String,
    pub direction: SortDirection,
}

impl Sort {
    pub fn asc(field: &str) -> Self {
        Self {
            field: field.to_string(),
            direction: SortDirection::Asc,
        }
    }
}

/// Fetch key of a remote collection view.
///
/// Two fetches are interchangeable exactly when their `QueryState`s are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryState {
    pub page_index: usize,
    pub page_size: usize,
    pub sort: Sort,
    /// Empty string means no filter.
    pub filter_text: String,
}

impl QueryState {
    pub fn new(sort: Sort, page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
            sort,
            filter_text: String::new(),
        }
    }

    /// Rows to skip on the backend.
    pub fn skip(&self) -> usize {
        self.page_index * self.page_size
    }

    /// Rows to request.
    pub fn take(&self) -> usize {
        self.page_size
    }
}
