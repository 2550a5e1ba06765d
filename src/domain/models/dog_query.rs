/// Columns a dog listing can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Color,
    TailLength,
    Weight,
}

impl SortField {
    /// Parses a user-supplied attribute. Matching is trimmed and
    /// case-insensitive, and `taillength` is accepted for `tail_length`.
    /// Unknown attributes yield `None`.
    pub fn parse(attribute: &str) -> Option<Self> {
        match attribute.trim().to_lowercase().as_str() {
            "name" => Some(SortField::Name),
            "color" => Some(SortField::Color),
            "tail_length" | "taillength" => Some(SortField::TailLength),
            "weight" => Some(SortField::Weight),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Color => "color",
            SortField::TailLength => "tail_length",
            SortField::Weight => "weight",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Only `desc` selects descending; anything else, including absent, is ascending.
    pub fn parse(order: Option<&str>) -> Self {
        match order {
            Some(o) if o.trim().eq_ignore_ascii_case("desc") => SortOrder::Desc,
            _ => SortOrder::Asc,
        }
    }

    pub fn is_descending(&self) -> bool {
        matches!(self, SortOrder::Desc)
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

/// Listing request handed to a repository. Sorting and paging are independent
/// and both optional; sorting is applied before paging.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DogQuery {
    sort_by: Option<SortField>,
    order: SortOrder,
    page_number: Option<u32>,
    page_size: Option<u32>,
}

impl DogQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sort(mut self, sort_by: Option<SortField>, order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.order = order;
        self
    }

    pub fn with_page_number(mut self, page_number: u32) -> Self {
        self.page_number = Some(page_number);
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn sort_by(&self) -> Option<SortField> {
        self.sort_by
    }

    pub fn order(&self) -> SortOrder {
        self.order
    }

    pub fn is_descending(&self) -> bool {
        self.order.is_descending()
    }

    pub fn page_number(&self) -> Option<u32> {
        self.page_number
    }

    pub fn page_size(&self) -> Option<u32> {
        self.page_size
    }

    /// Rows to skip: `(page_number - 1) * page_size`, only when both are set.
    pub fn offset(&self) -> Option<u64> {
        match (self.page_number, self.page_size) {
            (Some(number), Some(size)) => {
                Some(u64::from(number.saturating_sub(1)) * u64::from(size))
            }
            _ => None,
        }
    }

    /// Rows to take. A page size alone still limits the result.
    pub fn limit(&self) -> Option<u64> {
        self.page_size.map(u64::from)
    }
}
