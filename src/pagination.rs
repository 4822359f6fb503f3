//! Page requests handed to the repositories and the pages they return.

use serde::Serialize;

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PAGE_SIZE: usize = 25;
/// Upper bound for a single page; larger requests are clamped.
pub const MAX_PAGE_SIZE: usize = 1000;

/// Property a page can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortProperty {
    Name,
}

/// Ascending ordering on one property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortOrder {
    pub property: SortProperty,
}

impl SortOrder {
    pub const fn asc(property: SortProperty) -> Self {
        Self { property }
    }
}

/// Zero-based page index, page size and ordering of a bounded slice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageRequest {
    page: usize,
    size: usize,
    sort: Vec<SortOrder>,
}

impl PageRequest {
    /// Builds a request; the size is kept within `1..=MAX_PAGE_SIZE`.
    pub fn new(page: usize, size: usize, sort: Vec<SortOrder>) -> Self {
        Self {
            page,
            size: size.clamp(1, MAX_PAGE_SIZE),
            sort,
        }
    }

    /// Resolves the caller facing, one-based and possibly missing
    /// pagination parameters.
    ///
    /// * `page_number` absent or `<= 0` selects the first page, otherwise the
    ///   zero-based index is `page_number - 1`.
    /// * `page_size` absent or `<= 0` falls back to [`DEFAULT_PAGE_SIZE`],
    ///   values above [`MAX_PAGE_SIZE`] are clamped.
    pub fn from_params(
        page_number: Option<i64>,
        page_size: Option<i64>,
        sort: Vec<SortOrder>,
    ) -> Self {
        let page = match page_number {
            Some(number) if number > 0 => usize::try_from(number - 1).unwrap_or(usize::MAX),
            _ => 0,
        };

        let size = match page_size {
            Some(size) if size > MAX_PAGE_SIZE as i64 => MAX_PAGE_SIZE,
            Some(size) if size > 0 => size as usize,
            _ => DEFAULT_PAGE_SIZE,
        };

        Self::new(page, size, sort)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn sort(&self) -> &[SortOrder] {
        &self.sort
    }

    /// Number of rows to skip, saturating for absurd page indexes.
    pub fn offset(&self) -> i64 {
        i64::try_from(self.page)
            .unwrap_or(i64::MAX)
            .saturating_mul(self.limit())
    }

    pub fn limit(&self) -> i64 {
        self.size as i64
    }
}

/// One page of results together with the totals of the whole result set.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: usize,
    pub total_pages: usize,
    /// Zero-based index of this page.
    pub number: usize,
    pub size: usize,
}

impl<T> Page<T> {
    pub fn new(content: Vec<T>, request: &PageRequest, total_elements: usize) -> Self {
        Self {
            content,
            total_elements,
            total_pages: total_elements.div_ceil(request.size()),
            number: request.page(),
            size: request.size(),
        }
    }

    pub fn empty(request: &PageRequest) -> Self {
        Self::new(Vec::new(), request, 0)
    }

    /// Converts every item while keeping the page metadata.
    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            content: self.content.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            total_pages: self.total_pages,
            number: self.number,
            size: self.size,
        }
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.content.iter_mut()
    }
}
