/// One page of a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaginatedList<T> {
    pub items: Vec<T>,
    /// 1-based number of this page.
    pub page: u32,
    pub last_page: u32,
    pub per_page: u32,
    pub total: u64,
}

impl<T> PaginatedList<T> {
    pub fn has_next(&self) -> bool {
        self.page < self.last_page
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T> IntoIterator for PaginatedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
