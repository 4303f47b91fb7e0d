use serde::Serialize;

/// One page of an in-memory list. Pages are 1-based.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
    pub total_pages: usize,
    pub items: Vec<T>,
}

impl<T: Clone> Page<T> {
    /// Slice `items` into page `page`. A page past the end is empty.
    /// `page` 0 is treated as 1 and `per_page` 0 as 1.
    pub fn of(items: &[T], page: usize, per_page: usize) -> Self {
        let page = page.max(1);
        let per_page = per_page.max(1);
        let total = items.len();
        let total_pages = total.div_ceil(per_page);

        let start = (page - 1).saturating_mul(per_page);
        let slice = if start >= total {
            &[][..]
        } else {
            &items[start..(start + per_page).min(total)]
        };

        Self {
            page,
            per_page,
            total,
            total_pages,
            items: slice.to_vec(),
        }
    }
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// 1-based index range shown in the footer ("11-20 of 42").
    pub fn range_label(&self) -> String {
        if self.items.is_empty() {
            return format!("0 of {}", self.total);
        }
        let first = (self.page - 1) * self.per_page + 1;
        let last = first + self.items.len() - 1;
        format!("{first}-{last} of {}", self.total)
    }
}
