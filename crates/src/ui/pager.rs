/// One page worth of the package list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PageSlice {
    pub total_pages: usize,
    pub items_on_page: usize,
    pub first_index: usize,
}

pub fn paginate(item_count: usize, capacity: usize, page_index: usize) -> PageSlice {
    if capacity == 0 {
        return PageSlice {
            total_pages: 1,
            items_on_page: 0,
            first_index: 0,
        };
    }
    let total_pages = item_count.div_ceil(capacity).max(1);
    let first_index = page_index * capacity;
    PageSlice {
        total_pages,
        items_on_page: capacity.min(item_count.saturating_sub(first_index)),
        first_index,
    }
}

/// Page and cursor position within the list. Row moves never cross a page
/// boundary; paging needs the explicit next/previous page actions.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Pager {
    pub page_index: usize,
    pub cursor_row: usize,
}

impl Pager {
    pub fn slice(&self, item_count: usize, capacity: usize) -> PageSlice {
        paginate(item_count, capacity, self.page_index)
    }

    pub fn reset(&mut self) {
        *self = Pager::default();
    }

    // re-establish page_index < total_pages and cursor_row < items_on_page
    pub fn clamp(&mut self, item_count: usize, capacity: usize) {
        let total = self.slice(item_count, capacity).total_pages;
        if self.page_index >= total {
            self.page_index = total - 1;
        }
        let on_page = self.slice(item_count, capacity).items_on_page;
        if self.cursor_row >= on_page {
            self.cursor_row = on_page.saturating_sub(1);
        }
    }

    pub fn selected_index(&self, item_count: usize, capacity: usize) -> Option<usize> {
        let slice = self.slice(item_count, capacity);
        if self.cursor_row < slice.items_on_page {
            Some(slice.first_index + self.cursor_row)
        } else {
            None
        }
    }

    pub fn first_page(&mut self, item_count: usize, capacity: usize) {
        self.page_index = 0;
        self.clamp(item_count, capacity);
    }

    pub fn last_page(&mut self, item_count: usize, capacity: usize) {
        self.page_index = self.slice(item_count, capacity).total_pages - 1;
        self.clamp(item_count, capacity);
    }

    pub fn next_page(&mut self, item_count: usize, capacity: usize) {
        if self.page_index + 1 < self.slice(item_count, capacity).total_pages {
            self.page_index += 1;
        }
        self.clamp(item_count, capacity);
    }

    pub fn prev_page(&mut self, item_count: usize, capacity: usize) {
        self.page_index = self.page_index.saturating_sub(1);
        self.clamp(item_count, capacity);
    }

    pub fn first_row(&mut self) {
        self.cursor_row = 0;
    }

    pub fn last_row(&mut self, item_count: usize, capacity: usize) {
        self.cursor_row = self
            .slice(item_count, capacity)
            .items_on_page
            .saturating_sub(1);
    }

    pub fn next_row(&mut self, item_count: usize, capacity: usize) {
        if self.cursor_row + 1 < self.slice(item_count, capacity).items_on_page {
            self.cursor_row += 1;
        }
    }

    pub fn prev_row(&mut self) {
        self.cursor_row = self.cursor_row.saturating_sub(1);
    }
}
