//! PageState - List Pagination

use crate::constants::PAGE_SIZE;

/// One element of the page navigation strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Previous(u32),
    Page(u32),
    /// The page being shown; not navigable
    Current(u32),
    Ellipsis,
    Next(u32),
}

/// Current page of the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    page: u32,
    page_size: u32,
}

impl PageState {
    pub fn new(page_size: u32) -> Self {
        Self {
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Offset of the first record on the current page
    pub fn offset(&self) -> u32 {
        (self.page - 1) * self.page_size
    }

    /// `ceil(total / page_size)`
    pub fn total_pages(&self, total_count: u64) -> u32 {
        let pages = total_count.div_ceil(u64::from(self.page_size));
        u32::try_from(pages).unwrap_or(u32::MAX)
    }

    /// Move to `page` if it is within `1..=total_pages`
    pub fn request(&mut self, page: u32, total_pages: u32) -> bool {
        if page < 1 || page > total_pages {
            return false;
        }
        self.page = page;
        true
    }

    /// Back to the first page; returns whether the page changed
    pub fn reset(&mut self) -> bool {
        let changed = self.page != 1;
        self.page = 1;
        changed
    }

    /// Navigation strip for the current page
    pub fn window(&self, total_pages: u32) -> Vec<PageLink> {
        let page = self.page;
        let mut links = Vec::with_capacity(9);

        if page > 1 {
            links.push(PageLink::Previous(page - 1));
        }
        if page > 2 {
            links.push(PageLink::Page(1));
            links.push(PageLink::Ellipsis);
        }
        links.push(PageLink::Current(page));
        for next in [page + 1, page + 2] {
            if next <= total_pages {
                links.push(PageLink::Page(next));
            }
        }
        if page + 2 < total_pages {
            links.push(PageLink::Ellipsis);
            links.push(PageLink::Page(total_pages));
        }
        if page < total_pages {
            links.push(PageLink::Next(page + 1));
        }

        links
    }
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(PAGE_SIZE)
    }
}
