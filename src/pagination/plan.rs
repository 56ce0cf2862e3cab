//! Eager page selection.

/// Backend pages to fetch before anything is shown.
///
/// Page 1 is always fetched. With more than one page the last page is
/// fetched too, so the newest comments are visible right away. With more
/// than two pages and a last page that is at most half full, the page before
/// it is added so the visible tail is not sparse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialPagePlan {
    comment_count: u64,
    page_size: u32,
    page_count: u32,
    pages: Vec<u32>,
}

impl InitialPagePlan {
    /// Plan for `comment_count` comments paged at `page_size` (treated as at least 1).
    #[must_use]
    pub fn new(comment_count: u64, page_size: u32) -> Self {
        let page_size = page_size.max(1);
        let page_count =
            u32::try_from(comment_count.div_ceil(u64::from(page_size))).unwrap_or(u32::MAX);

        let mut pages = Vec::with_capacity(3);
        if page_count >= 1 {
            pages.push(1);
        }
        if page_count > 2 && Self::tail_is_small(comment_count, page_size) {
            pages.push(page_count - 1);
        }
        if page_count > 1 {
            pages.push(page_count);
        }

        Self {
            comment_count,
            page_size,
            page_count,
            pages,
        }
    }

    /// Whether the last page is partial and no more than half full.
    #[must_use]
    pub fn tail_is_small(comment_count: u64, page_size: u32) -> bool {
        let remainder = comment_count % u64::from(page_size.max(1));
        remainder != 0 && remainder * 2 <= u64::from(page_size)
    }

    #[must_use]
    pub fn comment_count(&self) -> u64 {
        self.comment_count
    }

    #[must_use]
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    #[must_use]
    pub fn page_count(&self) -> u32 {
        self.page_count
    }

    /// Selected page indexes in ascending order.
    #[must_use]
    pub fn pages(&self) -> &[u32] {
        &self.pages
    }

    /// Nominal number of comments left hidden: unfetched pages times page size.
    #[must_use]
    pub fn hidden_comments_count(&self) -> i64 {
        let unfetched = i64::from(self.page_count) - self.pages.len() as i64;
        unfetched * i64::from(self.page_size)
    }
}
