use serde::Serialize;

///
/// PageSpec
///
/// One-based page number and page size. Zero (or negative) means unset;
/// a limit only exists when both are set.
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PageSpec {
    pub page: i64,
    pub size: i64,
}

impl PageSpec {
    #[must_use]
    pub const fn new(page: i64, size: i64) -> Self {
        Self { page, size }
    }

    #[must_use]
    pub const fn is_set(self) -> bool {
        self.page > 0 && self.size > 0
    }

    #[must_use]
    pub fn limit(self) -> Option<u64> {
        if self.is_set() {
            u64::try_from(self.size).ok()
        } else {
            None
        }
    }

    /// `(page - 1) * size`, saturating.
    #[must_use]
    pub fn offset(self) -> Option<u64> {
        if !self.is_set() {
            return None;
        }
        let page = u64::try_from(self.page - 1).ok()?;
        let size = u64::try_from(self.size).ok()?;

        Some(page.saturating_mul(size))
    }

    // First value wins; non-positive values never count as set.
    pub(crate) const fn offer_page(&mut self, page: i64) {
        if self.page <= 0 && page > 0 {
            self.page = page;
        }
    }

    pub(crate) const fn offer_size(&mut self, size: i64) {
        if self.size <= 0 && size > 0 {
            self.size = size;
        }
    }

    pub(crate) const fn merge_from(&mut self, other: Self) {
        self.offer_page(other.page);
        self.offer_size(other.size);
    }
}
