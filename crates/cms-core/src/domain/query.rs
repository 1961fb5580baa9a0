//! Query parameters shared by the listing operations.

use serde::Serialize;

use crate::error::DomainError;
use crate::id::RecordId;

/// A 1-indexed page window over a newest-first result set.
///
/// Construction never fails: missing, malformed or non-positive input falls
/// back to the defaults (parse-or-default).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    page: u64,
    limit: u64,
}

impl Pagination {
    pub const DEFAULT_PAGE: u64 = 1;
    pub const DEFAULT_LIMIT: u64 = 10;
    /// Largest value a store can bind as `LIMIT`/`OFFSET` (a signed 64-bit integer).
    pub const MAX_BOUND: u64 = i64::MAX as u64;

    pub fn new(page: u64, limit: u64) -> Self {
        Self {
            page: if page == 0 { Self::DEFAULT_PAGE } else { page },
            limit: if limit == 0 { Self::DEFAULT_LIMIT } else { limit },
        }
    }

    /// Normalize raw query-string values.
    pub fn parse(page: Option<&str>, limit: Option<&str>) -> Self {
        Self::new(parse_positive(page), parse_positive(limit))
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit.min(Self::MAX_BOUND)
    }

    pub fn offset(&self) -> u64 {
        (self.page - 1)
            .saturating_mul(self.limit)
            .min(Self::MAX_BOUND)
    }

    /// The slice of `items` this page covers, for stores that sort in memory.
    pub fn window<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        let start = usize::try_from(self.offset())
            .unwrap_or(usize::MAX)
            .min(items.len());
        let end = usize::try_from(self.limit)
            .map_or(items.len(), |limit| start.saturating_add(limit))
            .min(items.len());
        &items[start..end]
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_LIMIT)
    }
}

/// Zero stands in for "absent or unusable" and is replaced by the default.
fn parse_positive(raw: Option<&str>) -> u64 {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
        .filter(|value| *value >= 1)
        .map_or(0, |value| value as u64)
}

/// A validated, non-empty search keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DomainError::invalid("Keyword is required"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `ILIKE` pattern matching the keyword anywhere, with `%`, `_` and the
    /// escape character itself taken literally.
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for ch in self.0.chars() {
            if matches!(ch, '%' | '_' | '\\') {
                pattern.push('\\');
            }
            pattern.push(ch);
        }
        pattern.push('%');
        pattern
    }

    /// Lowercased keyword for in-memory containment checks.
    pub fn needle(&self) -> String {
        self.0.to_lowercase()
    }
}

/// Which menus a hierarchy filter selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParentFilter {
    /// Menus whose parent is null.
    Root,
    /// Direct children of the given menu.
    ChildrenOf(RecordId),
}

impl From<Option<RecordId>> for ParentFilter {
    fn from(parent: Option<RecordId>) -> Self {
        parent.map_or(Self::Root, Self::ChildrenOf)
    }
}

impl ParentFilter {
    pub fn matches(&self, parent_id: Option<RecordId>) -> bool {
        match self {
            Self::Root => parent_id.is_none(),
            Self::ChildrenOf(id) => parent_id == Some(*id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::from_seq;

    #[test]
    fn test_pagination_offset() {
        assert_eq!(Pagination::new(1, 10).offset(), 0);
        assert_eq!(Pagination::new(2, 10).offset(), 10);
        assert_eq!(Pagination::new(2, 5).offset(), 5);
        assert_eq!(Pagination::new(3, 5).offset(), 10);
    }

    #[test]
    fn test_pagination_parse_or_default() {
        assert_eq!(Pagination::parse(None, None), Pagination::new(1, 10));
        assert_eq!(Pagination::parse(Some("abc"), Some("")), Pagination::new(1, 10));
        assert_eq!(Pagination::parse(Some("0"), Some("-4")), Pagination::new(1, 10));
        assert_eq!(Pagination::parse(Some(" 3 "), Some("25")), Pagination::new(3, 25));
    }

    #[test]
    fn test_pagination_huge_page_does_not_overflow() {
        let paginate = Pagination::new(u64::MAX, u64::MAX);
        assert_eq!(paginate.offset(), Pagination::MAX_BOUND);
        assert!(paginate.window(&[1, 2, 3]).is_empty());
    }

    #[test]
    fn test_pagination_bounds_fit_signed_integers() {
        let paginate = Pagination::parse(Some("3"), Some("9223372036854775807"));

        assert!(i64::try_from(paginate.limit()).is_ok());
        assert!(i64::try_from(paginate.offset()).is_ok());
        assert_eq!(paginate.offset(), Pagination::MAX_BOUND);
    }

    #[test]
    fn test_pagination_window() {
        let items: Vec<u32> = (0..25).collect();

        assert_eq!(Pagination::new(1, 10).window(&items), &items[0..10]);
        assert_eq!(Pagination::new(3, 10).window(&items), &items[20..25]);
        assert!(Pagination::new(4, 10).window(&items).is_empty());
    }

    #[test]
    fn test_search_term_rejects_blank_keywords() {
        assert!(matches!(
            SearchTerm::parse(""),
            Err(DomainError::InvalidArgument(_))
        ));
        assert!(matches!(
            SearchTerm::parse("   "),
            Err(DomainError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_search_term_like_pattern_escapes_wildcards() {
        let term = SearchTerm::parse("cat").unwrap();
        assert_eq!(term.like_pattern(), "%cat%");

        let term = SearchTerm::parse("100%_off\\").unwrap();
        assert_eq!(term.like_pattern(), "%100\\%\\_off\\\\%");
    }

    #[test]
    fn test_parent_filter_matches() {
        let parent = from_seq(4);

        assert!(ParentFilter::Root.matches(None));
        assert!(!ParentFilter::Root.matches(Some(parent)));
        assert!(ParentFilter::from(Some(parent)).matches(Some(parent)));
        assert!(!ParentFilter::ChildrenOf(parent).matches(None));
    }
}
