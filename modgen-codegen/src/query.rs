//! List-query conventions shared by every stack: search column and pagination.

use modgen_core::FieldDescriptor;

/// Column searched when no declared field qualifies.
///
/// The column is not checked against the declared fields, so an entity
/// without a `name` field gets a query on a column it does not have.
pub const SEARCH_FALLBACK: &str = "name";

/// Suffix marking a foreign-key column, never used for free-text search.
pub const FOREIGN_KEY_SUFFIX: &str = "_id";

/// Pick the column used for free-text search in list queries.
///
/// Returns the first field, in declared order, typed as `string_type` whose
/// name is not a foreign key; otherwise [`SEARCH_FALLBACK`].
pub fn search_field<'a>(fields: &'a [FieldDescriptor], string_type: &str) -> &'a str {
    fields
        .iter()
        .find(|f| f.ty == string_type && !f.name.ends_with(FOREIGN_KEY_SUFFIX))
        .map(|f| f.name.as_str())
        .unwrap_or(SEARCH_FALLBACK)
}

/// Pagination defaults emitted into list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Page used when the caller asks for a page below 1
    pub default_page: i64,
    /// Page size used when the caller asks for a size below 1
    pub default_per_page: i64,
    /// Largest page size accepted by request validation
    pub max_per_page: i64,
}

impl Pagination {
    pub const DEFAULT: Self = Self {
        default_page: 1,
        default_per_page: 20,
        max_per_page: 100,
    };

    /// Replace out-of-range page and page size with the defaults.
    pub fn resolve(&self, page: i64, per_page: i64) -> (i64, i64) {
        let page = if page < 1 { self.default_page } else { page };
        let per_page = if per_page < 1 {
            self.default_per_page
        } else {
            per_page
        };
        (page, per_page)
    }

    /// Number of pages needed to show `total` items.
    pub fn total_pages(&self, total: i64, per_page: i64) -> i64 {
        let (_, per_page) = self.resolve(self.default_page, per_page);
        let pages = total / per_page;
        if total % per_page > 0 { pages + 1 } else { pages }
    }

    /// Offset of the first row of `page`.
    pub fn offset(&self, page: i64, per_page: i64) -> i64 {
        let (page, per_page) = self.resolve(page, per_page);
        (page - 1) * per_page
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::DEFAULT
    }
}
