//! List query and list response types
//!
//! Backend list endpoints accept `page/limit/search/sortBy/sortOrder`
//! (plus `status` for orders) and answer with either a bare JSON array or
//! an `{ items, pagination }` envelope.

use serde::{Deserialize, Serialize};

/// Default page size used by the list tables
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

/// List request parameters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    /// 1-based page number
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<SortOrder>,
    /// Order status filter (`PENDING`, ...)
    pub status: Option<String>,
}

impl ListQuery {
    /// Fetch everything the endpoint returns by default
    pub fn all() -> Self {
        Self::default()
    }

    /// Add pagination
    pub fn paginate(mut self, page: u32, limit: u32) -> Self {
        self.page = Some(page.max(1));
        self.limit = Some(limit);
        self
    }

    /// Add a search term (trimmed; blank terms are dropped)
    pub fn search(mut self, term: &str) -> Self {
        let term = term.trim();
        self.search = (!term.is_empty()).then(|| term.to_string());
        self
    }

    /// Add sorting
    pub fn order_by(mut self, field: impl Into<String>, order: SortOrder) -> Self {
        self.sort_by = Some(field.into());
        self.sort_order = Some(order);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Query string pairs, omitting unset parameters
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(status) = &self.status {
            pairs.push(("status", status.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(search) = &self.search {
            pairs.push(("search", search.clone()));
        }
        if let Some(sort_by) = &self.sort_by {
            pairs.push(("sortBy", sort_by.clone()));
        }
        if let Some(order) = self.sort_order {
            pairs.push(("sortOrder", order.as_str().to_string()));
        }
        pairs
    }
}

/// Pagination block of a list response
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            total: 0,
            page: 1,
            limit: DEFAULT_PAGE_SIZE,
            total_pages: 1,
        }
    }
}

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit > 0 {
            total.div_ceil(u64::from(limit)).max(1) as u32
        } else {
            1
        };
        Self {
            items,
            pagination: Pagination {
                total,
                page,
                limit,
                total_pages,
            },
        }
    }

    /// A bare array is a single page holding everything
    pub fn single_page(items: Vec<T>) -> Self {
        let total = items.len() as u64;
        let limit = if items.is_empty() {
            DEFAULT_PAGE_SIZE
        } else {
            items.len() as u32
        };
        Self {
            items,
            pagination: Pagination {
                total,
                page: 1,
                limit,
                total_pages: 1,
            },
        }
    }
}

/// Raw list payload as sent by the backend
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    Plain(Vec<T>),
    Paged {
        #[serde(default = "Vec::new")]
        items: Vec<T>,
        #[serde(default)]
        pagination: Option<Pagination>,
    },
}

impl<T> From<ListPayload<T>> for Page<T> {
    fn from(payload: ListPayload<T>) -> Self {
        match payload {
            ListPayload::Plain(items) => Page::single_page(items),
            ListPayload::Paged { items, pagination } => Page {
                items,
                pagination: pagination.unwrap_or_default(),
            },
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Page<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        ListPayload::deserialize(deserializer).map(Page::from)
    }
}
