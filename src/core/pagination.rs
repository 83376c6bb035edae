use serde::{Deserialize, Serialize};

const DEFAULT_PAGE_SIZE: i64 = 20;
const MAX_PAGE_SIZE: i64 = 2000;

/// Pagination and sorting parameters, deserialized from the query string.
///
/// Defaults: page 0, size 20, sorted by id ascending. The sort parameter
/// uses the `field,direction` form, e.g. `sort=creationDate,desc`.
#[derive(Debug, Clone, Deserialize)]
pub struct PageRequest {
    #[serde(default)]
    pub page: i64,
    #[serde(default = "default_size")]
    pub size: i64,
    #[serde(default = "default_sort")]
    pub sort: String,
}

fn default_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

fn default_sort() -> String {
    "id,asc".to_string()
}

impl Default for PageRequest {
    fn default() -> Self {
        PageRequest {
            page: 0,
            size: default_size(),
            sort: default_sort(),
        }
    }
}

impl PageRequest {
    pub fn limit(&self) -> i64 {
        self.size.clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> i64 {
        self.page.max(0).saturating_mul(self.limit())
    }

    /// Resolve the sort parameter to a whitelisted column and direction.
    ///
    /// Only known entity fields are accepted; anything else falls back to
    /// the default ordering so the parameter can never reach the SQL layer
    /// unvalidated.
    pub fn order_by(&self) -> (&'static str, &'static str) {
        let mut parts = self.sort.splitn(2, ',');
        let column = match parts.next().unwrap_or_default() {
            "id" => "id",
            "name" => "name",
            "description" => "description",
            "creationDate" => "creation_date",
            _ => return ("id", "ASC"),
        };
        let direction = match parts.next() {
            Some("desc") => "DESC",
            _ => "ASC",
        };
        (column, direction)
    }
}

/// A bounded, ordered slice of a larger result set plus its metadata.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
}

impl<T> Page<T> {
    pub fn total_pages(&self) -> i64 {
        if self.size <= 0 {
            return 0;
        }
        (self.total + self.size - 1) / self.size
    }
}

/// Build the RFC 5988 `Link` header value for a page of results, with
/// `first`, `prev`, `next` and `last` relations where they apply.
pub fn link_header(path: &str, request: &PageRequest, total: i64) -> String {
    let size = request.limit();
    let page = request.page.max(0);
    let total_pages = if total == 0 { 0 } else { (total + size - 1) / size };
    let last = total_pages.saturating_sub(1).max(0);

    let mut links = Vec::new();
    if page < last {
        links.push(format!("<{path}?page={}&size={size}>; rel=\"next\"", page + 1));
    }
    if page > 0 {
        links.push(format!("<{path}?page={}&size={size}>; rel=\"prev\"", page - 1));
    }
    links.push(format!("<{path}?page={last}&size={size}>; rel=\"last\""));
    links.push(format!("<{path}?page=0&size={size}>; rel=\"first\""));
    links.join(",")
}
