use serde::{ser::SerializeMap, Serialize, Serializer};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_RECORDS_PER_PAGE: i64 = 10;

/// Requested page window. Both values are at least 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pagination{
    pub page: i64,
    pub record_per_page: i64
}

impl Default for Pagination {
    fn default() -> Self {
        Self{ page: DEFAULT_PAGE, record_per_page: DEFAULT_RECORDS_PER_PAGE }
    }
}

impl Pagination {
    // Absent, non numeric or < 1 values fall back to the defaults
    pub fn from_raw(page: Option<&str>, record_per_page: Option<&str>) -> Self{
        Self{
            page: parse_positive(page).unwrap_or(DEFAULT_PAGE),
            record_per_page: parse_positive(record_per_page).unwrap_or(DEFAULT_RECORDS_PER_PAGE)
        }
    }

    pub fn offset(&self) -> i64{
        (self.page - 1).saturating_mul(self.record_per_page)
    }

    pub fn limit(&self) -> i64{
        self.record_per_page
    }

    pub fn page_info(&self, total_key: &'static str, total: i64) -> PageInfo{
        PageInfo{
            current_page: self.page,
            records_per_page: self.record_per_page,
            total_key,
            total,
            total_pages: total_pages(total, self.record_per_page)
        }
    }
}

fn parse_positive(raw: Option<&str>) -> Option<i64>{
    raw.and_then(|v| v.trim().parse::<i64>().ok())
        .filter(|v| *v >= 1)
}

pub fn total_pages(total: i64, record_per_page: i64) -> i64{
    if total <= 0 {
        return 0;
    }
    total / record_per_page + i64::from(total % record_per_page != 0)
}

/// Pagination block of a list response. The total is keyed per entity,
/// e.g. `total_tables`.
#[derive(Debug, Clone, PartialEq)]
pub struct PageInfo{
    pub current_page: i64,
    pub records_per_page: i64,
    pub total_key: &'static str,
    pub total: i64,
    pub total_pages: i64
}

impl Serialize for PageInfo {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer
    {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("current_page", &self.current_page)?;
        map.serialize_entry("records_per_page", &self.records_per_page)?;
        map.serialize_entry(self.total_key, &self.total)?;
        map.serialize_entry("total_pages", &self.total_pages)?;
        map.end()
    }
}
