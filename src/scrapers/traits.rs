use crate::error::Result;
use crate::models::VacancyPage;
use async_trait::async_trait;

/// Common trait for all vacancy sources
/// The paging loop and the aggregation are shared; a source only knows how to fetch one page
#[async_trait]
pub trait VacancySource: Send + Sync {
    /// Fetch one page (0-based) of vacancies matching `language`
    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage>;

    /// How this source signals that no more pages exist
    fn pagination(&self) -> Pagination;

    /// The source's spelling of the ruble currency code
    fn ruble_code(&self) -> &'static str;

    /// Get the name of the source
    fn source_name(&self) -> &'static str;
}

/// State of a paging run after at least one page has been fetched
#[derive(Debug, Clone, Copy)]
pub struct PageProgress {
    /// Index of the page that would be requested next
    pub next_page: u32,
    /// Records fetched so far across all pages
    pub fetched: u64,
    /// Records on the most recent page
    pub last_page_len: usize,
    /// Total reported by the first response
    pub found: u64,
    /// Page count reported by the first response
    pub pages: Option<u32>,
}

/// Termination strategy of a paginated search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pagination {
    /// Keep going while the next page index does not exceed the reported page count
    PageCount,
    /// Keep going while fewer records than the reported total have been fetched
    RecordTotal,
}

impl Pagination {
    pub fn should_continue(&self, progress: &PageProgress) -> bool {
        match self {
            Pagination::PageCount => match progress.pages {
                Some(pages) => progress.next_page <= pages,
                None => false,
            },
            // An empty page means the source has nothing more to give, even if
            // its reported total says otherwise.
            Pagination::RecordTotal => {
                progress.last_page_len > 0 && progress.fetched < progress.found
            }
        }
    }
}
