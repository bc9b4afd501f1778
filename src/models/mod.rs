/// Salary-relevant part of a single vacancy, normalised across sources
#[derive(Debug, Clone, PartialEq)]
pub struct VacancyRecord {
    /// Currency code as spelled by the source; empty when not reported
    pub currency: String,
    pub salary_from: Option<i64>,
    pub salary_to: Option<i64>,
}

impl VacancyRecord {
    pub fn new(currency: impl Into<String>, salary_from: Option<i64>, salary_to: Option<i64>) -> Self {
        Self {
            currency: currency.into(),
            salary_from,
            salary_to,
        }
    }

    /// Record whose salary block was missing from the payload
    pub fn without_salary() -> Self {
        Self {
            currency: String::new(),
            salary_from: None,
            salary_to: None,
        }
    }
}

/// One page of search results as reported by a source
#[derive(Debug, Clone)]
pub struct VacancyPage {
    /// Total vacancies the source reports for the query
    pub found: u64,
    /// Number of pages the source reports, when it reports one
    pub pages: Option<u32>,
    pub records: Vec<VacancyRecord>,
}

/// Aggregated salary statistics for one language on one source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub language: String,
    pub vacancies_found: u64,
    pub vacancies_processed: usize,
    pub average_salary: i64,
}
