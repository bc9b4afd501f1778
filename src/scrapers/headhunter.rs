use crate::error::{Error, Result};
use crate::models::{VacancyPage, VacancyRecord};
use crate::scrapers::traits::{Pagination, VacancySource};
use crate::scrapers::types::HeadHunterParams;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const SOURCE_NAME: &str = "HeadHunter";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    found: u64,
    pages: u32,
    #[serde(default)]
    items: Vec<Item>,
}

#[derive(Debug, Deserialize)]
struct Item {
    #[serde(default)]
    salary: Option<Salary>,
}

#[derive(Debug, Deserialize)]
struct Salary {
    from: Option<i64>,
    to: Option<i64>,
    currency: Option<String>,
}

impl From<Item> for VacancyRecord {
    fn from(item: Item) -> Self {
        match item.salary {
            Some(salary) => {
                VacancyRecord::new(salary.currency.unwrap_or_default(), salary.from, salary.to)
            }
            None => VacancyRecord::without_salary(),
        }
    }
}

/// HeadHunter (api.hh.ru) client, unauthenticated
pub struct HeadHunterScraper {
    client: Client,
    params: HeadHunterParams,
}

impl HeadHunterScraper {
    /// Create a new HeadHunter client with the default Moscow developer filters
    pub fn new() -> Result<Self> {
        Self::with_params(HeadHunterParams::default())
    }

    pub fn with_params(params: HeadHunterParams) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("salary-scout/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, params })
    }

    fn query(&self, language: &str, page: u32) -> Vec<(&'static str, String)> {
        vec![
            ("text", language.to_string()),
            ("page", page.to_string()),
            ("professional_role", self.params.professional_role.clone()),
            ("area", self.params.area.clone()),
            ("period", self.params.period.to_string()),
            ("only_with_salary", self.params.only_with_salary.to_string()),
        ]
    }
}

#[async_trait]
impl VacancySource for HeadHunterScraper {
    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        debug!("Fetching {} page {} for {}", SOURCE_NAME, page, language);

        let response = self
            .client
            .get(&self.params.base_url)
            .query(&self.query(language, page))
            .send()
            .await?;

        if !response.status().is_success() {
            warn!("{} returned status: {}", SOURCE_NAME, response.status());
            return Err(Error::Status {
                provider: SOURCE_NAME,
                status: response.status(),
            });
        }

        let body: SearchResponse = response.json().await?;

        Ok(VacancyPage {
            found: body.found,
            pages: Some(body.pages),
            records: body.items.into_iter().map(VacancyRecord::from).collect(),
        })
    }

    fn pagination(&self) -> Pagination {
        Pagination::PageCount
    }

    fn ruble_code(&self) -> &'static str {
        "RUR"
    }

    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }
}
