use crate::error::{Error, Result};
use crate::models::{VacancyPage, VacancyRecord};
use crate::scrapers::traits::{Pagination, VacancySource};
use crate::scrapers::types::SuperJobParams;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

const SOURCE_NAME: &str = "SuperJob";
const APP_KEY_HEADER: &str = "X-Api-App-Id";

#[derive(Debug, Deserialize)]
struct SearchResponse {
    total: u64,
    #[serde(default)]
    objects: Vec<Object>,
}

#[derive(Debug, Deserialize)]
struct Object {
    #[serde(default)]
    currency: Option<String>,
    #[serde(default)]
    payment_from: Option<i64>,
    #[serde(default)]
    payment_to: Option<i64>,
}

impl From<Object> for VacancyRecord {
    fn from(object: Object) -> Self {
        VacancyRecord::new(
            object.currency.unwrap_or_default(),
            object.payment_from,
            object.payment_to,
        )
    }
}

/// SuperJob (api.superjob.ru) client, authenticated with an app secret key
pub struct SuperJobScraper {
    client: Client,
    secret_key: String,
    params: SuperJobParams,
}

impl SuperJobScraper {
    /// Create a new SuperJob client with the default Moscow developer filters
    pub fn new(secret_key: impl Into<String>) -> Result<Self> {
        Self::with_params(secret_key, SuperJobParams::default())
    }

    pub fn with_params(secret_key: impl Into<String>, params: SuperJobParams) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(concat!("salary-scout/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            secret_key: secret_key.into(),
            params,
        })
    }

    fn query(&self, language: &str, page: u32) -> Vec<(&'static str, String)> {
        let mut query = vec![
            ("keyword", language.to_string()),
            ("page", page.to_string()),
            ("count", self.params.count.to_string()),
            ("town", self.params.town.to_string()),
            ("catalogues", self.params.catalogues.to_string()),
            ("period", self.params.period.to_string()),
        ];
        if self.params.no_agreement {
            query.push(("no_agreement", "1".to_string()));
        }
        query
    }
}

#[async_trait]
impl VacancySource for SuperJobScraper {
    async fn fetch_page(&self, language: &str, page: u32) -> Result<VacancyPage> {
        debug!("Fetching {} page {} for {}", SOURCE_NAME, page, language);

        let response = self
            .client
            .get(&self.params.base_url)
            .header(APP_KEY_HEADER, &self.secret_key)
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
            found: body.total,
            pages: None,
            records: body.objects.into_iter().map(VacancyRecord::from).collect(),
        })
    }

    fn pagination(&self) -> Pagination {
        Pagination::RecordTotal
    }

    fn ruble_code(&self) -> &'static str {
        "rub"
    }

    fn source_name(&self) -> &'static str {
        SOURCE_NAME
    }
}
