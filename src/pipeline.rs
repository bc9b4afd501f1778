use crate::config::Config;
use crate::error::Result;
use crate::models::{LanguageStats, VacancyRecord};
use crate::report::render_table;
use crate::salary::predict_rub_salary;
use crate::scrapers::{HeadHunterScraper, PageProgress, SuperJobScraper, VacancySource};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Page through `source` until it reports no more records.
///
/// Returns the total the source reported on its first page together with every
/// record fetched. `delay` is slept after each request, including a failed one.
pub async fn collect_vacancies(
    source: &dyn VacancySource,
    language: &str,
    delay: Duration,
) -> Result<(u64, Vec<VacancyRecord>)> {
    let pagination = source.pagination();
    let mut records = Vec::new();
    let mut page = 0;
    let mut first: Option<(u64, Option<u32>)> = None;

    loop {
        let fetched = source.fetch_page(language, page).await;
        tokio::time::sleep(delay).await;
        let fetched = fetched?;

        let (found, pages) = *first.get_or_insert((fetched.found, fetched.pages));
        let last_page_len = fetched.records.len();
        records.extend(fetched.records);

        debug!(
            "{} page {} for {}: {} records ({} of {})",
            source.source_name(),
            page,
            language,
            last_page_len,
            records.len(),
            found
        );

        page += 1;
        let progress = PageProgress {
            next_page: page,
            fetched: records.len() as u64,
            last_page_len,
            found,
            pages,
        };
        if !pagination.should_continue(&progress) {
            return Ok((found, records));
        }
    }
}

/// Fold fetched records into per-language statistics
pub fn aggregate(
    language: &str,
    vacancies_found: u64,
    records: &[VacancyRecord],
    ruble_code: &str,
) -> LanguageStats {
    let salaries: Vec<f64> = records
        .iter()
        .filter_map(|record| predict_rub_salary(record, ruble_code))
        .collect();

    let average_salary = if salaries.is_empty() {
        0
    } else {
        (salaries.iter().sum::<f64>() / salaries.len() as f64) as i64
    };

    LanguageStats {
        language: language.to_string(),
        vacancies_found,
        vacancies_processed: salaries.len(),
        average_salary,
    }
}

/// Run the full paging and aggregation pass for every language, in order
pub async fn collect_language_stats(
    source: &dyn VacancySource,
    languages: &[String],
    delay: Duration,
) -> Result<Vec<LanguageStats>> {
    let mut stats = Vec::with_capacity(languages.len());

    for language in languages {
        info!("Collecting {} vacancies for {}", source.source_name(), language);

        let (found, records) = collect_vacancies(source, language, delay).await?;
        let language_stats = aggregate(language, found, &records, source.ruble_code());

        if language_stats.vacancies_processed == 0 {
            warn!(
                "No ruble salaries among {} {} vacancies for {}",
                records.len(),
                source.source_name(),
                language
            );
        }
        info!(
            "{} {}: found {}, processed {}, average {}",
            source.source_name(),
            language,
            language_stats.vacancies_found,
            language_stats.vacancies_processed,
            language_stats.average_salary
        );

        stats.push(language_stats);
    }

    Ok(stats)
}

/// Query both sources and render their tables, HeadHunter first
pub async fn run(config: &Config) -> Result<String> {
    let headhunter = HeadHunterScraper::new()?;
    let superjob = SuperJobScraper::new(config.superjob_secret_key.clone())?;

    build_report(&headhunter, &superjob, &config.languages, config.request_delay).await
}

/// Collect stats from both sources in turn, then render both tables.
/// Any source failure aborts before a table is rendered.
pub async fn build_report(
    headhunter: &dyn VacancySource,
    superjob: &dyn VacancySource,
    languages: &[String],
    delay: Duration,
) -> Result<String> {
    let hh_stats = collect_language_stats(headhunter, languages, delay).await?;
    let sj_stats = collect_language_stats(superjob, languages, delay).await?;

    Ok(format!(
        "{}\n\n{}",
        render_table("HeadHunter Moscow", &hh_stats),
        render_table("SuperJob Moscow", &sj_stats)
    ))
}
