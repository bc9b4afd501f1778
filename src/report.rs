use crate::models::LanguageStats;
use tabled::settings::{Panel, Style};
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct Row<'a> {
    #[tabled(rename = "Язык программирования")]
    language: &'a str,
    #[tabled(rename = "Средняя зарплата")]
    average_salary: i64,
    #[tabled(rename = "Найдено вакансий")]
    vacancies_found: u64,
    #[tabled(rename = "Обработано вакансий")]
    vacancies_processed: usize,
}

impl<'a> From<&'a LanguageStats> for Row<'a> {
    fn from(stats: &'a LanguageStats) -> Self {
        Self {
            language: &stats.language,
            average_salary: stats.average_salary,
            vacancies_found: stats.vacancies_found,
            vacancies_processed: stats.vacancies_processed,
        }
    }
}

/// Render per-language statistics as a bordered ASCII table with a title row.
/// Rows keep the order of `stats`.
pub fn render_table(title: &str, stats: &[LanguageStats]) -> String {
    let rows: Vec<Row> = stats.iter().map(Row::from).collect();

    Table::new(rows)
        .with(Style::ascii())
        .with(Panel::header(title))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(language: &str, average_salary: i64, found: u64, processed: usize) -> LanguageStats {
        LanguageStats {
            language: language.to_string(),
            vacancies_found: found,
            vacancies_processed: processed,
            average_salary,
        }
    }

    fn line_of(table: &str, needle: &str) -> usize {
        table
            .lines()
            .position(|line| line.contains(needle))
            .unwrap_or_else(|| panic!("{needle:?} not found in\n{table}"))
    }

    #[test]
    fn renders_title_header_and_rows() {
        let table = render_table(
            "HeadHunter Moscow",
            &[stats("Python", 215_000, 1840, 412), stats("Java", 240_500, 1020, 290)],
        );

        assert!(table.starts_with('+'));
        assert!(table.lines().all(|line| line.starts_with('+') || line.starts_with('|')));

        let title = line_of(&table, "HeadHunter Moscow");
        let header = line_of(&table, "Язык программирования");
        let python = line_of(&table, "Python");
        let java = line_of(&table, "Java");
        assert!(title < header && header < python && python < java);

        let header_line = table.lines().nth(header).unwrap();
        for column in ["Средняя зарплата", "Найдено вакансий", "Обработано вакансий"] {
            assert!(header_line.contains(column));
        }

        let python_line = table.lines().nth(python).unwrap();
        assert!(python_line.contains("215000"));
        assert!(python_line.contains("1840"));
        assert!(python_line.contains("412"));
    }

    #[test]
    fn keeps_caller_order() {
        let table = render_table(
            "SuperJob Moscow",
            &[stats("Javascript", 1, 1, 1), stats("C", 2, 2, 2), stats("Assembly", 3, 3, 3)],
        );

        let js = line_of(&table, "Javascript");
        let c = line_of(&table, "| C ");
        let asm = line_of(&table, "Assembly");
        assert!(js < c && c < asm);
    }

    #[test]
    fn renders_empty_stats() {
        let table = render_table("SuperJob Moscow", &[]);
        assert!(table.contains("SuperJob Moscow"));
        assert!(table.contains("Обработано вакансий"));
    }
}
