/// Fixed search filters for HeadHunter
#[derive(Debug, Clone)]
pub struct HeadHunterParams {
    /// Search endpoint
    pub base_url: String,
    /// Professional role id ("96" is programmer/developer)
    pub professional_role: String,
    /// Region id ("1" is Moscow)
    pub area: String,
    /// Only vacancies published within this many days
    pub period: u32,
    pub only_with_salary: bool,
}

impl Default for HeadHunterParams {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru/vacancies".to_string(),
            professional_role: "96".to_string(),
            area: "1".to_string(),
            period: 30,
            only_with_salary: true,
        }
    }
}

/// Fixed search filters for SuperJob
#[derive(Debug, Clone)]
pub struct SuperJobParams {
    /// Search endpoint
    pub base_url: String,
    /// Town id (4 is Moscow)
    pub town: u32,
    /// Catalogue id (48 is software development)
    pub catalogues: u32,
    /// Only vacancies published within this many days
    pub period: u32,
    /// Skip vacancies with "salary by agreement"
    pub no_agreement: bool,
    /// Records per page; SuperJob allows at most 100
    pub count: u32,
}

impl Default for SuperJobParams {
    fn default() -> Self {
        Self {
            base_url: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            town: 4,
            catalogues: 48,
            period: 30,
            no_agreement: true,
            count: 100,
        }
    }
}
