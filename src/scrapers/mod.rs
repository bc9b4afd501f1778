pub mod headhunter;
pub mod superjob;
pub mod traits;
pub mod types;

pub use headhunter::HeadHunterScraper;
pub use superjob::SuperJobScraper;
pub use traits::{PageProgress, VacancySource};
