pub mod clients;
pub mod config;
pub mod crawler;
pub mod error;
pub mod logger;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod salary;
pub mod utils;

pub use clients::{HeadHunterClient, SuperJobClient};
pub use config::Config;
pub use crawler::{Page, PaginatedSource, SearchResult};
pub use error::Error;
pub use models::{HhSalary, HhVacancy, SuperJobVacancy};
pub use pipeline::{PipelineWithStats, StatsPipeline};
pub use report::{LanguageStats, render_table};
pub use salary::{PredictSalary, estimate_salary};

pub type Result<T> = std::result::Result<T, Error>;
