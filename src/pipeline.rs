use crate::crawler::PaginatedSource;
use crate::report::{LanguageStats, render_table};
use crate::salary::PredictSalary;
use crate::Result;
use log::{error, info};

pub struct StatsPipeline {
    languages: Vec<String>,
}

#[must_use = "pipeline must end with .print() or .render() to produce output"]
#[derive(Debug, Clone)]
pub struct PipelineWithStats {
    pub title: String,
    pub rows: Vec<LanguageStats>,
}

impl StatsPipeline {
    pub fn new<I, S>(languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            languages: languages.into_iter().map(Into::into).collect(),
        }
    }

    pub fn collect<C>(&self, source: &C, title: impl Into<String>) -> Result<PipelineWithStats>
    where
        C: PaginatedSource,
        C::Item: PredictSalary,
    {
        info!("{} vacancy statistics: collecting..", source.name());

        let rows = self
            .languages
            .iter()
            .map(|language| -> Result<LanguageStats> {
                let result = source
                    .fetch_all(language)
                    .inspect_err(|e| error!("{} '{}' failed: {}", source.name(), language, e))?;
                Ok(LanguageStats::from_vacancies(
                    language.as_str(),
                    result.found,
                    &result.items,
                ))
            })
            .collect::<Result<Vec<_>>>()?;

        info!("{} vacancy statistics: done", source.name());
        Ok(PipelineWithStats {
            title: title.into(),
            rows,
        })
    }
}

impl PipelineWithStats {
    pub fn render(&self) -> String {
        render_table(&self.title, &self.rows)
    }

    pub fn print(self) {
        println!("{}", self.render());
    }
}
