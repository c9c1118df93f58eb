use crate::models::{HhVacancy, SuperJobVacancy};

const HH_RUB_CURRENCY: &str = "RUR";
const SUPERJOB_RUB_CURRENCY: &str = "rub";

/// Single RUB estimate from a salary fork.
///
/// A missing or zero bound counts as "not specified". With only a lower bound
/// the estimate is pushed up by 20%, with only an upper bound it is pulled
/// down by 20%.
pub fn estimate_salary(min: Option<f64>, max: Option<f64>) -> Option<f64> {
    let min = min.filter(|value| *value > 0.0);
    let max = max.filter(|value| *value > 0.0);

    match (min, max) {
        (Some(min), Some(max)) => Some((min + max) / 2.0),
        (Some(min), None) => Some(min * 1.2),
        (None, Some(max)) => Some(max * 0.8),
        (None, None) => None,
    }
}

pub trait PredictSalary {
    fn predict_rub_salary(&self) -> Option<f64>;
}

impl PredictSalary for HhVacancy {
    fn predict_rub_salary(&self) -> Option<f64> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(HH_RUB_CURRENCY) {
            return None;
        }
        estimate_salary(salary.from, salary.to)
    }
}

impl PredictSalary for SuperJobVacancy {
    fn predict_rub_salary(&self) -> Option<f64> {
        match self.currency.as_deref() {
            Some(currency) if currency != SUPERJOB_RUB_CURRENCY => None,
            _ => estimate_salary(self.payment_from, self.payment_to),
        }
    }
}
