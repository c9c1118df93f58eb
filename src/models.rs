use serde::Deserialize;

/// One listing from `api.hh.ru/vacancies`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HhVacancy {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub salary: Option<HhSalary>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HhSalary {
    pub from: Option<f64>,
    pub to: Option<f64>,
    pub currency: Option<String>,
    pub gross: Option<bool>,
}

/// One listing from `api.superjob.ru/2.0/vacancies/`.
///
/// SuperJob reports an unspecified bound as `0` rather than `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuperJobVacancy {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub profession: String,
    #[serde(default)]
    pub payment_from: Option<f64>,
    #[serde(default)]
    pub payment_to: Option<f64>,
    pub currency: Option<String>,
}

#[cfg(test)]
impl HhVacancy {
    pub fn new(name: impl Into<String>, salary: Option<HhSalary>) -> Self {
        Self {
            name: name.into(),
            salary,
            ..Default::default()
        }
    }
}

#[cfg(test)]
impl HhSalary {
    pub fn rub(from: Option<f64>, to: Option<f64>) -> Self {
        Self {
            from,
            to,
            currency: Some("RUR".to_string()),
            gross: None,
        }
    }
}

#[cfg(test)]
impl SuperJobVacancy {
    pub fn new(profession: impl Into<String>, payment_from: f64, payment_to: f64) -> Self {
        Self {
            profession: profession.into(),
            payment_from: Some(payment_from),
            payment_to: Some(payment_to),
            currency: Some("rub".to_string()),
            ..Default::default()
        }
    }
}
