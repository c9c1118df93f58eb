use crate::salary::PredictSalary;

pub const TABLE_HEADER: [&str; 4] = [
    "Язык программирования",
    "Вакансий найдено",
    "Вакансий обработано",
    "Средняя зарплата",
];

/// Per-language summary row.
///
/// `vacancies_found` is the total the source reports while
/// `vacancies_processed` counts downloaded listings with a usable salary, so
/// nothing ties the two together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageStats {
    pub language: String,
    pub vacancies_found: u64,
    pub vacancies_processed: usize,
    pub average_salary: u64,
}

impl LanguageStats {
    pub fn from_vacancies<T: PredictSalary>(
        language: impl Into<String>,
        found: u64,
        vacancies: &[T],
    ) -> Self {
        let salaries: Vec<f64> = vacancies
            .iter()
            .filter_map(T::predict_rub_salary)
            .collect();

        let average_salary = if salaries.is_empty() {
            0
        } else {
            (salaries.iter().sum::<f64>() / salaries.len() as f64) as u64
        };

        Self {
            language: language.into(),
            vacancies_found: found,
            vacancies_processed: salaries.len(),
            average_salary,
        }
    }

    fn cells(&self) -> [String; 4] {
        [
            self.language.clone(),
            self.vacancies_found.to_string(),
            self.vacancies_processed.to_string(),
            self.average_salary.to_string(),
        ]
    }
}

/// Renders rows as an ASCII table with `title` set into the top border.
///
/// The title is not a row of its own: the column labels are the header row
/// and sit directly under the titled border.
pub fn render_table(title: &str, rows: &[LanguageStats]) -> String {
    let header = TABLE_HEADER.map(String::from);
    let body: Vec<[String; 4]> = rows.iter().map(LanguageStats::cells).collect();

    let mut widths = header.clone().map(|cell| cell.chars().count());
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = widths
        .iter()
        .map(|width| "-".repeat(width + 2))
        .collect::<Vec<_>>()
        .join("+");
    let border = format!("+{border}+");

    let mut lines = vec![
        title_border(&border, title),
        format_row(&header, &widths),
        border.clone(),
    ];
    lines.extend(body.iter().map(|row| format_row(row, &widths)));
    lines.push(border);

    lines.join("\n")
}

fn title_border(border: &str, title: &str) -> String {
    let border_len = border.chars().count();
    let title_len = title.chars().count();
    if title.is_empty() || title_len + 2 > border_len {
        return border.to_string();
    }

    let mut line = String::from("+");
    line.push_str(title);
    line.extend(border.chars().skip(1 + title_len));
    line
}

fn format_row(cells: &[String; 4], widths: &[usize; 4]) -> String {
    let cells = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| {
            let padding = width - cell.chars().count();
            format!(" {}{} ", cell, " ".repeat(padding))
        })
        .collect::<Vec<_>>()
        .join("|");
    format!("|{cells}|")
}
