use askama::Template;
use nutriplan_nutrition::{FoodLookup, MealPlan};
use rust_i18n::t;
use tracing::instrument;

use crate::format::slug;
use crate::rows::{ProfileField, goal_rows, item_rows, profile_rows, total_rows};
use crate::{Export, ReportOptions, Result};

#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub cells: Vec<String>,
    /// Set on total rows whose goal is violated; only affects styling.
    pub flagged: bool,
}

impl ReportRow {
    fn new(cells: Vec<String>) -> Self {
        Self {
            cells,
            flagged: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportTable {
    /// Shown above the table, empty for none.
    pub caption: String,
    pub head: Vec<String>,
    pub rows: Vec<ReportRow>,
    pub striped: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ReportSection {
    pub heading: String,
    pub tables: Vec<ReportTable>,
}

/// Printable report of a plan with all text and figures resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfReport {
    pub lang: String,
    pub title: String,
    pub header: Vec<String>,
    pub sections: Vec<ReportSection>,
    pub file_stem: String,
}

impl PdfReport {
    #[instrument(skip_all, fields(plan = %plan.name, locale = options.locale()))]
    pub fn build<L: FoodLookup + ?Sized>(
        plan: &MealPlan,
        foods: &L,
        options: &ReportOptions,
    ) -> Result<Self> {
        let l = options.locale();
        let mut sections = Vec::new();

        let profile = profile_rows(plan);
        if !profile.is_empty() {
            let rows = profile
                .into_iter()
                .map(|row| {
                    let value = match row.field {
                        ProfileField::Gender => {
                            t!(format!("report.gender_{}", row.value.to_lowercase()), locale = l)
                                .to_string()
                        }
                        _ => row.value,
                    };
                    ReportRow::new(vec![t!(row.field.key(), locale = l).to_string(), value])
                })
                .collect();

            sections.push(ReportSection {
                heading: t!("report.info_heading", locale = l).to_string(),
                tables: vec![ReportTable {
                    caption: String::new(),
                    head: vec![
                        t!("report.field", locale = l).to_string(),
                        t!("report.value", locale = l).to_string(),
                    ],
                    rows,
                    striped: true,
                }],
            });
        }

        sections.push(ReportSection {
            heading: t!("report.goals_heading", locale = l).to_string(),
            tables: vec![ReportTable {
                caption: String::new(),
                head: vec![
                    t!("report.nutrient", locale = l).to_string(),
                    t!("report.target", locale = l).to_string(),
                    t!("report.tolerance", locale = l).to_string(),
                ],
                rows: goal_rows(plan)
                    .into_iter()
                    .map(|row| ReportRow::new(vec![row.label, row.target, row.tolerance]))
                    .collect(),
                striped: true,
            }],
        });

        let meal_head = vec![
            t!("report.food", locale = l).to_string(),
            t!("report.portion", locale = l).to_string(),
            t!("report.calories", locale = l).to_string(),
            t!("report.protein", locale = l).to_string(),
            t!("report.carbohydrates", locale = l).to_string(),
            t!("report.lipids", locale = l).to_string(),
        ];
        sections.push(ReportSection {
            heading: t!("report.meals_heading", locale = l).to_string(),
            tables: plan
                .meals
                .iter()
                .map(|meal| ReportTable {
                    caption: meal.name.to_owned(),
                    head: meal_head.clone(),
                    rows: item_rows(foods, meal)
                        .into_iter()
                        .map(|row| {
                            ReportRow::new(vec![
                                row.description,
                                row.portion,
                                format!("{} kcal", row.calories),
                                t!("report.protein_cell", locale = l, value = row.protein)
                                    .to_string(),
                                t!("report.carbohydrates_cell", locale = l, value = row.carbohydrates)
                                    .to_string(),
                                t!("report.lipids_cell", locale = l, value = row.lipids).to_string(),
                            ])
                        })
                        .collect(),
                    striped: false,
                })
                .collect(),
        });

        sections.push(ReportSection {
            heading: t!("report.totals_heading", locale = l).to_string(),
            tables: vec![ReportTable {
                caption: String::new(),
                head: vec![
                    t!("report.nutrient", locale = l).to_string(),
                    t!("report.actual", locale = l).to_string(),
                    t!("report.goal", locale = l).to_string(),
                ],
                rows: total_rows(foods, plan)
                    .into_iter()
                    .map(|row| ReportRow {
                        flagged: row.evaluation.is_violation(),
                        cells: vec![row.label, row.actual, row.goal],
                    })
                    .collect(),
                striped: true,
            }],
        });

        let created = options.format_date(plan.created_at)?;
        let updated = options.format_date(plan.updated_at)?;

        Ok(Self {
            lang: l.to_owned(),
            title: t!("report.title", locale = l).to_string(),
            header: vec![
                t!("report.plan", locale = l, name = plan.name).to_string(),
                t!("report.created", locale = l, date = created).to_string(),
                t!("report.updated", locale = l, date = updated).to_string(),
            ],
            sections,
            file_stem: format!("etaco-{}", slug(&plan.name)),
        })
    }

    /// Section with the given heading, if present.
    pub fn section(&self, heading: &str) -> Option<&ReportSection> {
        self.sections.iter().find(|s| s.heading == heading)
    }
}

/// Turns a built report into a printable document.
pub trait ReportRenderer {
    fn render(&self, report: &PdfReport) -> Result<Export>;
}

#[derive(Template)]
#[template(path = "report.html")]
struct ReportTemplate<'a> {
    report: &'a PdfReport,
}

/// Renders the report as a standalone, print-ready HTML page.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl ReportRenderer for HtmlRenderer {
    fn render(&self, report: &PdfReport) -> Result<Export> {
        let content = ReportTemplate { report }.render()?;

        Ok(Export {
            file_name: format!("{}.html", report.file_stem),
            content,
        })
    }
}
