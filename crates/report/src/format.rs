use nutriplan_nutrition::{NutrientGoal, unit_of};
use time::OffsetDateTime;
use time::format_description::OwnedFormatItem;
use time::macros::format_description;

use crate::{ReportError, Result};

pub const DEFAULT_LOCALE: &str = "pt-BR";
pub const DEFAULT_DATE_FORMAT: &str = "[day]/[month]/[year]";

/// Presentation settings shared by every exporter.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    locale: String,
    date_format: OwnedFormatItem,
}

impl ReportOptions {
    pub fn new(locale: impl Into<String>, date_format: &str) -> Result<Self> {
        let locale = locale.into();
        if !is_supported_locale(&locale) {
            return Err(ReportError::UnknownLocale(locale));
        }

        let date_format = time::format_description::parse_owned::<2>(date_format)?;

        Ok(Self {
            locale,
            date_format,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Result<Self> {
        let locale = locale.into();
        if !is_supported_locale(&locale) {
            return Err(ReportError::UnknownLocale(locale));
        }

        self.locale = locale;
        Ok(self)
    }

    pub fn format_date(&self, date: OffsetDateTime) -> Result<String> {
        Ok(date.format(&self.date_format)?)
    }
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            locale: DEFAULT_LOCALE.to_owned(),
            date_format: OwnedFormatItem::from(format_description!("[day]/[month]/[year]")),
        }
    }
}

pub fn is_supported_locale(locale: &str) -> bool {
    rust_i18n::available_locales!().contains(&locale)
}

/// Rounds half up, the way report figures have always been rounded.
pub fn round(value: f64) -> i64 {
    let rounded = value.round();
    if value - rounded == 0.5 {
        (rounded + 1.0) as i64
    } else {
        rounded as i64
    }
}

/// One decimal, ties rounded up like [`round`].
pub fn round_tenths(value: f64) -> String {
    let tenths = round(value * 10.0);

    format!("{:.1}", tenths as f64 / 10.0)
}

/// Plain number display: integers lose their fraction, others keep the
/// shortest representation.
pub fn number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }

    value.to_string()
}

/// `> 120g` for a min goal, `< 2000kcal` for a max goal.
pub fn goal_target(key: &str, goal: &NutrientGoal) -> String {
    format!(
        "{} {}{}",
        goal.comparison.symbol(),
        number(goal.value),
        unit_of(key)
    )
}

pub fn tolerance(goal: &NutrientGoal) -> String {
    format!("±{}%", number(goal.tolerance))
}

pub fn portion(quantity: f64, unit: &str) -> String {
    format!("{} {}", number(quantity), unit)
}

/// File-name friendly version of a plan name.
pub fn slug(name: &str) -> String {
    name.to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_round_half_up() {
        assert_eq!(round(2.5), 3);
        assert_eq!(round(9.5), 10);
        assert_eq!(round(0.48), 0);
        assert_eq!(round(67.8), 68);
        assert_eq!(round(-2.5), -2);
        assert_eq!(round(-0.2), 0);
    }

    #[test]
    fn test_round_tenths_half_up() {
        assert_eq!(round_tenths(0.25), "0.3");
        assert_eq!(round_tenths(2.45), "2.5");
        assert_eq!(round_tenths(0.39), "0.4");
        assert_eq!(round_tenths(0.0), "0.0");
        assert_eq!(round_tenths(12.0), "12.0");
    }

    #[test]
    fn test_number_display() {
        assert_eq!(number(100.0), "100");
        assert_eq!(number(80.5), "80.5");
        assert_eq!(number(-0.0), "0");
        assert_eq!(portion(1.5, "cup"), "1.5 cup");
    }

    #[test]
    fn test_goal_cells() {
        assert_eq!(goal_target("energy", &NutrientGoal::max(2000.0, 10.0)), "< 2000kcal");
        assert_eq!(goal_target("protein", &NutrientGoal::min(60.0, 15.0)), "> 60g");
        assert_eq!(goal_target("omega3", &NutrientGoal::min(1.5, 0.0)), "> 1.5");
        assert_eq!(tolerance(&NutrientGoal::min(60.0, 12.5)), "±12.5%");
    }

    #[test]
    fn test_slug() {
        assert_eq!(slug("Week 1  Cutting"), "week-1-cutting");
        assert_eq!(slug(" Plano  Março "), "plano-março");
    }

    #[test]
    fn test_options() {
        let date = datetime!(2024-03-01 08:00 UTC);

        assert_eq!(ReportOptions::default().format_date(date).unwrap(), "01/03/2024");
        assert_eq!(ReportOptions::default().locale(), "pt-BR");

        let options = ReportOptions::new("en", "[year]-[month]-[day]").unwrap();
        assert_eq!(options.format_date(date).unwrap(), "2024-03-01");

        assert!(matches!(
            ReportOptions::new("fr", DEFAULT_DATE_FORMAT),
            Err(ReportError::UnknownLocale(_))
        ));
        assert!(matches!(
            ReportOptions::new("en", "[nonsense"),
            Err(ReportError::InvalidDateFormat(_))
        ));
    }
}
