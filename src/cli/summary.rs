use std::io::Write;
use std::path::Path;

use nutriplan_report::PlanSummary;

use crate::config::Config;

pub fn summary(config: &Config, plan: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let foods = super::load_foods(config)?;
    let plan = super::load_plan(plan)?;

    let summary = PlanSummary::build(&plan, &foods);
    let violations = summary.violations().count();
    if violations > 0 {
        tracing::warn!(plan = %plan.name, violations, "plan misses some goals");
    }

    write!(out, "{summary}")?;

    Ok(())
}
