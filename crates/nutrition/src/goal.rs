use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use validator::Validate;

use crate::aggregation::NutrientTotals;

#[derive(
    EnumString,
    Display,
    AsRefStr,
    Default,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Comparison {
    /// Actual value should reach at least the target.
    #[default]
    Min,
    /// Actual value should stay at most at the target.
    Max,
}

impl Comparison {
    pub fn symbol(&self) -> &'static str {
        match self {
            Comparison::Min => ">",
            Comparison::Max => "<",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct NutrientGoal {
    #[validate(range(min = 0.0))]
    pub value: f64,
    #[serde(rename = "type")]
    pub comparison: Comparison,
    #[validate(range(min = 0.0, max = 100.0))]
    pub tolerance: f64,
}

impl NutrientGoal {
    pub fn min(value: f64, tolerance: f64) -> Self {
        Self {
            value,
            comparison: Comparison::Min,
            tolerance,
        }
    }

    pub fn max(value: f64, tolerance: f64) -> Self {
        Self {
            value,
            comparison: Comparison::Max,
            tolerance,
        }
    }
}

#[derive(EnumString, Display, AsRefStr, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GoalStatus {
    Within,
    Below,
    Above,
    /// The goal targets zero, so no relative deviation exists.
    Undetermined,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GoalEvaluation {
    pub actual: f64,
    pub goal: NutrientGoal,
    pub deviation: Option<f64>,
    pub status: GoalStatus,
}

impl GoalEvaluation {
    /// True when the status lies on the side the goal's comparison forbids.
    pub fn is_violation(&self) -> bool {
        matches!(
            (self.goal.comparison, self.status),
            (Comparison::Min, GoalStatus::Below) | (Comparison::Max, GoalStatus::Above)
        )
    }
}

/// Classifies an actual value against one goal.
pub fn evaluate_goal(actual: f64, goal: &NutrientGoal) -> GoalEvaluation {
    if goal.value == 0.0 {
        return GoalEvaluation {
            actual,
            goal: *goal,
            deviation: None,
            status: GoalStatus::Undetermined,
        };
    }

    let deviation = (actual - goal.value) / goal.value;
    let status = if deviation.abs() <= goal.tolerance / 100.0 {
        GoalStatus::Within
    } else if actual < goal.value {
        GoalStatus::Below
    } else {
        GoalStatus::Above
    };

    GoalEvaluation {
        actual,
        goal: *goal,
        deviation: Some(deviation),
        status,
    }
}

/// Evaluates every goal against the totals; nutrients absent from the totals
/// count as zero.
pub fn evaluate(
    totals: &NutrientTotals,
    goals: &BTreeMap<String, NutrientGoal>,
) -> BTreeMap<String, GoalEvaluation> {
    goals
        .iter()
        .map(|(key, goal)| (key.to_owned(), evaluate_goal(totals.get(key), goal)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_boundaries() {
        let goal = NutrientGoal::min(100.0, 10.0);

        assert_eq!(evaluate_goal(90.0, &goal).status, GoalStatus::Within);
        assert_eq!(evaluate_goal(89.0, &goal).status, GoalStatus::Below);
        assert_eq!(evaluate_goal(100.0, &goal).status, GoalStatus::Within);
        assert_eq!(evaluate_goal(110.0, &goal).status, GoalStatus::Within);
        assert_eq!(evaluate_goal(111.0, &goal).status, GoalStatus::Above);
        assert_eq!(evaluate_goal(112.0, &goal).status, GoalStatus::Above);
    }

    #[test]
    fn test_zero_target_is_undetermined() {
        let goal = NutrientGoal::max(0.0, 10.0);
        let evaluation = evaluate_goal(12.0, &goal);

        assert_eq!(evaluation.status, GoalStatus::Undetermined);
        assert_eq!(evaluation.deviation, None);
        assert!(!evaluation.is_violation());
    }

    #[test]
    fn test_violation_depends_on_direction() {
        let min = NutrientGoal::min(50.0, 0.0);
        let max = NutrientGoal::max(50.0, 0.0);

        assert!(evaluate_goal(40.0, &min).is_violation());
        assert!(!evaluate_goal(60.0, &min).is_violation());
        assert!(evaluate_goal(60.0, &max).is_violation());
        assert!(!evaluate_goal(40.0, &max).is_violation());
        assert!(!evaluate_goal(50.0, &max).is_violation());
    }

    #[test]
    fn test_missing_nutrient_reads_zero() {
        let totals: NutrientTotals = [("energy", 1800.0)].into_iter().collect();
        let goals = BTreeMap::from([
            ("energy".to_owned(), NutrientGoal::max(2000.0, 10.0)),
            ("fiber".to_owned(), NutrientGoal::min(25.0, 20.0)),
        ]);

        let result = evaluate(&totals, &goals);

        assert_eq!(result.len(), 2);
        assert_eq!(result["energy"].status, GoalStatus::Within);
        assert_eq!(result["fiber"].actual, 0.0);
        assert_eq!(result["fiber"].status, GoalStatus::Below);
        assert!(result["fiber"].is_violation());
    }

    #[test]
    fn test_goal_json_shape() {
        let goal: NutrientGoal =
            serde_json::from_str(r#"{"value": 2000, "type": "max", "tolerance": 5}"#).unwrap();

        assert_eq!(goal, NutrientGoal::max(2000.0, 5.0));
        assert_eq!(goal.comparison.symbol(), "<");
        assert_eq!(goal.comparison.to_string(), "max");
    }
}
