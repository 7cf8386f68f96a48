//! Dashboard report folds: the small derived figures the summary cards and
//! progress bars show next to the main metrics.

use serde::{Deserialize, Serialize};

/// Income vs expenses for one period (e.g. a month).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPerformance {
    pub label: String,
    pub income: f64,
    pub expenses: f64,
}

impl MonthlyPerformance {
    pub fn net(&self) -> f64 {
        self.income - self.expenses
    }

    /// round(net / income × 100), or 0 when there is no income.
    pub fn margin(&self) -> i64 {
        if self.income > 0.0 {
            ((self.net() / self.income) * 100.0).round() as i64
        } else {
            0
        }
    }

    /// round(expenses / income × 100), or 0 when there is no income.
    /// Renders as "N% consumed" on the progress bar.
    pub fn consumed(&self) -> i64 {
        if self.income > 0.0 {
            ((self.expenses / self.income) * 100.0).round() as i64
        } else {
            0
        }
    }
}

/// A spending budget with a usage bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    pub name: String,
    pub used: f64,
    pub limit: f64,
}

impl Budget {
    /// round(used / limit × 100), or 0 when the limit is zero. Can exceed
    /// 100 when the budget is blown; display clamping is the caller's call.
    pub fn utilization(&self) -> i64 {
        if self.limit > 0.0 {
            ((self.used / self.limit) * 100.0).round() as i64
        } else {
            0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_and_consumed_round_to_whole_percents() {
        let september = MonthlyPerformance {
            label: "Sep".to_string(),
            income: 11_200.0,
            expenses: 8_100.0,
        };
        assert_eq!(september.net(), 3_100.0);
        assert_eq!(september.margin(), 28);
        assert_eq!(september.consumed(), 72);
    }

    #[test]
    fn zero_income_yields_zero_percentages() {
        let dead = MonthlyPerformance {
            label: "Ene".to_string(),
            income: 0.0,
            expenses: 500.0,
        };
        assert_eq!(dead.margin(), 0);
        assert_eq!(dead.consumed(), 0);
    }

    #[test]
    fn budget_utilization() {
        let inventario = Budget {
            name: "Inventario".to_string(),
            used: 3_400.0,
            limit: 5_000.0,
        };
        assert_eq!(inventario.utilization(), 68);

        let blown = Budget {
            name: "Marketing".to_string(),
            used: 3_000.0,
            limit: 2_500.0,
        };
        assert_eq!(blown.utilization(), 120);

        let unlimited = Budget {
            name: "Servicios".to_string(),
            used: 720.0,
            limit: 0.0,
        };
        assert_eq!(unlimited.utilization(), 0);
    }
}
