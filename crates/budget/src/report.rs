//! Plain-text rendering of dashboard, debt and goal views

use budget_core::analysis::{PolicyComparison, ScenarioComparison, ScenarioSummary};
use budget_core::budget_rule::{NEEDS_TARGET, SAVINGS_TARGET, WANTS_TARGET};
use budget_core::chart::{ChartPoint, sample_schedule};
use budget_core::format::{
    DEFAULT_PERCENT_DECIMALS, format_compact_currency, format_currency, format_months,
    format_percentage,
};
use budget_core::goals::GoalProjection;
use budget_core::payoff::DebtPayoffEstimate;
use budget_core::simulation::PayoffSchedule;

const BAR_WIDTH: usize = 30;
/// Longer charts only show year markers
const MAX_CHART_ROWS: usize = 25;

/// Renders views as lines of text
#[derive(Debug, Clone, Copy, Default)]
pub struct Report {
    pub show_cents: bool,
}

impl Report {
    pub fn new(show_cents: bool) -> Self {
        Self { show_cents }
    }

    fn money(&self, amount: f64) -> String {
        format_currency(amount, self.show_cents)
    }

    fn percent(value: f64) -> String {
        format_percentage(value, DEFAULT_PERCENT_DECIMALS)
    }

    /// Dashboard for one scenario, optionally against the other scenario
    pub fn summary(
        &self,
        summary: &ScenarioSummary,
        versus: Option<&ScenarioComparison>,
    ) -> String {
        let mut lines = vec![
            format!("== {} ==", summary.name),
            format!("Monthly income      {}", self.money(summary.total_income)),
            format!(
                "Monthly expenses    {}  (fixed {}, variable {})",
                self.money(summary.total_expenses),
                self.money(summary.expense_split.fixed),
                self.money(summary.expense_split.variable)
            ),
            format!("Debt payments       {}", self.money(summary.total_debt_payments)),
            format!("Goal contributions  {}", self.money(summary.total_goal_contributions)),
        ];

        let surplus_label = if summary.is_deficit() { "Net deficit" } else { "Net surplus" };
        lines.push(format!("{surplus_label:<20}{}", self.money(summary.net_surplus)));
        lines.push(format!("Savings rate        {}", Self::percent(summary.savings_rate)));

        lines.push(String::new());
        lines.push(format!(
            "Debt free in        {}  ({} owed, {} interest)",
            format_months(summary.months_to_debt_free),
            self.money(summary.total_debt_balance),
            self.money(summary.total_interest)
        ));

        let fund = &summary.emergency_fund;
        if fund.has_goal {
            lines.push(format!(
                "Emergency fund      {} of {} ({}), target in {}",
                self.money(fund.current),
                self.money(fund.target),
                Self::percent(fund.progress),
                format_months(fund.months_to_target)
            ));
        } else {
            lines.push(format!(
                "Emergency fund      no emergency goal (target {})",
                self.money(fund.target)
            ));
        }

        if !summary.expenses_by_category.is_empty() {
            lines.push(String::new());
            lines.push("Spending by category".to_string());
            for (category, amount) in &summary.expenses_by_category {
                let share = if summary.total_expenses > 0.0 {
                    amount / summary.total_expenses * 100.0
                } else {
                    0.0
                };
                lines.push(format!(
                    "  {:<18}{:>12}  {}",
                    category.display_name(),
                    self.money(*amount),
                    Self::percent(share)
                ));
            }
        }

        let allocation = &summary.allocation;
        lines.push(String::new());
        lines.push("50/30/20 rule".to_string());
        for (name, bucket, target) in [
            ("Needs", &allocation.needs, NEEDS_TARGET),
            ("Wants", &allocation.wants, WANTS_TARGET),
            ("Savings", &allocation.savings, SAVINGS_TARGET),
        ] {
            lines.push(format!(
                "  {:<8}{:>12}  {:>6} of {:>6}  {}",
                name,
                self.money(bucket.amount),
                Self::percent(bucket.percent),
                Self::percent(target),
                bucket.status.label()
            ));
        }
        lines.push(format!(
            "  Unallocated {}",
            Self::percent(allocation.unallocated_percent)
        ));

        if let Some(cmp) = versus {
            lines.push(String::new());
            lines.push("Compared with the other scenario".to_string());
            lines.push(format!("  Expenses      {}", self.signed_money(cmp.expenses_delta)));
            lines.push(format!("  Net surplus   {}", self.signed_money(cmp.net_surplus_delta)));
            lines.push(format!(
                "  Savings rate  {}",
                signed(Self::percent(cmp.savings_rate_delta), cmp.savings_rate_delta)
            ));
            if let Some(months) = cmp.debt_free_months_delta {
                let text = if months < 0 {
                    format!("{} sooner", format_months(Some(months.unsigned_abs() as u32)))
                } else if months > 0 {
                    format!("{} later", format_months(Some(months as u32)))
                } else {
                    "same month".to_string()
                };
                lines.push(format!("  Debt free     {text}"));
            }
        }

        lines.join("\n")
    }

    fn signed_money(&self, amount: f64) -> String {
        signed(self.money(amount), amount)
    }

    /// Per-debt estimates in priority order
    pub fn debts(&self, estimates: &[DebtPayoffEstimate]) -> String {
        if estimates.is_empty() {
            return "No debts".to_string();
        }

        let mut lines = vec![format!(
            "{:<20}{:>12}{:>12}{:>12}  {}",
            "Debt", "Payment", "Interest", "Principal", "Payoff"
        )];
        for estimate in estimates {
            let warning = if estimate.is_underwater() {
                "  (payment does not cover interest)"
            } else {
                ""
            };
            lines.push(format!(
                "{:<20}{:>12}{:>12}{:>12}  {}{}",
                estimate.name,
                self.money(estimate.monthly_payment),
                self.money(estimate.monthly_interest),
                self.money(estimate.principal_portion),
                format_months(estimate.months),
                warning
            ));
        }
        lines.join("\n")
    }

    /// Balance over time as a text bar chart
    pub fn schedule(&self, schedule: &PayoffSchedule) -> String {
        let points = sample_schedule(schedule);
        let peak = points
            .iter()
            .map(|p| p.total_balance)
            .fold(0.0_f64, f64::max);

        let mut lines = vec![format!(
            "Payoff schedule ({} policy, {})",
            schedule.policy,
            format_months(schedule.months_to_debt_free())
        )];
        lines.extend(
            points
                .iter()
                .filter(|p| p.year_marker || points.len() <= MAX_CHART_ROWS || p.month == 0)
                .map(|p| chart_row(p, peak)),
        );
        if let Some(last) = points.last()
            && !last.year_marker
            && points.len() > MAX_CHART_ROWS
            && last.month != 0
        {
            lines.push(chart_row(last, peak));
        }
        lines.join("\n")
    }

    pub fn policies(&self, comparison: &PolicyComparison) -> String {
        let mut lines = vec!["Policy comparison".to_string()];
        for outcome in [&comparison.independent, &comparison.cascade] {
            lines.push(format!(
                "  {:<12}{:>18}  {} interest",
                outcome.policy.as_str(),
                format_months(outcome.months_to_debt_free),
                self.money(outcome.total_interest)
            ));
        }
        match comparison.months_saved {
            Some(months) if months > 0 => lines.push(format!(
                "  Cascade saves {} and {}",
                format_months(Some(months)),
                self.money(comparison.interest_saved)
            )),
            Some(_) => lines.push("  Both policies finish in the same month".to_string()),
            None => lines.push("  Not every policy pays off within the horizon".to_string()),
        }
        lines.join("\n")
    }

    pub fn goals(&self, projections: &[GoalProjection]) -> String {
        if projections.is_empty() {
            return "No goals".to_string();
        }

        projections
            .iter()
            .map(|goal| {
                let status = if goal.is_complete() {
                    "Done!".to_string()
                } else {
                    format!(
                        "{} to go, {}",
                        self.money(goal.remaining),
                        format_months(goal.months_to_goal)
                    )
                };
                format!(
                    "{:<20}{} {:>6}  {}",
                    goal.name,
                    progress_bar(goal.progress),
                    Report::percent(goal.progress),
                    status
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

fn signed(text: String, value: f64) -> String {
    if value > 0.0 { format!("+{text}") } else { text }
}

fn progress_bar(progress: f64) -> String {
    let filled = ((progress.clamp(0.0, 100.0) / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

fn chart_row(point: &ChartPoint, peak: f64) -> String {
    let width = if peak > 0.0 {
        ((point.total_balance / peak) * BAR_WIDTH as f64).round() as usize
    } else {
        0
    };
    format!(
        "  {:<7}{:>8}  {}",
        point.label,
        format_compact_currency(point.total_balance),
        "#".repeat(width.min(BAR_WIDTH))
    )
}
