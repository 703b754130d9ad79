//! Balance display formatting

use crate::services::BalanceSummary;

/// Format spent, remaining and zone for the balance view
pub fn format_balance(summary: &BalanceSummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "Budget:      {:.2} {}\n",
        summary.monthly_budget, currency
    ));
    output.push_str(&format!("Total Spent: {:.2} {}\n", summary.spent, currency));
    output.push_str(&format!(
        "Remaining:   {:.2} {}\n",
        summary.remaining, currency
    ));
    output.push_str(&format!("Used:        {:.1}%\n", summary.percent_used));
    output.push_str(&format!(
        "Status:      {} - {}\n",
        summary.zone,
        summary.zone.advice()
    ));

    output
}
