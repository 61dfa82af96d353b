//! Transaction data aggregation and transformation for charts.
//!
//! Provides pure functions to aggregate transactions by month and category,
//! compare actual spending against budgets, and pick the top spending
//! category. These functions hold no state and do no I/O; handlers fetch the
//! records and pass them in.

use std::collections::HashMap;

use time::{Date, macros::format_description};

use crate::{
    Error,
    budget::{Budget, parse_month_key},
    category::Category,
    transaction::{Transaction, TransactionKind},
};

/// The net amount for one calendar month.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyTotal {
    /// The month label, e.g. "Jul 2025".
    pub month: String,
    /// The net amount for the month: expenses add, income subtracts.
    pub total: f64,
}

/// The summed expense amount for one category.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    /// The category.
    pub category: Category,
    /// The summed expense amount.
    pub total: f64,
}

/// Actual spending against the planned budget for one category in a month.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetComparison {
    /// The category.
    pub category: Category,
    /// The summed expense amount for the selected month.
    pub actual: f64,
    /// The planned amount, or zero if no budget matches the month.
    pub budget: f64,
}

/// Format a date as a "short month + full year" label, e.g. "Jul 2025".
///
/// This label is the grouping key for monthly aggregates: two dates in the
/// same month and year always produce the same label.
pub fn month_label(date: Date) -> String {
    date.format(format_description!("[month repr:short] [year]"))
        // The format description only uses infallible components.
        .expect("formatting a date as a month label should not fail")
}

/// Aggregate net transaction amounts by month.
///
/// Months appear in the order they are first seen in `transactions`, keyed by
/// their formatted label. Expenses add to a month's total and income
/// subtracts from it.
///
/// # Returns
/// One [MonthlyTotal] per distinct month label, in first-seen order. Empty
/// input produces an empty vector.
pub fn monthly_totals(transactions: &[Transaction]) -> Vec<MonthlyTotal> {
    let mut totals: Vec<MonthlyTotal> = Vec::new();
    let mut index_by_label: HashMap<String, usize> = HashMap::new();

    for transaction in transactions {
        let label = month_label(transaction.date);
        let amount = transaction.kind.signum() * transaction.amount;

        match index_by_label.get(&label) {
            Some(&index) => totals[index].total += amount,
            None => {
                index_by_label.insert(label.clone(), totals.len());
                totals.push(MonthlyTotal {
                    month: label,
                    total: amount,
                });
            }
        }
    }

    totals
}

/// Aggregate expense amounts by category.
///
/// Every category starts at zero and only expense transactions are counted;
/// income does not appear in the category breakdown. Categories whose total
/// is still zero are omitted from the output.
///
/// # Returns
/// One [CategoryTotal] per category with a non-zero total, in [Category::ALL]
/// order. Empty input produces an empty vector.
pub fn category_totals(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: HashMap<Category, f64> =
        Category::ALL.iter().map(|&category| (category, 0.0)).collect();

    for transaction in transactions {
        if transaction.kind == TransactionKind::Expense {
            *totals.entry(transaction.category).or_insert(0.0) += transaction.amount;
        }
    }

    Category::ALL
        .iter()
        .copied()
        .filter(|category| totals[category] > 0.0)
        .map(|category| CategoryTotal {
            category,
            total: totals[&category],
        })
        .collect()
}

/// Compare actual spending against planned budgets for one month.
///
/// Actual spend counts expense transactions whose month label matches the
/// label of `month_key`. Planned amounts come from budgets whose `month`
/// field equals `month_key`; a category without a matching budget reports a
/// planned amount of zero. When several budgets match the same (category,
/// month) pair, the last one wins.
///
/// # Returns
/// One [BudgetComparison] per category, in [Category::ALL] order.
///
/// # Errors
/// Returns an [Error::InvalidMonthKey] if `month_key` is not a "YYYY-MM"
/// string.
pub fn budget_vs_actual(
    transactions: &[Transaction],
    budgets: &[Budget],
    month_key: &str,
) -> Result<Vec<BudgetComparison>, Error> {
    let (year, month) = parse_month_key(month_key)?;
    let selected_label = month_label(
        Date::from_calendar_date(year, month, 1)
            .map_err(|_| Error::InvalidMonthKey(month_key.to_owned()))?,
    );

    let mut actual: HashMap<Category, f64> = HashMap::new();
    let mut planned: HashMap<Category, f64> = HashMap::new();

    for transaction in transactions {
        if transaction.kind == TransactionKind::Expense
            && month_label(transaction.date) == selected_label
        {
            *actual.entry(transaction.category).or_insert(0.0) += transaction.amount;
        }
    }

    for budget in budgets {
        if budget.month == month_key {
            planned.insert(budget.category, budget.amount);
        }
    }

    Ok(Category::ALL
        .iter()
        .map(|&category| BudgetComparison {
            category,
            actual: actual.get(&category).copied().unwrap_or(0.0),
            budget: planned.get(&category).copied().unwrap_or(0.0),
        })
        .collect())
}

/// The category with the largest expense total, if any.
///
/// Ties are broken in favour of the category that comes first in
/// [Category::ALL]. Returns `None` when there are no expense transactions;
/// the dashboard renders this as "N/A".
pub fn top_category(totals: &[CategoryTotal]) -> Option<Category> {
    let mut top: Option<&CategoryTotal> = None;

    // Strictly-greater comparison keeps the first category on ties, and
    // `totals` is already in enumeration order.
    for entry in totals {
        if top.is_none_or(|current| entry.total > current.total) {
            top = Some(entry);
        }
    }

    top.map(|entry| entry.category)
}

/// The net amount across all transactions: expenses add, income subtracts.
///
/// This equals the sum of all [monthly_totals] entries.
pub fn net_total(transactions: &[Transaction]) -> f64 {
    transactions
        .iter()
        .map(|transaction| transaction.kind.signum() * transaction.amount)
        .sum()
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        category::Category,
        dashboard::aggregation::{
            BudgetComparison, CategoryTotal, MonthlyTotal, budget_vs_actual, category_totals,
            month_label, monthly_totals, net_total, top_category,
        },
        transaction::{Transaction, TransactionKind},
    };

    fn expense(amount: f64, date: time::Date, category: Category) -> Transaction {
        Transaction {
            id: 0,
            amount,
            description: "test".to_owned(),
            date,
            category,
            kind: TransactionKind::Expense,
        }
    }

    fn income(amount: f64, date: time::Date) -> Transaction {
        Transaction {
            kind: TransactionKind::Income,
            ..expense(amount, date, Category::Other)
        }
    }

    #[test]
    fn month_label_uses_short_month_and_full_year() {
        assert_eq!(month_label(date!(2025 - 07 - 01)), "Jul 2025");
        assert_eq!(month_label(date!(2024 - 12 - 31)), "Dec 2024");
    }

    #[test]
    fn monthly_totals_merges_dates_in_the_same_month() {
        let transactions = vec![
            expense(100.0, date!(2025 - 07 - 01), Category::Food),
            expense(50.0, date!(2025 - 07 - 15), Category::Food),
        ];

        let totals = monthly_totals(&transactions);

        assert_eq!(
            totals,
            vec![MonthlyTotal {
                month: "Jul 2025".to_owned(),
                total: 150.0
            }]
        );
    }

    #[test]
    fn monthly_totals_orders_months_by_first_occurrence() {
        let transactions = vec![
            expense(10.0, date!(2025 - 08 - 02), Category::Food),
            expense(20.0, date!(2025 - 07 - 20), Category::Bills),
            expense(30.0, date!(2025 - 08 - 10), Category::Travel),
        ];

        let totals = monthly_totals(&transactions);

        assert_eq!(
            totals,
            vec![
                MonthlyTotal {
                    month: "Aug 2025".to_owned(),
                    total: 40.0
                },
                MonthlyTotal {
                    month: "Jul 2025".to_owned(),
                    total: 20.0
                },
            ]
        );
    }

    #[test]
    fn monthly_totals_is_insensitive_to_input_permutation() {
        let transactions = vec![
            expense(10.0, date!(2025 - 06 - 02), Category::Food),
            expense(20.0, date!(2025 - 07 - 20), Category::Bills),
            income(5.0, date!(2025 - 06 - 28)),
            expense(30.0, date!(2025 - 08 - 10), Category::Travel),
        ];
        let mut reversed = transactions.clone();
        reversed.reverse();

        let mut forward_totals = monthly_totals(&transactions);
        let mut reverse_totals = monthly_totals(&reversed);

        forward_totals.sort_by(|a, b| a.month.cmp(&b.month));
        reverse_totals.sort_by(|a, b| a.month.cmp(&b.month));

        assert_eq!(forward_totals, reverse_totals);
    }

    #[test]
    fn monthly_totals_subtracts_income() {
        let transactions = vec![
            expense(100.0, date!(2025 - 07 - 01), Category::Bills),
            income(60.0, date!(2025 - 07 - 14)),
        ];

        let totals = monthly_totals(&transactions);

        assert_eq!(totals[0].total, 40.0);
    }

    #[test]
    fn monthly_totals_handles_empty_input() {
        assert!(monthly_totals(&[]).is_empty());
    }

    #[test]
    fn category_totals_sums_expenses_per_category() {
        let transactions = vec![
            expense(100.0, date!(2025 - 07 - 01), Category::Food),
            expense(50.0, date!(2025 - 07 - 15), Category::Food),
        ];

        let totals = category_totals(&transactions);

        assert_eq!(
            totals,
            vec![CategoryTotal {
                category: Category::Food,
                total: 150.0
            }]
        );
    }

    #[test]
    fn category_totals_omits_zero_categories_and_keeps_enumeration_order() {
        let transactions = vec![
            expense(30.0, date!(2025 - 07 - 03), Category::Travel),
            expense(100.0, date!(2025 - 07 - 01), Category::Food),
            expense(20.0, date!(2025 - 07 - 02), Category::Bills),
        ];

        let totals = category_totals(&transactions);

        let categories: Vec<_> = totals.iter().map(|entry| entry.category).collect();
        assert_eq!(
            categories,
            vec![Category::Food, Category::Bills, Category::Travel]
        );
    }

    #[test]
    fn category_totals_excludes_income() {
        let transactions = vec![
            expense(100.0, date!(2025 - 07 - 01), Category::Food),
            income(500.0, date!(2025 - 07 - 02)),
        ];

        let totals = category_totals(&transactions);

        assert_eq!(
            totals,
            vec![CategoryTotal {
                category: Category::Food,
                total: 100.0
            }]
        );
    }

    #[test]
    fn category_totals_handles_empty_input() {
        assert!(category_totals(&[]).is_empty());
    }

    #[test]
    fn expense_totals_reconcile_across_groupings() {
        let transactions = vec![
            expense(100.0, date!(2025 - 06 - 01), Category::Food),
            expense(50.0, date!(2025 - 07 - 15), Category::Shopping),
            expense(25.0, date!(2025 - 08 - 20), Category::Food),
        ];

        let category_sum: f64 = category_totals(&transactions)
            .iter()
            .map(|entry| entry.total)
            .sum();
        let monthly_sum: f64 = monthly_totals(&transactions)
            .iter()
            .map(|entry| entry.total)
            .sum();

        assert_eq!(category_sum, monthly_sum);
        assert_eq!(monthly_sum, net_total(&transactions));
    }

    #[test]
    fn budget_vs_actual_matches_month_and_budget() {
        let transactions = vec![
            expense(100.0, date!(2025 - 07 - 01), Category::Food),
            expense(50.0, date!(2025 - 07 - 15), Category::Food),
            // Different month, should not count.
            expense(75.0, date!(2025 - 06 - 15), Category::Food),
        ];
        let budgets = vec![crate::budget::Budget {
            id: 1,
            category: Category::Food,
            month: "2025-07".to_owned(),
            amount: 200.0,
        }];

        let comparisons = budget_vs_actual(&transactions, &budgets, "2025-07").unwrap();

        assert_eq!(
            comparisons[0],
            BudgetComparison {
                category: Category::Food,
                actual: 150.0,
                budget: 200.0
            }
        );
        // Categories without budgets report a planned amount of zero.
        assert!(
            comparisons[1..]
                .iter()
                .all(|comparison| comparison.actual == 0.0 && comparison.budget == 0.0)
        );
        assert_eq!(comparisons.len(), Category::ALL.len());
    }

    #[test]
    fn budget_vs_actual_rejects_bad_month_key() {
        let result = budget_vs_actual(&[], &[], "July 2025");

        assert!(result.is_err());
    }

    #[test]
    fn top_category_picks_largest_total() {
        let transactions = vec![
            expense(100.0, date!(2025 - 07 - 01), Category::Food),
            expense(250.0, date!(2025 - 07 - 02), Category::Bills),
        ];

        let top = top_category(&category_totals(&transactions));

        assert_eq!(top, Some(Category::Bills));
    }

    #[test]
    fn top_category_breaks_ties_by_enumeration_order() {
        let transactions = vec![
            expense(100.0, date!(2025 - 07 - 01), Category::Travel),
            expense(100.0, date!(2025 - 07 - 02), Category::Shopping),
        ];

        let top = top_category(&category_totals(&transactions));

        // Shopping comes before Travel in the enumeration.
        assert_eq!(top, Some(Category::Shopping));
    }

    #[test]
    fn top_category_is_none_for_empty_input() {
        assert_eq!(top_category(&category_totals(&[])), None);
    }
}
