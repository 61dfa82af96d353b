//! Card components for the dashboard summary row.
//!
//! Provides the at-a-glance cards shown above the charts:
//! - Net total across all transactions
//! - The three most recently added transactions
//! - The category with the highest expense total
//!
//! Also renders the savings goals section with progress bars.

use maud::{Markup, html};

use crate::{
    dashboard::aggregation::{CategoryTotal, top_category},
    goal::Goal,
    html::format_currency,
    transaction::{Transaction, TransactionKind},
};

/// How many transactions the "Recent Transactions" card shows.
const RECENT_TRANSACTION_COUNT: usize = 3;

/// Renders the summary card row.
pub(super) fn summary_cards_view(
    net_total: f64,
    transactions: &[Transaction],
    category_totals: &[CategoryTotal],
) -> Markup {
    html! {
        section id="summary" class="card-grid" {
            (net_total_card(net_total))
            (recent_transactions_card(transactions))
            (top_category_card(category_totals))
        }
    }
}

fn net_total_card(net_total: f64) -> Markup {
    html! {
        div class="card" {
            h3 class="card-title" { "Net Total" }
            p class="card-value" { (format_currency(net_total)) }
        }
    }
}

/// Renders the most recently added transactions, newest first.
fn recent_transactions_card(transactions: &[Transaction]) -> Markup {
    let recent = transactions.iter().rev().take(RECENT_TRANSACTION_COUNT);

    html! {
        div class="card" {
            h3 class="card-title" { "Recent Transactions" }

            @if transactions.is_empty() {
                p class="card-empty" { "No transactions yet." }
            } @else {
                ul class="recent-list" {
                    @for transaction in recent {
                        li class="recent-item" {
                            span class="recent-description" { (transaction.description) }
                            span class="recent-amount" {
                                @if transaction.kind == TransactionKind::Income {
                                    "+" (format_currency(transaction.amount))
                                } @else {
                                    (format_currency(transaction.amount))
                                }
                            }
                            button
                                class="delete-button"
                                data-transaction-id=(transaction.id)
                            {
                                "Delete"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Renders the category with the highest expense total, or "N/A" when there
/// are no expenses.
fn top_category_card(category_totals: &[CategoryTotal]) -> Markup {
    let label = match top_category(category_totals) {
        Some(category) => category.as_str(),
        None => "N/A",
    };

    html! {
        div class="card" {
            h3 class="card-title" { "Top Category" }
            p class="card-value" { (label) }
        }
    }
}

/// Renders the savings goals section.
///
/// Omitted entirely when no goals exist.
pub(super) fn goals_view(goals: &[Goal]) -> Markup {
    if goals.is_empty() {
        return html! {};
    }

    html! {
        section id="goals" class="goals" {
            h2 { "Savings Goals" }

            div class="card-grid" {
                @for goal in goals {
                    (goal_card(goal))
                }
            }
        }
    }
}

fn goal_card(goal: &Goal) -> Markup {
    let progress = goal.progress();
    let percentage = progress * 100.0;

    html! {
        div class="card" {
            h3 class="card-title" { (goal.name) }
            p class="card-value" {
                (format_currency(goal.saved)) " of " (format_currency(goal.target))
            }
            div
                class="progress-track"
                role="progressbar"
                aria-valuenow=(format!("{percentage:.0}"))
                aria-valuemin="0"
                aria-valuemax="100"
            {
                @if progress > 0.0 {
                    div class="progress-fill" style=(format!("width: {percentage:.1}%")) {}
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use crate::{
        category::Category,
        dashboard::{
            aggregation::CategoryTotal,
            cards::{goals_view, summary_cards_view},
        },
        goal::Goal,
        transaction::{Transaction, TransactionKind},
    };

    fn test_transaction(id: i64, description: &str) -> Transaction {
        Transaction {
            id,
            amount: 10.0,
            description: description.to_owned(),
            date: date!(2025 - 07 - 01),
            category: Category::Food,
            kind: TransactionKind::Expense,
        }
    }

    #[test]
    fn shows_net_total() {
        let html = summary_cards_view(1234.56, &[], &[]).into_string();

        assert!(html.contains("$1,234.56"));
    }

    #[test]
    fn shows_three_most_recent_transactions_newest_first() {
        let transactions = vec![
            test_transaction(1, "oldest"),
            test_transaction(2, "older"),
            test_transaction(3, "newer"),
            test_transaction(4, "newest"),
        ];

        let html = summary_cards_view(0.0, &transactions, &[]).into_string();

        assert!(!html.contains("oldest"));
        let newest_position = html.find("newest").unwrap();
        let newer_position = html.find("newer").unwrap();
        let older_position = html.find("older").unwrap();
        assert!(newest_position < newer_position);
        assert!(newer_position < older_position);
    }

    #[test]
    fn shows_empty_state_without_transactions() {
        let html = summary_cards_view(0.0, &[], &[]).into_string();

        assert!(html.contains("No transactions yet."));
    }

    #[test]
    fn shows_top_category() {
        let totals = vec![
            CategoryTotal {
                category: Category::Food,
                total: 50.0,
            },
            CategoryTotal {
                category: Category::Bills,
                total: 120.0,
            },
        ];

        let html = summary_cards_view(0.0, &[], &totals).into_string();

        assert!(html.contains("Bills"));
    }

    #[test]
    fn shows_not_applicable_without_expenses() {
        let html = summary_cards_view(0.0, &[], &[]).into_string();

        assert!(html.contains("N/A"));
    }

    #[test]
    fn goals_section_omitted_when_empty() {
        let html = goals_view(&[]).into_string();

        assert!(html.is_empty());
    }

    #[test]
    fn goal_card_shows_progress() {
        let goals = vec![Goal {
            id: 1,
            name: "Emergency Fund".to_owned(),
            target: 1000.0,
            saved: 250.0,
        }];

        let html = goals_view(&goals).into_string();

        assert!(html.contains("Emergency Fund"));
        assert!(html.contains("$250.00"));
        assert!(html.contains("$1,000.00"));
        assert!(html.contains("width: 25.0%"));
    }
}
