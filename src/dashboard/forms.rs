//! Entry forms and the month selector for the dashboard.
//!
//! The forms post JSON to the API routes with a small inline script rather
//! than using regular form encoding, so the page shares the same code paths
//! as API clients.

use maud::{Markup, PreEscaped, html};

use crate::{category::Category, endpoints, html::HeadElement};

/// Renders the form for adding a transaction.
pub(super) fn transaction_form_view() -> Markup {
    html! {
        form id="transaction-form" class="entry-form" {
            h3 { "Add Transaction" }

            label for="transaction-amount" { "Amount" }
            input
                id="transaction-amount"
                name="amount"
                type="number"
                min="0.01"
                step="0.01"
                required;

            label for="transaction-description" { "Description" }
            input
                id="transaction-description"
                name="description"
                type="text"
                required;

            label for="transaction-date" { "Date" }
            input id="transaction-date" name="date" type="date" required;

            label for="transaction-category" { "Category" }
            (category_select("transaction-category"))

            label for="transaction-kind" { "Type" }
            select id="transaction-kind" name="type" {
                option value="expense" selected { "Expense" }
                option value="income" { "Income" }
            }

            button type="submit" { "Add" }
        }
    }
}

/// Renders the form for setting a monthly budget.
pub(super) fn budget_form_view() -> Markup {
    html! {
        form id="budget-form" class="entry-form" {
            h3 { "Set Budget" }

            label for="budget-category" { "Category" }
            (category_select("budget-category"))

            label for="budget-month" { "Month" }
            input id="budget-month" name="month" type="month" required;

            label for="budget-amount" { "Amount" }
            input
                id="budget-amount"
                name="amount"
                type="number"
                min="0"
                step="0.01"
                required;

            button type="submit" { "Set" }
        }
    }
}

fn category_select(id: &str) -> Markup {
    html! {
        select id=(id) name="category" {
            @for category in Category::ALL {
                option value=(category.as_str()) { (category.as_str()) }
            }
        }
    }
}

/// Renders the month picker that selects which month the budget comparison
/// chart shows. Changing the month reloads the page with a `month` query
/// parameter.
pub(super) fn month_selector_view(selected_month: &str) -> Markup {
    html! {
        form id="month-selector" method="get" action=(endpoints::DASHBOARD_VIEW) {
            label for="month" { "Budget month" }
            input
                id="month"
                name="month"
                type="month"
                value=(selected_month)
                onchange="this.form.submit()";
        }
    }
}

/// The inline script that submits the entry forms as JSON and wires up the
/// delete buttons on the recent transactions card.
pub(super) fn forms_script() -> HeadElement {
    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
    function submitAsJson(formId, url, buildBody) {{
        const form = document.getElementById(formId);
        if (!form) return;
        form.addEventListener('submit', async function(event) {{
            event.preventDefault();
            const data = new FormData(form);
            const response = await fetch(url, {{
                method: 'POST',
                headers: {{ 'Content-Type': 'application/json' }},
                body: JSON.stringify(buildBody(data)),
            }});
            if (response.ok) {{
                location.reload();
            }} else {{
                const body = await response.json();
                alert(body.error);
            }}
        }});
    }}

    submitAsJson('transaction-form', '{transactions_api}', (data) => ({{
        amount: Number(data.get('amount')),
        description: data.get('description'),
        date: data.get('date'),
        category: data.get('category'),
        type: data.get('type'),
    }}));

    submitAsJson('budget-form', '{budgets_api}', (data) => ({{
        category: data.get('category'),
        month: data.get('month'),
        amount: Number(data.get('amount')),
    }}));

    document.querySelectorAll('.delete-button').forEach(function(button) {{
        button.addEventListener('click', async function() {{
            const id = button.dataset.transactionId;
            const response = await fetch('{transactions_api}?id=' + id, {{ method: 'DELETE' }});
            if (response.ok) {{
                location.reload();
            }} else {{
                const body = await response.json();
                alert(body.error);
            }}
        }});
    }});
}});"#,
        transactions_api = endpoints::TRANSACTIONS_API,
        budgets_api = endpoints::BUDGETS_API,
    );

    HeadElement::ScriptSource(PreEscaped(script))
}
