//! Chart generation and rendering for the dashboard.
//!
//! This module creates ECharts visualizations for the aggregated data:
//! - **Monthly Overview**: net totals per month in first-seen order
//! - **Category Breakdown**: expense share per category as a pie chart
//! - **Budget vs Actual**: planned against actual spend for one month
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with corresponding HTML containers and JavaScript initialization
//! code.

use charming::{
    Chart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger,
    },
    series::{Bar, Pie},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    dashboard::aggregation::{BudgetComparison, CategoryTotal, MonthlyTotal},
    html::HeadElement,
};

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Renders the HTML containers for dashboard charts.
pub(super) fn charts_view(charts: &[DashboardChart]) -> Markup {
    html!(
        section id="charts" class="charts-grid"
        {
            @for chart in charts {
                div id=(chart.id) class="chart" {}
            }
        }
    )
}

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances and resize them with the
/// window.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    chart.setOption({});

                    window.addEventListener('resize', chart.resize);
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}

pub(super) fn monthly_chart(totals: &[MonthlyTotal]) -> Chart {
    let labels: Vec<String> = totals.iter().map(|entry| entry.month.clone()).collect();
    let values: Vec<f64> = totals.iter().map(|entry| entry.total).collect();

    Chart::new()
        .title(Title::new().text("Monthly Overview").subtext("Net per month"))
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Bar::new().name("Total").data(values))
}

pub(super) fn category_chart(totals: &[CategoryTotal]) -> Chart {
    let data: Vec<(f64, &str)> = totals
        .iter()
        .map(|entry| (entry.total, entry.category.as_str()))
        .collect();

    Chart::new()
        .title(
            Title::new()
                .text("Category Breakdown")
                .subtext("Expenses only"),
        )
        .tooltip(Tooltip::new().value_formatter(currency_formatter()))
        .legend(Legend::new().bottom("1%"))
        .series(Pie::new().name("Spent").radius("60%").data(data))
}

pub(super) fn budget_chart(comparisons: &[BudgetComparison], month_label: &str) -> Chart {
    let labels: Vec<&str> = comparisons
        .iter()
        .map(|comparison| comparison.category.as_str())
        .collect();
    let planned: Vec<f64> = comparisons
        .iter()
        .map(|comparison| comparison.budget)
        .collect();
    let actual: Vec<f64> = comparisons
        .iter()
        .map(|comparison| comparison.actual)
        .collect();

    Chart::new()
        .title(Title::new().text("Budget vs Actual").subtext(month_label))
        .tooltip(currency_tooltip())
        .legend(Legend::new().right("4%"))
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        )
        .series(Bar::new().name("Budget").data(planned))
        .series(Bar::new().name("Actual").data(actual))
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
