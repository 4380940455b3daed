use std::fmt::Write;

use calculator::{CalculationView, CalculatorInputs, InputField, RowView, TABLE_HEADERS};

const INPUTS_SLOT: &str = "<!--inputs-->";
const HEADERS_SLOT: &str = "<!--headers-->";
const ROWS_SLOT: &str = "<!--rows-->";

pub fn module_ready() -> bool {
    true
}

pub fn index_template() -> &'static str {
    include_str!("../static/index.html")
}

pub fn styles_css() -> &'static str {
    include_str!("../static/styles.css")
}

pub fn app_js() -> &'static str {
    include_str!("../static/app.js")
}

/// Fills the page template with the form fields and a pre-rendered table so
/// the first paint matches what the script would draw.
pub fn render_index(inputs: &CalculatorInputs, view: &CalculationView) -> String {
    index_template()
        .replace(INPUTS_SLOT, &render_inputs(inputs, view))
        .replace(HEADERS_SLOT, &render_headers())
        .replace(ROWS_SLOT, &render_rows(view))
}

fn render_inputs(inputs: &CalculatorInputs, view: &CalculationView) -> String {
    let mut html = String::new();
    for field in InputField::ALL {
        // Whole trades only; the other fields take decimals.
        let step = match field {
            InputField::NumberOfTrades => "",
            _ => " step=\"any\"",
        };
        let _ = writeln!(
            html,
            "        <label>{label}<input type=\"number\" name=\"{name}\" value=\"{value}\"{step} /></label>",
            label = field.label(),
            name = field.as_str(),
            value = inputs.get(field),
        );

        match field {
            InputField::NumberOfTrades => {
                push_derived(&mut html, "Loss per Trade ($)", "loss_per_trade", &view.loss_per_trade)
            }
            InputField::TakeProfitPercent => {
                push_derived(&mut html, "Position Size ($)", "position_size", &view.position_size)
            }
            _ => {}
        }
    }
    html
}

fn push_derived(html: &mut String, label: &str, id: &str, value: &str) {
    let _ = writeln!(
        html,
        "        <label>{label}<input id=\"{id}\" type=\"number\" value=\"{value}\" disabled /></label>"
    );
}

fn render_headers() -> String {
    let mut html = String::new();
    for header in TABLE_HEADERS {
        let _ = writeln!(html, "            <th>{header}</th>");
    }
    html
}

fn render_rows(view: &CalculationView) -> String {
    if let Some(message) = view.empty_message {
        return format!(
            "          <tr><td colspan=\"{}\">{message}</td></tr>\n",
            TABLE_HEADERS.len()
        );
    }

    view.rows.iter().map(render_row).collect()
}

fn render_row(row: &RowView) -> String {
    let margin_class = if row.margin_exceeds_capital {
        " class=\"margin-too-high\""
    } else {
        ""
    };

    format!(
        "          <tr class=\"{tier}\"><td>{leverage}</td><td{margin_class}>{margin}</td><td>{stop_loss}</td><td>{take_profit}</td><td class=\"profit\">{profit}</td></tr>\n",
        tier = row.tier_class,
        leverage = row.leverage,
        margin = row.margin,
        stop_loss = row.stop_loss,
        take_profit = row.take_profit,
        profit = row.profit,
    )
}
