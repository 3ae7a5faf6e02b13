//! Rendering of the derived values (the read-only part of the form).

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::{FormInputs, LedgerState, Overview};
use crate::utils::colors::{RESET, color_for_overtime};
use crate::utils::formatting::{bold, render_duration};
use crate::utils::table::Table;
use serde::Serialize;

#[derive(Serialize)]
struct OverviewJson {
    planned_end: String,
    actual_end: String,
    today: String,
    weekly_total: String,
    weekly_overtime_minutes: u32,
    total_overtime_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    grand_total: Option<String>,
}

pub fn print_overview(state: &LedgerState, inputs: &FormInputs, view: &Overview, cfg: &Config) {
    let sign = cfg.show_sign;
    let paint = |d: crate::models::Duration| {
        format!(
            "{}{}{}",
            color_for_overtime(d.total_minutes()),
            render_duration(d, sign),
            RESET
        )
    };

    let mut t = Table::new();
    t.add_row("Planned end", inputs.planned_end.to_string());
    t.add_row("Actual end", inputs.actual_end.to_string());
    t.add_row("Today's overtime", paint(view.today));
    t.add_row("Weekly total", bold(&paint(view.weekly_total)));
    t.add_row("Carried total", paint(state.total_overtime));
    // only after a merge in this session
    if let Some(g) = view.grand_total {
        t.add_row("Grand total", bold(&paint(g)));
    }

    print!("{}", t.render());
}

pub fn print_overview_json(state: &LedgerState, inputs: &FormInputs, view: &Overview) -> AppResult<()> {
    let out = OverviewJson {
        planned_end: inputs.planned_end.to_string(),
        actual_end: inputs.actual_end.to_string(),
        today: view.today.to_string(),
        weekly_total: view.weekly_total.to_string(),
        weekly_overtime_minutes: state.weekly_overtime.total_minutes(),
        total_overtime_minutes: state.total_overtime.total_minutes(),
        grand_total: view.grand_total.map(|g| g.to_string()),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}
