use crate::charts::{render_calories_chart, render_duration_chart, EMPTY_MESSAGE};
use crate::models::{DashboardResponse, ExerciseType};
use chrono::NaiveDate;
use std::fmt::Write;

/// One-shot message shown above the entry form after a submission.
#[derive(Debug, Clone)]
pub enum Flash {
    Success(String),
    Error(String),
}

/// Form values to put back into the inputs when re-rendering.
#[derive(Debug, Clone, Copy)]
pub struct FormDefaults {
    pub exercise_type: ExerciseType,
    pub date: NaiveDate,
    pub duration: i64,
}

impl FormDefaults {
    pub fn for_day(date: NaiveDate) -> Self {
        Self {
            exercise_type: ExerciseType::Walking,
            date,
            duration: 0,
        }
    }
}

pub fn render_index(
    dashboard: &DashboardResponse,
    form: FormDefaults,
    flash: Option<&Flash>,
) -> String {
    let progress = &dashboard.progress;
    let percent = progress.fraction * 100.0;

    INDEX_HTML
        .replace("{{GOAL}}", &progress.goal_minutes.to_string())
        .replace("{{WEEKLY}}", &progress.weekly_minutes.to_string())
        .replace("{{PERCENT}}", &format!("{percent:.0}"))
        .replace("{{PROGRESS}}", &format!("{:.4}", progress.fraction))
        .replace("{{TYPE_OPTIONS}}", &type_options(form.exercise_type))
        .replace("{{DATE}}", &form.date.to_string())
        .replace("{{DURATION}}", &form.duration.max(0).to_string())
        .replace("{{FLASH}}", &flash_html(flash))
        .replace("{{RECORDS}}", &records_table(dashboard))
        .replace("{{DURATION_CHART}}", &render_duration_chart(&dashboard.duration_by_date))
        .replace("{{CALORIES_CHART}}", &render_calories_chart(&dashboard.calories_by_type))
}

fn type_options(selected: ExerciseType) -> String {
    let mut html = String::new();
    for kind in ExerciseType::ALL {
        let marker = if kind == selected { " selected" } else { "" };
        let _ = write!(
            html,
            r#"<option value="{}"{marker}>{} ({} kcal/min)</option>"#,
            kind.slug(),
            kind.label(),
            kind.calories_per_min(),
        );
    }
    html
}

fn flash_html(flash: Option<&Flash>) -> String {
    match flash {
        Some(Flash::Success(message)) => {
            format!(r#"<div class="status" data-type="ok">{}</div>"#, escape(message))
        }
        Some(Flash::Error(message)) => {
            format!(r#"<div class="status" data-type="error">{}</div>"#, escape(message))
        }
        None => String::new(),
    }
}

fn records_table(dashboard: &DashboardResponse) -> String {
    if dashboard.records.is_empty() {
        return format!(r#"<p class="hint">{EMPTY_MESSAGE}</p>"#);
    }

    let mut html = String::from(
        "<table><thead><tr><th>Date</th><th>Exercise</th><th>Minutes</th><th>kcal</th></tr></thead><tbody>",
    );
    for record in &dashboard.records {
        let _ = write!(
            html,
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            record.date,
            record.exercise_type.label(),
            record.duration,
            record.calories,
        );
    }
    html.push_str("</tbody></table>");
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Exercise Log</title>
  <style>
    :root {
      --bg-1: #eef4ef;
      --ink: #23302a;
      --accent: #2f9e6b;
      --accent-2: #2f4858;
      --card: rgba(255, 255, 255, 0.92);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.16);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(135deg, var(--bg-1), #f7faf5 60%, #eef2f7 100%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      grid-template-columns: minmax(220px, 280px) 1fr;
      gap: 24px;
      padding: 32px 18px 48px;
    }

    aside,
    main {
      background: var(--card);
      border-radius: 24px;
      box-shadow: var(--shadow);
      padding: 28px;
    }

    aside {
      display: grid;
      gap: 16px;
      align-content: start;
    }

    main {
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(1.8rem, 4vw, 2.4rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.2rem;
    }

    form {
      display: grid;
      gap: 12px;
    }

    label {
      display: grid;
      gap: 6px;
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.1em;
      color: #6b746f;
    }

    input,
    select {
      font: inherit;
      padding: 10px 12px;
      border-radius: 12px;
      border: 1px solid rgba(47, 72, 88, 0.2);
      background: white;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    progress {
      width: 100%;
      height: 14px;
      accent-color: var(--accent);
    }

    table {
      width: 100%;
      border-collapse: collapse;
      font-size: 0.95rem;
    }

    th,
    td {
      text-align: left;
      padding: 6px 8px;
      border-bottom: 1px solid rgba(47, 72, 88, 0.1);
    }

    .chart {
      width: 100%;
      display: block;
    }

    .chart-line {
      fill: none;
      stroke: var(--accent);
      stroke-width: 3;
    }

    .chart-point {
      fill: white;
      stroke: var(--accent);
      stroke-width: 2;
    }

    .chart-bar {
      fill: var(--accent-2);
    }

    .chart-grid {
      stroke: rgba(47, 72, 88, 0.12);
    }

    .chart-axis {
      stroke: rgba(47, 72, 88, 0.35);
    }

    .chart-label {
      fill: #6b746f;
      font-size: 11px;
    }

    .status {
      font-size: 0.95rem;
      padding: 10px 14px;
      border-radius: 12px;
    }

    .status[data-type="error"] {
      color: #c63b2b;
      background: rgba(198, 59, 43, 0.08);
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
      background: rgba(45, 122, 75, 0.08);
    }

    .hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.9rem;
    }

    @media (max-width: 720px) {
      body {
        grid-template-columns: 1fr;
      }
    }
  </style>
</head>
<body>
  <aside>
    <h2>Weekly goal</h2>
    <form method="post" action="/goal">
      <label>Weekly goal (minutes)
        <input type="number" name="goal" min="0" step="1" value="{{GOAL}}" />
      </label>
      <button type="submit">Set goal</button>
    </form>
    <h2>Goal progress</h2>
    <progress id="goal-progress" max="1" value="{{PROGRESS}}">{{PERCENT}}%</progress>
    <p class="hint">{{WEEKLY}} of {{GOAL}} minutes this week ({{PERCENT}}%).</p>
  </aside>

  <main>
    <h1>Exercise Log</h1>

    <section>
      <form method="post" action="/exercise">
        <label>Exercise type
          <select name="exercise_type">{{TYPE_OPTIONS}}</select>
        </label>
        <label>Date
          <input type="date" name="date" value="{{DATE}}" />
        </label>
        <label>Duration (minutes)
          <input type="number" name="duration" min="0" step="1" value="{{DURATION}}" />
        </label>
        <button type="submit">Save exercise</button>
      </form>
    </section>

    {{FLASH}}

    <section>
      <h2>Exercise records</h2>
      {{RECORDS}}
    </section>

    <section>
      <h2>Minutes per day</h2>
      {{DURATION_CHART}}
    </section>

    <section>
      <h2>Calories by exercise type</h2>
      {{CALORIES_CHART}}
    </section>
  </main>
</body>
</html>
"#;
