use crate::modal::{ItemRowDraft, MEAL_TYPES, MealModal};
use crate::notice::{Notice, Severity};
use crate::render::{FoodOption, MealCard};
use crate::tracker::PageView;

pub fn render_page(view: &PageView) -> String {
    let lock = if view.blocked { " disabled" } else { "" };
    let meals: String = view.meals.cards.iter().map(|card| meal_card(card, lock)).collect();
    let rows: String = view
        .meal_modal
        .rows
        .iter()
        .enumerate()
        .map(|(index, row)| item_row(index, row))
        .collect();
    let notices: String = view.notices.iter().map(notice).collect();
    let empty_display = if view.meals.empty_state_visible { "block" } else { "none" };

    INDEX_HTML
        .replace("{{LOCK}}", lock)
        .replace("{{DATE}}", &escape_html(&view.date_input))
        .replace("{{TOTAL}}", &escape_html(&view.total.text))
        .replace("{{EMPTY_DISPLAY}}", empty_display)
        .replace("{{MEAL_MODAL_HIDDEN}}", view.meal_modal.visibility.aria_hidden())
        .replace("{{FOOD_MODAL_HIDDEN}}", view.food_modal.visibility.aria_hidden())
        .replace("{{MEAL_TYPE_OPTIONS}}", &meal_type_options(&view.meal_modal))
        .replace("{{ITEM_ROWS}}", &rows)
        .replace("{{NOTICES}}", &notices)
        .replace("{{MEALS}}", &meals)
}

/// Escapes text for element content and quoted attributes. Braces are
/// escaped too so inserted text can never form a template placeholder.
pub fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
        .replace('{', "&#123;")
        .replace('}', "&#125;")
}

fn meal_card(card: &MealCard, lock: &str) -> String {
    let rows: String = card
        .items
        .iter()
        .map(|item| {
            format!(
                "<tr><td>{}</td><td class=\"qty\">{}</td><td class=\"kcal\">{}</td></tr>",
                escape_html(&item.food_name),
                escape_html(&item.quantity),
                escape_html(&item.calories),
            )
        })
        .collect();
    let first = card.add_item.options.first().map(|option| option.value);

    format!(
        r#"<article class="meal-card" data-meal-id="{id}">
  <div class="meal-card__header">
    <div class="meal-type">{title}</div>
    <div class="meal-cal">{calories}</div>
  </div>
  <div class="meal-items">
    <table>
      <thead><tr><th>Food</th><th class="qty">Qty</th><th class="kcal">kcal</th></tr></thead>
      <tbody>{rows}</tbody>
    </table>
  </div>
  <form class="meal-card__actions" method="post" action="/meals/{id}/items">
    <select class="foodSelect" name="food_id">{options}</select>
    <input class="qtyInput" type="number" step="0.1" min="0" name="quantity" value="{quantity}" />
    <button class="ghost" type="submit"{lock}>Add item</button>
  </form>
</article>
"#,
        id = card.meal_id,
        title = escape_html(&card.title),
        calories = escape_html(&card.calories),
        options = food_options(&card.add_item.options, first),
        quantity = escape_html(&card.add_item.quantity),
    )
}

fn item_row(index: usize, row: &ItemRowDraft) -> String {
    format!(
        r#"<div class="item-row">
  <select class="foodSelect" name="food_id_{index}">{options}</select>
  <input class="qtyInput" type="number" step="0.1" min="0" name="quantity_{index}" value="{quantity}" />
  <span class="unitHint">{hint}</span>
  <button class="removeRowBtn ghost" type="submit" formaction="/meal-modal/rows/{index}/remove">Remove</button>
</div>
"#,
        options = food_options(&row.options, row.selected),
        quantity = escape_html(&row.quantity),
        hint = escape_html(&row.unit_hint),
    )
}

fn food_options(options: &[FoodOption], selected: Option<i64>) -> String {
    options
        .iter()
        .map(|option| {
            let mark = if Some(option.value) == selected { " selected" } else { "" };
            format!(
                "<option value=\"{}\"{mark}>{}</option>",
                option.value,
                escape_html(&option.label)
            )
        })
        .collect()
}

fn meal_type_options(modal: &MealModal) -> String {
    let mut types: Vec<&str> = MEAL_TYPES.to_vec();
    if !types.contains(&modal.meal_type.as_str()) {
        types.push(&modal.meal_type);
    }
    types
        .into_iter()
        .map(|meal_type| {
            let mark = if meal_type == modal.meal_type { " selected" } else { "" };
            let value = escape_html(meal_type);
            format!("<option value=\"{value}\"{mark}>{value}</option>")
        })
        .collect()
}

fn notice(notice: &Notice) -> String {
    let severity = match notice.severity {
        Severity::Recoverable => "recoverable",
        Severity::Fatal => "fatal",
    };
    format!(
        "<div class=\"notice\" data-severity=\"{severity}\" role=\"alert\">{}</div>\n",
        escape_html(&notice.message)
    )
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Calorie Tracker</title>
  <style>
    :root {
      --bg: #f6f1e7;
      --ink: #2b2a28;
      --muted: #7a746d;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --card: #ffffff;
      --line: rgba(47, 72, 88, 0.12);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      padding: 28px 16px 48px;
    }

    .app {
      width: min(880px, 100%);
      margin: 0 auto;
      display: grid;
      gap: 22px;
    }

    .toolbar {
      display: flex;
      flex-wrap: wrap;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
    }

    .toolbar form {
      display: inline-flex;
      gap: 6px;
      margin: 0;
    }

    .total {
      font-size: 1.1rem;
      color: var(--muted);
    }

    #totalCalories {
      font-size: 1.8rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    button {
      border: none;
      border-radius: 999px;
      padding: 8px 16px;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    button.ghost {
      background: transparent;
      color: var(--accent-2);
      border: 1px solid var(--line);
    }

    button[disabled] {
      opacity: 0.5;
      cursor: not-allowed;
    }

    .notice {
      border-radius: 12px;
      padding: 10px 14px;
      background: #fff4d6;
    }

    .notice[data-severity="fatal"] {
      background: #c63b2b;
      color: white;
    }

    .meal-card {
      background: var(--card);
      border: 1px solid var(--line);
      border-radius: 18px;
      padding: 16px;
      display: grid;
      gap: 12px;
      margin-bottom: 14px;
    }

    .meal-card__header {
      display: flex;
      justify-content: space-between;
      font-weight: 600;
    }

    .meal-card__actions {
      display: flex;
      gap: 8px;
      margin: 0;
    }

    table {
      width: 100%;
      border-collapse: collapse;
    }

    th, td {
      text-align: left;
      padding: 6px 4px;
      border-bottom: 1px solid var(--line);
    }

    .qty, .kcal {
      text-align: right;
    }

    #emptyState {
      color: var(--muted);
    }

    .modal {
      position: fixed;
      inset: 0;
      display: grid;
      place-items: center;
      background: rgba(43, 42, 40, 0.45);
    }

    .modal[aria-hidden="true"] {
      display: none;
    }

    .modal form {
      background: var(--card);
      border-radius: 20px;
      padding: 24px;
      width: min(520px, 92vw);
      display: grid;
      gap: 12px;
    }

    /* first in the markup so Enter saves, shown last */
    .modal form .save {
      order: 1;
    }

    .item-row {
      display: flex;
      align-items: center;
      gap: 8px;
    }

    .unitHint {
      color: var(--muted);
      min-width: 4em;
    }
  </style>
</head>
<body>
  <main class="app">
    <header class="toolbar">
      <div>
        <form method="post" action="/day/prev"><button id="prevDayBtn" class="ghost" type="submit">&larr;</button></form>
        <form method="post" action="/day">
          <input id="dateInput" type="date" name="date" value="{{DATE}}" />
          <button class="ghost" type="submit">Go</button>
        </form>
        <form method="post" action="/day/next"><button id="nextDayBtn" class="ghost" type="submit">&rarr;</button></form>
      </div>
      <div class="total"><span id="totalCalories">{{TOTAL}}</span> kcal</div>
      <div>
        <form method="post" action="/meal-modal/open"><button id="addMealBtn" type="submit"{{LOCK}}>New meal</button></form>
        <form method="post" action="/food-modal/open"><button id="addFoodBtn" type="submit"{{LOCK}}>New food</button></form>
        <form method="post" action="/foods/refresh"><button id="refreshFoodsBtn" class="ghost" type="submit">Refresh foods</button></form>
      </div>
    </header>

    <section id="notices">
{{NOTICES}}    </section>

    <section id="mealsList">
{{MEALS}}    </section>
    <p id="emptyState" style="display: {{EMPTY_DISPLAY}}">No meals logged for this day.</p>
  </main>

  <div id="mealModal" class="modal" aria-hidden="{{MEAL_MODAL_HIDDEN}}">
    <form id="mealForm" method="post" action="/meal-modal/submit">
      <button class="save" type="submit"{{LOCK}}>Save meal</button>
      <h2>New meal</h2>
      <label>Meal <select id="mealType" name="meal_type">{{MEAL_TYPE_OPTIONS}}</select></label>
      <div id="itemsContainer">
{{ITEM_ROWS}}      </div>
      <button id="addItemRowBtn" class="ghost" type="submit" formaction="/meal-modal/rows/add">Add row</button>
      <button id="syncRowsBtn" type="submit" formaction="/meal-modal/rows/sync" hidden>Update</button>
      <button id="closeMealModal" class="ghost" type="submit" formaction="/meal-modal/close">Cancel</button>
    </form>
  </div>

  <div id="foodModal" class="modal" aria-hidden="{{FOOD_MODAL_HIDDEN}}">
    <form id="foodForm" method="post" action="/food-modal/submit">
      <h2>New food</h2>
      <label>Name <input id="foodName" name="name" /></label>
      <label>Amount <input id="foodAmount" name="amount" type="number" step="0.1" /></label>
      <label>Unit <input id="foodUnit" name="unit" /></label>
      <label>Calories <input id="foodCalories" name="calories" type="number" step="0.1" /></label>
      <button type="submit"{{LOCK}}>Save food</button>
      <button id="closeFoodModal" class="ghost" type="submit" formaction="/food-modal/close">Cancel</button>
    </form>
  </div>

  <script>
    const dateInput = document.getElementById('dateInput');
    dateInput.addEventListener('change', () => dateInput.form.submit());

    const syncRows = document.getElementById('syncRowsBtn');
    document.querySelectorAll('#itemsContainer .foodSelect').forEach((select) => {
      select.addEventListener('change', () => select.form.requestSubmit(syncRows));
    });
  </script>
</body>
</html>
"#;
