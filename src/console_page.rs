//! Single-page practice UI served at `/`.
//!
//! Plain HTML/CSS/JS; all data comes from the JSON API in `http.rs`.

use axum::response::{Html, IntoResponse};

pub async fn index() -> impl IntoResponse {
    Html(INDEX_HTML)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<meta name="viewport" content="width=device-width, initial-scale=1.0">
<title>SQL Practice App (Beginner) - SQLite</title>
<style>
  :root { --bg: #0e1117; --surface: #161b22; --border: #30363d; --text: #c9d1d9; --accent: #ff4b4b; --green: #3fb950; --yellow: #d29922; --red: #f85149; }
  * { margin: 0; padding: 0; box-sizing: border-box; }
  body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', sans-serif; background: var(--bg); color: var(--text); }
  .block-container { max-width: 1400px; margin: 0 auto; padding: 24px 48px; }
  h1 { font-size: 2rem; margin-bottom: 24px; }
  h2 { font-size: 1.2rem; margin: 16px 0 12px; }
  .columns { display: flex; gap: 32px; }
  .column { flex: 1; min-width: 0; }
  label { display: block; font-size: 13px; margin-bottom: 6px; color: #8b949e; }
  select, textarea { width: 100%; background: var(--surface); border: 1px solid var(--border); color: var(--text); padding: 8px 12px; border-radius: 6px; font-size: 14px; margin-bottom: 12px; }
  textarea { height: 220px; font-family: monospace; resize: vertical; }
  .btn { display: block; background: none; color: var(--text); border: 1px solid var(--border); padding: 8px 16px; border-radius: 6px; cursor: pointer; font-size: 14px; margin-bottom: 8px; }
  .btn.primary { background: var(--accent); border-color: var(--accent); color: #fff; }
  .btn:hover { opacity: 0.9; }
  .msg { padding: 10px 14px; border-radius: 6px; margin: 8px 0; font-size: 14px; white-space: pre-wrap; }
  .msg.success { background: rgba(63, 185, 80, 0.15); color: var(--green); }
  .msg.warning { background: rgba(210, 153, 34, 0.15); color: var(--yellow); }
  .msg.error { background: rgba(248, 81, 73, 0.15); color: var(--red); }
  .table-wrap { overflow-x: auto; margin: 8px 0 16px; }
  table { width: 100%; border-collapse: collapse; background: var(--surface); border: 1px solid var(--border); }
  th, td { text-align: left; padding: 6px 10px; border-bottom: 1px solid var(--border); font-size: 13px; }
  th { color: #8b949e; font-weight: 600; }
  #exercises { white-space: pre-line; line-height: 1.8; }
  @media (max-width: 768px) {
    .block-container { padding-left: 1rem; padding-right: 1rem; }
    h1 { font-size: 1.6rem; line-height: 1.2; }
    .columns { flex-direction: column; gap: 1rem; }
  }
</style>
</head>
<body>
<div class="block-container">
  <h1>SQL Practice App (Beginner) - SQLite</h1>
  <div class="columns">
    <div class="column">
      <h2>Query Runner</h2>
      <label for="example-choice">Load example</label>
      <select id="example-choice">
        <option>Select an example</option>
      </select>
      <label for="sql-input">SQL input</label>
      <textarea id="sql-input" spellcheck="false"></textarea>
      <button class="btn primary" id="run-btn">Run Query</button>
      <button class="btn" id="reset-btn">Reset Sample Database</button>
      <div id="messages"></div>
      <div id="result" class="table-wrap"></div>
    </div>
    <div class="column">
      <h2>Exercises (try these)</h2>
      <div id="exercises"></div>
      <h2>Table Info</h2>
      <div id="schema"></div>
    </div>
  </div>
</div>
<script>
const $ = (id) => document.getElementById(id);

function session() {
  const choice = $('example-choice').value;
  return { sql_input: $('sql-input').value, example_choice: choice };
}

function message(kind, text) {
  const div = document.createElement('div');
  div.className = 'msg ' + kind;
  div.textContent = text;
  $('messages').appendChild(div);
}

function renderTable(columns, rows) {
  const table = document.createElement('table');
  const head = table.createTHead().insertRow();
  columns.forEach((c) => {
    const th = document.createElement('th');
    th.textContent = c;
    head.appendChild(th);
  });
  const body = table.createTBody();
  rows.forEach((row) => {
    const tr = body.insertRow();
    row.forEach((v) => { tr.insertCell().textContent = v === null ? 'None' : String(v); });
  });
  return table;
}

async function loadExamples() {
  const examples = await (await fetch('/api/examples')).json();
  examples.forEach((e) => {
    const opt = document.createElement('option');
    opt.textContent = e.label;
    $('example-choice').appendChild(opt);
  });
}

async function loadExercises() {
  const data = await (await fetch('/api/exercises')).json();
  $('exercises').textContent = data.text;
}

async function loadSchema() {
  const target = $('schema');
  target.innerHTML = '';
  const data = await (await fetch('/api/schema')).json();
  if (!data.success) {
    const div = document.createElement('div');
    div.className = 'msg error';
    div.textContent = data.error;
    target.appendChild(div);
    return;
  }
  data.tables.forEach((t) => {
    const title = document.createElement('strong');
    title.textContent = t.name;
    target.appendChild(title);
    const wrap = document.createElement('div');
    wrap.className = 'table-wrap';
    wrap.appendChild(renderTable(['name', 'type'], t.columns.map((c) => [c.name, c.declared_type])));
    target.appendChild(wrap);
  });
}

$('example-choice').addEventListener('change', async () => {
  const resp = await fetch('/api/session/example', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(session()),
  });
  const updated = await resp.json();
  $('sql-input').value = updated.sql_input;
});

$('run-btn').addEventListener('click', async () => {
  $('messages').innerHTML = '';
  $('result').innerHTML = '';
  const resp = await fetch('/api/query', {
    method: 'POST',
    headers: { 'Content-Type': 'application/json' },
    body: JSON.stringify(session()),
  });
  const data = await resp.json();
  if (data.success) {
    $('result').appendChild(renderTable(data.columns, data.rows));
    message('success', data.message);
  } else {
    message(data.warning ? 'warning' : 'error', data.error);
  }
});

$('reset-btn').addEventListener('click', async () => {
  $('messages').innerHTML = '';
  const data = await (await fetch('/api/reset', { method: 'POST' })).json();
  message(data.success ? 'success' : 'error', data.success ? data.message : data.error);
  loadSchema();
});

loadExamples();
loadExercises();
loadSchema();
</script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_wires_every_endpoint() {
        for endpoint in [
            "/api/examples",
            "/api/exercises",
            "/api/schema",
            "/api/session/example",
            "/api/query",
            "/api/reset",
        ] {
            assert!(INDEX_HTML.contains(endpoint), "missing {}", endpoint);
        }
    }
}
