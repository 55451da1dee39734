pub fn render_index(date: &str) -> String {
    INDEX_HTML.replace("{{DATE}}", date)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>30-Day Goal Tracker</title>
  <style>
    @import url('https://fonts.googleapis.com/css2?family=Space+Grotesk:wght@400;500;600&family=Fraunces:wght@600&display=swap');

    :root {
      --bg-1: #f8f3e6;
      --bg-2: #f5d3a7;
      --ink: #2b2a28;
      --accent: #ff6b4a;
      --accent-2: #2f4858;
      --done: #2d7a4b;
      --card: rgba(255, 255, 255, 0.86);
      --shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #ffe9d4 60%, #f9f2e9 100%);
      color: var(--ink);
      font-family: "Space Grotesk", "Trebuchet MS", sans-serif;
      display: grid;
      place-items: start center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      backdrop-filter: blur(12px);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
      animation: rise 600ms ease;
    }

    header {
      display: flex;
      flex-direction: column;
      gap: 6px;
    }

    h1 {
      font-family: "Fraunces", "Georgia", serif;
      font-weight: 600;
      font-size: clamp(2rem, 4vw, 2.8rem);
      margin: 0;
    }

    .subtitle {
      margin: 0;
      color: #5f5c57;
      font-size: 1rem;
    }

    .today-badge {
      align-self: flex-start;
      margin-top: 8px;
      background: var(--accent-2);
      color: white;
      border-radius: 999px;
      padding: 6px 14px;
      font-size: 0.85rem;
      letter-spacing: 0.08em;
    }

    .card {
      background: white;
      border-radius: 18px;
      padding: 20px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 12px;
    }

    .card h2 {
      margin: 0;
      font-size: 1.3rem;
    }

    input[type="text"],
    textarea {
      width: 100%;
      border: 1px solid rgba(47, 72, 88, 0.2);
      border-radius: 12px;
      padding: 12px 14px;
      font-size: 1rem;
      font-family: inherit;
      resize: vertical;
    }

    input[type="text"]:focus,
    textarea:focus {
      outline: none;
      border-color: var(--accent);
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 12px 20px;
      font-size: 1rem;
      font-weight: 600;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
      display: inline-flex;
      align-items: center;
      justify-content: center;
      gap: 10px;
    }

    button:active {
      transform: scale(0.98);
    }

    .btn-primary {
      background: var(--accent);
      color: white;
      box-shadow: 0 10px 24px rgba(255, 107, 74, 0.3);
      justify-self: start;
    }

    .btn-muted {
      background: var(--accent-2);
      color: white;
    }

    .btn-danger {
      background: #c63b2b;
      color: white;
      padding: 8px 14px;
      font-size: 0.85rem;
    }

    .goal-list {
      display: grid;
      gap: 14px;
    }

    .goal-card {
      display: grid;
      gap: 8px;
      cursor: pointer;
      transition: transform 150ms ease, box-shadow 150ms ease;
    }

    .goal-card:hover {
      transform: translateY(-2px);
      box-shadow: 0 12px 28px rgba(47, 72, 88, 0.15);
    }

    .goal-card .row {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 12px;
      flex-wrap: wrap;
    }

    .goal-card .dates {
      color: #6b645d;
      font-size: 0.9rem;
    }

    .goal-card .desc {
      margin: 0;
      color: #6b645d;
      font-size: 0.95rem;
    }

    .empty-hint {
      margin: 0;
      color: #6f6a65;
      font-size: 0.95rem;
    }

    .panel {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 16px;
    }

    .stat {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(47, 72, 88, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: #8b857d;
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
      color: var(--accent-2);
    }

    .stat .value.highlight {
      color: var(--accent);
    }

    .progress-track {
      height: 10px;
      border-radius: 999px;
      background: rgba(47, 72, 88, 0.12);
      overflow: hidden;
    }

    .progress-fill {
      height: 100%;
      border-radius: 999px;
      background: linear-gradient(90deg, var(--accent), #ffa184);
      transition: width 300ms ease;
    }

    .calendar {
      display: grid;
      grid-template-columns: repeat(6, 1fr);
      gap: 10px;
    }

    .day {
      position: relative;
      aspect-ratio: 1;
      border: 2px solid rgba(47, 72, 88, 0.12);
      border-radius: 14px;
      background: white;
      display: flex;
      flex-direction: column;
      align-items: center;
      justify-content: center;
      gap: 2px;
      cursor: pointer;
      transition: transform 120ms ease, box-shadow 120ms ease;
    }

    .day:hover {
      transform: scale(1.04);
      box-shadow: 0 6px 14px rgba(47, 72, 88, 0.15);
    }

    .day.completed {
      border-color: var(--done);
      background: linear-gradient(135deg, #2d7a4b, #49b675);
      color: white;
    }

    .day.today {
      border-color: var(--accent);
      border-width: 3px;
    }

    .day.future {
      opacity: 0.55;
      cursor: not-allowed;
    }

    .day .num {
      font-size: 1.15rem;
      font-weight: 700;
    }

    .day .when {
      font-size: 0.7rem;
      opacity: 0.8;
    }

    .day .mark {
      position: absolute;
      top: 4px;
      right: 7px;
      font-size: 0.85rem;
    }

    .day .mark.missed {
      color: #c63b2b;
    }

    .day .note-btn {
      position: absolute;
      bottom: 2px;
      right: 4px;
      background: transparent;
      border: none;
      padding: 2px 4px;
      font-size: 0.8rem;
      box-shadow: none;
      color: inherit;
      opacity: 0.7;
    }

    .notes-panel {
      display: grid;
      gap: 10px;
    }

    .notes-actions {
      display: flex;
      gap: 10px;
      justify-content: flex-end;
    }

    .detail-header {
      display: flex;
      align-items: baseline;
      justify-content: space-between;
      gap: 12px;
      flex-wrap: wrap;
    }

    .status {
      font-size: 0.95rem;
      color: #6b645d;
      min-height: 1.2em;
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }

    .status[data-type="ok"] {
      color: #2d7a4b;
    }

    .hidden {
      display: none;
    }

    @keyframes rise {
      from {
        opacity: 0;
        transform: translateY(18px);
      }
      to {
        opacity: 1;
        transform: translateY(0);
      }
    }

    @media (max-width: 600px) {
      .app {
        padding: 28px 22px;
      }
      .calendar {
        grid-template-columns: repeat(3, 1fr);
      }
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>30-Day Goal Tracker</h1>
      <p class="subtitle">Pick a challenge, tick off each day, keep the streak alive.</p>
      <span class="today-badge">Today: {{DATE}}</span>
    </header>

    <section class="card" id="create-card">
      <h2>New 30-day challenge</h2>
      <form id="create-form">
        <div style="display: grid; gap: 12px;">
          <input type="text" id="title-input" placeholder="What will you do every day?" maxlength="120" />
          <textarea id="desc-input" placeholder="Optional description" rows="2"></textarea>
          <button class="btn-primary" type="submit">Start challenge</button>
        </div>
      </form>
    </section>

    <section id="list-section">
      <div class="goal-list" id="goal-list"></div>
      <p class="empty-hint hidden" id="empty-hint">No challenges yet. Start one above.</p>
    </section>

    <section id="detail-section" class="hidden">
      <div class="card" style="gap: 20px;">
        <div class="detail-header">
          <div>
            <h2 id="detail-title"></h2>
            <p class="subtitle" id="detail-desc"></p>
            <p class="subtitle" id="detail-range"></p>
          </div>
          <button class="btn-muted" id="back-btn" type="button">Back to goals</button>
        </div>

        <div>
          <div class="progress-track">
            <div class="progress-fill" id="elapsed-fill" style="width: 0%"></div>
          </div>
          <p class="subtitle" id="elapsed-text"></p>
        </div>

        <div class="panel">
          <div class="stat">
            <span class="label">Current streak</span>
            <span class="value highlight" id="current-streak">0</span>
          </div>
          <div class="stat">
            <span class="label">Best streak</span>
            <span class="value" id="best-streak">0</span>
          </div>
          <div class="stat">
            <span class="label">Completion rate</span>
            <span class="value" id="completion-rate">0%</span>
          </div>
          <div class="stat">
            <span class="label">Days completed</span>
            <span class="value" id="completed-days">0/30</span>
          </div>
        </div>

        <div class="calendar" id="calendar"></div>

        <div class="card notes-panel hidden" id="notes-panel">
          <h2 id="notes-title">Notes</h2>
          <textarea id="notes-input" rows="3" placeholder="Notes for this day..."></textarea>
          <div class="notes-actions">
            <button class="btn-muted" id="notes-cancel" type="button">Cancel</button>
            <button class="btn-primary" id="notes-save" type="button">Save notes</button>
          </div>
        </div>
      </div>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const goalListEl = document.getElementById('goal-list');
    const emptyHintEl = document.getElementById('empty-hint');
    const listSection = document.getElementById('list-section');
    const createCard = document.getElementById('create-card');
    const detailSection = document.getElementById('detail-section');
    const calendarEl = document.getElementById('calendar');
    const notesPanel = document.getElementById('notes-panel');
    const notesInput = document.getElementById('notes-input');
    const notesTitle = document.getElementById('notes-title');

    let goals = [];
    let activeGoal = null;
    let progressRows = [];
    let summary = null;
    let notesIndex = null;

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const esc = (value) => {
      const div = document.createElement('div');
      div.textContent = value == null ? '' : value;
      return div.innerHTML;
    };

    const getJSON = async (url) => {
      const res = await fetch(url);
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const sendJSON = async (method, url, body) => {
      const res = await fetch(url, {
        method,
        headers: { 'content-type': 'application/json' },
        body: body === undefined ? undefined : JSON.stringify(body)
      });
      if (!res.ok) {
        throw new Error(await res.text() || 'Request failed');
      }
      return res.json();
    };

    const renderGoals = () => {
      emptyHintEl.classList.toggle('hidden', goals.length > 0);
      goalListEl.innerHTML = goals
        .map((goal, index) => `
          <div class="card goal-card" data-index="${index}">
            <div class="row">
              <h2>${esc(goal.title)}</h2>
              <button class="btn-danger" data-delete="${index}" type="button">Delete</button>
            </div>
            ${goal.description ? `<p class="desc">${esc(goal.description)}</p>` : ''}
            <span class="dates">${goal.start_date} to ${goal.end_date}</span>
          </div>
        `)
        .join('');

      goalListEl.querySelectorAll('.goal-card').forEach((card) => {
        card.addEventListener('click', () => openGoal(goals[Number(card.dataset.index)]));
      });
      goalListEl.querySelectorAll('[data-delete]').forEach((button) => {
        button.addEventListener('click', (event) => {
          event.stopPropagation();
          deleteGoal(goals[Number(button.dataset.delete)]);
        });
      });
    };

    const renderMetrics = () => {
      document.getElementById('current-streak').textContent = summary.current_streak;
      document.getElementById('best-streak').textContent = summary.best_streak;
      document.getElementById('completion-rate').textContent = summary.completion_rate + '%';
      document.getElementById('completed-days').textContent =
        summary.completed_days + '/' + summary.total_days;
      document.getElementById('elapsed-fill').style.width = summary.elapsed_percent + '%';
      document.getElementById('elapsed-text').textContent =
        summary.elapsed_percent + '% of the window elapsed';
    };

    const renderCalendar = () => {
      calendarEl.innerHTML = summary.days
        .map((cell, index) => {
          const classes = ['day'];
          if (cell.completed) classes.push('completed');
          if (cell.is_today) classes.push('today');
          if (cell.is_future) classes.push('future');
          const row = progressRows[index];
          const mark = cell.completed
            ? '<span class="mark">&#10003;</span>'
            : cell.is_future ? '' : '<span class="mark missed">&#10007;</span>';
          const noteMark = row && row.notes ? ' &#8226;' : '';
          return `
            <div class="${classes.join(' ')}" data-index="${index}">
              ${mark}
              <span class="num">${cell.day}</span>
              <span class="when">${cell.date.slice(5)}</span>
              <button class="note-btn" data-note="${index}" type="button" title="Edit notes">&#9998;${noteMark}</button>
            </div>
          `;
        })
        .join('');

      calendarEl.querySelectorAll('.day').forEach((cellEl) => {
        cellEl.addEventListener('click', () => toggleDay(Number(cellEl.dataset.index)));
      });
      calendarEl.querySelectorAll('[data-note]').forEach((button) => {
        button.addEventListener('click', (event) => {
          event.stopPropagation();
          openNotes(Number(button.dataset.note));
        });
      });
    };

    const renderDetail = () => {
      document.getElementById('detail-title').textContent = activeGoal.title;
      document.getElementById('detail-desc').textContent = activeGoal.description || '';
      document.getElementById('detail-range').textContent =
        activeGoal.start_date + ' to ' + activeGoal.end_date;
      renderMetrics();
      renderCalendar();
    };

    const loadGoals = async () => {
      goals = await getJSON('/api/goals');
      renderGoals();
    };

    const refreshSummary = async () => {
      summary = await getJSON('/api/goals/' + activeGoal.id + '/summary');
      renderMetrics();
      renderCalendar();
    };

    const openGoal = async (goal) => {
      activeGoal = goal;
      try {
        [progressRows, summary] = await Promise.all([
          getJSON('/api/goals/' + goal.id + '/progress'),
          getJSON('/api/goals/' + goal.id + '/summary')
        ]);
      } catch (err) {
        setStatus(err.message, 'error');
        return;
      }
      listSection.classList.add('hidden');
      createCard.classList.add('hidden');
      detailSection.classList.remove('hidden');
      notesPanel.classList.add('hidden');
      renderDetail();
    };

    const closeDetail = () => {
      activeGoal = null;
      detailSection.classList.add('hidden');
      listSection.classList.remove('hidden');
      createCard.classList.remove('hidden');
    };

    const toggleDay = (index) => {
      const row = progressRows[index];
      const cell = summary.days[index];
      if (!row || !cell) {
        return;
      }
      if (cell.is_future) {
        setStatus('Future days cannot be toggled yet', 'error');
        return;
      }

      row.completed = !row.completed;
      cell.completed = row.completed;
      renderCalendar();

      sendJSON('PUT', '/api/progress/' + row.id, { completed: row.completed, notes: row.notes })
        .then(() => {
          setStatus('Saved', 'ok');
          return refreshSummary();
        })
        .catch((err) => {
          row.completed = !row.completed;
          cell.completed = row.completed;
          renderCalendar();
          setStatus(err.message, 'error');
        });
    };

    const openNotes = (index) => {
      notesIndex = index;
      const row = progressRows[index];
      notesTitle.textContent = 'Notes for day ' + summary.days[index].day;
      notesInput.value = row.notes || '';
      notesPanel.classList.remove('hidden');
      notesInput.focus();
    };

    const saveNotes = () => {
      const row = progressRows[notesIndex];
      if (!row) {
        return;
      }
      const prior = row.notes;
      const text = notesInput.value.trim();
      row.notes = text.length ? text : null;

      sendJSON('PUT', '/api/progress/' + row.id, { completed: row.completed, notes: row.notes })
        .then(() => {
          notesPanel.classList.add('hidden');
          renderCalendar();
          setStatus('Saved', 'ok');
        })
        .catch((err) => {
          row.notes = prior;
          setStatus(err.message, 'error');
        });
    };

    const createGoal = async (event) => {
      event.preventDefault();
      const titleInput = document.getElementById('title-input');
      const descInput = document.getElementById('desc-input');
      const title = titleInput.value.trim();
      if (!title) {
        setStatus('Give the challenge a title first', 'error');
        return;
      }

      setStatus('Saving...', '');
      try {
        const goal = await sendJSON('POST', '/api/goals', {
          title,
          description: descInput.value.trim() || null
        });
        goals.unshift(goal);
        renderGoals();
        titleInput.value = '';
        descInput.value = '';
        setStatus('Challenge started', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    const deleteGoal = async (goal) => {
      if (!confirm('Delete this goal and all its progress?')) {
        return;
      }
      try {
        await sendJSON('DELETE', '/api/goals/' + goal.id);
        goals = goals.filter((g) => g.id !== goal.id);
        renderGoals();
        if (activeGoal && activeGoal.id === goal.id) {
          closeDetail();
        }
        setStatus('Goal deleted', 'ok');
      } catch (err) {
        setStatus(err.message, 'error');
      }
    };

    document.getElementById('create-form').addEventListener('submit', (event) => {
      createGoal(event).catch((err) => setStatus(err.message, 'error'));
    });
    document.getElementById('back-btn').addEventListener('click', closeDetail);
    document.getElementById('notes-save').addEventListener('click', saveNotes);
    document.getElementById('notes-cancel').addEventListener('click', () => {
      notesPanel.classList.add('hidden');
    });

    loadGoals().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
