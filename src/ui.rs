pub fn render_index(mood_logs: usize, journal_entries: usize, affirmation: &str) -> String {
    INDEX_HTML
        .replace("{{MOOD_LOGS}}", &mood_logs.to_string())
        .replace("{{JOURNAL_ENTRIES}}", &journal_entries.to_string())
        .replace("{{AFFIRMATION}}", &escape_html(affirmation))
}

fn escape_html(text: &str) -> String {
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
  <title>Wellness Dashboard</title>
  <style>
    :root {
      --bg-1: #eef7f6;
      --bg-2: #cde9e4;
      --ink: #24302f;
      --accent: #2a9d8f;
      --muted: #6b7675;
      --card: rgba(255, 255, 255, 0.9);
      --shadow: 0 24px 60px rgba(36, 48, 47, 0.14);
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: radial-gradient(circle at top, var(--bg-2), transparent 60%),
        linear-gradient(135deg, var(--bg-1), #f4fbfa 70%);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    .app {
      width: min(960px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: var(--shadow);
      padding: 36px;
      display: grid;
      gap: 28px;
    }

    h1 {
      font-family: "Georgia", serif;
      font-size: clamp(2rem, 4vw, 2.6rem);
      margin: 0;
    }

    h2 {
      margin: 0 0 12px;
      font-size: 1.3rem;
    }

    .subtitle, .hint {
      margin: 0;
      color: var(--muted);
    }

    .panel, .grid {
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(260px, 1fr));
      gap: 16px;
    }

    .stat, .card {
      background: white;
      border-radius: 18px;
      padding: 18px;
      border: 1px solid rgba(36, 48, 47, 0.08);
      display: grid;
      gap: 8px;
    }

    .stat .label {
      font-size: 0.85rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--muted);
    }

    .stat .value {
      font-size: 1.7rem;
      font-weight: 600;
    }

    .affirmation {
      font-style: italic;
      font-size: 1.1rem;
    }

    svg {
      width: 100%;
      display: block;
    }

    .chart-label {
      fill: var(--muted);
      font-size: 11px;
    }

    .legend {
      display: flex;
      flex-wrap: wrap;
      gap: 12px;
      font-size: 0.85rem;
    }

    .legend span::before {
      content: "";
      display: inline-block;
      width: 10px;
      height: 10px;
      border-radius: 3px;
      margin-right: 6px;
      background: var(--swatch);
    }

    .moods {
      display: flex;
      flex-wrap: wrap;
      gap: 8px;
    }

    button {
      appearance: none;
      border: none;
      border-radius: 999px;
      padding: 10px 16px;
      font-weight: 600;
      cursor: pointer;
      background: var(--accent);
      color: white;
    }

    .moods button {
      background: white;
      color: var(--ink);
      border: 2px solid rgba(36, 48, 47, 0.12);
    }

    .moods button.active {
      border-color: var(--accent);
    }

    input, textarea {
      width: 100%;
      border-radius: 12px;
      border: 1px solid rgba(36, 48, 47, 0.15);
      padding: 10px 12px;
      font: inherit;
    }

    .messages {
      max-height: 260px;
      overflow-y: auto;
      display: grid;
      gap: 8px;
    }

    .bubble {
      padding: 8px 12px;
      border-radius: 14px;
      max-width: 80%;
      white-space: pre-wrap;
    }

    .bubble.user {
      justify-self: end;
      background: var(--accent);
      color: white;
    }

    .bubble.assistant {
      justify-self: start;
      background: #eef1f1;
    }

    .status {
      min-height: 1.2em;
      color: var(--muted);
    }

    .status[data-type="error"] {
      color: #c63b2b;
    }
  </style>
</head>
<body>
  <main class="app">
    <header>
      <h1>Your Wellness Dashboard</h1>
      <p class="subtitle">Log how you feel, write it down, and watch the week take shape.</p>
    </header>

    <section class="panel">
      <div class="stat">
        <span class="label">Mood logs</span>
        <span id="mood-logs" class="value">{{MOOD_LOGS}}</span>
      </div>
      <div class="stat">
        <span class="label">Journal entries</span>
        <span id="journal-entries" class="value">{{JOURNAL_ENTRIES}}</span>
      </div>
      <div class="stat">
        <span class="label">Today's affirmation</span>
        <span class="affirmation">{{AFFIRMATION}}</span>
      </div>
    </section>

    <section class="grid">
      <div class="card">
        <h2>Weekly Mood Trends</h2>
        <svg id="weekly" viewBox="0 0 420 240" role="img" aria-label="Weekly moods"></svg>
        <div class="legend" id="legend"></div>
      </div>
      <div class="card">
        <h2>Mood Distribution</h2>
        <svg id="distribution" viewBox="0 0 420 240" role="img" aria-label="Mood distribution"></svg>
      </div>
    </section>

    <section class="grid">
      <div class="card">
        <h2>How are you feeling today?</h2>
        <div class="moods" id="mood-options">
          <button type="button" data-mood="Happy">Happy</button>
          <button type="button" data-mood="Relaxed">Relaxed</button>
          <button type="button" data-mood="Stressed">Stressed</button>
          <button type="button" data-mood="Sad">Sad</button>
        </div>
        <textarea id="reflection" rows="3" placeholder="What's on your mind? (optional)"></textarea>
        <button type="button" id="log-mood">Log mood</button>
      </div>
      <div class="card">
        <h2>New journal entry</h2>
        <input id="journal-title" placeholder="Entry title..." />
        <textarea id="journal-content" rows="4" placeholder="Write your thoughts here..."></textarea>
        <button type="button" id="save-entry">Save entry</button>
        <div id="highlights"></div>
      </div>
    </section>

    <section class="card">
      <h2>Wellness companion</h2>
      <div class="messages" id="messages"></div>
      <form id="chat-form" class="panel">
        <input id="chat-input" placeholder="Share how you're feeling..." />
        <button type="submit">Send</button>
      </form>
      <p class="hint">This assistant offers supportive guidance and does not replace professional therapy.</p>
    </section>

    <div class="status" id="status"></div>
  </main>

  <script>
    const statusEl = document.getElementById('status');
    const weeklyEl = document.getElementById('weekly');
    const distributionEl = document.getElementById('distribution');
    const legendEl = document.getElementById('legend');
    const highlightsEl = document.getElementById('highlights');
    const messagesEl = document.getElementById('messages');
    const SERIES = ['happy', 'calm', 'neutral', 'anxious', 'sad'];

    let selectedMood = null;
    let colors = {};

    const setStatus = (message, type) => {
      statusEl.textContent = message;
      statusEl.dataset.type = type || '';
    };

    const request = async (url, options = {}) => {
      const res = await fetch(url, {
        headers: { 'content-type': 'application/json' },
        ...options
      });
      if (!res.ok) {
        const msg = await res.text();
        throw new Error(msg || 'Request failed');
      }
      return res.status === 204 ? null : res.json();
    };

    const escapeText = (value) => {
      const span = document.createElement('span');
      span.textContent = value;
      return span.innerHTML;
    };

    const renderWeekly = (weekly) => {
      const width = 420;
      const height = 240;
      const bottom = 28;
      const slot = width / weekly.length;
      const max = Math.max(1, ...weekly.map((day) => SERIES.reduce((sum, key) => sum + day[key], 0)));
      const scale = (height - bottom - 12) / max;

      weeklyEl.innerHTML = weekly
        .map((day, index) => {
          let y = height - bottom;
          const x = index * slot + slot * 0.2;
          const bars = SERIES.map((key) => {
            const h = day[key] * scale;
            y -= h;
            return h > 0
              ? `<rect x="${x}" y="${y}" width="${slot * 0.6}" height="${h}" fill="${colors[key] || '#ccc'}" />`
              : '';
          }).join('');
          return `${bars}<text class="chart-label" x="${x + slot * 0.3}" y="${height - 8}" text-anchor="middle">${day.day}</text>`;
        })
        .join('');
    };

    const renderDistribution = (distribution) => {
      const total = distribution.reduce((sum, entry) => sum + entry.total, 0);
      if (total === 0) {
        distributionEl.innerHTML = '<text class="chart-label" x="50%" y="50%" text-anchor="middle">No moods logged yet</text>';
        return;
      }
      const rowHeight = 240 / distribution.length;
      distributionEl.innerHTML = distribution
        .map((entry, index) => {
          const y = index * rowHeight + 8;
          const w = (entry.total / total) * 300;
          return `
            <text class="chart-label" x="0" y="${y + rowHeight / 2}">${entry.name}</text>
            <rect x="70" y="${y}" width="${w}" height="${rowHeight - 16}" rx="6" fill="${entry.fill}" />
            <text class="chart-label" x="${76 + w}" y="${y + rowHeight / 2}">${entry.total}</text>`;
        })
        .join('');
    };

    const renderHighlights = (entries) => {
      highlightsEl.innerHTML = entries
        .map((entry) => `<p><strong>${escapeText(entry.title)}</strong><br />${escapeText(entry.content)}</p>`)
        .join('');
    };

    const loadDashboard = async () => {
      const data = await request('/api/dashboard');
      colors = Object.fromEntries(data.distribution.map((entry) => [entry.category, entry.fill]));
      legendEl.innerHTML = data.distribution
        .map((entry) => `<span style="--swatch: ${entry.fill}">${entry.name}</span>`)
        .join('');
      document.getElementById('mood-logs').textContent = data.mood_logs;
      document.getElementById('journal-entries').textContent = data.journal_entries;
      renderWeekly(data.weekly);
      renderDistribution(data.distribution);
      renderHighlights(data.highlights);
    };

    document.querySelectorAll('#mood-options button').forEach((button) => {
      button.addEventListener('click', () => {
        selectedMood = button.dataset.mood;
        document.querySelectorAll('#mood-options button').forEach((other) => {
          other.classList.toggle('active', other === button);
        });
      });
    });

    document.getElementById('log-mood').addEventListener('click', () => {
      if (!selectedMood) {
        setStatus('Pick a mood first', 'error');
        return;
      }
      const reflection = document.getElementById('reflection');
      request('/api/moods', {
        method: 'POST',
        body: JSON.stringify({ category: selectedMood, reflection: reflection.value })
      })
        .then(() => {
          reflection.value = '';
          setStatus('Mood logged', 'ok');
          return loadDashboard();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    document.getElementById('save-entry').addEventListener('click', () => {
      const title = document.getElementById('journal-title');
      const content = document.getElementById('journal-content');
      request('/api/journals', {
        method: 'POST',
        body: JSON.stringify({ title: title.value, content: content.value })
      })
        .then(() => {
          title.value = '';
          content.value = '';
          setStatus('Entry saved', 'ok');
          return loadDashboard();
        })
        .catch((err) => setStatus(err.message, 'error'));
    });

    const appendMessage = (role, text) => {
      const bubble = document.createElement('div');
      bubble.className = `bubble ${role}`;
      bubble.textContent = text;
      messagesEl.appendChild(bubble);
      messagesEl.scrollTop = messagesEl.scrollHeight;
    };

    document.getElementById('chat-form').addEventListener('submit', (event) => {
      event.preventDefault();
      const input = document.getElementById('chat-input');
      const message = input.value.trim();
      if (!message) {
        return;
      }
      input.value = '';
      appendMessage('user', message);
      request('/api/chat', { method: 'POST', body: JSON.stringify({ message }) })
        .then((data) => appendMessage('assistant', data.response))
        .catch((err) => setStatus(err.message, 'error'));
    });

    loadDashboard().catch((err) => setStatus(err.message, 'error'));
  </script>
</body>
</html>
"#;
