use crate::models::ExerciseInfo;

pub fn render_index(exercises: &[ExerciseInfo]) -> String {
    let cards: String = exercises
        .iter()
        .map(|exercise| {
            format!(
                r#"      <li class="exercise-card" data-category="{category}" data-game="{game}">
        <span class="label">{category}</span>
        <span class="title">{title}</span>
      </li>
"#,
                category = escape(&exercise.category),
                game = escape(&exercise.game),
                title = escape(&exercise.title),
            )
        })
        .collect();

    INDEX_HTML.replace("{{EXERCISES}}", &cards)
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="pl">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Luna</title>
  <style>
    :root {
      --bg: #eef6ff;
      --ink: #243447;
      --accent: #4a90e2;
      --accent-2: #50e3c2;
      --card: rgba(255, 255, 255, 0.9);
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: linear-gradient(160deg, var(--bg), #fdf6ff);
      color: var(--ink);
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px;
    }

    main {
      width: min(760px, 100%);
      background: var(--card);
      border-radius: 28px;
      box-shadow: 0 24px 60px rgba(74, 144, 226, 0.18);
      padding: 32px;
      display: grid;
      gap: 24px;
    }

    h1 {
      margin: 0;
      font-size: clamp(2rem, 4vw, 2.6rem);
    }

    ul {
      list-style: none;
      margin: 0;
      padding: 0;
      display: grid;
      grid-template-columns: repeat(auto-fit, minmax(160px, 1fr));
      gap: 14px;
    }

    .exercise-card {
      background: white;
      border-radius: 18px;
      border: 2px solid var(--accent-2);
      padding: 16px;
      display: grid;
      gap: 6px;
    }

    .label {
      font-size: 0.8rem;
      text-transform: uppercase;
      letter-spacing: 0.12em;
      color: var(--accent);
    }

    .title {
      font-size: 1.2rem;
      font-weight: 600;
    }

    code {
      background: #f1f4f8;
      border-radius: 6px;
      padding: 2px 6px;
    }
  </style>
</head>
<body>
  <main>
    <header>
      <h1>🌙 Luna</h1>
      <p>Sensory exercises for kids. Earn a star for every finished game.</p>
    </header>
    <ul>
{{EXERCISES}}    </ul>
    <p>Log in with <code>POST /api/login</code>, then save stars with <code>POST /api/save-progress</code>.</p>
  </main>
</body>
</html>
"#;
