//! Global CSS styles for the card gallery page.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  --gray-900: #111827;
  --gray-800: #1f2937;
  --gray-300: #d1d5db;
  --green-400: #4ade80;

  --font-sans: ui-sans-serif, system-ui, -apple-system, 'Segoe UI', sans-serif;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  -webkit-font-smoothing: antialiased;
  -moz-osx-font-smoothing: grayscale;
}

body {
  font-family: var(--font-sans);
  background: var(--gray-900);
  color: #ffffff;
  line-height: 1.5;
  min-height: 100vh;
}

/* === Quick Start === */
.quick-start {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1.5rem;
  padding: 3rem 2rem 4rem;
  background: var(--gray-900);
}

.quick-start__title {
  font-size: 1.5rem;
  color: var(--gray-300);
}

/* === Demo Content === */
.demo-title {
  margin-bottom: 0.5rem;
  font-size: 1.5rem;
  font-weight: 700;
}

.demo-text {
  color: rgba(255, 255, 255, 0.8);
}

.demo-heading {
  margin-bottom: 0.75rem;
  font-size: 1.25rem;
  font-weight: 700;
}

.demo-stack {
  list-style: none;
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.demo-stack li {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.demo-stack__dot {
  width: 0.5rem;
  height: 0.5rem;
  border-radius: 9999px;
}

.demo-stats {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 1rem;
}

.demo-stats__item {
  text-align: center;
}

.demo-stats__value {
  font-size: 1.5rem;
  font-weight: 700;
  color: var(--green-400);
}

.demo-stats__label {
  font-size: 0.875rem;
}

.demo-highlights {
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.demo-highlights__tile {
  padding: 0.75rem;
  border-radius: 0.5rem;
  background: rgba(255, 255, 255, 0.2);
}

.demo-highlights__tile h4 {
  margin-bottom: 0.25rem;
  font-weight: 600;
}

.demo-highlights__tile p {
  font-size: 0.875rem;
  color: rgba(255, 255, 255, 0.8);
}

.demo-meter {
  margin-top: 1rem;
}

.demo-meter__legend {
  display: flex;
  justify-content: space-between;
  margin-bottom: 0.25rem;
  font-size: 0.875rem;
  color: rgba(255, 255, 255, 0.75);
}

.demo-meter__track {
  width: 100%;
  height: 0.5rem;
  border-radius: 9999px;
  background: rgba(124, 45, 18, 0.5);
}

.demo-meter__fill {
  height: 0.5rem;
  border-radius: 9999px;
  background: #ffffff;
}
"#;
