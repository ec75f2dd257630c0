//! Global CSS styles for EmoLearn.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* SURFACES */
  --background: #f7f7fb;
  --card: #ffffff;
  --border: #e4e4ef;
  --muted: #eef0f6;

  /* TEXT */
  --foreground: #1f2033;
  --muted-foreground: #6b6d85;
  --primary-foreground: #ffffff;

  /* ROLES */
  --primary: #6d5dfc;
  --primary-glow: rgba(109, 93, 252, 0.35);
  --success: #3fb984;
  --accent: #f2994a;

  /* EMOTIONS */
  --emotion-calm: #5ab0d6;
  --emotion-energetic: #f5b942;
  --emotion-focused: #7a6cf0;
  --emotion-stressed: #e57c7c;
  --emotion-confident: #46b98a;

  /* GRADIENTS */
  --gradient-primary: linear-gradient(135deg, #6d5dfc 0%, #a78bfa 100%);
  --gradient-calm: linear-gradient(135deg, #e0f2fe 0%, #ede9fe 100%);
  --gradient-energy: linear-gradient(135deg, #fef3c7 0%, #fde68a 100%);
  --gradient-focus: linear-gradient(135deg, #ede9fe 0%, #ddd6fe 100%);

  /* Typography */
  --font-sans: 'Inter', -apple-system, 'Segoe UI', sans-serif;

  --shadow-soft: 0 4px 20px rgba(31, 32, 51, 0.06);
  --radius: 0.75rem;

  /* Transitions */
  --transition-fast: 150ms ease;
  --transition-normal: 300ms ease;
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

body {
  font-family: var(--font-sans);
  background: var(--background);
  color: var(--foreground);
  line-height: 1.5;
  min-height: 100vh;
  -webkit-font-smoothing: antialiased;
}

.container {
  max-width: 72rem;
  margin: 0 auto;
  padding: 0 1rem;
}

.muted { color: var(--muted-foreground); }
.small { font-size: 0.875rem; }

/* === Gradients === */
.gradient-primary { background: var(--gradient-primary); color: var(--primary-foreground); }
.gradient-calm { background: var(--gradient-calm); }
.gradient-energy { background: var(--gradient-energy); }
.gradient-focus { background: var(--gradient-focus); }

/* === Tones === */
.tone-primary { color: var(--primary); }
.tone-success { color: var(--success); }
.tone-accent { color: var(--accent); }

/* === Cards === */
.card {
  background-color: var(--card);
  border-radius: var(--radius);
  box-shadow: var(--shadow-soft);
  padding: 1.5rem;
}

.card-title {
  display: flex;
  align-items: center;
  gap: 0.5rem;
  font-size: 1.125rem;
  font-weight: 600;
  margin-bottom: 1rem;
}

/* === Icons === */
.icon { display: inline-block; line-height: 1; }

.icon-badge {
  width: 2.5rem;
  height: 2.5rem;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  background: var(--muted);
  flex-shrink: 0;
}

.icon-badge.large {
  width: 4rem;
  height: 4rem;
  font-size: 1.75rem;
  margin: 0 auto 1rem;
}

/* === Buttons === */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  border-radius: 0.5rem;
  font-family: inherit;
  font-weight: 500;
  cursor: pointer;
  border: 1px solid transparent;
  transition: all var(--transition-fast);
}

.btn-sm { padding: 0.375rem 0.75rem; font-size: 0.875rem; }
.btn-md { padding: 0.5rem 1rem; font-size: 1rem; }
.btn-lg { padding: 1rem 2rem; font-size: 1.125rem; }
.btn-block { width: 100%; }

.btn-primary { background: var(--primary); color: var(--primary-foreground); }
.btn-primary:hover { box-shadow: 0 0 20px var(--primary-glow); }

.btn-outline { background: var(--card); color: var(--foreground); border-color: var(--border); }
.btn-outline:hover { background: var(--muted); }

.btn-hero { background: var(--gradient-primary); color: var(--primary-foreground); }
.btn-hero:hover { box-shadow: 0 0 30px var(--primary-glow); }

/* === Badge === */
.badge {
  display: inline-block;
  font-size: 0.75rem;
  padding: 0.125rem 0.5rem;
  border-radius: 9999px;
}
.badge-secondary { background: var(--muted); color: var(--foreground); }

/* === Progress === */
.progress {
  height: 0.5rem;
  border-radius: 9999px;
  background: var(--muted);
  overflow: hidden;
  margin-top: 0.75rem;
}

.progress-fill {
  height: 100%;
  background: var(--primary);
  transition: width var(--transition-normal);
}

/* === Hero === */
.hero {
  padding: 5rem 0;
  text-align: center;
}

.hero-title { font-size: 3.5rem; font-weight: 700; margin-bottom: 1.5rem; }
.hero-tagline { font-size: 1.375rem; opacity: 0.9; max-width: 48rem; margin: 0 auto 2rem; }

.highlights {
  display: flex;
  flex-wrap: wrap;
  justify-content: center;
  gap: 1.5rem;
}

.highlight { display: flex; align-items: center; gap: 0.5rem; opacity: 0.9; }

/* === Emotion selector === */
.selection-section { padding: 3rem 1rem; }

.selector-heading { text-align: center; margin-bottom: 1.5rem; }
.selector-heading h2 { font-size: 1.5rem; font-weight: 600; margin-bottom: 0.5rem; }

.emotion-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(10rem, 1fr));
  gap: 1rem;
}

.emotion-tile {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.75rem;
  padding: 1rem;
  border-radius: var(--radius);
  border: 1px solid var(--border);
  background: var(--card);
  color: var(--foreground);
  cursor: pointer;
  text-align: center;
  font-family: inherit;
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.emotion-tile:hover { transform: scale(1.05); }

.emotion-tile.selected {
  background: var(--primary);
  color: var(--primary-foreground);
  box-shadow: 0 0 30px var(--primary-glow);
}

.emotion-icon {
  width: 3rem;
  height: 3rem;
  border-radius: 9999px;
  display: flex;
  align-items: center;
  justify-content: center;
  font-size: 1.5rem;
  background: rgba(255, 255, 255, 0.2);
}

.emotion-tile.emotion-calm .emotion-icon { color: var(--emotion-calm); }
.emotion-tile.emotion-energetic .emotion-icon { color: var(--emotion-energetic); }
.emotion-tile.emotion-focused .emotion-icon { color: var(--emotion-focused); }
.emotion-tile.emotion-stressed .emotion-icon { color: var(--emotion-stressed); }
.emotion-tile.emotion-confident .emotion-icon { color: var(--emotion-confident); }

.emotion-label { font-weight: 500; }
.emotion-description { font-size: 0.75rem; margin-top: 0.25rem; opacity: 0.8; }

.start-row { margin-top: 2rem; text-align: center; }

/* === Features === */
.features { background: var(--muted); padding: 5rem 0; }
.section-title { font-size: 1.875rem; font-weight: 700; text-align: center; margin-bottom: 3rem; }

.feature-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(16rem, 1fr));
  gap: 2rem;
}

.feature-card { text-align: center; }
.feature-card h3 { font-size: 1.25rem; font-weight: 600; margin-bottom: 0.75rem; }

/* === Dashboard header === */
.app-header {
  position: sticky;
  top: 0;
  z-index: 40;
  background: var(--card);
  border-bottom: 1px solid var(--border);
}

.app-header-inner {
  max-width: 72rem;
  margin: 0 auto;
  padding: 1rem;
  display: flex;
  align-items: center;
  justify-content: space-between;
}

.brand { display: flex; align-items: center; gap: 0.75rem; }
.brand-mark {
  width: 2rem;
  height: 2rem;
  border-radius: 0.5rem;
  background: var(--primary);
  color: var(--primary-foreground);
  display: flex;
  align-items: center;
  justify-content: center;
}
.brand-name { font-size: 1.25rem; font-weight: 700; }

/* === Dashboard === */
.dashboard-main { padding: 2rem 1rem; }
.dashboard { display: flex; flex-direction: column; gap: 1.5rem; }

.hero-card-body { display: flex; align-items: center; justify-content: space-between; }
.hero-card-title { font-size: 1.5rem; font-weight: 600; margin-bottom: 0.5rem; }
.hero-card-description { font-size: 1.125rem; opacity: 0.9; }

.breathe {
  font-size: 2rem;
  color: var(--primary);
  animation: breathe 4s ease-in-out infinite;
}

.breathe.emotion-calm { color: var(--emotion-calm); }
.breathe.emotion-energetic { color: var(--emotion-energetic); }
.breathe.emotion-focused { color: var(--emotion-focused); }
.breathe.emotion-stressed { color: var(--emotion-stressed); }
.breathe.emotion-confident { color: var(--emotion-confident); }

.metric-grid, .activity-grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
  gap: 1rem;
}

.metric-card { padding: 1rem; }
.metric-header { display: flex; align-items: center; gap: 0.75rem; }
.metric-value { font-size: 1.25rem; font-weight: 700; }

.activity-card {
  border: 1px solid var(--border);
  border-radius: var(--radius);
  padding: 1rem;
  transition: box-shadow var(--transition-normal);
}
.activity-card:hover { box-shadow: var(--shadow-soft); }

.activity-header {
  display: flex;
  align-items: flex-start;
  justify-content: space-between;
  margin-bottom: 0.75rem;
}
.activity-title { display: flex; align-items: center; gap: 0.75rem; }
.activity-title h4 { font-weight: 500; }
.activity-icon {
  width: 2rem;
  height: 2rem;
  border-radius: 0.5rem;
  background: var(--muted);
  color: var(--primary);
  display: flex;
  align-items: center;
  justify-content: center;
}

.achievement-list { display: flex; flex-direction: column; gap: 0.75rem; }
.achievement {
  display: flex;
  align-items: center;
  gap: 0.75rem;
  padding: 0.75rem;
  border-radius: 0.5rem;
  background: var(--muted);
}
.achievement-title { font-weight: 500; color: var(--foreground); }

/* === Animations === */
@keyframes breathe {
  0%, 100% { transform: scale(1); opacity: 0.85; }
  50% { transform: scale(1.1); opacity: 1; }
}

@keyframes fade-in {
  from { opacity: 0; transform: translateY(8px); }
  to { opacity: 1; transform: translateY(0); }
}

.fade-in { animation: fade-in 0.5s ease-out; }
"#;
