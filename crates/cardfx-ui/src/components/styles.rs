//! Stylesheet for every class the card views emit.
//!
//! Durations, shadows and gradients are inline styles resolved from
//! `StyleTokens`; this sheet only carries layout and keyframes.

pub const CARD_STYLES: &str = r#"
/* === Card Base === */
.card {
  position: relative;
  width: 20rem;
  height: 12rem;
  color: #ffffff;
}

.card-header {
  display: flex;
  align-items: center;
  justify-content: space-between;
  margin-bottom: 1rem;
}

.card-icon {
  display: inline-flex;
  width: 2rem;
  height: 2rem;
  color: #ffffff;
}

/* === Indicator Dot === */
.card-dot {
  width: 0.75rem;
  height: 0.75rem;
  border-radius: 9999px;
  background: rgba(255, 255, 255, 0.4);
}

.card-dot.pulse {
  animation: card-pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
}

.card-dot.bounce {
  animation: card-bounce 1s infinite;
}

@keyframes card-pulse {
  50% { opacity: 0.5; }
}

@keyframes card-bounce {
  0%, 100% {
    transform: translateY(-25%);
    animation-timing-function: cubic-bezier(0.8, 0, 1, 1);
  }
  50% {
    transform: none;
    animation-timing-function: cubic-bezier(0, 0, 0.2, 1);
  }
}

/* === Flip === */
.card--flip {
  perspective: 1000px;
}

.card-flip__inner {
  position: relative;
  width: 100%;
  height: 100%;
  transform-style: preserve-3d;
}

.card-flip__inner.rotated {
  transform: rotateY(180deg);
}

.card-face {
  position: absolute;
  inset: 0;
  padding: 1.5rem;
  backface-visibility: hidden;
  -webkit-backface-visibility: hidden;
}

.card-face--back {
  transform: rotateY(180deg);
}

/* === Expand === */
.card--expand {
  overflow: hidden;
  background: #111827;
}

.card--expand.expanded {
  width: 24rem;
  height: 20rem;
}

.card-expand__backdrop {
  position: absolute;
  inset: 0;
  opacity: 0.9;
}

.card-expand__body {
  position: relative;
  z-index: 10;
  display: flex;
  flex-direction: column;
  height: 100%;
  padding: 1.5rem;
}

.card-expand__more {
  margin-top: 1rem;
  overflow: hidden;
}

/* === Layered === */
.card-layer {
  position: absolute;
  inset: 0;
}

.card-layer--top {
  padding: 1.5rem;
}

/* === Gallery === */
.card-gallery {
  min-height: 100vh;
  padding: 2rem;
  background: linear-gradient(to bottom right, #111827, #1f2937, #111827);
}

.card-gallery__header {
  margin-bottom: 3rem;
  text-align: center;
}

.card-gallery__title {
  margin-bottom: 1rem;
  font-size: 3rem;
  font-weight: 700;
  background: linear-gradient(to right, #60a5fa, #9333ea);
  -webkit-background-clip: text;
  background-clip: text;
  color: transparent;
}

.card-gallery__subtitle {
  font-size: 1.25rem;
  color: #d1d5db;
}

.card-gallery__grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(24rem, 1fr));
  gap: 2rem;
  justify-items: center;
  max-width: 80rem;
  margin: 0 auto;
}

.card-features {
  max-width: 80rem;
  margin: 4rem auto 0;
  padding: 2rem;
  border-radius: 1rem;
  background: rgba(31, 41, 55, 0.5);
  backdrop-filter: blur(4px);
  text-align: center;
}

.card-features__title {
  margin-bottom: 1rem;
  font-size: 1.875rem;
  color: #ffffff;
}

.card-features__lead {
  margin-bottom: 1.5rem;
  font-size: 1.125rem;
  color: #d1d5db;
}

.card-features__grid {
  display: grid;
  grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
  gap: 1.5rem;
  text-align: left;
}

.card-features__item {
  padding: 1rem;
  border-radius: 0.5rem;
  background: rgba(55, 65, 81, 0.5);
}

.card-features__item h3 {
  margin-bottom: 0.5rem;
  color: #ffffff;
}

.card-features__item p {
  font-size: 0.875rem;
  color: #d1d5db;
}
"#;
