//! Global CSS styles for the invitation page.
//!
//! Silk paper and red thread. Entrance choreography is driven by the
//! `revealed` class each section gets from its reveal latch.

pub const GLOBAL_STYLES: &str = r#"
/* === CSS Custom Properties === */
:root {
  /* PAPER (Backgrounds) */
  --silk-white: #fdfbf7;
  --golden-hour: #f7f0e3;
  --paper-shadow: rgba(60, 42, 33, 0.18);

  /* RED THREAD (Accent, Titles, Actions) */
  --red-thread: #c0273f;
  --red-thread-deep: #9d2235;
  --red-thread-light: rgba(192, 39, 63, 0.08);

  /* TEXT */
  --ink: #3d3731;
  --ink-soft: #6b625a;
  --ink-muted: #9a9088;

  /* SEMANTIC */
  --success: #3e7a4e;
  --danger: #b3261e;

  /* Typography */
  --font-script: 'Ephesis', 'Great Vibes', 'Brush Script MT', cursive;
  --font-body: 'Be Vietnam Pro', 'Segoe UI', 'Helvetica Neue', sans-serif;

  /* Transitions */
  --transition-fast: 200ms ease;
  --transition-normal: 300ms ease;
  --transition-reveal: 800ms cubic-bezier(0.22, 1, 0.36, 1);
}

/* === Global Reset === */
*, *::before, *::after {
  box-sizing: border-box;
  margin: 0;
  padding: 0;
}

html {
  font-size: 16px;
  scroll-behavior: smooth;
  -webkit-font-smoothing: antialiased;
}

body {
  font-family: var(--font-body);
  background: var(--silk-white);
  color: var(--ink);
  line-height: 1.7;
  min-height: 100vh;
  overflow-x: hidden;
}

button {
  font-family: inherit;
  border: none;
  background: none;
  cursor: pointer;
}

img {
  display: block;
}

.page {
  min-height: 100vh;
}

/* === Typography === */
.script-title {
  font-family: var(--font-script);
  font-weight: 400;
  color: var(--red-thread);
  line-height: 1.3;
}

.section-heading {
  text-align: center;
  margin-bottom: 3.5rem;
}

.section-heading .script-title {
  font-size: 3rem;
}

.section-subtitle {
  color: var(--ink-soft);
  max-width: 34rem;
  margin: 0.5rem auto 0;
}

.heading-rule {
  width: 6rem;
  height: 2px;
  background: var(--red-thread);
  margin: 1.5rem auto 0;
}

/* === Scroll Reveal === */
.reveal-item {
  opacity: 0;
  transform: translateY(30px);
  transition: opacity var(--transition-reveal), transform var(--transition-reveal);
}

.revealed .reveal-item {
  opacity: 1;
  transform: translateY(0);
}

/* Tilted items settle into their resting tilt */
.revealed .reveal-item.tilt-left    { transform: translateY(0) rotate(-2deg); }
.revealed .reveal-item.tilt-right   { transform: translateY(0) rotate(2deg); }
.revealed .reveal-item.tilt-slight  { transform: translateY(0) rotate(-1deg); }

/* === Hero === */
.hero {
  position: relative;
  height: 100vh;
  width: 100%;
  overflow: hidden;
}

.hero-image-frame {
  position: absolute;
  inset: 0;
  animation: hero-zoom 1.5s ease-out both;
}

.hero-image {
  width: 100%;
  height: 100%;
  object-fit: cover;
  animation: heartbeat 6s ease-in-out infinite;
}

.hero-vignette {
  position: absolute;
  inset: 0;
  background: linear-gradient(to bottom, rgba(0,0,0,0.2), transparent 40%, rgba(0,0,0,0.4));
}

.hero-petal {
  position: absolute;
  top: 0;
  left: 50%;
  z-index: 20;
  pointer-events: none;
  animation: petal-fall 7s linear 0.5s infinite;
}

.hero-names-wrap {
  position: absolute;
  inset: 0;
  display: flex;
  align-items: center;
  justify-content: center;
  z-index: 10;
}

.hero-thread {
  position: absolute;
  left: 50%;
  width: 2px;
  height: 80px;
  background: var(--red-thread);
  transform: translateX(-50%) scaleY(0);
  animation: thread-draw 1.5s ease-in-out 1.5s both;
}

.thread-above { top: calc(50% - 170px); transform-origin: top; }
.thread-below { bottom: calc(50% - 170px); transform-origin: bottom; }

.hero-names-card {
  position: relative;
  background: rgba(255, 255, 255, 0.95);
  backdrop-filter: blur(4px);
  padding: 2rem 3rem;
  border-radius: 8px;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
  animation: rise-in 1s ease-out 0.8s both;
}

.hero-names {
  font-family: var(--font-script);
  font-weight: 400;
  font-size: 3.5rem;
  color: var(--red-thread);
  white-space: nowrap;
}

.hero-underline {
  height: 1.5px;
  background: var(--red-thread);
  margin: 0.25rem auto 0;
  width: 90%;
  transform: scaleX(0);
  animation: underline-draw 1.5s ease-in-out 2s both;
}

.scroll-cue {
  position: absolute;
  bottom: 3rem;
  left: 50%;
  transform: translateX(-50%);
  z-index: 10;
  animation: fade-in 1s ease 3s both;
}

.scroll-cue-frame {
  width: 24px;
  height: 40px;
  border: 2px solid white;
  border-radius: 999px;
  display: flex;
  justify-content: center;
  padding-top: 8px;
  animation: cue-bob 2s ease-in-out infinite;
}

.scroll-cue-dot {
  width: 4px;
  height: 8px;
  background: white;
  border-radius: 999px;
  animation: cue-blink 2s ease-in-out infinite;
}

/* === Couple Section === */
.couple-section {
  position: relative;
  padding: 6rem 1.5rem;
  background: var(--golden-hour);
  overflow: hidden;
}

.couple-thread {
  position: absolute;
  top: 50%;
  left: 0;
  right: 0;
  height: 1px;
  background-image: linear-gradient(to right, var(--red-thread) 50%, transparent 50%);
  background-size: 10px 1px;
  opacity: 0;
  transition: opacity 2s ease-in-out;
}

.revealed .couple-thread {
  opacity: 0.3;
}

.couple-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 4rem;
  max-width: 72rem;
  margin: 0 auto;
}

@media (min-width: 768px) {
  .couple-grid { grid-template-columns: 1fr 1fr; gap: 6rem; }
}

.portrait-column {
  display: flex;
  flex-direction: column;
  align-items: center;
}

.polaroid {
  position: relative;
  background: white;
  padding: 1rem;
  box-shadow: 0 8px 30px var(--paper-shadow);
  transition: transform 500ms ease, box-shadow 500ms ease;
}

.polaroid:hover {
  transform: rotate(0deg) scale(1.02);
  box-shadow: 0 15px 50px var(--paper-shadow);
}

.polaroid-photo {
  width: 16rem;
  height: 16rem;
  overflow: hidden;
}

@media (min-width: 768px) {
  .polaroid-photo { width: 20rem; height: 20rem; }
}

.polaroid-photo img {
  width: 100%;
  height: 100%;
  object-fit: cover;
}

.polaroid-caption {
  margin-top: 1rem;
  font-family: var(--font-script);
  font-size: 1.75rem;
  text-align: center;
  color: var(--ink-soft);
}

.heart-sticker {
  position: absolute;
  top: -12px;
  right: -12px;
  width: 32px;
  height: 32px;
  background: var(--red-thread);
  border-radius: 999px;
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: 0 4px 12px var(--paper-shadow);
}

.quote {
  position: relative;
  margin-top: 2rem;
  max-width: 24rem;
}

.quote-mark {
  position: absolute;
  top: -1rem;
  left: -1rem;
  width: 2rem;
  height: 2rem;
  color: var(--red-thread);
  opacity: 0.3;
}

.quote-text {
  text-align: center;
  font-style: italic;
  color: var(--ink-soft);
  padding: 0 1.5rem;
  position: relative;
  z-index: 1;
}

.connecting-heart {
  display: flex;
  justify-content: center;
  margin-top: 3rem;
}

.connecting-heart svg {
  width: 48px;
  height: 48px;
  padding: 12px;
  background: var(--red-thread);
  border-radius: 999px;
  box-shadow: 0 6px 18px var(--paper-shadow);
}

/* === Venue Section === */
.venue-section {
  position: relative;
  padding: 6rem 1.5rem;
  background: var(--silk-white);
}

.venue-section::before {
  content: '';
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  height: 1px;
  background: linear-gradient(to right, transparent, var(--red-thread), transparent);
  opacity: 0.3;
}

.venue-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 3rem;
  max-width: 64rem;
  margin: 0 auto;
}

@media (min-width: 768px) {
  .venue-grid { grid-template-columns: 1fr 1fr; gap: 4rem; }
}

.venue-card {
  position: relative;
  background: white;
  border-radius: 8px;
  box-shadow: 0 10px 40px var(--paper-shadow);
  padding: 2.5rem 2rem 2rem;
  overflow: hidden;
  transition: transform var(--transition-normal);
}

.venue-card:hover {
  transform: translateY(-5px);
}

.venue-card-trim {
  position: absolute;
  top: 0;
  left: 0;
  right: 0;
  height: 8px;
  background: linear-gradient(to right, var(--red-thread), #e07a8b, var(--red-thread));
}

.venue-title {
  font-size: 2.5rem;
  text-align: center;
  margin-bottom: 0.5rem;
}

.venue-subtitle {
  text-align: center;
  color: var(--ink-soft);
  margin-bottom: 1.5rem;
}

.venue-divider {
  display: flex;
  align-items: center;
  gap: 1rem;
  margin-bottom: 1.5rem;
}

.divider-line {
  flex: 1;
  height: 1px;
  background: linear-gradient(to right, transparent, #d8d2c8, transparent);
}

.divider-dot {
  width: 8px;
  height: 8px;
  background: var(--red-thread);
  border-radius: 999px;
}

.venue-row {
  display: flex;
  align-items: flex-start;
  gap: 0.75rem;
  margin-bottom: 1rem;
}

.venue-icon {
  width: 20px;
  height: 20px;
  color: var(--red-thread);
  flex-shrink: 0;
  margin-top: 3px;
}

.venue-address {
  color: var(--ink);
  flex: 1;
}

.venue-schedule {
  color: var(--ink);
}

.venue-time {
  font-weight: 600;
}

.venue-separator {
  margin: 0 0.5rem;
  color: var(--ink-muted);
}

.venue-actions {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  margin-top: 1.5rem;
}

.map-button {
  display: inline-block;
  padding: 0.75rem 1.5rem;
  background: var(--red-thread);
  color: white;
  border-radius: 999px;
  text-decoration: none;
  box-shadow: 0 6px 18px var(--paper-shadow);
  transition: background var(--transition-fast);
}

.map-button:hover {
  background: var(--red-thread-deep);
}

.venue-qr {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 0.25rem;
}

.qr-display svg {
  width: 96px;
  height: 96px;
}

.qr-display-error {
  font-size: 0.75rem;
  color: var(--ink-muted);
}

.venue-qr-hint {
  font-size: 0.75rem;
  color: var(--ink-muted);
}

.perforation {
  position: absolute;
  top: 50%;
  width: 16px;
  height: 16px;
  background: var(--silk-white);
  border-radius: 999px;
  transform: translateY(-50%);
}

.perforation.left  { left: -8px; }
.perforation.right { right: -8px; }

/* === Gallery Section === */
.gallery-section {
  position: relative;
  padding: 6rem 1.5rem;
  background: var(--golden-hour);
  overflow: hidden;
}

.photo-wall {
  display: grid;
  grid-template-columns: repeat(2, 1fr);
  gap: 2rem;
  max-width: 80rem;
  margin: 0 auto;
}

@media (min-width: 768px)  { .photo-wall { grid-template-columns: repeat(3, 1fr); } }
@media (min-width: 1024px) { .photo-wall { grid-template-columns: repeat(4, 1fr); } }

.photo-pin {
  position: relative;
  cursor: pointer;
}

.photo-pin:hover {
  z-index: 10;
}

.photo-pin:hover .photo-frame {
  transform: rotate(0deg) scale(1.05);
  box-shadow: 0 15px 50px var(--paper-shadow);
}

.photo-clip {
  position: absolute;
  top: -16px;
  left: 50%;
  transform: translateX(-50%);
  z-index: 10;
  filter: drop-shadow(0 2px 3px rgba(0,0,0,0.2));
}

.photo-frame {
  position: relative;
  background: white;
  padding: 0.75rem;
  box-shadow: 0 8px 30px var(--paper-shadow);
  transition: transform var(--transition-normal), box-shadow var(--transition-normal);
}

.tilt-left  .photo-frame { transform: rotate(-2deg); }
.tilt-right .photo-frame { transform: rotate(2deg); }
.tilt-slight .photo-frame { transform: rotate(-1deg); }

.photo-frame img {
  width: 100%;
  aspect-ratio: 1 / 1;
  object-fit: cover;
}

.photo-heart {
  position: absolute;
  top: 1.25rem;
  right: 1.25rem;
  width: 24px;
  height: 24px;
  background: var(--red-thread);
  border-radius: 999px;
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: 0 2px 8px var(--paper-shadow);
}

.photo-date {
  margin-top: 0.5rem;
  font-family: var(--font-script);
  font-size: 1.1rem;
  text-align: center;
  color: var(--ink-soft);
}

/* === Lightbox === */
.lightbox-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.95);
  z-index: 50;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  animation: fade-in 300ms ease both;
}

.lightbox-button {
  position: absolute;
  width: 48px;
  height: 48px;
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.1);
  color: white;
  font-size: 1.5rem;
  line-height: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: background var(--transition-fast);
  z-index: 10;
}

.lightbox-button:hover {
  background: rgba(255, 255, 255, 0.2);
}

.lightbox-close { top: 1.5rem; right: 1.5rem; }
.lightbox-prev  { left: 1.5rem; top: 50%; transform: translateY(-50%); }
.lightbox-next  { right: 1.5rem; top: 50%; transform: translateY(-50%); }

.lightbox-stage {
  position: relative;
  max-width: 64rem;
  max-height: 85vh;
  animation: pop-in 300ms ease both;
}

.lightbox-image {
  max-width: 100%;
  max-height: 85vh;
  object-fit: contain;
  border-radius: 8px;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.5);
}

.lightbox-counter {
  position: absolute;
  bottom: 1rem;
  left: 50%;
  transform: translateX(-50%);
  background: rgba(0, 0, 0, 0.5);
  color: white;
  padding: 0.5rem 1rem;
  border-radius: 999px;
  backdrop-filter: blur(4px);
  font-size: 0.9rem;
}

/* === Modals (shared) === */
.modal-overlay {
  position: fixed;
  inset: 0;
  background: rgba(0, 0, 0, 0.6);
  backdrop-filter: blur(4px);
  z-index: 40;
  display: flex;
  align-items: center;
  justify-content: center;
  padding: 1rem;
  animation: fade-in 300ms ease both;
}

.modal {
  background: white;
  border-radius: 8px;
  box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
  width: 100%;
  max-height: 90vh;
  overflow-y: auto;
  animation: pop-in 400ms cubic-bezier(0.34, 1.2, 0.64, 1) both;
}

.rsvp-modal { max-width: 28rem; }
.gift-modal { max-width: 42rem; }

.modal-close-btn {
  position: absolute;
  top: 1rem;
  right: 1rem;
  width: 32px;
  height: 32px;
  border-radius: 999px;
  background: rgba(255, 255, 255, 0.2);
  color: inherit;
  font-size: 1.25rem;
  line-height: 1;
  display: flex;
  align-items: center;
  justify-content: center;
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.modal-close-btn:hover {
  background: rgba(255, 255, 255, 0.35);
  transform: rotate(90deg);
}

.dot-row {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 1rem 0 1.5rem;
}

.dot {
  width: 6px;
  height: 6px;
  border-radius: 999px;
  background: #e5e7eb;
}

.dot.accent {
  background: var(--red-thread);
}

/* === RSVP Modal === */
.rsvp-header {
  position: relative;
  background: linear-gradient(to right, var(--red-thread), var(--red-thread-deep));
  color: white;
  padding: 1.5rem;
}

.rsvp-title {
  color: white;
  font-size: 2.5rem;
  margin-bottom: 0.25rem;
}

.rsvp-subtitle {
  color: rgba(255, 255, 255, 0.9);
  font-size: 0.9rem;
}

.rsvp-body {
  padding: 1.5rem;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
}

.form-error {
  background: var(--red-thread-light);
  border: 1px solid rgba(192, 39, 63, 0.3);
  border-radius: 8px;
  padding: 1rem;
  color: var(--danger);
}

.form-error-hint {
  margin-top: 0.25rem;
  font-size: 0.85rem;
  color: var(--ink-soft);
}

.form-field {
  display: flex;
  flex-direction: column;
  gap: 0.5rem;
}

.input-label {
  color: var(--ink);
}

.required-mark {
  color: var(--red-thread);
}

.input-field {
  width: 100%;
  padding: 0.75rem 1rem;
  border: 1px solid #d8d2c8;
  border-radius: 8px;
  font-family: inherit;
  font-size: 1rem;
  color: var(--ink);
  background: white;
  transition: border-color var(--transition-fast), box-shadow var(--transition-fast);
}

.input-field:focus {
  outline: none;
  border-color: var(--red-thread);
  box-shadow: 0 0 0 2px var(--red-thread-light);
}

.message-input {
  resize: none;
}

.attending-choices {
  display: grid;
  grid-template-columns: 1fr 1fr;
  gap: 0.75rem;
}

.choice-button {
  padding: 0.75rem 1rem;
  border: 2px solid #d8d2c8;
  border-radius: 8px;
  color: var(--ink);
  transition: border-color var(--transition-fast), background var(--transition-fast);
}

.choice-button:hover {
  border-color: var(--ink-muted);
}

.choice-button.selected {
  border-color: var(--red-thread);
  background: var(--red-thread-light);
  color: var(--red-thread);
}

.btn-primary {
  width: 100%;
  padding: 1rem;
  background: linear-gradient(to right, var(--red-thread), var(--red-thread-deep));
  color: white;
  border-radius: 8px;
  font-size: 1rem;
  transition: box-shadow var(--transition-fast), opacity var(--transition-fast);
}

.btn-primary:hover:not(:disabled) {
  box-shadow: 0 10px 25px var(--paper-shadow);
}

.btn-primary:disabled {
  opacity: 0.6;
  cursor: default;
}

/* === Gift Modal === */
.gift-header {
  position: relative;
  background: var(--golden-hour);
  border-bottom: 1px solid #e9e2d5;
  padding: 1.5rem;
  text-align: center;
}

.gift-header .modal-close-btn {
  background: white;
  color: var(--ink-soft);
  box-shadow: 0 2px 8px var(--paper-shadow);
}

.gift-header .modal-close-btn:hover {
  background: #f3ede2;
}

.gift-title {
  font-size: 3rem;
  margin-bottom: 0.25rem;
}

.gift-subtitle {
  color: var(--ink-soft);
}

.gift-body {
  padding: 1.5rem;
}

.bank-grid {
  display: grid;
  grid-template-columns: 1fr;
  gap: 1.5rem;
}

@media (min-width: 640px) {
  .bank-grid { grid-template-columns: 1fr 1fr; }
}

.bank-card {
  background: linear-gradient(to bottom right, var(--red-thread-deep), var(--red-thread));
  border-radius: 8px;
  padding: 1.5rem;
  box-shadow: 0 15px 40px var(--paper-shadow);
}

.bank-card-head {
  text-align: center;
  margin-bottom: 1rem;
}

.bank-card-title {
  color: white;
  font-size: 2rem;
}

.bank-card-rule {
  width: 4rem;
  height: 2px;
  background: rgba(255, 255, 255, 0.5);
  margin: 0.25rem auto 0;
}

.bank-card-sheet {
  background: rgba(255, 255, 255, 0.95);
  border-radius: 8px;
  padding: 1rem;
  display: flex;
  flex-direction: column;
  gap: 0.75rem;
}

.bank-field-bank {
  text-align: center;
  padding-bottom: 0.75rem;
  border-bottom: 1px solid #e5e7eb;
}

.bank-field-label {
  font-size: 0.75rem;
  color: var(--ink-muted);
  margin-bottom: 0.1rem;
}

.bank-field-value {
  color: var(--ink);
}

.bank-number-row {
  display: flex;
  align-items: center;
  gap: 0.5rem;
}

.bank-number {
  flex: 1;
  color: var(--ink);
  letter-spacing: 0.1em;
}

.copy-button {
  padding: 0.5rem;
  border-radius: 6px;
  color: var(--ink-soft);
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.copy-button:hover {
  background: #f3f4f6;
  transform: scale(1.1);
}

.copy-check {
  color: var(--success);
}

.bank-qr {
  padding-top: 0.75rem;
  border-top: 1px solid #e5e7eb;
  display: flex;
  justify-content: center;
}

.bank-qr img {
  max-width: 10rem;
  max-height: 10rem;
}

.gift-note {
  margin-top: 1.5rem;
  padding: 1rem;
  background: var(--red-thread-light);
  border: 1px solid rgba(192, 39, 63, 0.2);
  border-radius: 8px;
  text-align: center;
  font-style: italic;
  font-size: 0.9rem;
  color: var(--ink-soft);
}

/* === Floating Nav === */
.floating-nav {
  position: fixed;
  right: 1.5rem;
  top: 50%;
  transform: translateY(-50%);
  z-index: 30;
  display: flex;
  flex-direction: column;
  gap: 1.5rem;
  animation: slide-in-right 500ms ease 1.5s both;
}

.nav-thread {
  position: absolute;
  left: 50%;
  top: 0;
  bottom: 0;
  width: 1px;
  background: var(--red-thread);
  opacity: 0.2;
  transform: translateX(-50%);
}

.nav-charm {
  position: relative;
  width: 40px;
  height: 40px;
  border-radius: 999px;
  background: white;
  color: var(--ink-soft);
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: 0 4px 12px var(--paper-shadow);
  transition: background var(--transition-fast), color var(--transition-fast), transform var(--transition-fast);
}

.nav-charm:hover {
  background: var(--red-thread-light);
  color: var(--red-thread);
  transform: scale(1.1) translateX(-5px);
}

.nav-charm.active {
  background: var(--red-thread);
  color: white;
  transform: scale(1.1);
}

.nav-icon {
  width: 20px;
  height: 20px;
}

.nav-tooltip {
  position: absolute;
  right: calc(100% + 0.75rem);
  top: 50%;
  transform: translateY(-50%);
  background: #1f2937;
  color: white;
  font-size: 0.85rem;
  padding: 0.5rem 0.75rem;
  border-radius: 8px;
  white-space: nowrap;
  opacity: 0;
  pointer-events: none;
  transition: opacity var(--transition-fast);
}

.nav-charm:hover .nav-tooltip {
  opacity: 1;
}

/* === Music Control === */
.music-control {
  position: fixed;
  bottom: 1.5rem;
  right: 1.5rem;
  z-index: 30;
  animation: fade-in 500ms ease 2s both;
}

.music-button {
  position: relative;
  width: 56px;
  height: 56px;
  border-radius: 999px;
  background: var(--red-thread);
  color: white;
  display: flex;
  align-items: center;
  justify-content: center;
  box-shadow: 0 8px 24px var(--paper-shadow);
  transition: background var(--transition-fast), transform var(--transition-fast);
}

.music-button:hover {
  background: var(--red-thread-deep);
  transform: scale(1.1);
}

.music-ring {
  position: absolute;
  inset: 0;
  border-radius: 999px;
  background: var(--red-thread);
  pointer-events: none;
}

.ring-near { animation: ring-breathe 2s ease-out infinite; }
.ring-far  { animation: ring-breathe 2s ease-out 0.5s infinite; }

.music-icon {
  position: relative;
  z-index: 1;
}

.music-note {
  animation: spin 8s linear infinite;
}

.music-tooltip {
  position: absolute;
  right: calc(100% + 0.75rem);
  top: 50%;
  transform: translateY(-50%);
  background: #1f2937;
  color: white;
  font-size: 0.85rem;
  padding: 0.5rem 0.75rem;
  border-radius: 8px;
  white-space: nowrap;
  animation: fade-in 200ms ease both;
}

/* === Footer === */
.footer {
  position: relative;
  padding: 4rem 1.5rem;
  background: var(--golden-hour);
  text-align: center;
  overflow: hidden;
}

.footer-knot {
  display: flex;
  justify-content: center;
  margin-bottom: 2rem;
}

.revealed .footer-knot svg {
  animation: knot-settle 1.2s ease-out both;
}

.knot-core {
  transform-origin: 40px 40px;
  animation: spin 20s linear infinite;
}

.footer-script {
  font-size: 2.5rem;
  margin-bottom: 1rem;
}

.footer-names {
  display: flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  color: var(--ink-soft);
}

.footer-rule {
  width: 3rem;
  height: 1px;
  background: rgba(192, 39, 63, 0.3);
}

.footer-date {
  margin-top: 2rem;
  font-size: 0.85rem;
  color: var(--ink-muted);
  letter-spacing: 0.2em;
}

/* === Keyframes === */
@keyframes hero-zoom {
  from { transform: scale(1.1); opacity: 0; }
  to   { transform: scale(1); opacity: 1; }
}

@keyframes heartbeat {
  0%, 100% { transform: scale(1); }
  50%      { transform: scale(1.02); }
}

@keyframes petal-fall {
  0%   { transform: translate(-50%, -5vh) rotate(0deg); opacity: 0; }
  10%  { opacity: 0.8; }
  100% { transform: translate(calc(-50% + 60px), 105vh) rotate(320deg); opacity: 0; }
}

@keyframes thread-draw {
  from { transform: translateX(-50%) scaleY(0); }
  to   { transform: translateX(-50%) scaleY(1); }
}

@keyframes underline-draw {
  from { transform: scaleX(0); }
  to   { transform: scaleX(1); }
}

@keyframes rise-in {
  from { opacity: 0; transform: translateY(30px); }
  to   { opacity: 1; transform: translateY(0); }
}

@keyframes fade-in {
  from { opacity: 0; }
  to   { opacity: 1; }
}

@keyframes pop-in {
  from { opacity: 0; transform: scale(0.85); }
  to   { opacity: 1; transform: scale(1); }
}

@keyframes slide-in-right {
  from { opacity: 0; transform: translateY(-50%) translateX(40px); }
  to   { opacity: 1; transform: translateY(-50%) translateX(0); }
}

@keyframes cue-bob {
  0%, 100% { transform: translateY(0); }
  50%      { transform: translateY(10px); }
}

@keyframes cue-blink {
  0%, 100% { opacity: 1; }
  50%      { opacity: 0; }
}

@keyframes ring-breathe {
  from { transform: scale(1); opacity: 0.5; }
  to   { transform: scale(1.8); opacity: 0; }
}

@keyframes spin {
  from { transform: rotate(0deg); }
  to   { transform: rotate(360deg); }
}

@keyframes knot-settle {
  from { transform: scale(0) rotate(-180deg); opacity: 0; }
  to   { transform: scale(1) rotate(0deg); opacity: 1; }
}
"#;
