pub const PITCH_CSS: &str = r#"
    :root {
        --slate-50: #f8fafc;
        --slate-100: #f1f5f9;
        --slate-200: #e2e8f0;
        --slate-300: #cbd5e1;
        --slate-400: #94a3b8;
        --slate-500: #64748b;
        --slate-600: #475569;
        --slate-700: #334155;
        --slate-900: #0f172a;
        --indigo-500: #6366f1;
        --indigo-600: #4f46e5;
    }
    * { box-sizing: border-box; }
    body {
        margin: 0;
        background: #fff;
        color: var(--slate-900);
        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
    }
    ::selection { background: #e0e7ff; color: #312e81; }
    .pitch-page { min-height: 100vh; overflow-x: hidden; }
    h1, h2, h3, h4, p { margin: 0; }

    @keyframes float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-20px); }
    }
    @keyframes pulse {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.5; }
    }
    .float { animation: float 6s ease-in-out infinite; }

    .watermark {
        position: fixed; top: 0; left: 0; width: 100%; height: 100vh;
        pointer-events: none; overflow: hidden; z-index: 0;
    }
    .watermark > div {
        position: absolute; font-weight: 700; white-space: nowrap; user-select: none;
        font-size: clamp(12rem, 30vw, 28rem); line-height: 1;
    }
    .watermark-open { top: -5%; left: -5%; color: rgba(241, 245, 249, 0.8); }
    .watermark-close { top: 30%; right: 0; color: rgba(248, 250, 252, 0.5); opacity: 0.5; animation-delay: 1s; }

    .top-nav {
        position: fixed; top: 0; width: 100%; z-index: 50;
        background: rgba(255, 255, 255, 0.9); backdrop-filter: blur(24px);
        border-bottom: 1px solid var(--slate-100);
    }
    .nav-content {
        max-width: 80rem; margin: 0 auto; padding: 0 2rem; height: 5rem;
        display: flex; align-items: center; justify-content: space-between;
    }
    .nav-logo { display: flex; align-items: center; gap: 0.75rem; cursor: pointer; }
    .wordmark { font-size: 1.875rem; font-weight: 700; letter-spacing: -0.05em; transition: color 0.2s; }
    .nav-logo:hover .wordmark { color: var(--indigo-600); }
    .paren { color: var(--slate-300); }
    .byline {
        font-size: 0.75rem; font-weight: 700; background: var(--slate-900); color: #fff;
        padding: 0.375rem 0.75rem; border-radius: 9999px;
    }

    .pitch-main {
        position: relative; z-index: 10; max-width: 80rem; margin: 0 auto;
        padding: 8rem 2rem; display: flex; flex-direction: column; gap: 10rem;
    }
    .grid { display: grid; gap: 2rem; }
    .grid.two, .grid.three, .grid.four { grid-template-columns: 1fr; }
    .full-height, .full-height > * { height: 100%; }
    .stack { margin-top: 1.5rem; display: flex; flex-direction: column; gap: 0.75rem; }
    .eyebrow, .micro-label {
        font-size: 10px; font-weight: 700; color: var(--slate-400);
        text-transform: uppercase; letter-spacing: 0.1em;
    }

    .hero { max-width: 56rem; }
    .tag-row { display: flex; flex-wrap: wrap; gap: 0.75rem; margin-bottom: 2rem; }
    .tag {
        background: #fefce8; color: #854d0e; padding: 0.375rem 1rem; border-radius: 0.5rem;
        font-size: 0.75rem; font-weight: 700; letter-spacing: 0.15em; text-transform: uppercase;
    }
    .tag:hover { background: #fef9c3; }
    .hero h1 { font-size: clamp(3.75rem, 8vw, 6rem); font-weight: 700; letter-spacing: -0.05em; line-height: 1; margin-bottom: 2rem; }
    .hero-muted { color: var(--slate-400); font-weight: 500; }
    .hero-subtitle { font-size: 1.5rem; color: var(--slate-500); max-width: 42rem; line-height: 1.6; font-weight: 300; }
    .hero-emphasis { display: block; margin-top: 0.5rem; color: var(--slate-900); font-weight: 500; }

    .paths-intro { margin-bottom: 5rem; }
    .paths-intro h2 { font-size: 3rem; font-weight: 700; letter-spacing: -0.025em; margin-bottom: 1.5rem; }
    .paths-intro p { font-size: 1.25rem; color: var(--slate-500); max-width: 42rem; }

    .section-header { margin-bottom: 2.5rem; }
    .section-header-row { display: flex; align-items: center; gap: 0.75rem; margin-bottom: 0.5rem; }
    .section-number {
        display: flex; align-items: center; justify-content: center; width: 2rem; height: 2rem;
        border-radius: 9999px; font-size: 0.875rem; font-weight: 700; background: var(--slate-900); color: #fff;
    }
    .section-title { font-size: 1.875rem; font-weight: 700; letter-spacing: -0.025em; }
    .section-subtitle { font-size: 1.125rem; margin-left: 0.25rem; color: var(--slate-500); }
    .section-header.dark .section-number { background: #fff; color: var(--slate-900); }
    .section-header.dark .section-title { color: #fff; }
    .section-header.dark .section-subtitle { color: var(--slate-300); }

    .strategy-card {
        background: #fff; border-radius: 2.5rem; border: 1px solid var(--slate-100); overflow: hidden;
        display: flex; flex-direction: column; height: 100%;
        box-shadow: 0 20px 60px rgba(0, 0, 0, 0.04); transition: box-shadow 0.5s;
    }
    .strategy-card:hover { box-shadow: 0 40px 80px rgba(0, 0, 0, 0.08); }
    .strategy-head { padding: 3rem; border-bottom: 1px solid var(--slate-50); background: linear-gradient(to bottom, rgba(248, 250, 252, 0.5), #fff); }
    .strategy-head-row { display: flex; justify-content: space-between; align-items: flex-start; margin-bottom: 2rem; }
    .strategy-icon {
        width: 4rem; height: 4rem; border-radius: 1rem; display: flex; align-items: center; justify-content: center;
        background: var(--accent-soft); color: var(--accent-ink); transition: transform 0.5s;
    }
    .strategy-card:hover .strategy-icon { transform: scale(1.1) rotate(3deg); }
    .strategy-badge {
        padding: 0.5rem 1rem; border-radius: 9999px; font-size: 10px; font-weight: 700;
        text-transform: uppercase; letter-spacing: 0.1em;
        background: var(--accent-soft); color: var(--accent-ink);
    }
    .strategy-title { font-size: 1.875rem; font-weight: 700; letter-spacing: -0.025em; margin-bottom: 1rem; }
    .strategy-description { color: var(--slate-500); font-size: 1.125rem; line-height: 1.6; }
    .strategy-body { padding: 3rem; display: flex; flex-direction: column; gap: 2.5rem; flex-grow: 1; }
    .strategy-block { display: flex; flex-direction: column; gap: 1rem; }
    .strategy-point { display: flex; align-items: flex-start; gap: 0.75rem; font-size: 0.875rem; color: var(--slate-700); font-weight: 500; }
    .dot { margin-top: 0.5rem; width: 0.375rem; height: 0.375rem; border-radius: 9999px; flex-shrink: 0; background: var(--accent); }
    .offer-title { font-weight: 700; color: var(--accent-ink); }
    .deliverable {
        display: flex; align-items: center; gap: 0.75rem; font-size: 0.875rem; font-weight: 500;
        background: var(--slate-50); padding: 0.75rem 1rem; border-radius: 0.75rem; border: 1px solid transparent;
    }
    .deliverable:hover { background: var(--slate-100); border-color: var(--slate-200); }
    .deliverable .icon { color: var(--accent); }
    .metric-chips { display: flex; flex-wrap: wrap; gap: 0.5rem; }
    .metric-chip { font-size: 0.75rem; padding: 0.375rem 0.75rem; border-radius: 9999px; border: 1px solid var(--slate-200); color: var(--slate-600); }
    .strategy-footer { padding: 2rem; background: var(--slate-50); text-align: center; border-top: 1px solid var(--slate-100); }
    .strategy-pricing { font-weight: 700; color: var(--accent-ink); margin-top: 0.25rem; }

    .machine-card {
        background: #fff; padding: 2rem; border-radius: 2rem; border: 1px solid var(--slate-100);
        display: flex; flex-direction: column; height: 100%;
        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.02); transition: all 0.5s;
    }
    .machine-card:hover { transform: translateY(-4px); box-shadow: 0 20px 40px rgba(0, 0, 0, 0.06); border-color: #e0e7ff; }
    .machine-head { display: flex; align-items: center; gap: 1rem; margin-bottom: 0.5rem; }
    .machine-head h3 { font-size: 1.125rem; font-weight: 700; }
    .machine-icon { padding: 0.75rem; border-radius: 1rem; display: flex; }
    .machine-body { flex-grow: 1; }
    .engine-list { list-style: none; padding: 0; margin: 1.5rem 0 0; display: flex; flex-direction: column; gap: 1rem; font-size: 0.875rem; color: var(--slate-600); }
    .engine-list li { display: flex; justify-content: space-between; align-items: center; border-bottom: 1px solid var(--slate-100); padding-bottom: 0.75rem; }
    .engine-list strong { font-size: 1.125rem; color: var(--slate-900); }
    .badge {
        display: flex; align-items: center; justify-content: space-between; font-size: 0.75rem;
        padding: 0.75rem; border-radius: 0.75rem; background: var(--slate-50); border: 1px solid var(--slate-100);
    }
    .badge-label { color: var(--slate-600); font-weight: 500; }
    .badge-points { font-weight: 700; color: var(--indigo-600); }
    .playbook { background: var(--slate-50); padding: 1rem; border-radius: 1rem; border: 1px solid var(--slate-100); transition: background 0.2s; }
    .playbook.clinics:hover { background: #eef2ff; }
    .playbook.insurers:hover { background: #eff6ff; }
    .playbook-label { font-size: 10px; font-weight: 700; letter-spacing: 0.05em; margin-bottom: 0.25rem; }
    .playbook.clinics .playbook-label { color: #059669; }
    .playbook.insurers .playbook-label { color: #2563eb; }
    .playbook-angle { font-size: 0.875rem; font-weight: 500; color: var(--slate-700); }

    .volume-panel { margin-top: 4rem; background: var(--slate-50); border-radius: 2.5rem; padding: 3.5rem; border: 1px solid var(--slate-100); }
    .panel-heading { display: flex; align-items: center; gap: 1rem; margin-bottom: 2.5rem; }
    .panel-heading h3 { font-size: 1.5rem; font-weight: 700; letter-spacing: -0.025em; }
    .panel-icon { padding: 0.75rem; background: #fff; border-radius: 0.75rem; color: var(--indigo-600); display: flex; }
    .panel-icon.dark { background: rgba(255, 255, 255, 0.1); }
    .zap { color: #facc15; fill: #facc15; }
    .metric-card { padding: 2rem; border-radius: 1.5rem; background: #fff; border: 1px solid var(--slate-100); }
    .metric-card.highlight { background: var(--slate-900); color: #fff; border-color: var(--slate-900); }
    .metric-value { font-size: 2.25rem; font-weight: 700; letter-spacing: -0.05em; margin-bottom: 0.5rem; }
    .metric-label { font-size: 0.75rem; font-weight: 700; text-transform: uppercase; letter-spacing: 0.05em; color: var(--slate-400); }

    .tactic-list { background: var(--slate-50); border-radius: 2.5rem; padding: 2rem; border: 1px solid var(--slate-100); }
    .tactic-row { border-bottom: 1px solid var(--slate-200); cursor: pointer; transition: background 0.2s; }
    .reveal:last-child .tactic-row { border-bottom: 0; }
    .tactic-row:hover { background: #fff; }
    .tactic-head { padding: 1.5rem 2rem; display: flex; align-items: center; justify-content: space-between; gap: 1rem; }
    .tactic-title-group, .tactic-actions { display: flex; align-items: center; gap: 1.5rem; }
    .tactic-icon {
        width: 3rem; height: 3rem; border-radius: 0.75rem; display: flex; align-items: center; justify-content: center;
        background: var(--slate-100); color: var(--slate-500); transition: background 0.3s, color 0.3s;
    }
    .tactic-row:hover .tactic-icon { color: var(--slate-900); }
    .tactic-row.open .tactic-icon { color: #fff; }
    .tactic-title { font-size: 1.125rem; font-weight: 700; }
    .tactic-subtitle { font-size: 0.75rem; font-weight: 700; color: var(--slate-400); text-transform: uppercase; letter-spacing: 0.05em; margin-top: 0.125rem; }
    .tactic-impact { display: flex; align-items: center; gap: 0.5rem; font-size: 0.875rem; font-weight: 600; color: var(--indigo-600); }
    .tactic-actions .tactic-impact { opacity: 0; transition: opacity 0.3s; }
    .tactic-row.open .tactic-actions .tactic-impact { opacity: 1; }
    .tactic-toggle {
        padding: 0.5rem 1rem; border-radius: 9999px; font-size: 0.75rem; font-weight: 700;
        text-transform: uppercase; letter-spacing: 0.05em; display: flex; align-items: center; gap: 0.5rem;
        background: var(--slate-100); color: var(--slate-600); transition: all 0.3s;
    }
    .tactic-row:hover .tactic-toggle { background: var(--indigo-600); color: #fff; }
    .tactic-row.open .tactic-toggle { background: var(--slate-900); color: #fff; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
    .chevron { transition: transform 0.3s; }
    .tactic-row.open .chevron { transform: rotate(180deg); }
    .tactic-body { overflow: hidden; max-height: 0; opacity: 0; transition: max-height 0.5s ease-in-out, opacity 0.5s ease-in-out; }
    .tactic-row.open .tactic-body { max-height: 15rem; opacity: 1; }
    .tactic-body-inner { padding: 0.5rem 2rem 2rem 6.5rem; }
    .tactic-body-inner p { color: var(--slate-600); line-height: 1.6; max-width: 42rem; }
    .tactic-body-inner .tactic-impact { margin-top: 1rem; }

    .metric-system {
        background: #fff; border-radius: 2.5rem; padding: 3.5rem; border: 1px solid var(--slate-100);
        position: relative; overflow: hidden; height: 100%;
        display: flex; flex-direction: column; justify-content: space-between;
        box-shadow: 0 20px 50px rgba(0, 0, 0, 0.03);
    }
    .blur-orb { position: absolute; top: -5rem; right: -5rem; width: 20rem; height: 20rem; background: var(--slate-50); border-radius: 9999px; filter: blur(64px); pointer-events: none; }
    .north-star { margin-bottom: 4rem; position: relative; z-index: 10; }
    .pill {
        display: inline-block; padding: 0.375rem 1rem; background: var(--slate-100); color: var(--slate-600);
        border-radius: 9999px; font-size: 10px; font-weight: 700; letter-spacing: 0.1em; margin-bottom: 1rem; text-transform: uppercase;
    }
    .north-star-metric { font-size: 3.75rem; font-weight: 700; letter-spacing: -0.05em; line-height: 1.1; }
    .north-star-metric span { display: block; font-size: 1.5rem; color: var(--slate-400); font-weight: 400; margin-top: 0.75rem; letter-spacing: 0; }
    .funnels { display: flex; flex-direction: column; gap: 2.5rem; position: relative; z-index: 10; }
    .funnel-row h4 { font-weight: 700; margin-bottom: 1rem; display: flex; align-items: center; gap: 0.75rem; }
    .funnel-icon { padding: 0.5rem; border-radius: 0.75rem; display: flex; }
    .funnel-steps { display: flex; flex-wrap: wrap; align-items: center; gap: 0.75rem; }
    .funnel-step {
        padding: 0.5rem 1rem; border-radius: 0.5rem; border: 1px solid var(--slate-200); background: #fff;
        color: var(--slate-600); font-size: 0.75rem; font-weight: 500; letter-spacing: 0.025em; transition: transform 0.3s;
    }
    .funnel-step:hover { transform: scale(1.05); }
    .funnel-step.highlight { background: var(--slate-900); color: #fff; border-color: var(--slate-900); }
    .funnel-arrow { color: var(--slate-300); stroke-width: 3; }

    .cadence {
        background: #1c1c1e; border-radius: 2.5rem; padding: 3.5rem; color: #fff; height: 100%;
        display: flex; flex-direction: column; justify-content: space-between; position: relative; overflow: hidden;
    }
    .ring {
        position: absolute; bottom: 0; left: 50%; transform: translate(-50%, 50%);
        border: 1px solid rgba(255, 255, 255, 0.05); border-radius: 9999px; animation: pulse 8s ease-in-out infinite;
    }
    .ring.outer { width: 35rem; height: 35rem; }
    .ring.inner { width: 25rem; height: 25rem; animation-duration: 6s; }
    .cadence:hover .ring { border-color: rgba(255, 255, 255, 0.1); }
    .cadence-stages { display: flex; flex-direction: column; gap: 2.5rem; position: relative; z-index: 10; }
    .cadence-stage { padding-left: 2rem; border-left: 1px solid rgba(255, 255, 255, 0.2); position: relative; }
    .cadence-stage.active { border-left-color: var(--indigo-500); }
    .cadence-dot {
        position: absolute; left: -5px; top: 0; width: 0.625rem; height: 0.625rem; border-radius: 9999px;
        background: #1c1c1e; border: 2px solid rgba(255, 255, 255, 0.4);
    }
    .cadence-stage.active .cadence-dot { background: var(--indigo-500); border: 0; box-shadow: 0 0 15px rgba(99, 102, 241, 0.8); }
    .cadence-weeks { font-size: 1.25rem; font-weight: 700; margin-bottom: 0.5rem; }
    .cadence-headline { color: rgba(255, 255, 255, 0.6); font-weight: 300; }
    .cadence-stage.active .cadence-headline { color: #c7d2fe; }
    .cadence-focus { font-size: 0.75rem; color: rgba(255, 255, 255, 0.4); margin-top: 0.5rem; text-transform: uppercase; letter-spacing: 0.05em; font-weight: 500; }
    .cadence-footer { margin-top: 3rem; padding-top: 2.5rem; border-top: 1px solid rgba(255, 255, 255, 0.1); text-align: center; position: relative; z-index: 10; }
    .cadence-footer p { font-size: 0.875rem; color: rgba(255, 255, 255, 0.4); font-weight: 500; }
    .cadence-footer strong { color: #fff; }

    .roadmap-card {
        background: #fff; padding: 2rem; border-radius: 2rem; border: 1px solid var(--slate-100); height: 100%;
        box-shadow: 0 10px 40px rgba(0, 0, 0, 0.02); transition: all 0.3s;
    }
    .roadmap-card:hover { transform: translateY(-0.5rem); box-shadow: 0 20px 60px rgba(0, 0, 0, 0.06); }
    .roadmap-period { font-size: 3.75rem; font-weight: 900; color: var(--slate-100); margin-bottom: 2rem; letter-spacing: -0.05em; user-select: none; transition: color 0.2s; }
    .roadmap-card:hover .roadmap-period { color: var(--slate-200); }
    .roadmap-card h3 { font-size: 1.25rem; font-weight: 700; margin-bottom: 1.5rem; }
    .roadmap-card ul { list-style: none; padding: 0; margin: 0; display: flex; flex-direction: column; gap: 1rem; }
    .roadmap-card li { display: flex; align-items: flex-start; gap: 0.75rem; font-size: 0.875rem; color: var(--slate-600); line-height: 1.6; }
    .roadmap-check { color: var(--indigo-600); margin-top: 0.125rem; flex-shrink: 0; opacity: 0.5; transition: opacity 0.2s; }
    .roadmap-card:hover .roadmap-check { opacity: 1; }
    .roadmap-card:hover li { color: var(--slate-900); }

    .pitch-footer { border-top: 1px solid var(--slate-100); padding: 6rem 1rem; background: #fff; position: relative; z-index: 10; text-align: center; }
    .pitch-footer .wordmark { margin-bottom: 1rem; }
    .pitch-footer p { color: var(--slate-400); font-size: 0.875rem; font-weight: 500; }

    .narrow-only { display: none; }
    @media (min-width: 768px) {
        .grid.two { grid-template-columns: repeat(2, 1fr); }
        .grid.three { grid-template-columns: repeat(3, 1fr); }
        .grid.four { grid-template-columns: repeat(2, 1fr); }
    }
    @media (min-width: 1024px) {
        .grid.two { gap: 4rem; }
        .grid.four { grid-template-columns: repeat(4, 1fr); }
    }
    @media (max-width: 767px) {
        .wide-only { display: none; }
        .narrow-only { display: inline; }
        .tactic-body-inner .narrow-only { display: flex; }
        .tactic-head { padding: 1.5rem 1rem; }
        .tactic-body-inner { padding: 0.5rem 1rem 2rem 5.5rem; }
        .strategy-head, .strategy-body { padding: 2.5rem; }
        .volume-panel, .metric-system, .cadence { padding: 2.5rem; }
        .tactic-list { padding: 1rem; }
        .pitch-main { padding: 8rem 1rem; }
    }
"#;
