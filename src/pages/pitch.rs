use yew::prelude::*;

use crate::components::cards::{MachineCard, RoadmapCard, StrategyCard};
use crate::components::chips::{Badge, Tag};
use crate::components::count_up::CountUp;
use crate::components::funnel_row::FunnelRow;
use crate::components::icon::{Icon, IconView};
use crate::components::metric_card::MetricCard;
use crate::components::reveal::Reveal;
use crate::components::section_header::SectionHeader;
use crate::components::tactic_row::TacticRow;
use crate::config;
use crate::content::{
    MetricValue, Tone, CADENCE, CLINIC_STRATEGY, FIT_CRITERIA, FUNNELS, GROWTH_TACTICS, HERO_TAGS,
    INSURER_STRATEGY, PAYER_ORGS, ROADMAP, TARGET_CLINICS, WEEKLY_VOLUME,
};
use crate::pages::styles::PITCH_CSS;

#[function_component(Pitch)]
pub fn pitch() -> Html {
    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    html! {
        <div class="pitch-page">
            <style>{PITCH_CSS}</style>

            <div class="watermark" aria-hidden="true">
                <div class="watermark-open float">{"YOU("}</div>
                <div class="watermark-close float">{")"}</div>
            </div>

            <nav class="top-nav">
                <div class="nav-content">
                    <div class="nav-logo">
                        <span class="wordmark">
                            {"YOU"}<span class="paren">{"("}</span>{"th"}<span class="paren">{")"}</span>
                        </span>
                        <span class="byline">{"by Raghav"}</span>
                    </div>
                </div>
            </nav>

            <main class="pitch-main">
                <Hero />
                <TwoPaths />
                <GtmMachine />
                <Hacks />
                <MetricSystem />
                <Roadmap />
            </main>

            <footer class="pitch-footer">
                <div class="wordmark">{"YOU(th)"}</div>
                <p>{"by Raghav"}</p>
            </footer>
        </div>
    }
}

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <section class="hero">
            <Reveal>
                <div class="tag-row">
                    { for HERO_TAGS.iter().map(|text| html! { <Tag text={*text} /> }) }
                </div>
            </Reveal>

            <Reveal delay={100}>
                <h1>
                    {"Unlocking prevention for "}<br class="wide-only" />
                    {"8 billion people. "}<br />
                    <span class="hero-muted">{"Starting with You(th)."}</span>
                </h1>
            </Reveal>

            <Reveal delay={200}>
                <p class="hero-subtitle">
                    {"The frictionless measurement + engagement layer. Not \"diagnosis\". Not \"replacing doctors\". "}
                    <span class="hero-emphasis">{"Pure GTM velocity."}</span>
                </p>
            </Reveal>
        </section>
    }
}

#[function_component(TwoPaths)]
fn two_paths() -> Html {
    html! {
        <section>
            <Reveal>
                <div class="paths-intro">
                    <h2>{"Two Paths to Market"}</h2>
                    <p>{"Structured for high distribution & retention. Focusing on where the structural incentives align with prevention."}</p>
                </div>
            </Reveal>

            <div class="grid two">
                <Reveal delay={100}>
                    <StrategyCard strategy={&CLINIC_STRATEGY} />
                </Reveal>
                <Reveal delay={200}>
                    <StrategyCard strategy={&INSURER_STRATEGY} />
                </Reveal>
            </div>
        </section>
    }
}

#[function_component(GtmMachine)]
fn gtm_machine() -> Html {
    html! {
        <section>
            <Reveal>
                <SectionHeader number="03" title="The GTM Machine" subtitle="A systematic distribution engine." />
            </Reveal>

            <div class="grid three">
                <Reveal delay={100} class={classes!("full-height")}>
                    <MachineCard icon={Icon::Database} title="Account Engine" tone={Tone::Indigo}>
                        <ul class="engine-list">
                            <li>
                                <span>{"Target Clinics"}</span>
                                <strong><CountUp end={TARGET_CLINICS} /></strong>
                            </li>
                            <li>
                                <span>{"Payer Orgs"}</span>
                                <strong><CountUp end={PAYER_ORGS} /></strong>
                            </li>
                        </ul>
                    </MachineCard>
                </Reveal>

                <Reveal delay={200} class={classes!("full-height")}>
                    <MachineCard icon={Icon::Target} title="Scoring & Gating" tone={Tone::Emerald}>
                        <div class="stack">
                            <div class="micro-label">{"Fit Score Criteria"}</div>
                            { for FIT_CRITERIA.iter().map(|c| html! { <Badge label={c.label} points={c.points} /> }) }
                        </div>
                    </MachineCard>
                </Reveal>

                <Reveal delay={300} class={classes!("full-height")}>
                    <MachineCard icon={Icon::Mail} title="Outreach Playbooks" tone={Tone::Blue}>
                        <div class="stack">
                            <div class="playbook clinics">
                                <div class="playbook-label">{"CLINICS"}</div>
                                <div class="playbook-angle">{"\"Digital Extension\""}</div>
                            </div>
                            <div class="playbook insurers">
                                <div class="playbook-label">{"INSURERS"}</div>
                                <div class="playbook-angle">{"\"Pilotable Benefit\""}</div>
                            </div>
                        </div>
                    </MachineCard>
                </Reveal>
            </div>

            <Reveal delay={400}>
                <div class="volume-panel">
                    <div class="panel-heading">
                        <div class="panel-icon"><IconView icon={Icon::Activity} size={24} /></div>
                        <h3>{"Projected Weekly Volume"}</h3>
                    </div>
                    <div class="grid four">
                        { for WEEKLY_VOLUME.iter().map(|metric| html! {
                            <MetricCard label={metric.label} highlight={metric.highlight}>
                                {
                                    match metric.value {
                                        MetricValue::Count(end) => html! { <CountUp end={end} /> },
                                        MetricValue::Text(text) => html! { {text} },
                                    }
                                }
                            </MetricCard>
                        }) }
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(Hacks)]
fn hacks() -> Html {
    html! {
        <section>
            <Reveal>
                <SectionHeader number="04" title="High-Signal Hacks" subtitle="Niche strategies to accelerate trust & distribution." />
            </Reveal>

            <div class="tactic-list">
                { for GROWTH_TACTICS.iter().enumerate().map(|(index, tactic)| html! {
                    <Reveal key={tactic.id} delay={index as u32 * config::TACTIC_STAGGER_MS}>
                        <TacticRow tactic={tactic} />
                    </Reveal>
                }) }
            </div>
        </section>
    }
}

#[function_component(MetricSystem)]
fn metric_system() -> Html {
    html! {
        <section class="grid two">
            <Reveal class={classes!("full-height")}>
                <div class="metric-system">
                    <div class="blur-orb"></div>
                    <div>
                        <SectionHeader number="05" title="The Metric System" />
                        <div class="north-star">
                            <div class="pill">{"North Star Metric"}</div>
                            <div class="north-star-metric">
                                {"Weekly Active Screenings"}
                                <span>{"per Activated User"}</span>
                            </div>
                        </div>
                    </div>
                    <div class="funnels">
                        { for FUNNELS.iter().map(|funnel| html! { <FunnelRow funnel={funnel} /> }) }
                    </div>
                </div>
            </Reveal>

            <Reveal delay={200} class={classes!("full-height")}>
                <div class="cadence">
                    <div class="ring outer"></div>
                    <div class="ring inner"></div>
                    <div>
                        <div class="panel-heading">
                            <div class="panel-icon dark"><IconView icon={Icon::Zap} class={classes!("zap")} /></div>
                            <h3>{"Experiment Cadence"}</h3>
                        </div>
                        <div class="cadence-stages">
                            { for CADENCE.iter().map(|stage| html! {
                                <div class={classes!("cadence-stage", stage.active.then(|| "active"))}>
                                    <div class="cadence-dot"></div>
                                    <div class="cadence-weeks">{stage.weeks}</div>
                                    <p class="cadence-headline">{stage.headline}</p>
                                    <p class="cadence-focus">{stage.focus}</p>
                                </div>
                            }) }
                        </div>
                    </div>
                    <div class="cadence-footer">
                        <p>{"Rapid iteration cycle enables "}<strong>{"product-market fit velocity"}</strong>{"."}</p>
                    </div>
                </div>
            </Reveal>
        </section>
    }
}

#[function_component(Roadmap)]
fn roadmap() -> Html {
    html! {
        <section>
            <Reveal>
                <SectionHeader number="06" title="Roadmap" subtitle="Concrete deliverables for the first 90 days." />
            </Reveal>
            <div class="grid three">
                { for ROADMAP.iter().enumerate().map(|(idx, phase)| html! {
                    <Reveal key={idx} delay={idx as u32 * config::ROADMAP_STAGGER_MS}>
                        <RoadmapCard phase={phase} />
                    </Reveal>
                }) }
            </div>
        </section>
    }
}
