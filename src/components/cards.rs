use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::content::{RoadmapPhase, StrategyProfile, Tone};

#[derive(Properties, PartialEq)]
pub struct StrategyCardProps {
    pub strategy: &'static StrategyProfile,
}

#[function_component(StrategyCard)]
pub fn strategy_card(props: &StrategyCardProps) -> Html {
    let strategy = props.strategy;
    let segment = strategy.segment;
    let tone = segment.tone();
    let accent = format!("--accent: {}; --accent-soft: {}; --accent-ink: {};", tone.strong(), tone.soft(), tone.ink());

    html! {
        <div class="strategy-card" style={accent}>
            <div class="strategy-head">
                <div class="strategy-head-row">
                    <div class="strategy-icon">
                        <IconView icon={segment.icon()} size={32} />
                    </div>
                    <span class="strategy-badge">{segment.badge()}</span>
                </div>
                <h3 class="strategy-title">{strategy.title}</h3>
                <p class="strategy-description">{strategy.description}</p>
            </div>

            <div class="strategy-body">
                <div class="strategy-block">
                    <h4 class="eyebrow">{"Target Profile"}</h4>
                    { for strategy.target_profile.iter().map(|item| html! {
                        <div class="strategy-point">
                            <div class="dot"></div>
                            {*item}
                        </div>
                    }) }
                </div>

                <div class="strategy-block">
                    <h4 class="eyebrow">{"Value Proposition"}</h4>
                    { for strategy.value_props.iter().map(|item| html! {
                        <div class="strategy-point">
                            <div class="dot"></div>
                            {*item}
                        </div>
                    }) }
                </div>

                <div class="strategy-block">
                    <h4 class="eyebrow">{"Deliverables"}</h4>
                    <div class="offer-title">{strategy.offer_title}</div>
                    { for strategy.deliverables.iter().map(|item| html! {
                        <div class="deliverable">
                            <IconView icon={Icon::CheckCircle} size={16} />
                            {*item}
                        </div>
                    }) }
                </div>

                <div class="strategy-block">
                    <h4 class="eyebrow">{"Success Metrics"}</h4>
                    <div class="metric-chips">
                        { for strategy.metrics.iter().map(|metric| html! {
                            <span class="metric-chip">{*metric}</span>
                        }) }
                    </div>
                </div>
            </div>

            <div class="strategy-footer">
                <div class="eyebrow">{"Pricing Model"}</div>
                <div class="strategy-pricing">{strategy.pricing}</div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MachineCardProps {
    pub icon: Icon,
    pub title: AttrValue,
    pub tone: Tone,
    #[prop_or_default]
    pub children: Children,
}

#[function_component(MachineCard)]
pub fn machine_card(props: &MachineCardProps) -> Html {
    let tile = format!("background: {}; color: {};", props.tone.soft(), props.tone.ink());

    html! {
        <div class="machine-card">
            <div class="machine-head">
                <div class={classes!("machine-icon", props.tone.name())} style={tile}>
                    <IconView icon={props.icon} />
                </div>
                <h3>{&props.title}</h3>
            </div>
            <div class="machine-body">
                { for props.children.iter() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct RoadmapCardProps {
    pub phase: &'static RoadmapPhase,
}

#[function_component(RoadmapCard)]
pub fn roadmap_card(props: &RoadmapCardProps) -> Html {
    let phase = props.phase;

    html! {
        <div class="roadmap-card">
            <div class="roadmap-period">{phase.period}</div>
            <h3>{phase.title}</h3>
            <ul>
                { for phase.milestones.iter().map(|milestone| html! {
                    <li>
                        <IconView icon={Icon::CheckCircle} size={18} class={classes!("roadmap-check")} />
                        <span>{*milestone}</span>
                    </li>
                }) }
            </ul>
        </div>
    }
}
