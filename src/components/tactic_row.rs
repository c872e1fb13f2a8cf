use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::content::GrowthTactic;

/// Open/closed state of one tactic row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExpandState(bool);

impl ExpandState {
    pub fn is_open(self) -> bool {
        self.0
    }

    pub fn toggled(self) -> Self {
        Self(!self.0)
    }
}

#[derive(Properties, PartialEq)]
pub struct TacticRowProps {
    pub tactic: &'static GrowthTactic,
}

#[function_component(TacticRow)]
pub fn tactic_row(props: &TacticRowProps) -> Html {
    let tactic = props.tactic;
    let expanded = use_state(ExpandState::default);

    let toggle = {
        let expanded = expanded.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            expanded.set(expanded.toggled());
        })
    };

    let is_open = expanded.is_open();
    let tile_style = if is_open {
        format!("background: {}; color: #fff;", tactic.tone.strong())
    } else {
        String::new()
    };

    html! {
        <div class={classes!("tactic-row", is_open.then(|| "open"))} onclick={toggle}>
            <div class="tactic-head">
                <div class="tactic-title-group">
                    <div class="tactic-icon" style={tile_style}>
                        <IconView icon={tactic.icon} size={22} />
                    </div>
                    <div>
                        <h3 class="tactic-title">{tactic.title}</h3>
                        <p class="tactic-subtitle">{tactic.subtitle}</p>
                    </div>
                </div>

                <div class="tactic-actions">
                    <div class="tactic-impact wide-only">
                        <IconView icon={Icon::TrendingUp} size={16} />
                        {tactic.impact}
                    </div>
                    <div class="tactic-toggle">
                        <span class="wide-only">{if is_open { "Close" } else { "View Strategy" }}</span>
                        <span class="narrow-only">{if is_open { "Close" } else { "View" }}</span>
                        <IconView icon={Icon::ChevronDown} size={14} class={classes!("chevron")} />
                    </div>
                </div>
            </div>

            <div class="tactic-body">
                <div class="tactic-body-inner">
                    <p>{tactic.description}</p>
                    <div class="tactic-impact narrow-only">
                        <IconView icon={Icon::TrendingUp} size={16} />
                        {tactic.impact}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        assert!(!ExpandState::default().is_open());
    }

    #[test]
    fn double_toggle_restores_state() {
        for start in [ExpandState::default(), ExpandState::default().toggled()] {
            assert_ne!(start.toggled(), start);
            assert_eq!(start.toggled().toggled(), start);
        }
    }
}
