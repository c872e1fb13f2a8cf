use yew::prelude::*;

use crate::components::icon::{Icon, IconView};
use crate::content::Funnel;

#[derive(Properties, PartialEq)]
pub struct FunnelRowProps {
    pub funnel: &'static Funnel,
}

#[function_component(FunnelRow)]
pub fn funnel_row(props: &FunnelRowProps) -> Html {
    let funnel = props.funnel;
    let tone = funnel.segment.tone();
    let tile = format!("background: {}; color: {};", tone.soft(), tone.ink());
    let last = funnel.steps.len().saturating_sub(1);

    html! {
        <div class="funnel-row">
            <h4>
                <div class="funnel-icon" style={tile}>
                    <IconView icon={funnel.segment.icon()} size={18} />
                </div>
                {funnel.title}
            </h4>
            <div class="funnel-steps">
                { for funnel.steps.iter().enumerate().map(|(i, step)| html! {
                    <>
                        <span class={classes!("funnel-step", (i == Funnel::HIGHLIGHTED_STEP).then(|| "highlight"))}>
                            {*step}
                        </span>
                        {
                            if i < last {
                                html! { <IconView icon={Icon::ChevronRight} size={16} class={classes!("funnel-arrow")} /> }
                            } else {
                                html! {}
                            }
                        }
                    </>
                }) }
            </div>
        </div>
    }
}
