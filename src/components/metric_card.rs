use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub label: AttrValue,
    /// The figure itself; usually a `CountUp` or plain text.
    pub children: Children,
    #[prop_or_default]
    pub highlight: bool,
}

#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    html! {
        <div class={classes!("metric-card", props.highlight.then(|| "highlight"))}>
            <div class="metric-value">{ for props.children.iter() }</div>
            <div class="metric-label">{&props.label}</div>
        </div>
    }
}
