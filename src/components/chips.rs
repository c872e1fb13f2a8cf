use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TagProps {
    pub text: AttrValue,
}

#[function_component(Tag)]
pub fn tag(props: &TagProps) -> Html {
    html! { <span class="tag">{&props.text}</span> }
}

#[derive(Properties, PartialEq)]
pub struct BadgeProps {
    pub label: AttrValue,
    pub points: AttrValue,
}

/// One line of the fit score criteria.
#[function_component(Badge)]
pub fn badge(props: &BadgeProps) -> Html {
    html! {
        <div class="badge">
            <span class="badge-label">{&props.label}</span>
            <span class="badge-points">{&props.points}</span>
        </div>
    }
}
