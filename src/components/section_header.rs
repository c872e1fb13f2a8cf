use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SectionHeaderProps {
    #[prop_or_default]
    pub number: Option<AttrValue>,
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub dark: bool,
}

#[function_component(SectionHeader)]
pub fn section_header(props: &SectionHeaderProps) -> Html {
    html! {
        <div class={classes!("section-header", props.dark.then(|| "dark"), props.class.clone())}>
            <div class="section-header-row">
                {
                    if let Some(number) = &props.number {
                        html! { <span class="section-number">{number}</span> }
                    } else {
                        html! {}
                    }
                }
                <h2 class="section-title">{&props.title}</h2>
            </div>
            {
                if let Some(subtitle) = &props.subtitle {
                    html! { <p class="section-subtitle">{subtitle}</p> }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
