use yew::prelude::*;
use log::info;

mod config;
mod content;
mod motion {
    pub mod count_up;
    pub mod frames;
    pub mod reveal;
    pub mod visibility;
}
mod components {
    pub mod cards;
    pub mod chips;
    pub mod count_up;
    pub mod funnel_row;
    pub mod icon;
    pub mod metric_card;
    pub mod reveal;
    pub mod section_header;
    pub mod tactic_row;
}
mod pages {
    pub mod pitch;
    pub mod styles;
}

use pages::pitch::Pitch;


#[function_component]
fn App() -> Html {
    info!("Rendering Pitch page");
    html! {
        <Pitch />
    }
}


fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
