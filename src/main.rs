use yew::prelude::*;
use log::info;

mod bmi;
mod config;
mod content;
mod error;
mod page;
mod reveal;
mod components {
    pub mod bmi_calculator;
    pub mod footer;
    pub mod icon;
    pub mod navbar;
    pub mod reveal;
    pub mod styles;
}
mod pages {
    pub mod careers;
    pub mod home;
}

use components::{
    footer::Footer,
    navbar::Navbar,
    styles::AnimationStyles,
};
use page::{Page, PageAction, PageSelector};
use pages::{careers::Careers, home::Home};


fn switch(page: Page) -> Html {
    match page {
        Page::Home => {
            info!("Rendering Home page");
            html! { <Home /> }
        },
        Page::Careers => {
            info!("Rendering Careers page");
            html! { <Careers /> }
        },
    }
}


#[function_component]
fn App() -> Html {
    let selector = use_reducer(|| PageSelector::new(Page::Home));

    let on_navigate = {
        let selector = selector.clone();
        Callback::from(move |page: Page| {
            selector.dispatch(PageAction::Navigate(page));
        })
    };

    let current = selector.current();

    html! {
        <div class="font-sans antialiased bg-black text-gray-200 selection:bg-red-600 selection:text-white overflow-x-hidden">
            <AnimationStyles />
            <Navbar current={current} on_navigate={on_navigate.clone()} />
            { switch(current) }
            <Footer on_navigate={on_navigate} />
        </div>
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
