use chrono::Datelike;
use log::warn;
use yew::prelude::*;

use crate::components::icon::{Icon, LucideIcon};
use crate::config;
use crate::content::{FOOTER_LINKS, SOCIAL_ICONS, SUPPORT_LINKS};
use crate::page::Page;

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub on_navigate: Callback<Page>,
}

#[derive(Properties, PartialEq)]
struct ColumnHeadingProps {
    title: AttrValue,
}

#[function_component(ColumnHeading)]
fn column_heading(props: &ColumnHeadingProps) -> Html {
    html! {
        <h4 class="text-white font-bold uppercase mb-6 flex items-center gap-2">
            <span class="w-8 h-1 bg-red-600 rounded-full"></span>
            {props.title.clone()}
        </h4>
    }
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let year = chrono::Local::now().year();

    // Footer links jump straight to the top instead of smooth scrolling.
    let follow = |target: &'static str| {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_: MouseEvent| match target.parse::<Page>() {
            Ok(page) => {
                on_navigate.emit(page);
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
            }
            Err(e) => warn!("Ignoring footer link: {}", e),
        })
    };

    html! {
        <footer class="bg-zinc-950 text-white pt-32 pb-8 border-t border-zinc-900 relative">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-12 mb-16">
                    <div>
                        <img src={config::asset_url("logo2.png")} alt={config::BRAND_NAME} class="h-10 mb-6 brightness-0 invert" />
                        <p class="text-gray-500 text-sm leading-relaxed mb-6">
                            {"Fitness is a journey, not a destination. Our mission is to inspire, support, and empower you to reach new heights."}
                        </p>
                        <div class="flex gap-4">
                            { for SOCIAL_ICONS.iter().map(|icon| html! {
                                <a key={icon.slug()} href="#" class="w-10 h-10 bg-zinc-900 flex items-center justify-center rounded-full hover:bg-red-600 hover:text-white transition-all hover:rotate-12 hover:scale-110 border border-zinc-800 text-gray-400">
                                    <LucideIcon icon={*icon} size={18} />
                                </a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <ColumnHeading title="Useful Links" />
                        <ul class="space-y-3 text-gray-400 text-sm">
                            { for FOOTER_LINKS.iter().map(|(label, target)| html! {
                                <li key={*label} onclick={follow(*target)} class="hover:text-red-500 cursor-pointer transition-colors flex items-center hover:translate-x-2 duration-300">
                                    <LucideIcon icon={Icon::ChevronRight} size={14} class={classes!("mr-2", "text-red-600")} />
                                    {*label}
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <ColumnHeading title="Support" />
                        <ul class="space-y-3 text-gray-400 text-sm">
                            { for SUPPORT_LINKS.iter().map(|label| html! {
                                <li key={*label} class="hover:text-red-500 cursor-pointer transition-colors flex items-center hover:translate-x-2 duration-300">
                                    <LucideIcon icon={Icon::ChevronRight} size={14} class={classes!("mr-2", "text-red-600")} />
                                    {*label}
                                </li>
                            }) }
                        </ul>
                    </div>

                    <div>
                        <ColumnHeading title="Contact" />
                        <div class="space-y-4 text-sm text-gray-400">
                            <p class="flex items-start gap-3">
                                <LucideIcon icon={Icon::MapPin} size={18} class={classes!("text-red-600")} />
                                {config::CONTACT_ADDRESS}
                            </p>
                            <p class="flex items-center gap-3">
                                <LucideIcon icon={Icon::Phone} size={18} class={classes!("text-red-600")} />
                                {config::CONTACT_PHONE}
                            </p>
                            <p class="flex items-center gap-3">
                                <LucideIcon icon={Icon::Mail} size={18} class={classes!("text-red-600")} />
                                {config::CONTACT_EMAIL}
                            </p>
                        </div>
                    </div>
                </div>

                <div class="border-t border-zinc-900 pt-8 text-center">
                    <p class="text-zinc-600 text-xs">
                        {format!("Copyright © {} All rights reserved | ", year)}
                        <span class="text-red-600 font-bold">{config::BRAND_NAME}</span>
                    </p>
                </div>
            </div>
        </footer>
    }
}
