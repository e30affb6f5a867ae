use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::icon::{Icon, LucideIcon};
use crate::config::{self, NAV_SCROLL_THRESHOLD};
use crate::content::NAV_SECTIONS;
use crate::page::Page;

/// Smoothly scrolls the window back to the top after a page switch.
pub fn scroll_to_top_smooth() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let NavbarProps { current, on_navigate } = props;
    let current = *current;
    let menu_open = use_state(|| false);
    let (_, scroll_y) = use_window_scroll();
    let is_scrolled = scroll_y > NAV_SCROLL_THRESHOLD;

    // Every nav action switches the page, closes the mobile menu and scrolls up.
    let handle_nav = {
        let menu_open = menu_open.clone();
        let on_navigate = on_navigate.clone();
        move |page: Page| {
            let menu_open = menu_open.clone();
            let on_navigate = on_navigate.clone();
            Callback::from(move |e: MouseEvent| {
                e.prevent_default();
                on_navigate.emit(page);
                menu_open.set(false);
                scroll_to_top_smooth();
            })
        }
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let bar_class = if is_scrolled {
        "bg-black/90 backdrop-blur-md py-2 border-b border-red-900/30"
    } else {
        "bg-transparent py-6"
    };

    let section_class = if current == Page::Home { "text-gray-200" } else { "text-gray-400" };

    let careers_class = if current == Page::Careers {
        "bg-red-600 border-red-600 text-white"
    } else {
        "border-red-600 text-red-500 hover:bg-red-600 hover:text-white hover:shadow-[0_0_15px_rgba(220,38,38,0.5)]"
    };

    let mobile_class = if *menu_open { "max-h-screen opacity-100" } else { "max-h-0 opacity-0" };

    html! {
        <nav class={classes!("fixed", "w-full", "z-50", "transition-all", "duration-500", bar_class)}>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-14">
                    <div class="flex-shrink-0 cursor-pointer" onclick={handle_nav(Page::Home)}>
                        <img
                            src={config::asset_url("logo2.png")}
                            alt={config::BRAND_NAME}
                            class="h-12 w-auto object-contain hover:brightness-125 transition-all duration-300"
                        />
                    </div>

                    <div class="hidden md:block">
                        <div class="ml-10 flex items-baseline space-x-8">
                            { for NAV_SECTIONS.iter().map(|item| html! {
                                <a
                                    key={*item}
                                    href={format!("#{}", item.to_lowercase())}
                                    onclick={handle_nav(Page::Home)}
                                    class={classes!("text-sm", "font-bold", "uppercase", "tracking-widest", "transition-all", "duration-300", "hover:text-red-500", "relative", "group", section_class)}
                                >
                                    {*item}
                                    <span class="absolute -bottom-2 left-0 w-0 h-0.5 bg-red-600 transition-all duration-300 group-hover:w-full"></span>
                                </a>
                            }) }
                            <button
                                onclick={handle_nav(Page::Careers)}
                                class={classes!("px-6", "py-2", "rounded-full", "text-sm", "font-bold", "uppercase", "tracking-wider", "transition-all", "duration-300", "border", careers_class)}
                            >
                                {"Careers"}
                            </button>
                        </div>
                    </div>

                    <div class="md:hidden">
                        <button onclick={toggle_menu} class="text-white hover:text-red-500 transition-colors">
                            <LucideIcon icon={if *menu_open { Icon::Close } else { Icon::Menu }} size={28} />
                        </button>
                    </div>
                </div>
            </div>

            <div class={classes!("md:hidden", "absolute", "w-full", "bg-zinc-950/95", "backdrop-blur-xl", "border-b", "border-red-900", "transition-all", "duration-500", "overflow-hidden", mobile_class)}>
                <div class="px-4 pt-4 pb-6 space-y-2 text-center">
                    { for NAV_SECTIONS.iter().map(|item| html! {
                        <a
                            key={*item}
                            href={format!("#{}", item.to_lowercase())}
                            onclick={handle_nav(Page::Home)}
                            class="block py-3 text-lg font-medium text-gray-300 hover:text-red-500 hover:bg-white/5 rounded-lg transition-colors"
                        >
                            {*item}
                        </a>
                    }) }
                    <a onclick={handle_nav(Page::Careers)} class="block py-3 text-lg font-bold text-red-500 bg-red-500/10 rounded-lg mt-4 cursor-pointer">
                        {"Careers"}
                    </a>
                </div>
            </div>
        </nav>
    }
}
