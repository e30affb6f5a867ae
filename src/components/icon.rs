use yew::prelude::*;

use crate::config::ICON_BASE_URL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Menu,
    Close,
    Dumbbell,
    Users,
    Clock,
    Zap,
    CheckCircle,
    ArrowRight,
    Smartphone,
    Instagram,
    Twitter,
    Facebook,
    MapPin,
    Briefcase,
    Heart,
    Mail,
    Phone,
    ChevronRight,
}

impl Icon {
    /// File name in the lucide icon set.
    pub fn slug(self) -> &'static str {
        match self {
            Icon::Menu => "menu",
            Icon::Close => "x",
            Icon::Dumbbell => "dumbbell",
            Icon::Users => "users",
            Icon::Clock => "clock",
            Icon::Zap => "zap",
            Icon::CheckCircle => "circle-check",
            Icon::ArrowRight => "arrow-right",
            Icon::Smartphone => "smartphone",
            Icon::Instagram => "instagram",
            Icon::Twitter => "twitter",
            Icon::Facebook => "facebook",
            Icon::MapPin => "map-pin",
            Icon::Briefcase => "briefcase",
            Icon::Heart => "heart",
            Icon::Mail => "mail",
            Icon::Phone => "phone",
            Icon::ChevronRight => "chevron-right",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LucideIconProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub class: Classes,
}

/// Renders the icon as a mask so it takes the surrounding text colour.
#[function_component(LucideIcon)]
pub fn lucide_icon(props: &LucideIconProps) -> Html {
    let url = format!("{}/{}.svg", ICON_BASE_URL, props.icon.slug());
    let style = format!(
        "display: inline-block; flex-shrink: 0; width: {size}px; height: {size}px; background-color: currentColor; \
         -webkit-mask: url({url}) center / contain no-repeat; mask: url({url}) center / contain no-repeat;",
        size = props.size,
        url = url,
    );

    html! {
        <span class={props.class.clone()} style={style} aria-hidden="true"></span>
    }
}
