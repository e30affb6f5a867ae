use yew::prelude::*;

use crate::bmi::BMI_CHART;
use crate::components::bmi_calculator::BmiCalculator;
use crate::components::icon::{Icon, LucideIcon};
use crate::components::reveal::RevealOnScroll;
use crate::config::{self, stagger_delay};
use crate::content::{ABOUT_IMAGE, FEATURES, HERO_IMAGE, PRICING_TIERS, SERVICES, SKILLS, TEXTURE_IMAGE};

#[function_component(Hero)]
fn hero() -> Html {
    html! {
        <div id="home" class="relative h-screen flex items-center justify-center overflow-hidden bg-black">
            <div class="absolute inset-0">
                <img src={HERO_IMAGE} alt="Gym" class="w-full h-full object-cover opacity-60 animate-[pulse_8s_ease-in-out_infinite]" />
                <div class="absolute inset-0 bg-gradient-to-r from-black via-black/70 to-transparent"></div>
                <div class="absolute inset-0 opacity-30" style={format!("background-image: url('{}');", TEXTURE_IMAGE)}></div>
            </div>

            <div class="relative z-10 max-w-7xl mx-auto px-4 text-center sm:text-left w-full mt-10">
                <RevealOnScroll>
                    <div class="inline-block bg-red-600/20 border border-red-500/30 rounded-full px-4 py-1 mb-6 backdrop-blur-sm">
                        <span class="text-red-500 font-bold text-xs tracking-widest uppercase">{"Welcome to the future of fitness"}</span>
                    </div>
                    <h1 class="text-5xl md:text-8xl font-black text-white tracking-tighter mb-6 leading-tight">
                        {"PUSH PAST "}<br />
                        <span class="text-transparent bg-clip-text bg-gradient-to-r from-red-600 via-red-500 to-orange-500">{"YOUR LIMITS"}</span>
                    </h1>
                    <p class="mt-4 text-xl text-gray-300 max-w-xl mb-10 leading-relaxed font-light">
                        {"State-of-the-art equipment, expert trainers, and a community that won't let you quit."}
                    </p>
                    <div class="flex flex-col sm:flex-row gap-6">
                        <button class="relative overflow-hidden bg-red-600 text-white font-bold py-4 px-10 rounded-sm uppercase tracking-widest group">
                            <span class="absolute inset-0 w-full h-full bg-white/20 transform -translate-x-full group-hover:translate-x-0 transition-transform duration-300"></span>
                            <span class="relative">{"Join Now"}</span>
                        </button>
                        <button class="border border-white/30 text-white hover:border-red-600 hover:text-red-500 font-bold py-4 px-10 rounded-sm uppercase tracking-widest transition-all hover:bg-black/50 backdrop-blur-sm">
                            {"Book Tour"}
                        </button>
                    </div>
                </RevealOnScroll>
            </div>
        </div>
    }
}

#[function_component(Features)]
fn features() -> Html {
    html! {
        <section class="py-24 bg-zinc-950 text-white relative">
            <div class="absolute inset-0 bg-grid-pattern opacity-20 pointer-events-none"></div>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8 relative z-10">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                    { for FEATURES.iter().enumerate().map(|(i, f)| html! {
                        <RevealOnScroll
                            key={f.title}
                            delay={stagger_delay(i)}
                            class={classes!("bg-zinc-900/50", "backdrop-blur-sm", "p-8", "border", "border-zinc-800", "hover:border-red-600", "transition-all", "duration-500", "group", "hover:-translate-y-2", "hover:shadow-[0_10px_30px_rgba(220,38,38,0.1)]", "rounded-xl")}
                        >
                            <div class="mb-6 w-14 h-14 bg-black rounded-lg flex items-center justify-center text-red-600 group-hover:bg-red-600 group-hover:text-white transition-all duration-500 shadow-lg">
                                <LucideIcon icon={f.icon} size={28} />
                            </div>
                            <h4 class="text-xl font-bold mb-3 group-hover:text-red-500 transition-colors">{f.title}</h4>
                            <p class="text-gray-400 text-sm leading-relaxed">{f.desc}</p>
                        </RevealOnScroll>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(About)]
fn about() -> Html {
    html! {
        <section id="about" class="py-24 bg-black text-white relative overflow-hidden">
            <div class="absolute inset-0 bg-gradient-to-b from-zinc-950 to-black pointer-events-none"></div>
            <div class="max-w-7xl mx-auto px-4 flex flex-col lg:flex-row items-center gap-20 relative z-10">
                <RevealOnScroll class={classes!("w-full", "lg:w-1/2", "relative", "group")}>
                    <div class="absolute -top-4 -left-4 w-1/2 h-1/2 border-t-2 border-l-2 border-red-600 transition-all duration-700 group-hover:w-full group-hover:h-full"></div>
                    <img src={ABOUT_IMAGE} alt="About" class="w-full grayscale group-hover:grayscale-0 transition-all duration-700 rounded-sm shadow-2xl" />
                    <div class="absolute -bottom-4 -right-4 w-1/2 h-1/2 border-b-2 border-r-2 border-red-600 transition-all duration-700 group-hover:w-full group-hover:h-full"></div>
                </RevealOnScroll>
                <RevealOnScroll class={classes!("w-full", "lg:w-1/2")}>
                    <h4 class="text-red-500 font-bold uppercase tracking-widest mb-4 flex items-center gap-2">
                        <span class="w-8 h-[2px] bg-red-500"></span>{"About Us"}
                    </h4>
                    <h2 class="text-4xl md:text-5xl font-black mb-8 leading-tight">
                        {"WE BUILD "}<br /><span class="text-stroke-white text-transparent">{"CHAMPIONS"}</span>
                    </h2>
                    <p class="text-gray-400 mb-10 text-lg leading-relaxed">
                        {"At Ahead Fitness, we don't just sell memberships. We sell a lifestyle. With over 10 years of excellence, we combine science-based training with raw passion."}
                    </p>
                    <div class="space-y-8">
                        { for SKILLS.iter().enumerate().map(|(idx, skill)| html! {
                            <div key={skill.label}>
                                <div class="flex justify-between mb-2 text-sm font-bold uppercase tracking-wider">
                                    <span>{skill.label}</span>
                                    <span class="text-red-500">{format!("{}%", skill.percent)}</span>
                                </div>
                                <div class="w-full bg-zinc-800 h-1.5 rounded-full overflow-hidden">
                                    <div
                                        class="skill-bar bg-gradient-to-r from-red-800 to-red-500 h-full rounded-full"
                                        style={format!("width: {}%; animation-delay: {:.1}s;", skill.percent, 0.5 + idx as f64 * 0.2)}
                                    ></div>
                                </div>
                            </div>
                        }) }
                    </div>
                </RevealOnScroll>
            </div>
        </section>
    }
}

#[function_component(Services)]
fn services() -> Html {
    html! {
        <section id="services" class="py-24 bg-zinc-950 text-white">
            <div class="max-w-7xl mx-auto px-4">
                <RevealOnScroll class={classes!("text-center", "mb-20")}>
                    <h2 class="text-red-600 font-bold tracking-widest uppercase mb-4">{"Our Services"}</h2>
                    <h3 class="text-4xl md:text-5xl font-black text-white">{"PUSH YOUR LIMITS"}</h3>
                </RevealOnScroll>

                <div class="grid grid-cols-1 md:grid-cols-4 gap-4">
                    { for SERVICES.iter().enumerate().map(|(i, s)| html! {
                        <RevealOnScroll
                            key={s.title}
                            delay={stagger_delay(i)}
                            class={classes!("group", "relative", "h-[400px]", "overflow-hidden", "rounded-lg", "cursor-pointer", "shadow-lg")}
                        >
                            <img src={s.image} alt={s.title} class="w-full h-full object-cover transition-transform duration-700 group-hover:scale-110 group-hover:rotate-1" />
                            <div class="absolute inset-0 bg-gradient-to-t from-black via-black/50 to-transparent opacity-80 group-hover:opacity-60 transition-opacity"></div>
                            <div class="absolute bottom-0 left-0 w-full p-6 translate-y-4 group-hover:translate-y-0 transition-transform duration-300">
                                <h4 class="text-2xl font-bold text-white mb-2">{s.title}</h4>
                                <div class="h-1 w-12 bg-red-600 mb-4 transition-all duration-300 group-hover:w-full"></div>
                                <p class="text-sm text-gray-300 opacity-0 group-hover:opacity-100 transition-opacity delay-100">
                                    {"Professional guidance to reach your peak performance."}
                                </p>
                                <button class="mt-4 flex items-center text-red-500 text-xs font-bold uppercase tracking-widest hover:text-white transition-colors">
                                    {"Explore"}
                                    <LucideIcon icon={Icon::ArrowRight} size={14} class={classes!("ml-2")} />
                                </button>
                            </div>
                        </RevealOnScroll>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(Pricing)]
fn pricing() -> Html {
    html! {
        <section id="pricing" class="py-24 bg-black text-white relative">
            <div class="absolute inset-0 bg-grid-pattern opacity-10"></div>
            <div class="max-w-7xl mx-auto px-4 relative z-10">
                <RevealOnScroll class={classes!("text-center", "mb-20")}>
                    <h2 class="text-red-600 font-bold tracking-widest uppercase mb-4">{"Pricing Plan"}</h2>
                    <h3 class="text-4xl md:text-5xl font-black">{"CHOOSE YOUR GRIND"}</h3>
                </RevealOnScroll>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    { for PRICING_TIERS.iter().enumerate().map(|(i, tier)| {
                        let card_class = if tier.featured {
                            "bg-zinc-900 border-red-600 scale-105 shadow-[0_0_30px_rgba(220,38,38,0.2)] z-10"
                        } else {
                            "bg-black border-zinc-800 hover:border-zinc-600 hover:bg-zinc-900"
                        };
                        let name_class = if tier.featured { "text-red-500" } else { "text-gray-400" };
                        let button_class = if tier.featured {
                            "bg-red-600 text-white hover:bg-red-700 hover:shadow-lg"
                        } else {
                            "bg-transparent border border-zinc-700 text-white hover:border-red-600 hover:text-red-500"
                        };
                        html! {
                            <RevealOnScroll
                                key={tier.name}
                                delay={stagger_delay(i)}
                                class={classes!("relative", "p-8", "rounded-2xl", "border", "transition-all", "duration-300", "flex", "flex-col", card_class)}
                            >
                                if tier.featured {
                                    <div class="absolute top-0 right-0 bg-red-600 text-white text-[10px] font-bold px-3 py-1 uppercase rounded-bl-lg rounded-tr-lg">
                                        {"Most Popular"}
                                    </div>
                                }
                                <h5 class={classes!("text-sm", "font-bold", "uppercase", "tracking-widest", "mb-4", name_class)}>{tier.name}</h5>
                                <div class="text-3xl font-black mb-6 text-white">{tier.price}</div>
                                <ul class="space-y-4 mb-8 text-gray-400 text-sm flex-grow">
                                    { for tier.perks().into_iter().map(|perk| html! {
                                        <li key={perk} class="flex items-center">
                                            <LucideIcon icon={Icon::CheckCircle} size={16} class={classes!("text-red-600", "mr-3")} />
                                            {perk}
                                        </li>
                                    }) }
                                </ul>
                                <button class={classes!("w-full", "py-4", "rounded-xl", "font-bold", "uppercase", "text-xs", "tracking-widest", "transition-all", "duration-300", button_class)}>
                                    {"Select Plan"}
                                </button>
                            </RevealOnScroll>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}

#[function_component(BmiSection)]
fn bmi_section() -> Html {
    html! {
        <section id="bmi" class="py-24 bg-zinc-950 relative overflow-hidden">
            <div class="max-w-7xl mx-auto px-4 flex flex-col lg:flex-row gap-16 items-center relative z-10">
                <RevealOnScroll class={classes!("w-full", "lg:w-1/2")}>
                    <h2 class="text-4xl font-black text-white mb-6">{"BMI CHART"}</h2>
                    <div class="bg-black border border-zinc-800 rounded-2xl overflow-hidden shadow-2xl">
                        <table class="w-full text-left text-gray-400">
                            <thead>
                                <tr class="bg-zinc-900 text-red-500">
                                    <th class="py-4 px-6">{"BMI Range"}</th>
                                    <th class="py-4 px-6">{"Status"}</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-zinc-800">
                                { for BMI_CHART.iter().map(|band| html! {
                                    <tr key={band.status} class="hover:bg-zinc-900 transition-colors">
                                        <td class="py-4 px-6">{band.range}</td>
                                        <td class={classes!("py-4", "px-6", band.color_class)}>{band.status}</td>
                                    </tr>
                                }) }
                            </tbody>
                        </table>
                    </div>
                </RevealOnScroll>

                <RevealOnScroll class={classes!("w-full", "lg:w-1/2")}>
                    <BmiCalculator />
                </RevealOnScroll>
            </div>
        </section>
    }
}

#[function_component(AppDownload)]
fn app_download() -> Html {
    html! {
        <div class="relative z-20 -mb-20 px-4">
            <div class="max-w-7xl mx-auto">
                <RevealOnScroll class={classes!("bg-gradient-to-br", "from-red-700", "via-red-900", "to-black", "rounded-3xl", "p-8", "md:p-12", "shadow-[0_20px_50px_rgba(220,38,38,0.3)]", "relative", "overflow-visible", "flex", "flex-col", "md:flex-row", "items-center")}>
                    <div class="w-full md:w-1/2 z-10 text-center md:text-left mb-8 md:mb-0">
                        <h3 class="text-3xl md:text-5xl font-extrabold text-white mb-4 italic">{"TRAIN ANYWHERE."}</h3>
                        <p class="text-gray-200 text-lg mb-8 max-w-md mx-auto md:mx-0">
                            {"Download the "}<span class="font-bold text-white">{"Ahead Fitness App"}</span>
                            {". Book classes, track progress, and manage membership on the go."}
                        </p>
                        <div class="flex flex-col sm:flex-row gap-4 justify-center md:justify-start">
                            <button class="flex items-center justify-center gap-3 bg-white text-black px-6 py-3 rounded-xl hover:scale-105 transition-transform font-bold shadow-lg">
                                <LucideIcon icon={Icon::Smartphone} size={24} />
                                <div class="text-left leading-tight">
                                    <div class="text-[10px] uppercase">{"Get it on"}</div>
                                    <div class="text-sm">{"Google Play"}</div>
                                </div>
                            </button>
                            <button class="flex items-center justify-center gap-3 bg-black text-white border border-white/20 px-6 py-3 rounded-xl hover:scale-105 transition-transform font-bold shadow-lg">
                                <LucideIcon icon={Icon::Smartphone} size={24} />
                                <div class="text-left leading-tight">
                                    <div class="text-[10px] uppercase">{"Download on the"}</div>
                                    <div class="text-sm">{"App Store"}</div>
                                </div>
                            </button>
                        </div>
                    </div>

                    <div class="w-full md:w-1/2 relative flex justify-center md:justify-end h-[300px] md:h-auto">
                        <img
                            src={config::asset_url("app-preview.webp")}
                            alt="App Preview"
                            class="md:absolute md:-bottom-12 md:right-12 w-auto h-[350px] md:h-[300px] object-contain drop-shadow-2xl animate-[float_4s_ease-in-out_infinite]"
                        />
                    </div>

                    <div class="absolute top-0 right-0 w-64 h-64 bg-white/5 rounded-full blur-3xl -mr-16 -mt-16"></div>
                    <div class="absolute bottom-0 left-0 w-64 h-64 bg-black/20 rounded-full blur-3xl -ml-16 -mb-16"></div>
                </RevealOnScroll>
            </div>
        </div>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    html! {
        <>
            <Hero />
            <Features />
            <About />
            <Services />
            <Pricing />
            <BmiSection />
            <AppDownload />
        </>
    }
}
