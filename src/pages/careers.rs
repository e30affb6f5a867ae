use yew::prelude::*;

use crate::components::icon::{Icon, LucideIcon};
use crate::components::reveal::RevealOnScroll;
use crate::config::{self, stagger_delay};
use crate::content::{BENEFITS, CAREERS_IMAGE, POSITIONS, TEXTURE_IMAGE};

#[function_component(Careers)]
pub fn careers() -> Html {
    html! {
        <div class="min-h-screen bg-black text-white pt-20">
            <div class="relative h-[60vh] flex items-center justify-center overflow-hidden">
                <div class="absolute inset-0">
                    <img src={CAREERS_IMAGE} alt="Team" class="w-full h-full object-cover opacity-50" />
                    <div class="absolute inset-0 bg-gradient-to-t from-black via-black/50 to-transparent"></div>
                </div>
                <div class="relative z-10 text-center px-4 max-w-4xl mx-auto">
                    <RevealOnScroll>
                        <h1 class="text-5xl md:text-7xl font-black mb-6">
                            {"JOIN THE "}<span class="text-red-600">{"REVOLUTION"}</span>
                        </h1>
                        <p class="text-xl text-gray-300">{"Build your career with the most dynamic fitness team in Abuja."}</p>
                    </RevealOnScroll>
                </div>
            </div>

            <section class="py-24 bg-zinc-950">
                <div class="max-w-7xl mx-auto px-4">
                    <div class="grid grid-cols-1 md:grid-cols-3 gap-8 mb-24">
                        { for BENEFITS.iter().enumerate().map(|(i, b)| html! {
                            <RevealOnScroll
                                key={b.title}
                                delay={stagger_delay(i)}
                                class={classes!("bg-zinc-900", "p-8", "rounded-2xl", "border", "border-zinc-800", "hover:border-red-600", "transition-all", "hover:-translate-y-2")}
                            >
                                <div class="w-12 h-12 bg-red-600/10 rounded-full flex items-center justify-center text-red-600 mb-6">
                                    <LucideIcon icon={b.icon} size={24} />
                                </div>
                                <h4 class="text-xl font-bold mb-3">{b.title}</h4>
                                <p class="text-gray-400 text-sm leading-relaxed">{b.desc}</p>
                            </RevealOnScroll>
                        }) }
                    </div>

                    <h3 class="text-3xl font-black mb-12 border-l-4 border-red-600 pl-6">{"OPEN POSITIONS"}</h3>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                        { for POSITIONS.iter().enumerate().map(|(idx, job)| html! {
                            <RevealOnScroll
                                key={job.title}
                                delay={stagger_delay(idx)}
                                class={classes!("group", "bg-zinc-900", "p-8", "rounded-xl", "border", "border-zinc-800", "hover:border-red-600", "transition-all", "hover:bg-zinc-800")}
                            >
                                <div class="flex justify-between items-start mb-4">
                                    <div>
                                        <h4 class="text-2xl font-bold text-white group-hover:text-red-500 transition-colors">{job.title}</h4>
                                        <div class="flex items-center gap-4 text-xs font-bold uppercase text-gray-500 mt-2">
                                            <span class="flex items-center gap-1">
                                                <LucideIcon icon={Icon::MapPin} size={12} />
                                                {job.location}
                                            </span>
                                            <span class="flex items-center gap-1 text-red-500">
                                                <LucideIcon icon={Icon::Briefcase} size={12} />
                                                {job.employment.label()}
                                            </span>
                                        </div>
                                    </div>
                                </div>
                                <p class="text-gray-400 text-sm mb-6">{job.desc}</p>
                                <a
                                    href={format!("mailto:{}?subject={}", config::CONTACT_EMAIL, job.title.replace(' ', "%20"))}
                                    class="text-white text-sm font-bold uppercase tracking-widest border-b border-red-600 pb-1 hover:text-red-500 transition-colors"
                                >
                                    {"Apply Now"}
                                </a>
                            </RevealOnScroll>
                        }) }
                    </div>
                </div>
            </section>

            <section class="py-24 bg-red-600 text-white text-center relative overflow-hidden">
                <div class="absolute inset-0 opacity-10" style={format!("background-image: url('{}');", TEXTURE_IMAGE)}></div>
                <RevealOnScroll class={classes!("max-w-3xl", "mx-auto", "px-4", "relative", "z-10")}>
                    <h2 class="text-4xl font-black mb-6">{"DON'T SEE YOUR ROLE?"}</h2>
                    <p class="text-lg mb-10 opacity-90">{"We are always looking for talent. Send us your CV and tell us why you belong here."}</p>
                    <a
                        href={format!("mailto:{}", config::CONTACT_EMAIL)}
                        class="inline-flex items-center gap-3 bg-black text-white px-10 py-4 rounded-full font-bold uppercase tracking-widest hover:bg-zinc-800 hover:scale-105 transition-all shadow-xl"
                    >
                        <LucideIcon icon={Icon::Mail} size={20} />
                        {"Email Us"}
                    </a>
                </RevealOnScroll>
            </section>
        </div>
    }
}
