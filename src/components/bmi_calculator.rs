use log::{debug, info};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::bmi::{self, BmiResult};
use crate::error::BmiError;

#[function_component(BmiCalculator)]
pub fn bmi_calculator() -> Html {
    let height = use_state(String::new);
    let weight = use_state(String::new);
    let result = use_state(|| None::<BmiResult>);
    let error = use_state(|| None::<BmiError>);

    let onsubmit = {
        let height = height.clone();
        let weight = weight.clone();
        let result = result.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match bmi::calculate(&height, &weight) {
                Ok(bmi) => {
                    info!("BMI calculated: {:.1} ({})", bmi.value, bmi.category);
                    result.set(Some(bmi));
                    error.set(None);
                }
                Err(err) => {
                    debug!("BMI not calculated: {}", err);
                    result.set(None);
                    error.set(Some(err));
                }
            }
        })
    };

    let on_height = {
        let height = height.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            height.set(input.value());
        })
    };

    let on_weight = {
        let weight = weight.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            weight.set(input.value());
        })
    };

    html! {
        <div class="bg-gradient-to-br from-zinc-900 to-black p-8 md:p-12 rounded-3xl border border-zinc-800 shadow-[0_0_40px_rgba(0,0,0,0.5)]">
            <h3 class="text-3xl font-bold text-white mb-2">{"Calculate your BMI"}</h3>
            <p class="text-gray-400 mb-8 text-sm">{"Determine your ideal weight range."}</p>
            <form {onsubmit} class="space-y-6">
                <div class="grid grid-cols-2 gap-6">
                    <div>
                        <label class="text-xs text-gray-500 uppercase font-bold mb-2 block">{"Height (cm)"}</label>
                        <input
                            type="text"
                            inputmode="decimal"
                            value={(*height).clone()}
                            oninput={on_height}
                            class="w-full bg-black border border-zinc-700 rounded-lg p-4 text-white focus:border-red-600 focus:ring-1 focus:ring-red-600 outline-none transition-all"
                            placeholder="175"
                        />
                    </div>
                    <div>
                        <label class="text-xs text-gray-500 uppercase font-bold mb-2 block">{"Weight (kg)"}</label>
                        <input
                            type="text"
                            inputmode="decimal"
                            value={(*weight).clone()}
                            oninput={on_weight}
                            class="w-full bg-black border border-zinc-700 rounded-lg p-4 text-white focus:border-red-600 focus:ring-1 focus:ring-red-600 outline-none transition-all"
                            placeholder="70"
                        />
                    </div>
                </div>
                <button class="w-full bg-red-600 hover:bg-red-700 text-white font-bold py-4 rounded-lg uppercase tracking-widest shadow-lg hover:shadow-red-900/50 transition-all transform hover:-translate-y-1">
                    {"Calculate Now"}
                </button>
            </form>
            {
                if let Some(bmi) = &*result {
                    let status_class = if bmi.category.is_healthy() { "text-green-500" } else { "text-red-500" };
                    html! {
                        <div class="mt-6 bg-zinc-800/50 p-6 rounded-xl border-l-4 border-red-600 animate-[fadeUp_0.5s_ease-out]">
                            <p class="text-gray-400 text-xs uppercase mb-1">{"Result"}</p>
                            <div class="flex items-baseline gap-3">
                                <span class="text-4xl font-black text-white">{bmi.display.clone()}</span>
                                <span class={classes!("text-lg", "font-bold", "uppercase", status_class)}>{bmi.category.label()}</span>
                            </div>
                        </div>
                    }
                } else if let Some(e) = &*error {
                    html! {
                        <p class="mt-6 text-sm text-yellow-500">{format!("Please check your input: {}.", e)}</p>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
