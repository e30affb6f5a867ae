use yew::prelude::*;

/// Keyframes and helper classes the utility CSS does not provide.
#[function_component(AnimationStyles)]
pub fn animation_styles() -> Html {
    html! {
        <style>
            {r#"
                @keyframes fadeUp {
                    from { opacity: 0; transform: translateY(40px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes float {
                    0% { transform: translateY(0px); }
                    50% { transform: translateY(-10px); }
                    100% { transform: translateY(0px); }
                }
                @keyframes glow {
                    0% { box-shadow: 0 0 5px #dc2626; }
                    50% { box-shadow: 0 0 20px #dc2626, 0 0 10px #ef4444; }
                    100% { box-shadow: 0 0 5px #dc2626; }
                }
                @keyframes growWidth {
                    from { transform: scaleX(0); }
                    to { transform: scaleX(1); }
                }
                .reveal {
                    opacity: 0;
                    transform: translateY(40px);
                    transition: all 0.8s cubic-bezier(0.5, 0, 0, 1);
                }
                .reveal.active {
                    opacity: 1;
                    transform: translateY(0);
                }
                .skill-bar {
                    transform-origin: left;
                    animation: growWidth 2s ease-out both;
                }
                .hover-glow:hover {
                    box-shadow: 0 0 25px rgba(220, 38, 38, 0.4);
                }
                .bg-grid-pattern {
                    background-image: linear-gradient(to right, #1f1f1f 1px, transparent 1px),
                                      linear-gradient(to bottom, #1f1f1f 1px, transparent 1px);
                    background-size: 40px 40px;
                    mask-image: linear-gradient(to bottom, transparent, black, transparent);
                }
                .text-stroke-white {
                    -webkit-text-stroke: 1px #fff;
                }
                .text-gradient {
                    background: linear-gradient(to right, #fff, #999);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .text-gradient-red {
                    background: linear-gradient(to right, #ef4444, #991b1b);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
            "#}
        </style>
    }
}
