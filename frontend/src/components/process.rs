use yew::prelude::*;

use crate::components::effects::{self, at_rest, primary};
use crate::motion::{use_motion_section, Ease, Easing, Query, VisualState};

const STEPS: [(&str, &str, &str, &str); 3] = [
    ("📞", "Call Us", "Contact us with details about your truck issue", "01"),
    ("🚚", "We Dispatch", "Our team gets dispatched to your location immediately", "02"),
    ("✅", "Truck Fixed", "Fast professional repairs to get you back on the road", "03"),
];

#[function_component(Process)]
pub fn process() -> Html {
    let section_ref = use_node_ref();
    let connector_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        let connector_ref = connector_ref.clone();
        use_motion_section("process", move |scope| {
            for (selector, x) in [(".step:nth-child(odd)", -100.0), (".step:nth-child(even)", 100.0)] {
                scope.scroll(
                    Query::Within(section_ref.clone(), selector),
                    effects::scrub(
                        &section_ref,
                        VisualState::new().opacity(0.0).x(x).scale(0.8),
                        at_rest(),
                        "top 70%",
                        "top 30%",
                    )
                    .easing(Easing::power_out(3))
                    .stagger(0.2),
                );
            }
            scope.hover(
                Query::Within(section_ref.clone(), ".step"),
                effects::ring_hover(1.05, 25.0, primary().with_alpha(0.7)).child(".step-circle", effects::spin()),
            );

            scope.scroll(
                Query::Node(connector_ref),
                effects::scrub(
                    &section_ref,
                    VisualState::new().scale_x(0.0).opacity(0.5),
                    VisualState::new().scale_x(1.0).opacity(1.0),
                    "top 70%",
                    "top 20%",
                )
                .easing(Easing::Power { power: 2, ease: Ease::InOut }),
            );
        });
    }

    html! {
        <section class="process" ref={section_ref}>
            <style>
                {r#"
                    .process { padding: 5rem 0; background: #fff; }
                    .process-inner { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
                    .process-header { text-align: center; margin-bottom: 4rem; }
                    .process-header h2 { font-size: clamp(2.25rem, 5vw, 3rem); font-weight: 700; color: #1f2937; margin-bottom: 1rem; }
                    .process-header p { font-size: 1.25rem; color: #4b5563; }
                    .process-track { position: relative; }
                    .process-connector {
                        position: absolute;
                        top: 5rem;
                        left: 2.5rem;
                        width: calc(100% - 5rem);
                        height: 4px;
                        background: #C1121F;
                        transform-origin: left center;
                    }
                    .process-steps { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                    .step { position: relative; text-align: center; border-radius: 12px; padding: 1rem; }
                    .step-circle-wrap { position: relative; display: flex; justify-content: center; margin-bottom: 1.5rem; z-index: 10; }
                    .step-circle {
                        width: 6rem;
                        height: 6rem;
                        border-radius: 9999px;
                        background: #C1121F;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2.5rem;
                        box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1);
                    }
                    .step-number {
                        position: absolute;
                        top: -0.5rem;
                        right: calc(50% - 3.5rem);
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 9999px;
                        background: #fff;
                        color: #C1121F;
                        border: 4px solid #C1121F;
                        font-weight: 700;
                        font-size: 0.85rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .step h3 { font-size: 1.5rem; font-weight: 700; color: #1f2937; margin-bottom: 0.75rem; }
                    .step p { color: #4b5563; }
                    @media (max-width: 768px) {
                        .process-connector { display: none; }
                        .process-steps { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="process-inner">
                <div class="process-header">
                    <h2>{"How It Works"}</h2>
                    <p>{"Simple, fast, and professional truck repair process"}</p>
                </div>
                <div class="process-track">
                    <div class="process-connector" ref={connector_ref}></div>
                    <div class="process-steps">
                        { for STEPS.iter().map(|(icon, title, description, number)| html! {
                            <div class="step" key={*number}>
                                <div class="step-circle-wrap">
                                    <div class="step-circle">{*icon}</div>
                                    <div class="step-number">{*number}</div>
                                </div>
                                <h3>{*title}</h3>
                                <p>{*description}</p>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
