use yew::prelude::*;

use crate::components::effects;
use crate::motion::{use_motion_section, Easing, Query, TweenSpec, VisualState};

const COVERAGE: [&str; 5] = [
    "Interstate corridors across North America",
    "Major trucking hubs and distribution centers",
    "Remote roadside locations 24/7",
    "Urban and rural service areas",
    "Nationwide fleet management contracts",
];

#[function_component(ServiceArea)]
pub fn service_area() -> Html {
    let section_ref = use_node_ref();
    let map_ref = use_node_ref();
    let text_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        let map_ref = map_ref.clone();
        let text_ref = text_ref.clone();
        use_motion_section("service-area", move |scope| {
            scope.scroll(
                Query::Node(map_ref),
                effects::reveal(
                    &section_ref,
                    VisualState::new().opacity(0.0).scale(0.8),
                    VisualState::new().opacity(1.0).scale(1.0),
                    "top center",
                    TweenSpec::new(1.0).easing(Easing::power_out(3)),
                ),
            );
            scope.scroll(
                Query::Node(text_ref),
                effects::reveal(
                    &section_ref,
                    VisualState::new().opacity(0.0).y(30.0),
                    VisualState::new().opacity(1.0).y(0.0),
                    "top center+=50",
                    TweenSpec::new(0.8).delay(0.3).easing(Easing::power_out(3)),
                ),
            );
        });
    }

    html! {
        <section class="service-area" ref={section_ref}>
            <style>
                {r#"
                    .service-area { padding: 5rem 0; background: #fff; }
                    .service-area-grid {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                        gap: 3rem;
                        align-items: center;
                    }
                    .service-map {
                        height: 24rem;
                        border-radius: 8px;
                        overflow: hidden;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        background: linear-gradient(to right, #e5e7eb, #f3f4f6);
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: #4b5563;
                        text-align: center;
                    }
                    .service-map .pin { font-size: 4rem; opacity: 0.5; margin-bottom: 1rem; }
                    .service-map strong { font-size: 1.1rem; }
                    .service-map small { margin-top: 0.5rem; }
                    .service-area h2 { font-size: clamp(2.25rem, 5vw, 3rem); font-weight: 700; color: #1f2937; margin-bottom: 1.5rem; }
                    .service-area-lead { font-size: 1.25rem; color: #4b5563; line-height: 1.6; margin-bottom: 2rem; }
                    .coverage { list-style: none; padding: 0; margin: 0 0 2rem; }
                    .coverage li { display: flex; align-items: center; gap: 0.75rem; color: #374151; }
                    .coverage li + li { margin-top: 1rem; }
                    .coverage li::before {
                        content: "";
                        flex-shrink: 0;
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #C1121F;
                    }
                    .service-area-button {
                        display: inline-block;
                        background: #C1121F;
                        color: #fff;
                        padding: 1rem 2rem;
                        border-radius: 6px;
                        font-weight: 700;
                        font-size: 1.1rem;
                        text-decoration: none;
                    }
                "#}
            </style>
            <div class="service-area-grid">
                <div class="service-map" ref={map_ref}>
                    <div class="pin">{"📍"}</div>
                    <strong>{"Service Area Map"}</strong>
                    <small>{"Available nationwide for emergency repairs"}</small>
                </div>
                <div ref={text_ref}>
                    <h2>{"Serving Nationwide"}</h2>
                    <p class="service-area-lead">
                        {"Serving highways, depots, and roadside breakdowns nationwide. Our fleet of mobile repair units covers:"}
                    </p>
                    <ul class="coverage">
                        { for COVERAGE.iter().map(|item| html! { <li>{*item}</li> }) }
                    </ul>
                    <a class="service-area-button" href="#contact">{"Check Service Area"}</a>
                </div>
            </div>
        </section>
    }
}
