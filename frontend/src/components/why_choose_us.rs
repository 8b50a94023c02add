use yew::prelude::*;

use crate::components::effects::{self, at_rest, primary};
use crate::config;
use crate::motion::{use_motion_section, Easing, HoverEffect, Query, Rgba, Shadow, VisualState};

const FEATURES: [(&str, &str, &str); 5] = [
    ("🕑", "24/7 Availability", "Round-the-clock service when you need it most"),
    ("🏅", "Certified Mechanics", "ASE-certified professionals with years of experience"),
    ("⚡", "Fast Response Time", "Quick dispatch and arrival at your location"),
    ("🔨", "Heavy-Duty Specialists", "Experts in all types of truck repairs"),
    ("💲", "Transparent Pricing", "No hidden fees, upfront honest quotes"),
];

#[function_component(WhyChooseUs)]
pub fn why_choose_us() -> Html {
    let section_ref = use_node_ref();
    let image_ref = use_node_ref();
    let text_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        let image_ref = image_ref.clone();
        let text_ref = text_ref.clone();
        use_motion_section("why-choose-us", move |scope| {
            scope.scroll(
                Query::Within(section_ref.clone(), "h2"),
                effects::scrub(
                    &section_ref,
                    VisualState::new().opacity(0.0).y(50.0).scale(0.9),
                    VisualState::new().opacity(1.0).y(0.0).scale(1.0),
                    "top 70%",
                    "top 50%",
                )
                .easing(Easing::BackOut { overshoot: 1.2 }),
            );
            scope.scroll(
                Query::Node(image_ref.clone()),
                effects::scrub(
                    &section_ref,
                    VisualState::new().opacity(0.0).x(-200.0).scale(0.8).rotation_y(-30.0),
                    at_rest().rotation_y(0.0),
                    "top 70%",
                    "center 40%",
                )
                .easing(Easing::power_out(3)),
            );
            scope.scroll(
                Query::Node(text_ref),
                effects::scrub(
                    &section_ref,
                    VisualState::new().opacity(0.0).x(200.0).scale(0.9),
                    at_rest(),
                    "top 70%",
                    "center 40%",
                )
                .easing(Easing::power_out(3)),
            );

            let red = primary().with_alpha(0.7);
            let bullets = Query::Within(section_ref.clone(), ".feature");
            scope.scroll(
                bullets.clone(),
                effects::scrub(
                    &section_ref,
                    VisualState::new().opacity(0.0).x(50.0).rotation_x(-20.0),
                    VisualState::new().opacity(1.0).x(0.0).rotation_x(0.0),
                    "top 65%",
                    "center 40%",
                )
                .easing(Easing::power_out(2))
                .stagger(0.12),
            );
            scope.hover(
                bullets,
                HoverEffect::new(
                    VisualState::new().scale(1.08).x(10.0),
                    VisualState::new().scale(1.0).x(0.0).box_shadow(Shadow::NONE),
                )
                .duration(config::HOVER_DURATION)
                .glow(Shadow::ring(0.0, red), Shadow::ring(20.0, red.with_alpha(0.0)), 0.6),
            );

            scope.hover(
                Query::Node(image_ref),
                HoverEffect::new(
                    VisualState::new()
                        .scale(1.05)
                        .box_shadow(Shadow::new(0.0, 30.0, 60.0, 0.0, primary().with_alpha(0.4))),
                    VisualState::new()
                        .scale(1.0)
                        .box_shadow(Shadow::new(0.0, 20.0, 40.0, 0.0, Rgba::rgba(0, 0, 0, 0.1))),
                )
                .duration(config::HOVER_DURATION),
            );
        });
    }

    html! {
        <section class="why-us" id="about" ref={section_ref}>
            <style>
                {r#"
                    .why-us { padding: 5rem 0; background: #f9fafb; }
                    .why-us-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                        gap: 3rem;
                        align-items: center;
                        perspective: 1000px;
                    }
                    .why-us-image {
                        min-height: 24rem;
                        border-radius: 8px;
                        overflow: hidden;
                        box-shadow: 0 20px 40px rgba(0, 0, 0, 0.1);
                        background: linear-gradient(135deg, #C1121F, rgba(193, 18, 31, 0.6));
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        color: #fff;
                        font-size: 1.1rem;
                    }
                    .why-us-image .glyph { font-size: 5rem; margin-bottom: 1rem; }
                    .why-us h2 { font-size: clamp(2.25rem, 5vw, 3rem); font-weight: 700; color: #1f2937; margin-bottom: 2rem; }
                    .feature { display: flex; gap: 1rem; align-items: flex-start; padding: 0.5rem; border-radius: 8px; }
                    .feature + .feature { margin-top: 1rem; }
                    .feature-icon {
                        flex-shrink: 0;
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 6px;
                        background: #C1121F;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                    }
                    .feature h3 { font-weight: 700; font-size: 1.1rem; color: #1f2937; }
                    .feature p { color: #4b5563; margin-top: 0.25rem; }
                    .why-us-cta {
                        display: inline-block;
                        margin-top: 2rem;
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
            <div class="why-us-grid">
                <div class="why-us-image" ref={image_ref}>
                    <div class="glyph">{"🔨"}</div>
                    <p>{"Professional Truck Repair"}</p>
                </div>
                <div ref={text_ref}>
                    <h2>{format!("Why Choose {}?", config::BUSINESS_NAME)}</h2>
                    <div>
                        { for FEATURES.iter().map(|(icon, title, description)| html! {
                            <div class="feature" key={*title}>
                                <div class="feature-icon">{*icon}</div>
                                <div>
                                    <h3>{*title}</h3>
                                    <p>{*description}</p>
                                </div>
                            </div>
                        }) }
                    </div>
                    <a class="why-us-cta" href={config::PHONE_HREF}>{"Get Emergency Help"}</a>
                </div>
            </div>
        </section>
    }
}
