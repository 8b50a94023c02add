use yew::prelude::*;

use crate::components::effects::{self, at_rest};
use crate::config;
use crate::motion::{
    use_motion_section, Easing, Query, Rgba, ScrollAnimation, TweenRequest, TweenSpec, VisualState,
};

#[function_component(Hero)]
pub fn hero() -> Html {
    let hero_ref = use_node_ref();
    let second_bg_ref = use_node_ref();
    let overlay_ref = use_node_ref();
    let content_ref = use_node_ref();
    let heading_ref = use_node_ref();
    let subheading_ref = use_node_ref();
    let call_ref = use_node_ref();
    let request_ref = use_node_ref();

    {
        let hero_ref = hero_ref.clone();
        let second_bg_ref = second_bg_ref.clone();
        let overlay_ref = overlay_ref.clone();
        let content_ref = content_ref.clone();
        let heading_ref = heading_ref.clone();
        let subheading_ref = subheading_ref.clone();
        let call_ref = call_ref.clone();
        let request_ref = request_ref.clone();

        use_motion_section("hero", move |scope| {
            let over_hero = |from: VisualState, to: VisualState, end: &str, lag: f64| {
                ScrollAnimation::new(Query::Node(hero_ref.clone()), from, to)
                    .range(effects::range("top top", end))
                    .scrub(Some(lag))
            };

            // Cross-fade to the second truck photo and darken while scrolling past.
            scope.scroll(
                Query::Node(second_bg_ref),
                over_hero(VisualState::new().opacity(0.0), VisualState::new().opacity(1.0), "bottom top", 1.2),
            );
            scope.scroll(
                Query::Node(overlay_ref),
                over_hero(
                    VisualState::new().background(Rgba::rgba(0, 0, 0, 0.3)),
                    VisualState::new().background(Rgba::rgba(0, 0, 0, 0.5)),
                    "bottom top",
                    1.2,
                ),
            );
            scope.scroll(
                Query::Within(hero_ref.clone(), ".hero-text"),
                over_hero(VisualState::new().y(0.0), VisualState::new().y(-120.0), "bottom center", 2.0),
            );

            let intro = |from: VisualState, spec: TweenSpec| TweenRequest::from_to(from, at_rest()).spec(spec);
            let text_ease = Easing::power_out(3);
            scope.play(
                Query::Node(content_ref),
                intro(VisualState::new().opacity(0.0).y(80.0), TweenSpec::new(1.2).easing(text_ease)),
            );
            scope.play(
                Query::Node(heading_ref),
                intro(VisualState::new().opacity(0.0).y(80.0), TweenSpec::new(1.0).delay(0.2).easing(text_ease)),
            );
            scope.play(
                Query::Node(subheading_ref),
                intro(VisualState::new().opacity(0.0).y(60.0), TweenSpec::new(1.0).delay(0.35).easing(text_ease)),
            );
            scope.play(
                Query::Node(call_ref),
                intro(
                    VisualState::new().opacity(0.0).x(-60.0).scale(0.9),
                    TweenSpec::new(0.8).delay(0.5).easing(Easing::back_out()),
                ),
            );
            scope.play(
                Query::Node(request_ref),
                intro(
                    VisualState::new().opacity(0.0).x(60.0).scale(0.9),
                    TweenSpec::new(0.8).delay(0.6).easing(Easing::back_out()),
                ),
            );

            scope.hover(
                Query::Within(hero_ref, ".hero-button"),
                effects::ring_hover(1.1, 30.0, Rgba::rgba(255, 255, 255, 0.6)).duration(0.15),
            );
        });
    }

    html! {
        <section class="hero" id="home" ref={hero_ref}>
            <style>
                {r#"
                    .hero {
                        position: relative;
                        min-height: 100vh;
                        width: 100%;
                        overflow: hidden;
                        padding-top: 5rem;
                    }
                    .hero-bg {
                        position: absolute;
                        inset: 0;
                        background-size: cover;
                        background-position: center;
                        will-change: transform;
                    }
                    .hero-bg.first { background-image: url(/hero-truck-1.jpg); z-index: 0; }
                    .hero-bg.second { background-image: url(/hero-truck-2.jpg); z-index: 1; opacity: 0; }
                    .hero-overlay {
                        position: absolute;
                        inset: 0;
                        z-index: 2;
                        background: rgba(0, 0, 0, 0.3);
                    }
                    .hero-content {
                        position: relative;
                        z-index: 10;
                        max-width: 64rem;
                        margin: 0 auto;
                        padding: 5rem 1.5rem 0;
                        text-align: center;
                        color: #fff;
                    }
                    .hero h1 {
                        font-size: clamp(3rem, 7vw, 4.5rem);
                        font-weight: 700;
                        line-height: 1.1;
                        text-shadow: 0 4px 12px rgba(0, 0, 0, 0.4);
                    }
                    .hero h1 span { display: block; color: #fde047; }
                    .hero-subheading {
                        font-size: 1.4rem;
                        color: #f3f4f6;
                        max-width: 48rem;
                        margin: 2rem auto;
                        line-height: 1.6;
                    }
                    .hero-facts {
                        display: grid;
                        grid-template-columns: repeat(3, 1fr);
                        gap: 1rem;
                        max-width: 42rem;
                        margin: 3rem auto 0;
                        padding: 1.5rem 0;
                        background: rgba(0, 0, 0, 0.4);
                        backdrop-filter: blur(4px);
                        border-radius: 8px;
                    }
                    .hero-facts .label { color: #fde047; font-weight: 700; font-size: 1.1rem; }
                    .hero-facts .value { font-size: 0.9rem; }
                    .hero-actions {
                        display: flex;
                        gap: 1.5rem;
                        justify-content: center;
                        padding-top: 1.5rem;
                        flex-wrap: wrap;
                    }
                    .hero-button {
                        display: inline-block;
                        padding: 1rem 2.5rem;
                        border-radius: 8px;
                        font-weight: 700;
                        font-size: 1.1rem;
                        text-decoration: none;
                        white-space: nowrap;
                    }
                    .hero-button.call { background: #facc15; color: #000; }
                    .hero-button.request {
                        background: rgba(255, 255, 255, 0.2);
                        border: 2px solid #fff;
                        color: #fff;
                    }
                    .hero-tagline { color: #fde047; font-weight: 600; padding-top: 1rem; }
                    @media (max-width: 640px) {
                        .hero-facts { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="hero-bg first"></div>
            <div class="hero-bg second" ref={second_bg_ref}></div>
            <div class="hero-overlay" ref={overlay_ref}></div>
            <div class="hero-content" ref={content_ref}>
                <div class="hero-text">
                    <h1 ref={heading_ref}>
                        {"24/7 Emergency"}
                        <span>{"Truck & Trailer"}</span>
                        <span>{"Repair Service"}</span>
                    </h1>
                    <p class="hero-subheading" ref={subheading_ref}>
                        {"Professional roadside assistance, heavy-duty repairs, and fleet services. Certified mechanics ready 24/7."}
                    </p>
                    <div class="hero-facts">
                        <div>
                            <p class="label">{"Call Now"}</p>
                            <p class="value">{config::PHONE_DISPLAY}</p>
                        </div>
                        <div>
                            <p class="label">{"Open"}</p>
                            <p class="value">{"24/7 Service"}</p>
                        </div>
                        <div>
                            <p class="label">{"Location"}</p>
                            <p class="value">{config::LOCATION}</p>
                        </div>
                    </div>
                    <div class="hero-actions">
                        <a class="hero-button call" href={config::PHONE_HREF} ref={call_ref}>{"📞 Call Now"}</a>
                        <a class="hero-button request" href="#contact" ref={request_ref}>{"⚡ Request Service"}</a>
                    </div>
                    <p class="hero-tagline">{"🕑 Fast Response • Professional Service"}</p>
                </div>
            </div>
        </section>
    }
}
