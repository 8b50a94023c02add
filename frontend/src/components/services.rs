use yew::prelude::*;

use crate::components::effects::{self, at_rest, primary};
use crate::motion::{use_motion_section, Easing, Query, Rgba, Shadow, VisualState};

struct Service {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

const SERVICES: [Service; 6] = [
    Service {
        icon: "⚠️",
        title: "Roadside Assistance",
        description: "Quick response to get you back on the road safely",
    },
    Service {
        icon: "⚡",
        title: "Engine Diagnostics",
        description: "Advanced diagnostics to identify issues quickly",
    },
    Service {
        icon: "🚚",
        title: "Trailer Repair",
        description: "Complete trailer repair and maintenance services",
    },
    Service {
        icon: "🛞",
        title: "Tire Replacement",
        description: "Professional tire services for all truck types",
    },
    Service {
        icon: "🔧",
        title: "Mobile Mechanic",
        description: "On-site repairs at your location or garage",
    },
    Service {
        icon: "⚙️",
        title: "Fleet Maintenance",
        description: "Preventive maintenance programs for your fleet",
    },
];

#[function_component(Services)]
pub fn services() -> Html {
    let section_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        use_motion_section("services", move |scope| {
            scope.scroll(
                Query::Within(section_ref.clone(), "h2"),
                effects::scrub(
                    &section_ref,
                    VisualState::new().opacity(0.0).scale(0.8).y(50.0),
                    VisualState::new().opacity(1.0).scale(1.0).y(0.0),
                    "top 70%",
                    "top 50%",
                )
                .easing(Easing::BackOut { overshoot: 1.2 }),
            );

            let cards = Query::Within(section_ref.clone(), ".service-card");
            scope.scroll(
                cards.clone(),
                effects::scrub(
                    &section_ref,
                    VisualState::new().opacity(0.0).y(100.0).scale(0.85).rotation_x(-20.0),
                    at_rest().rotation_x(0.0),
                    "top 65%",
                    "center 40%",
                )
                .easing(Easing::power_out(3))
                .stagger(0.12),
            );
            // Cards pick up a red wash and border as the grid comes into view.
            scope.scroll(
                cards.clone(),
                effects::scrub(
                    &section_ref,
                    VisualState::new().background(Rgba::rgb(255, 255, 255)).border_color(Rgba::rgb(229, 231, 235)),
                    VisualState::new().background(primary().with_alpha(0.05)).border_color(primary()),
                    "top 60%",
                    "center 35%",
                ),
            );

            scope.hover(
                cards,
                effects::card_hover(
                    VisualState::new().scale(1.12),
                    Shadow::new(0.0, 4.0, 6.0, 0.0, Rgba::rgba(0, 0, 0, 0.1)),
                    25.0,
                )
                .child(".service-icon", effects::spin()),
            );
        });
    }

    html! {
        <section class="services" id="services" ref={section_ref}>
            <style>
                {r#"
                    .services { padding: 5rem 0; background: #fff; }
                    .section-inner { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
                    .section-header { text-align: center; margin-bottom: 4rem; }
                    .section-header h2 {
                        font-size: clamp(2.25rem, 5vw, 3rem);
                        font-weight: 700;
                        color: #1f2937;
                        margin-bottom: 1rem;
                    }
                    .section-header p { font-size: 1.25rem; color: #4b5563; max-width: 42rem; margin: 0 auto; }
                    .service-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(18rem, 1fr));
                        gap: 2rem;
                        perspective: 1000px;
                    }
                    .service-card {
                        background: #fff;
                        border: 2px solid #e5e7eb;
                        border-radius: 8px;
                        padding: 2rem;
                        cursor: pointer;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    }
                    .service-icon {
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3.5rem;
                        height: 3.5rem;
                        border-radius: 9999px;
                        background: #fef2f2;
                        font-size: 1.6rem;
                        margin-bottom: 1.5rem;
                    }
                    .service-card h3 { font-size: 1.25rem; font-weight: 700; color: #1f2937; margin-bottom: 0.75rem; }
                    .service-card p { color: #4b5563; line-height: 1.6; }
                "#}
            </style>
            <div class="section-inner">
                <div class="section-header">
                    <h2>{"Our Services"}</h2>
                    <p>{"Comprehensive truck repair solutions designed for your needs"}</p>
                </div>
                <div class="service-grid">
                    { for SERVICES.iter().map(|service| html! {
                        <div class="service-card" key={service.title}>
                            <div class="service-icon">{service.icon}</div>
                            <h3>{service.title}</h3>
                            <p>{service.description}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
