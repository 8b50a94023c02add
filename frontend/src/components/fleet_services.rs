use yew::prelude::*;

use crate::components::effects::{self, at_rest, primary};
use crate::config;
use crate::motion::{use_motion_section, Easing, Query, Shadow, VisualState};

struct FleetService {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const FLEET_SERVICES: [FleetService; 4] = [
    FleetService {
        icon: "🚚",
        title: "Fleet Maintenance",
        description: "Comprehensive preventive maintenance programs tailored to your fleet size and needs",
        features: ["Scheduled inspections", "Oil changes", "Tire rotations", "Battery service"],
    },
    FleetService {
        icon: "📊",
        title: "Fleet Analytics",
        description: "Track vehicle performance and maintenance history in real-time",
        features: ["Usage reports", "Fuel tracking", "Maintenance schedules", "Cost analysis"],
    },
    FleetService {
        icon: "🛡️",
        title: "Emergency Support",
        description: "24/7 roadside assistance and emergency repairs for your entire fleet",
        features: ["Quick response", "Mobile repairs", "Towing services", "Priority support"],
    },
    FleetService {
        icon: "📈",
        title: "Cost Optimization",
        description: "Reduce operational costs with our smart maintenance planning",
        features: ["Discount pricing", "Bulk services", "Warranty coverage", "Transparent billing"],
    },
];

#[function_component(FleetServices)]
pub fn fleet_services() -> Html {
    let section_ref = use_node_ref();
    let title_ref = use_node_ref();
    let subtitle_ref = use_node_ref();
    let cta_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        let title_ref = title_ref.clone();
        let subtitle_ref = subtitle_ref.clone();
        let cta_ref = cta_ref.clone();
        use_motion_section("fleet-services", move |scope| {
            scope.scroll(
                Query::Node(title_ref),
                effects::scrub(
                    &section_ref,
                    VisualState::new().opacity(0.0).y(-50.0).scale(0.9),
                    VisualState::new().opacity(1.0).y(0.0).scale(1.0),
                    "top 70%",
                    "top 50%",
                )
                .easing(Easing::power_out(3)),
            );
            scope.scroll(
                Query::Node(subtitle_ref),
                effects::scrub(
                    &section_ref,
                    VisualState::new().opacity(0.0).y(30.0),
                    VisualState::new().opacity(1.0).y(0.0),
                    "top 65%",
                    "top 40%",
                )
                .easing(Easing::power_out(2)),
            );

            // Cards swing in from alternating sides.
            for (selector, x) in [(".fleet-card:nth-child(odd)", -150.0), (".fleet-card:nth-child(even)", 150.0)] {
                scope.scroll(
                    Query::Within(section_ref.clone(), selector),
                    effects::scrub(
                        &section_ref,
                        VisualState::new().opacity(0.0).scale(0.8).rotation_y(-90.0).x(x),
                        at_rest().rotation_y(0.0),
                        "top 60%",
                        "center 30%",
                    )
                    .easing(Easing::BackOut { overshoot: 1.2 })
                    .stagger(0.2),
                );
            }
            scope.hover(
                Query::Within(section_ref.clone(), ".fleet-card"),
                effects::card_hover(
                    VisualState::new().scale(1.08).y(-15.0),
                    Shadow::new(0.0, 10.0, 30.0, 0.0, primary().with_alpha(0.1)),
                    30.0,
                ),
            );

            scope.scroll(
                Query::Node(cta_ref),
                effects::scrub(
                    &section_ref,
                    VisualState::new().opacity(0.0).y(50.0),
                    VisualState::new().opacity(1.0).y(0.0),
                    "bottom 80%",
                    "bottom 60%",
                )
                .easing(Easing::power_out(2)),
            );
        });
    }

    html! {
        <section class="fleet" id="fleet" ref={section_ref}>
            <style>
                {r#"
                    .fleet { padding: 5rem 0; background: linear-gradient(to bottom, #f9fafb, #fff); }
                    .fleet-inner { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
                    .fleet-header { text-align: center; margin-bottom: 4rem; }
                    .fleet-header h2 { font-size: clamp(2.25rem, 6vw, 3.75rem); font-weight: 700; color: #1f2937; margin-bottom: 1.5rem; }
                    .fleet-header h2 span { color: #C1121F; }
                    .fleet-header p { font-size: 1.2rem; color: #4b5563; max-width: 42rem; margin: 0 auto; }
                    .fleet-grid {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                        gap: 2rem;
                        margin-bottom: 4rem;
                        perspective: 1000px;
                    }
                    .fleet-card {
                        background: #fff;
                        border-radius: 12px;
                        padding: 2rem;
                        border: 1px solid #f3f4f6;
                        box-shadow: 0 10px 30px rgba(193, 18, 31, 0.1);
                        cursor: pointer;
                    }
                    .fleet-card-head { display: flex; align-items: flex-start; gap: 1rem; margin-bottom: 1rem; }
                    .fleet-card-icon { padding: 0.75rem; background: rgba(193, 18, 31, 0.1); border-radius: 8px; }
                    .fleet-card h3 { font-size: 1.5rem; font-weight: 700; color: #1f2937; }
                    .fleet-card > p { color: #4b5563; margin-bottom: 1.5rem; }
                    .fleet-feature { display: flex; align-items: center; gap: 0.5rem; color: #374151; }
                    .fleet-feature + .fleet-feature { margin-top: 0.5rem; }
                    .fleet-feature::before {
                        content: "";
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: #C1121F;
                    }
                    .fleet-cta {
                        background: linear-gradient(to right, rgba(193, 18, 31, 0.1), rgba(193, 18, 31, 0.05));
                        border-radius: 16px;
                        padding: 3rem;
                        text-align: center;
                    }
                    .fleet-cta h3 { font-size: 1.9rem; font-weight: 700; color: #1f2937; margin-bottom: 1rem; }
                    .fleet-cta > p { font-size: 1.1rem; color: #374151; max-width: 42rem; margin: 0 auto 2rem; }
                    .fleet-cta-actions { display: flex; gap: 1rem; justify-content: center; flex-wrap: wrap; }
                    .fleet-cta-actions a {
                        padding: 1rem 2rem;
                        border-radius: 8px;
                        font-weight: 700;
                        font-size: 1.1rem;
                        text-decoration: none;
                    }
                    .fleet-cta-actions .primary { background: #C1121F; color: #fff; }
                    .fleet-cta-actions .outline { border: 2px solid #C1121F; color: #C1121F; }
                    .fleet-cta-actions .outline:hover { background: #C1121F; color: #fff; }
                    .fleet-cta small { display: block; color: #4b5563; margin-top: 1.5rem; }
                "#}
            </style>
            <div class="fleet-inner">
                <div class="fleet-header">
                    <h2 ref={title_ref}>{"Fleet "}<span>{"Management Services"}</span></h2>
                    <p ref={subtitle_ref}>
                        {"Complete fleet solutions designed to keep your trucks running and your costs down"}
                    </p>
                </div>
                <div class="fleet-grid">
                    { for FLEET_SERVICES.iter().map(|service| html! {
                        <div class="fleet-card" key={service.title}>
                            <div class="fleet-card-head">
                                <div class="fleet-card-icon">{service.icon}</div>
                                <h3>{service.title}</h3>
                            </div>
                            <p>{service.description}</p>
                            <div>
                                { for service.features.iter().map(|feature| html! {
                                    <div class="fleet-feature">{*feature}</div>
                                }) }
                            </div>
                        </div>
                    }) }
                </div>
                <div class="fleet-cta" ref={cta_ref}>
                    <h3>{"Ready to Optimize Your Fleet?"}</h3>
                    <p>
                        {"Contact us today for a customized fleet management solution. Get a free consultation and pricing quote."}
                    </p>
                    <div class="fleet-cta-actions">
                        <a class="primary" href={config::PHONE_HREF}>{format!("📞 Call {}", config::PHONE_DISPLAY)}</a>
                        <a class="outline" href="#contact">{"Get Free Quote"}</a>
                    </div>
                    <small>{"Available 24/7 • Fast Response • Professional Team"}</small>
                </div>
            </div>
        </section>
    }
}
