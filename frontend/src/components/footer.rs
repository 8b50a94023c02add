use chrono::Datelike;
use yew::prelude::*;

use crate::components::effects;
use crate::config;
use crate::motion::{use_motion_section, Easing, Query, TweenSpec, VisualState};

const FOOTER_SERVICES: [&str; 4] = ["Roadside Assistance", "Engine Diagnostics", "Trailer Repair", "Fleet Maintenance"];
const SOCIALS: [&str; 4] = ["Facebook", "Twitter", "LinkedIn", "Instagram"];

#[function_component(Footer)]
pub fn footer() -> Html {
    let footer_ref = use_node_ref();
    let year = chrono::Local::now().year();

    {
        let footer_ref = footer_ref.clone();
        use_motion_section("footer", move |scope| {
            scope.scroll(
                Query::Node(footer_ref.clone()),
                effects::reveal(
                    &footer_ref,
                    VisualState::new().opacity(0.0).y(30.0),
                    VisualState::new().opacity(1.0).y(0.0),
                    "top center+=100",
                    TweenSpec::new(0.8).easing(Easing::power_out(3)),
                ),
            );
        });
    }

    html! {
        <footer class="site-footer" ref={footer_ref}>
            <style>
                {r#"
                    .site-footer { background: #111827; color: #fff; padding: 4rem 0 2rem; }
                    .footer-inner { max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }
                    .footer-columns {
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr));
                        gap: 2rem;
                        margin-bottom: 3rem;
                    }
                    .footer-brand { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 1rem; }
                    .footer-badge {
                        width: 2.5rem;
                        height: 2.5rem;
                        border-radius: 6px;
                        background: #C1121F;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-weight: 700;
                    }
                    .footer-brand span { font-weight: 700; font-size: 1.1rem; }
                    .site-footer h4 { font-weight: 700; font-size: 1.1rem; margin-bottom: 1rem; }
                    .site-footer p, .site-footer li { color: #9ca3af; }
                    .site-footer ul { list-style: none; padding: 0; margin: 0; }
                    .site-footer li + li { margin-top: 0.5rem; }
                    .site-footer a { color: #9ca3af; text-decoration: none; transition: color 0.3s; }
                    .site-footer a:hover { color: #C1121F; }
                    .footer-contact p + p { margin-top: 0.75rem; }
                    .footer-contact .phone { color: #fff; font-weight: 600; }
                    .footer-bottom {
                        border-top: 1px solid #1f2937;
                        padding-top: 2rem;
                        display: flex;
                        flex-wrap: wrap;
                        gap: 1rem;
                        align-items: center;
                        justify-content: space-between;
                        font-size: 0.9rem;
                    }
                    .footer-socials { display: flex; gap: 1rem; }
                    .footer-socials a {
                        padding: 0.4rem 0.8rem;
                        border: 1px solid #4b5563;
                        border-radius: 9999px;
                        font-size: 0.8rem;
                    }
                    .footer-socials a:hover { background: #C1121F; border-color: #C1121F; color: #fff; }
                "#}
            </style>
            <div class="footer-inner">
                <div class="footer-columns">
                    <div>
                        <div class="footer-brand">
                            <div class="footer-badge">{"DH"}</div>
                            <span>{config::BUSINESS_NAME}</span>
                        </div>
                        <p>{"Professional truck repair and emergency roadside assistance available 24/7 nationwide."}</p>
                    </div>
                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul>
                            { for config::NAV_LINKS.iter().map(|(href, label)| html! {
                                <li key={*href}><a href={*href}>{*label}</a></li>
                            }) }
                        </ul>
                    </div>
                    <div>
                        <h4>{"Services"}</h4>
                        <ul>
                            { for FOOTER_SERVICES.iter().map(|service| html! {
                                <li><a href="#services">{*service}</a></li>
                            }) }
                        </ul>
                    </div>
                    <div class="footer-contact">
                        <h4>{"Contact"}</h4>
                        <p><a class="phone" href={config::PHONE_HREF}>{config::PHONE_DISPLAY}</a></p>
                        <p><a href={format!("mailto:{}", config::EMAIL)}>{config::EMAIL}</a></p>
                        <p>{config::STREET_ADDRESS}<br/>{config::CITY_LINE}</p>
                    </div>
                </div>
                <div class="footer-bottom">
                    <p>{format!("© {} {}. All rights reserved.", year, config::BUSINESS_NAME)}</p>
                    <div class="footer-socials">
                        { for SOCIALS.iter().map(|label| html! {
                            <a key={*label} href="#" aria-label={*label}>{*label}</a>
                        }) }
                    </div>
                </div>
            </div>
        </footer>
    }
}
