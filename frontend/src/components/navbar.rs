use yew::prelude::*;
use yew_hooks::prelude::*;

use crate::components::effects::{self, primary, primary_dark};
use crate::config;
use crate::motion::{
    use_motion_section, use_motion_with_deps, Easing, HoverEffect, Query, ScrollAnimation, Shadow,
    TweenRequest, TweenSpec, VisualState,
};

#[function_component(Navbar)]
pub fn navbar() -> Html {
    let menu_open = use_bool_toggle(false);
    let nav_ref = use_node_ref();
    let dropdown_ref = use_node_ref();

    {
        let nav_ref = nav_ref.clone();
        use_motion_section("navbar", move |scope| {
            scope.play(
                Query::Within(nav_ref.clone(), ".nav-intro"),
                TweenRequest::from_to(VisualState::new().y(-30.0).opacity(0.0), VisualState::new().y(0.0).opacity(1.0))
                    .spec(TweenSpec::new(0.6).delay(0.1).easing(Easing::power_out(3)))
                    .stagger(0.12),
            );

            // Shrinks over the first 120px of scrolling.
            scope.scroll(
                Query::Node(nav_ref.clone()),
                ScrollAnimation::new(
                    Query::Document,
                    VisualState::new().height(80.0).box_shadow(Shadow::NONE),
                    VisualState::new()
                        .height(60.0)
                        .box_shadow(Shadow::new(0.0, 4.0, 20.0, 0.0, primary().with_alpha(0.25))),
                )
                .range(effects::range("top top", "+=120"))
                .scrub(None),
            );

            scope.hover(
                Query::Within(nav_ref, ".nav-link"),
                HoverEffect::new(
                    VisualState::new().y(-5.0).color(primary_dark()),
                    VisualState::new().y(0.0).color(primary()),
                )
                .duration(0.2),
            );
        });
    }

    {
        let dropdown_ref = dropdown_ref.clone();
        use_motion_with_deps("navbar-dropdown", *menu_open, move |scope, open| {
            if *open {
                scope.play(
                    Query::Node(dropdown_ref),
                    TweenRequest::from_to(
                        VisualState::new().opacity(0.0).y(-10.0).scale(0.97),
                        VisualState::new().opacity(1.0).y(0.0).scale(1.0),
                    )
                    .spec(TweenSpec::new(0.25).easing(Easing::power_out(2))),
                );
            }
        });
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.toggle())
    };
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    html! {
        <>
            <style>
                {r#"
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        z-index: 50;
                        height: 80px;
                        background: #fff;
                        overflow-x: hidden;
                    }
                    .top-nav .nav-content {
                        max-width: 80rem;
                        height: 100%;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-family: 'Bebas Neue', sans-serif;
                        font-size: 1.9rem;
                        color: #C1121F;
                        text-decoration: none;
                        letter-spacing: 0.04em;
                    }
                    .nav-links {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #C1121F;
                        font-weight: 500;
                        text-decoration: none;
                        display: inline-block;
                    }
                    .nav-call {
                        background: #C1121F;
                        color: #fff;
                        padding: 0.5rem 1.25rem;
                        border-radius: 6px;
                        font-weight: 600;
                        text-decoration: none;
                    }
                    .nav-call:hover { background: #a00e18; }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        color: #C1121F;
                        font-size: 1.6rem;
                        cursor: pointer;
                    }
                    .nav-backdrop {
                        position: fixed;
                        inset: 0;
                        z-index: 40;
                        background: rgba(0, 0, 0, 0.2);
                        backdrop-filter: blur(4px);
                    }
                    .nav-dropdown {
                        position: fixed;
                        top: 80px;
                        left: 1rem;
                        right: 1rem;
                        z-index: 50;
                        background: #fff;
                        border-radius: 12px;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                        overflow: hidden;
                    }
                    .nav-dropdown-header {
                        padding: 1rem 1.5rem;
                        background: #fef2f2;
                        color: #C1121F;
                        font-weight: 700;
                        font-size: 1.1rem;
                    }
                    .nav-dropdown a.dropdown-link {
                        display: block;
                        padding: 0.75rem 1.5rem;
                        color: #374151;
                        text-decoration: none;
                        font-weight: 500;
                    }
                    .nav-dropdown a.dropdown-link:hover { background: #fef2f2; color: #C1121F; }
                    .nav-dropdown .nav-call {
                        display: block;
                        margin: 0.5rem 1.5rem 1.5rem;
                        text-align: center;
                    }
                    @media (max-width: 1024px) {
                        .nav-links, .top-nav .nav-call { display: none; }
                        .burger-menu { display: block; }
                    }
                "#}
            </style>
            <nav class="top-nav" ref={nav_ref}>
                <div class="nav-content">
                    <a href="#home" class="nav-logo nav-intro">{"DH Truck"}</a>
                    <div class="nav-links">
                        { for config::NAV_LINKS.iter().map(|(href, label)| html! {
                            <a href={*href} class="nav-link nav-intro">{*label}</a>
                        }) }
                    </div>
                    <a href={config::PHONE_HREF} class="nav-call nav-intro">{"📞 Call Now"}</a>
                    <button
                        class="burger-menu"
                        onclick={toggle_menu}
                        aria-label="Toggle menu"
                        aria-expanded={(*menu_open).to_string()}
                    >
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>
            </nav>
            if *menu_open {
                <>
                <div class="nav-backdrop" onclick={close_menu.clone()}></div>
                <div class="nav-dropdown" ref={dropdown_ref}>
                    <div class="nav-dropdown-header">{"🔧 DH Truck"}</div>
                    { for config::NAV_LINKS.iter().map(|(href, label)| html! {
                        <a href={*href} class="dropdown-link" onclick={close_menu.clone()}>{*label}</a>
                    }) }
                    <a href={config::PHONE_HREF} class="nav-call" onclick={close_menu.clone()}>{"📞 Call Now"}</a>
                </div>
                </>
            }
        </>
    }
}
