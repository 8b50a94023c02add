use yew::prelude::*;

use crate::components::effects;
use crate::config;
use crate::motion::{
    use_motion_section, Ease, Easing, Query, Repeat, Rgba, Shadow, TweenRequest, TweenSpec, VisualState,
};

#[function_component(EmergencyBanner)]
pub fn emergency_banner() -> Html {
    let banner_ref = use_node_ref();
    let button_ref = use_node_ref();

    {
        let banner_ref = banner_ref.clone();
        let button_ref = button_ref.clone();
        use_motion_section("emergency-banner", move |scope| {
            scope.scroll(
                Query::Node(banner_ref.clone()),
                effects::reveal(
                    &banner_ref,
                    VisualState::new().opacity(0.0).y(50.0),
                    VisualState::new().opacity(1.0).y(0.0),
                    "top center+=100",
                    TweenSpec::new(0.8).easing(Easing::power_out(3)),
                ),
            );

            let white = Rgba::rgb(255, 255, 255);
            scope.play(
                Query::Node(button_ref),
                TweenRequest::from_to(
                    VisualState::new().box_shadow(Shadow::new(0.0, 0.0, 20.0, 0.0, white.with_alpha(0.4))),
                    VisualState::new().box_shadow(Shadow::new(0.0, 0.0, 40.0, 0.0, white.with_alpha(0.8))),
                )
                .spec(
                    TweenSpec::new(1.0)
                        .easing(Easing::Sine(Ease::InOut))
                        .repeat(Repeat::Forever)
                        .yoyo(true),
                ),
            );
        });
    }

    html! {
        <section class="emergency" ref={banner_ref}>
            <style>
                {r#"
                    .emergency {
                        position: relative;
                        padding: 4rem 0;
                        background: #C1121F;
                        overflow: hidden;
                    }
                    .emergency-blob {
                        position: absolute;
                        top: 0;
                        width: 24rem;
                        height: 24rem;
                        border-radius: 9999px;
                        background: #fff;
                        opacity: 0.1;
                        filter: blur(64px);
                    }
                    .emergency-blob.left { left: 0; }
                    .emergency-blob.right { right: 0; }
                    .emergency-inner {
                        position: relative;
                        z-index: 10;
                        max-width: 56rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        text-align: center;
                        color: #fff;
                    }
                    .emergency h2 { font-size: clamp(1.9rem, 4vw, 2.25rem); font-weight: 700; margin-bottom: 1rem; }
                    .emergency p { font-size: 1.25rem; color: #f3f4f6; margin-bottom: 2rem; }
                    .emergency-button {
                        display: inline-block;
                        background: #fff;
                        color: #C1121F;
                        padding: 1rem 2.5rem;
                        border-radius: 6px;
                        font-weight: 700;
                        font-size: 1.1rem;
                        text-decoration: none;
                    }
                    .emergency-button:hover { background: #f3f4f6; }
                "#}
            </style>
            <div class="emergency-blob left"></div>
            <div class="emergency-blob right"></div>
            <div class="emergency-inner">
                <h2>{"⚠️ Stranded on the Road?"}</h2>
                <p>{"We're On Our Way! Fast, reliable emergency truck repair services available now."}</p>
                <a class="emergency-button" href={config::PHONE_HREF} ref={button_ref}>{"Get Emergency Help Now"}</a>
            </div>
        </section>
    }
}
