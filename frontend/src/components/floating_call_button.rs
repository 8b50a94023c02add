use yew::prelude::*;

use crate::components::effects::{self, primary};
use crate::config;
use crate::motion::{
    use_motion_section, Ease, Easing, Query, Repeat, Shadow, TweenRequest, TweenSpec, VisualState,
};

/// Round call button pinned to the bottom-right corner. The idle pulse runs
/// on a separate ring so the hover glow does not cut it off.
#[function_component(FloatingCallButton)]
pub fn floating_call_button() -> Html {
    let float_ref = use_node_ref();
    let button_ref = use_node_ref();
    let ring_ref = use_node_ref();

    {
        let float_ref = float_ref.clone();
        let button_ref = button_ref.clone();
        let ring_ref = ring_ref.clone();
        use_motion_section("floating-call-button", move |scope| {
            let forever = |duration: f64, easing: Easing| TweenSpec::new(duration).easing(easing).repeat(Repeat::Forever);
            scope.play(
                Query::Node(float_ref),
                TweenRequest::from_to(VisualState::new().y(0.0), VisualState::new().y(-10.0))
                    .spec(forever(2.5, Easing::Sine(Ease::InOut)).yoyo(true)),
            );
            scope.play(
                Query::Node(button_ref.clone()),
                TweenRequest::from_to(VisualState::new().rotation(0.0), VisualState::new().rotation(360.0))
                    .spec(forever(20.0, Easing::Linear)),
            );

            let red = primary();
            scope.play(
                Query::Node(ring_ref),
                TweenRequest::from_to(
                    VisualState::new().box_shadow(Shadow::new(0.0, 0.0, 10.0, 0.0, red.with_alpha(0.2))),
                    VisualState::new().box_shadow(Shadow::new(0.0, 0.0, 40.0, 0.0, red.with_alpha(0.6))),
                )
                .spec(forever(1.5, Easing::Sine(Ease::InOut)).yoyo(true)),
            );

            scope.hover(
                Query::Node(button_ref),
                effects::ring_hover(1.2, 40.0, red.with_alpha(0.8)).easing(Easing::back_out()),
            );
        });
    }

    html! {
        <>
            <style>
                {r#"
                    .floating-call {
                        position: fixed;
                        right: 2rem;
                        bottom: 2rem;
                        z-index: 40;
                        width: 4rem;
                        height: 4rem;
                    }
                    .floating-call-ring {
                        position: absolute;
                        inset: 0;
                        border-radius: 9999px;
                        pointer-events: none;
                    }
                    .floating-call-button {
                        position: absolute;
                        inset: 0;
                        border-radius: 9999px;
                        background: #C1121F;
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.5rem;
                        text-decoration: none;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                "#}
            </style>
            <div class="floating-call" ref={float_ref}>
                <div class="floating-call-ring" ref={ring_ref}></div>
                <a
                    class="floating-call-button"
                    href={config::PHONE_HREF}
                    title={format!("Call {}", config::PHONE_DISPLAY)}
                    ref={button_ref}
                >
                    {"📞"}
                </a>
            </div>
        </>
    }
}
