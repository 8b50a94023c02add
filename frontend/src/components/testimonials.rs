use yew::prelude::*;

use crate::carousel::Carousel;
use crate::components::effects::{self, at_rest, primary};
use crate::config;
use crate::motion::{use_motion_section, use_motion_with_deps, Easing, Query, Rgba, Shadow, TweenRequest, TweenSpec, VisualState};

pub struct Testimonial {
    pub name: &'static str,
    pub city: &'static str,
    pub rating: usize,
    pub quote: &'static str,
}

pub static TESTIMONIALS: [Testimonial; 4] = [
    Testimonial {
        name: "John Davis",
        city: "Chicago, IL",
        rating: 5,
        quote: "Called DH at midnight with a broken transmission. They arrived in 20 minutes and had me back on the road in 2 hours. Absolutely professional!",
    },
    Testimonial {
        name: "Sarah Martinez",
        city: "Denver, CO",
        rating: 5,
        quote: "Best truck repair service I've used in 10 years of hauling. Fair prices, expert mechanics, and they actually explain what's wrong with your truck.",
    },
    Testimonial {
        name: "Mike Thompson",
        city: "Austin, TX",
        rating: 5,
        quote: "Emergency roadside repair saved my entire delivery schedule. These guys are lifesavers. Highly recommend for any truck owner.",
    },
    Testimonial {
        name: "Linda Rodriguez",
        city: "Phoenix, AZ",
        rating: 5,
        quote: "Fleet maintenance contracts have saved us thousands. DH takes care of all our trucks with precision and reliability.",
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    let carousel = use_state(|| Carousel::new(TESTIMONIALS.len()));
    let section_ref = use_node_ref();
    let carousel_ref = use_node_ref();
    let card_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        let carousel_ref = carousel_ref.clone();
        use_motion_section("testimonials", move |scope| {
            scope.scroll(
                Query::Node(section_ref.clone()),
                effects::scrub(
                    &section_ref,
                    VisualState::new().opacity(0.0).y(50.0).scale(0.95),
                    VisualState::new().opacity(1.0).y(0.0).scale(1.0),
                    "top 70%",
                    "top 30%",
                )
                .easing(Easing::power_out(2)),
            );
            scope.scroll(
                Query::Node(carousel_ref.clone()),
                effects::scrub(
                    &section_ref,
                    VisualState::new().box_shadow(Shadow::new(0.0, 10.0, 30.0, 0.0, Rgba::rgba(0, 0, 0, 0.1))),
                    VisualState::new().box_shadow(Shadow::new(0.0, 20.0, 60.0, 0.0, primary().with_alpha(0.15))),
                    "top 60%",
                    "top 20%",
                ),
            );
            scope.hover(
                Query::Within(carousel_ref, ".carousel-arrow"),
                effects::ring_hover(1.15, 25.0, primary().with_alpha(0.7)),
            );
        });
    }

    {
        let card_ref = card_ref.clone();
        use_motion_with_deps("testimonial-card", carousel.index(), move |scope, _| {
            scope.play(
                Query::Node(card_ref),
                TweenRequest::from_to(VisualState::new().opacity(0.0).x(50.0).scale(0.95), at_rest())
                    .spec(TweenSpec::new(config::CAROUSEL_ENTRY_DURATION).easing(Easing::power_out(2))),
            );
        });
    }

    let on_previous = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *carousel;
            next.previous();
            carousel.set(next);
        })
    };
    let on_next = {
        let carousel = carousel.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *carousel;
            next.next();
            carousel.set(next);
        })
    };

    let Some(testimonial) = TESTIMONIALS.get(carousel.index()) else {
        return html! {};
    };
    let stars = "★".repeat(testimonial.rating);

    html! {
        <section class="testimonials" ref={section_ref}>
            <style>
                {r#"
                    .testimonials { padding: 5rem 0; background: #f9fafb; }
                    .testimonials-inner { max-width: 56rem; margin: 0 auto; padding: 0 1.5rem; }
                    .testimonials-header { text-align: center; margin-bottom: 4rem; }
                    .testimonials-header h2 { font-size: clamp(2.25rem, 5vw, 3rem); font-weight: 700; color: #1f2937; margin-bottom: 1rem; }
                    .testimonials-header p { font-size: 1.25rem; color: #4b5563; }
                    .carousel {
                        position: relative;
                        background: #fff;
                        border-radius: 8px;
                        padding: 3rem;
                        box-shadow: 0 10px 30px rgba(0, 0, 0, 0.1);
                    }
                    .testimonial-card { text-align: center; }
                    .testimonial-stars { color: #C1121F; font-size: 1.25rem; letter-spacing: 0.25rem; margin-bottom: 1.5rem; }
                    .testimonial-quote { font-size: 1.4rem; color: #374151; font-style: italic; line-height: 1.6; margin-bottom: 2rem; }
                    .testimonial-card h3 { font-weight: 700; font-size: 1.1rem; color: #1f2937; }
                    .testimonial-card .city { color: #4b5563; }
                    .carousel-nav { display: flex; justify-content: center; gap: 1rem; margin-top: 2rem; }
                    .carousel-arrow {
                        width: 2.75rem;
                        height: 2.75rem;
                        border-radius: 9999px;
                        border: 2px solid #C1121F;
                        background: #fff;
                        color: #C1121F;
                        font-size: 1.25rem;
                        cursor: pointer;
                        box-shadow: 0 4px 6px rgba(0, 0, 0, 0.1);
                    }
                    .carousel-arrow:hover { background: #C1121F; color: #fff; }
                    .carousel-dots { display: flex; justify-content: center; gap: 0.5rem; margin-top: 1.5rem; }
                    .carousel-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: #d1d5db;
                        cursor: pointer;
                        padding: 0;
                        transition: all 0.3s;
                    }
                    .carousel-dot.active { background: #C1121F; width: 2rem; }
                "#}
            </style>
            <div class="testimonials-inner">
                <div class="testimonials-header">
                    <h2>{"What Our Customers Say"}</h2>
                    <p>{format!("Real feedback from truck owners who trust {}", config::BUSINESS_NAME)}</p>
                </div>
                <div class="carousel" ref={carousel_ref}>
                    <div class="testimonial-card" ref={card_ref}>
                        <div class="testimonial-stars">{ stars }</div>
                        <p class="testimonial-quote">{format!("\"{}\"", testimonial.quote)}</p>
                        <h3>{testimonial.name}</h3>
                        <p class="city">{testimonial.city}</p>
                    </div>
                    <div class="carousel-nav">
                        <button class="carousel-arrow" aria-label="Previous testimonial" onclick={on_previous}>{"‹"}</button>
                        <button class="carousel-arrow" aria-label="Next testimonial" onclick={on_next}>{"›"}</button>
                    </div>
                    <div class="carousel-dots">
                        { for (0..carousel.len()).map(|idx| {
                            let active = idx == carousel.index();
                            let carousel = carousel.clone();
                            let onclick = Callback::from(move |_: MouseEvent| {
                                let mut next = *carousel;
                                if next.jump_to(idx) {
                                    carousel.set(next);
                                }
                            });
                            html! {
                                <button
                                    key={idx}
                                    class={classes!("carousel-dot", active.then_some("active"))}
                                    aria-label={format!("Go to testimonial {}", idx + 1)}
                                    {onclick}
                                />
                            }
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
