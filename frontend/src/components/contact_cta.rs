use gloo_timers::callback::Timeout;
use log::{debug, warn};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::effects::{self, at_rest, primary};
use crate::config;
use crate::contact::{ConsoleLeadSink, ContactFormDraft, Field, SubmitError};
use crate::motion::{
    use_motion_section, Ease, Easing, Query, Repeat, Rgba, Shadow, TweenRequest, TweenSpec, VisualState,
};

#[derive(Clone, PartialEq)]
enum Status {
    Editing,
    Sent,
    Failed(String),
}

/// Name and value of the input or textarea that fired `e`.
fn changed_control(e: &InputEvent) -> Option<(String, String)> {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        return Some((input.name(), input.value()));
    }
    e.target_dyn_into::<HtmlTextAreaElement>().map(|area| (area.name(), area.value()))
}

#[function_component(ContactCta)]
pub fn contact_cta() -> Html {
    let draft = use_state(ContactFormDraft::default);
    let status = use_state(|| Status::Editing);
    let section_ref = use_node_ref();
    let form_ref = use_node_ref();
    let phone_ref = use_node_ref();

    {
        let section_ref = section_ref.clone();
        let form_ref = form_ref.clone();
        let phone_ref = phone_ref.clone();
        use_motion_section("contact", move |scope| {
            scope.scroll(
                Query::Node(form_ref.clone()),
                effects::scrub(
                    &section_ref,
                    VisualState::new().opacity(0.0).y(100.0).scale(0.95),
                    VisualState::new().opacity(1.0).y(0.0).scale(1.0),
                    "top 70%",
                    "top 30%",
                )
                .easing(Easing::power_out(3)),
            );
            scope.scroll(
                Query::Within(form_ref.clone(), ".form-field"),
                effects::scrub(
                    &form_ref,
                    VisualState::new().opacity(0.0).y(20.0),
                    VisualState::new().opacity(1.0).y(0.0),
                    "top center+=150",
                    "top center-50",
                )
                .easing(Easing::power_out(2))
                .stagger(0.1),
            );

            let red = primary();
            scope.play(
                Query::Node(phone_ref),
                TweenRequest::from_to(
                    VisualState::new().scale(1.0).text_shadow(Shadow::new(0.0, 0.0, 0.0, 0.0, red.with_alpha(0.0))),
                    VisualState::new().scale(1.05).text_shadow(Shadow::new(0.0, 0.0, 20.0, 0.0, red.with_alpha(0.5))),
                )
                .spec(
                    TweenSpec::new(1.5)
                        .easing(Easing::Sine(Ease::InOut))
                        .repeat(Repeat::Forever)
                        .yoyo(true),
                ),
            );

            for (selector, x) in [(".info-card:nth-child(odd)", 100.0), (".info-card:nth-child(even)", -100.0)] {
                scope.scroll(
                    Query::Within(section_ref.clone(), selector),
                    effects::scrub(
                        &section_ref,
                        VisualState::new().opacity(0.0).x(x),
                        at_rest(),
                        "top 70%",
                        "center center",
                    )
                    .easing(Easing::power_out(3))
                    .stagger(0.15),
                );
            }
            scope.hover(
                Query::Within(section_ref.clone(), ".info-card"),
                effects::card_hover(
                    VisualState::new().scale(1.05),
                    Shadow::new(0.0, 10.0, 25.0, 0.0, Rgba::rgba(0, 0, 0, 0.1)),
                    20.0,
                ),
            );
        });
    }

    // The confirmation fades back to the empty form after a while.
    {
        let current = (*status).clone();
        let status = status.clone();
        use_effect_with_deps(
            move |current| {
                let timeout = (*current == Status::Sent).then(|| {
                    Timeout::new(config::CONFIRMATION_MILLIS, move || status.set(Status::Editing))
                });
                move || drop(timeout)
            },
            current,
        );
    }

    let oninput = {
        let draft = draft.clone();
        let status = status.clone();
        Callback::from(move |e: InputEvent| {
            let Some((name, value)) = changed_control(&e) else {
                return;
            };
            match name.parse::<Field>() {
                Ok(field) => {
                    let mut next = (*draft).clone();
                    next.update_field(field, value);
                    draft.set(next);
                    if *status != Status::Editing {
                        status.set(Status::Editing);
                    }
                }
                Err(e) => warn!("{}", e),
            }
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let status = status.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*draft).clone();
            match next.submit(&ConsoleLeadSink) {
                Ok(()) => {
                    draft.set(next);
                    status.set(Status::Sent);
                }
                Err(err) => {
                    debug!("Service request not sent: {}", err);
                    let message = match err {
                        SubmitError::Invalid(missing) => format!("Please fill in: {}", missing.labels().join(", ")),
                        SubmitError::Rejected(_) => format!("Something went wrong. Please call us at {}.", config::PHONE_DISPLAY),
                    };
                    status.set(Status::Failed(message));
                }
            }
        })
    };

    let control = |field: Field, kind: &'static str| {
        html! {
            <input
                type={kind}
                class="form-field"
                name={field.input_name()}
                placeholder={field.label()}
                value={draft.get(field).to_string()}
                oninput={oninput.clone()}
                required=true
            />
        }
    };

    html! {
        <section class="contact" id="contact" ref={section_ref}>
            <style>
                {r#"
                    .contact { padding: 5rem 0; background: #f9fafb; }
                    .contact-grid {
                        max-width: 72rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(22rem, 1fr));
                        gap: 3rem;
                    }
                    .contact-form { background: #fff; border-radius: 8px; padding: 2rem; box-shadow: 0 10px 15px rgba(0, 0, 0, 0.1); }
                    .contact-form h2 { font-size: 1.9rem; font-weight: 700; color: #1f2937; margin-bottom: 0.5rem; }
                    .contact-form > p { color: #4b5563; margin-bottom: 2rem; }
                    .contact-form form { display: flex; flex-direction: column; gap: 1rem; }
                    .name-row { display: grid; grid-template-columns: 1fr 1fr; gap: 1rem; }
                    .form-field {
                        width: 100%;
                        padding: 0.75rem 1rem;
                        border: 1px solid #d1d5db;
                        border-radius: 6px;
                        background: #f9fafb;
                        font: inherit;
                        box-sizing: border-box;
                    }
                    .form-field:focus { outline: none; box-shadow: 0 0 0 2px #C1121F; }
                    textarea.form-field { resize: none; }
                    button.form-field {
                        background: #C1121F;
                        color: #fff;
                        border: none;
                        font-weight: 700;
                        font-size: 1.1rem;
                        cursor: pointer;
                    }
                    .form-status { font-size: 0.95rem; }
                    .form-status.sent { color: #15803d; }
                    .form-status.failed { color: #C1121F; }
                    .info-cards { display: flex; flex-direction: column; gap: 2rem; }
                    .info-card {
                        background: #fff;
                        border-radius: 8px;
                        padding: 2rem;
                        box-shadow: 0 10px 25px rgba(0, 0, 0, 0.1);
                        cursor: pointer;
                        display: flex;
                        gap: 1rem;
                        align-items: flex-start;
                    }
                    .info-icon {
                        flex-shrink: 0;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 9999px;
                        background: rgba(193, 18, 31, 0.1);
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 1.25rem;
                    }
                    .info-card h3 { font-size: 1.25rem; font-weight: 700; color: #1f2937; margin-bottom: 0.5rem; }
                    .info-card p { color: #4b5563; }
                    .info-card p + p { margin-top: 0.5rem; }
                    .contact-phone {
                        display: inline-block;
                        font-size: 1.9rem;
                        font-weight: 700;
                        color: #C1121F;
                        text-decoration: none;
                    }
                "#}
            </style>
            <div class="contact-grid">
                <div class="contact-form" ref={form_ref}>
                    <h2>{"Request Service"}</h2>
                    <p>{"Fill out the form below and we'll get back to you within the hour."}</p>
                    <form {onsubmit} novalidate=true>
                        <div class="name-row">
                            { control(Field::FirstName, "text") }
                            { control(Field::LastName, "text") }
                        </div>
                        { control(Field::Phone, "tel") }
                        { control(Field::Location, "text") }
                        <textarea
                            class="form-field"
                            name={Field::Issue.input_name()}
                            placeholder="Describe your truck issue"
                            rows="4"
                            value={draft.get(Field::Issue).to_string()}
                            oninput={oninput.clone()}
                            required=true
                        />
                        <button type="submit" class="form-field">{"Request Service"}</button>
                        {
                            match &*status {
                                Status::Editing => html! {},
                                Status::Sent => html! {
                                    <p class="form-status sent">{"Thanks! We'll call you back shortly."}</p>
                                },
                                Status::Failed(message) => html! {
                                    <p class="form-status failed">{message}</p>
                                },
                            }
                        }
                    </form>
                </div>
                <div class="info-cards">
                    <div class="info-card">
                        <div class="info-icon">{"📞"}</div>
                        <div>
                            <h3>{"Emergency Hotline"}</h3>
                            <a class="contact-phone" href={config::PHONE_HREF} ref={phone_ref}>{config::PHONE_DISPLAY}</a>
                            <p>{"Available 24/7 | Fast Response"}</p>
                        </div>
                    </div>
                    <div class="info-card">
                        <div class="info-icon">{"🕑"}</div>
                        <div>
                            <h3>{"Service Hours"}</h3>
                            <p><strong>{"Monday - Sunday: "}</strong>{"24 Hours"}</p>
                            <p><strong>{"Emergency: "}</strong>{"Always Available"}</p>
                            <p>{"Response time: 15-30 minutes average"}</p>
                        </div>
                    </div>
                    <div class="info-card">
                        <div class="info-icon">{"📍"}</div>
                        <div>
                            <h3>{"Visit Us"}</h3>
                            <p><strong>{config::STREET_ADDRESS}</strong></p>
                            <p>{config::CITY_LINE}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
