use yew::prelude::*;

use crate::components::{
    contact_cta::ContactCta, emergency_banner::EmergencyBanner, fleet_services::FleetServices,
    floating_call_button::FloatingCallButton, footer::Footer, hero::Hero, navbar::Navbar, process::Process,
    service_area::ServiceArea, services::Services, testimonials::Testimonials, why_choose_us::WhyChooseUs,
};

/// The whole site: every section stacked in scroll order.
#[function_component(Landing)]
pub fn landing() -> Html {
    html! {
        <div class="landing-page">
            <style>
                {r#"
                    html { scroll-behavior: smooth; }
                    body {
                        margin: 0;
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
                        color: #1f2937;
                        background: #fff;
                    }
                    .landing-page { overflow-x: hidden; }
                    .landing-page h1, .landing-page h2, .landing-page h3, .landing-page h4, .landing-page p { margin: 0; }
                    .landing-page a { transition: background 0.3s, color 0.3s; }
                "#}
            </style>
            <Navbar />
            <main>
                <Hero />
                <Services />
                <WhyChooseUs />
                <FleetServices />
                <EmergencyBanner />
                <Process />
                <Testimonials />
                <ServiceArea />
                <ContactCta />
            </main>
            <Footer />
            <FloatingCallButton />
        </div>
    }
}
