use log::Level;

pub const BUSINESS_NAME: &str = "DH Truck Repairing";
pub const PHONE_DISPLAY: &str = "(559) 890-9173";
pub const PHONE_HREF: &str = "tel:5598909173";
pub const LOCATION: &str = "Fresno, CA";
pub const STREET_ADDRESS: &str = "7732 E Olive Ave";
pub const CITY_LINE: &str = "Fresno, CA 93737";
pub const EMAIL: &str = "service@dhtruckrepair.com";

/// In-page anchors shown in the navbar and footer.
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#home", "Home"),
    ("#services", "Services"),
    ("#about", "About"),
    ("#fleet", "Fleet Services"),
    ("#contact", "Contact"),
];

/// Seconds for pointer enter/leave tweens.
pub const HOVER_DURATION: f64 = 0.3;
/// Seconds for the testimonial card entry.
pub const CAROUSEL_ENTRY_DURATION: f64 = 0.6;
/// How long the form's "request sent" confirmation stays up.
pub const CONFIRMATION_MILLIS: u32 = 6_000;
/// Longest step a single animation frame may take, in seconds. Longer gaps
/// (a backgrounded tab) are clamped so tweens do not jump to their end.
pub const MAX_FRAME_DELTA: f64 = 0.1;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
