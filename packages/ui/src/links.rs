//! Outbound destinations used by the landing page.

pub const CHECKOUT_URL: &str = "https://buy.stripe.com/3cI14pgHX9Uxd0q13k6g800";
pub const BOOKING_URL: &str = "https://calendly.com/julien-pernot74/30min";
pub const CONTACT_EMAIL: &str = "contactcloserai@gmail.com";
pub const ENTERPRISE_EMAIL: &str = "contact@closerai.fr";

pub fn mailto(address: &str) -> String {
    format!("mailto:{address}")
}
