//! Storefront copy
//!
//! Everything the page says apart from the menu itself. Kept as plain static
//! data so the drawing code stays free of literals.

/// Brand name shown in the navigation bar, hero and footer
pub const BRAND: &str = "Whisk & Bliss";

pub const TAGLINE: &str = "Artisanal Bakery & Patisserie";

pub const HERO_BLURB: &str = "Discover a world of delectable treats crafted with passion, \
using the finest ingredients and time-honored techniques.";

/// Featured product cards under the hero text
pub const FEATURED_PRODUCTS: [&str; 4] = ["Breads", "Croissant", "Cakes", "Beverages"];

/// Hero call-to-action buttons: (key, label)
pub const HERO_ACTIONS: [(char, &str); 2] = [('m', "View Our Menu"), ('v', "Visit Us")];

pub const ABOUT_TITLE: &str = "Our Story";

pub const ABOUT_PARAGRAPHS: [&str; 2] = [
    "Founded in 2010, Whisk & Bliss began as a small family-owned bakery with a passion for \
creating artisanal bread and pastries. Our journey started with a simple sourdough starter and \
a dream to bring authentic, handcrafted baked goods to our community.",
    "Today, we continue to honor traditional baking methods while embracing innovation. Each item \
is crafted with carefully selected ingredients, time-honored techniques, and most importantly, \
love for the art of baking.",
];

/// A headline number in the about section
#[derive(Clone, Copy, Debug)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const STATS: [Stat; 3] = [
    Stat { value: "13+", label: "Years of Experience" },
    Stat { value: "50+", label: "Daily Varieties" },
    Stat { value: "1000+", label: "Happy Customers" },
];

pub const MENU_TITLE: &str = "Our Menu";

pub const CONTACT_TITLE: &str = "Visit Us";

pub const CONTACT_BLURB: &str = "We'd love to have you visit our bakery. Stop by for fresh bread, \
beautiful pastries, and a warm welcome from our team.";

/// One row of the contact information card
#[derive(Clone, Copy, Debug)]
pub struct ContactInfo {
    pub title: &'static str,
    pub content: &'static str,
    pub extra: Option<&'static str>,
}

pub const PHONE: &str = "+91 78380 89545";
pub const EMAIL: &str = "contact@whiskandbliss.com";
pub const LOCATION: &str = "B-12, Sector 63, Noida, Uttar Pradesh - 201301";

pub const CONTACT_INFO: [ContactInfo; 4] = [
    ContactInfo { title: "Phone", content: PHONE, extra: None },
    ContactInfo { title: "Email", content: EMAIL, extra: None },
    ContactInfo { title: "Location", content: LOCATION, extra: None },
    ContactInfo {
        title: "Hours",
        content: "Monday - Friday: 7:00 AM - 7:00 PM",
        extra: Some("Saturday - Sunday: 8:00 AM - 7:00 PM"),
    },
];

pub const FORM_TITLE: &str = "Send us a Message";
pub const SEND_LABEL: &str = "Send Message";
pub const SENT_LABEL: &str = "Message Sent Successfully!";

pub const FOOTER_BLURB: &str = "Crafting moments of joy through artisanal baking since 2010. \
Passionate about creating delightful experiences.";

pub const BUSINESS_HOURS: [&str; 3] = [
    "Monday - Friday: 7AM - 7PM",
    "Saturday: 8AM - 7PM",
    "Sunday: 8AM - 7PM",
];

/// Copyright line for the given year
pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, BRAND)
}
