//! Built-in e-commerce support catalog.

use super::entry::{KnowledgeBase, KnowledgeEntry};

pub const RETURNS: &str = "returns";
pub const SHIPPING: &str = "shipping";
pub const PAYMENT: &str = "payment";
pub const PRODUCTS: &str = "products";
pub const ACCOUNT: &str = "account";
pub const PROMOTIONS: &str = "promotions";

/// Category used when a question matches no keyword.
pub const DEFAULT_CATEGORY: &str = RETURNS;

impl KnowledgeBase {
    /// The built-in catalog: returns, shipping, payment, products, account, promotions.
    pub fn builtin() -> Self {
        Self::from_static(builtin_entries(), DEFAULT_CATEGORY)
    }
}

fn builtin_entries() -> Vec<KnowledgeEntry> {
    vec![
        KnowledgeEntry::new(
            RETURNS,
            "Our return policy allows customers to return items within 30 days of purchase. \
             Items must be in original condition with tags attached. Electronics must include \
             all original accessories and packaging. Refunds are processed within 5-7 business \
             days after we receive the returned item. To initiate a return, log into your \
             account and click 'Return Item' next to your order.",
            ["return", "refund", "exchange", "send back", "money back"],
        )
        .with_fallback(
            "You can return items within 30 days of purchase. Log into your account and click \
             'Return Item' next to your order to get started.",
        ),
        KnowledgeEntry::new(
            SHIPPING,
            "We offer free standard shipping on orders over $50. Standard shipping takes 3-5 \
             business days. Express shipping (1-2 business days) costs $15.99. International \
             shipping is available to most countries and takes 7-14 business days. You can \
             track your order using the tracking number sent to your email after shipment.",
            ["ship", "delivery", "track", "arrive", "shipping", "when will"],
        )
        .with_fallback(
            "Standard shipping takes 3-5 business days and is free on orders over $50. You can \
             track your order with the tracking number in your shipment email.",
        ),
        KnowledgeEntry::new(
            PAYMENT,
            "We accept all major credit cards, PayPal, Apple Pay, and Google Pay. Payment is \
             processed securely through our encrypted checkout system. For orders over $500, \
             we may require additional verification. If your payment fails, please check your \
             card details and ensure sufficient funds are available.",
            ["payment", "pay", "card", "paypal", "checkout", "billing"],
        )
        .with_fallback(
            "We accept all major credit cards, PayPal, Apple Pay, and Google Pay. If a payment \
             fails, please check your card details and try again.",
        ),
        KnowledgeEntry::new(
            PRODUCTS,
            "All our products come with a 1-year manufacturer warranty. Electronic items \
             include a 30-day satisfaction guarantee. Product specifications and compatibility \
             information can be found on each product page. If you need help choosing the \
             right product, our chat support is available 24/7.",
            ["warranty", "guarantee", "specification", "compatible", "feature"],
        )
        .with_fallback(
            "All products come with a 1-year manufacturer warranty. Specifications are listed \
             on each product page, and chat support is available 24/7.",
        ),
        KnowledgeEntry::new(
            ACCOUNT,
            "You can create an account during checkout or from our homepage. Account benefits \
             include order tracking, faster checkout, exclusive deals, and order history. If \
             you forgot your password, click 'Forgot Password' on the login page. To update \
             your information, go to 'My Account' after logging in.",
            ["account", "login", "password", "profile", "register", "sign up"],
        )
        .with_fallback(
            "You can manage your details under 'My Account'. If you forgot your password, use \
             'Forgot Password' on the login page.",
        ),
        KnowledgeEntry::new(
            PROMOTIONS,
            "We regularly offer seasonal sales, flash deals, and newsletter subscriber \
             discounts. Sign up for our newsletter to receive exclusive 10% off your first \
             order. Student discounts are available with valid .edu email addresses. Check our \
             homepage for current promotions and coupon codes.",
            ["discount", "coupon", "sale", "promo", "deal", "offer"],
        )
        .with_fallback(
            "Sign up for our newsletter to get 10% off your first order, and check our homepage \
             for current promotions and coupon codes.",
        ),
    ]
}
