//! Seed passages and questions for the e-commerce support dataset.

/// A support passage and the questions asked against it.
#[derive(Debug, Clone, Copy)]
pub struct SeedPassage {
    pub topic: &'static str,
    pub context: &'static str,
    pub questions: [&'static str; 5],
}

pub const SEED_CATALOG: [SeedPassage; 10] = [
    SeedPassage {
        topic: "returns",
        context: "Our return policy allows customers to return items within 30 days of purchase. \
                  Items must be in original condition with tags attached. Electronics must \
                  include all original accessories and packaging. Refunds are processed within \
                  5-7 business days after we receive the returned item. To initiate a return, \
                  log into your account and click 'Return Item' next to your order.",
        questions: [
            "How long do I have to return an item?",
            "What condition must items be in for returns?",
            "How long do refunds take?",
            "How do I start a return?",
            "Do electronics need original packaging for returns?",
        ],
    },
    SeedPassage {
        topic: "shipping",
        context: "We offer free standard shipping on orders over $50. Standard shipping takes \
                  3-5 business days. Express shipping costs $15.99 and takes 1-2 business days. \
                  Overnight shipping is available for $29.99. International shipping is \
                  available to most countries and takes 7-14 business days. You can track your \
                  order using the tracking number sent to your email.",
        questions: [
            "When is shipping free?",
            "How long does standard shipping take?",
            "How much does express shipping cost?",
            "How can I track my order?",
            "Do you ship internationally?",
        ],
    },
    SeedPassage {
        topic: "payment",
        context: "We accept all major credit cards including Visa, MasterCard, American Express, \
                  and Discover. We also accept PayPal, Apple Pay, Google Pay, and Shop Pay. \
                  Payment is processed securely through our encrypted checkout system. For \
                  orders over $500, we may require additional verification for security \
                  purposes.",
        questions: [
            "What payment methods do you accept?",
            "Is payment processing secure?",
            "Do you accept PayPal?",
            "What happens with large orders?",
            "Can I use Apple Pay?",
        ],
    },
    SeedPassage {
        topic: "warranty",
        context: "All our products come with a manufacturer warranty that varies by product \
                  type. Electronics typically have a 1-year warranty. Clothing and accessories \
                  have a 90-day quality guarantee. Furniture comes with a 2-year warranty \
                  against defects. If you experience any issues, contact our support team with \
                  your order number.",
        questions: [
            "What warranty comes with products?",
            "How long is the electronics warranty?",
            "What about clothing guarantees?",
            "How long is furniture covered?",
            "What do I need to make a warranty claim?",
        ],
    },
    SeedPassage {
        topic: "account",
        context: "You can create an account during checkout or from our homepage by clicking \
                  'Sign Up'. Account benefits include faster checkout, order tracking, exclusive \
                  member deals, and saved addresses. If you forget your password, click 'Forgot \
                  Password' on the login page and we'll send reset instructions to your email.",
        questions: [
            "How do I create an account?",
            "What are the benefits of having an account?",
            "How do I reset my password?",
            "Can I track orders with an account?",
            "Where do I sign up?",
        ],
    },
    SeedPassage {
        topic: "promotions",
        context: "We regularly offer seasonal sales, flash deals, and exclusive newsletter \
                  discounts. New customers get 10% off their first order when they sign up for \
                  our newsletter. Students get 15% off with a valid .edu email address. \
                  Military personnel receive a 10% discount with ID verification. Check our \
                  homepage for current promotions.",
        questions: [
            "Do you offer student discounts?",
            "How much do new customers save?",
            "Is there a military discount?",
            "Where can I find current promotions?",
            "How do I get the newsletter discount?",
        ],
    },
    SeedPassage {
        topic: "customer_service",
        context: "Our customer service team is available 24/7 through live chat, email, and \
                  phone. Live chat is the fastest way to get help and is available on every \
                  page. Email support typically responds within 2 hours during business days. \
                  For urgent issues, call our toll-free number. We also have an extensive FAQ \
                  section and video tutorials.",
        questions: [
            "How can I contact customer service?",
            "Is live chat available 24/7?",
            "How quickly do you respond to emails?",
            "Do you have a phone number?",
            "Where can I find help videos?",
        ],
    },
    SeedPassage {
        topic: "order_changes",
        context: "Order modifications can be made within 30 minutes of placing the order. After \
                  that, the order enters processing and cannot be changed. To modify an order, \
                  log into your account and click 'Modify Order' if available, or contact \
                  customer service immediately. Cancellations are possible until the item ships.",
        questions: [
            "Can I change my order after placing it?",
            "How long do I have to modify an order?",
            "How do I cancel an order?",
            "What if my order is already processing?",
            "Where do I modify my order?",
        ],
    },
    SeedPassage {
        topic: "privacy",
        context: "We take data privacy seriously and follow industry-standard security \
                  practices. Your personal information is encrypted and never shared with third \
                  parties without your consent. You can view and update your privacy settings \
                  in your account dashboard. We only send marketing emails to subscribers who \
                  have opted in.",
        questions: [
            "How is my personal information protected?",
            "Do you share my data with others?",
            "Where can I update privacy settings?",
            "Will you send me marketing emails?",
            "Is my payment information secure?",
        ],
    },
    SeedPassage {
        topic: "reviews",
        context: "Product reviews help other customers make informed decisions. You can leave a \
                  review 3 days after your order is delivered. Reviews must be honest and based \
                  on your experience with the product. We don't allow fake reviews and may \
                  remove reviews that violate our guidelines. Verified purchase reviews are \
                  marked with a special badge.",
        questions: [
            "When can I leave a product review?",
            "What makes a review verified?",
            "Are fake reviews allowed?",
            "How do reviews help other customers?",
            "What are the review guidelines?",
        ],
    },
];
