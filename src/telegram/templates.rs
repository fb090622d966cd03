//! Fixed message texts
//!
//! Every text the bot sends lives here. Substitution points are plain
//! function arguments; values that end up in HTML messages are escaped.

use indoc::{formatdoc, indoc};
use teloxide::utils::html;

/// Display name used when a user has neither a first name nor a username
pub const DEFAULT_DISPLAY_NAME: &str = "trader";

pub const BEFORE_START: &str = indoc! {"
    💼 Tired of dreaming about financial freedom? Time to make it real!

    🚀 This is your moment to change everything! Ready? 👇

    🔥 Click “Get Started” 🫵
    ⚡️ Follow the step-by-step guide!
    ✅ Get access to proven, time-tested signals!
    💵 Trade with confidence and watch your profits grow!

    🎯 Success is just one decision away. Will you take it? click /start NOW"};

pub const HELP: &str = indoc! {"
    /start - Begin onboarding
    /before - Show pre-start text
    /verify <telegram_id> - Admin only: verify a user's UID and mark them VIP
    /myid - Get your telegram id (useful for admin check)"};

pub const UID_RECEIVED: &str =
    "That's it, your data has been sent for verification. If there is a long delay, please contact support.";

pub const AFTER_VERIFY: &str = "✅ Verified! You’re ready to receive signals.";

pub const FORMAT_HINT: &str = "Please send your UID in format: UID 1234567 or just send the number.";

pub const INVALID_UID: &str = "Invalid UID. Send like: UID 1234567";

pub const NOT_AUTHORIZED: &str = "⛔ You are not authorized to use this command.";

pub const VERIFY_USAGE: &str = "Usage: /verify <telegram_id>";

pub const NO_UID_FOUND: &str = "No UID found for that user id.";

pub const ALREADY_VERIFIED: &str = "User already verified.";

pub const STORE_UNAVAILABLE: &str = "⚠️ Something went wrong on our side. Please try again later.";

/// Welcome text for /start, formatted as Telegram HTML
pub fn welcome(display_name: &str, referral_link: &str, promo_code: &str) -> String {
    let name = html::escape(display_name);
    let link = html::escape(referral_link);
    let code = html::escape(promo_code);
    formatdoc! {"
        Hi {name} 👋
        💰Bro, I've collected signals from the most top and proven traders in one place, inclusive of my own signals and pretty soon you'll get them.

        You can get free from us:

        💎 5 groups with signals of top traders
        📚 Best trading training materials

        ✅ Follow the instructions, sign up and copy the signals 👇

        ✔️ Step 1: Sign up on my trading broker:
        {link}

        ✔️ Step 2: Deposit from $10 upwards
        (use the code {code} to get up to 60% bonus for $50 deposit)"}
}

pub fn your_id(user_id: u64) -> String {
    format!("Your Telegram ID is: {}", user_id)
}

pub fn verified_and_notified(user_id: &str) -> String {
    format!("User {} verified and notified.", user_id)
}

/// Operator notification about a new submission
pub fn new_submission(display_name: &str, user_id: &str, uid: &str) -> String {
    format!("New UID submission:\nUser: {} ({})\nUID: {}", display_name, user_id, uid)
}
