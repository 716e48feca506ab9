pub mod currency;
pub mod finance;

pub use currency::format_inr;
pub use finance::{calculate_emi, project};
