pub mod error;
pub mod filters;
pub mod footer;
pub mod hero;
pub mod property_card;
pub mod testimonials;

pub use error::error_page;
pub use filters::filter_bar;
pub use footer::footer;
pub use hero::hero;
pub use property_card::property_card;
pub use testimonials::testimonials;
