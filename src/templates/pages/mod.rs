pub mod details;
pub mod home;

pub use details::{details_page, DetailsVm};
pub use home::home_page;
