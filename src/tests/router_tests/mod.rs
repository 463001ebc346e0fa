mod details_tests;
mod dialog_tests;
mod home_tests;
mod search_tests;
