mod components;
mod home_page;

pub use home_page::home_page_response;
