mod http;
mod page;

pub use http::LedHttpController;
pub use page::{render_error_page, render_home_page};
