pub mod api_utils;
pub mod dom;
pub mod html;
pub mod timeout;
