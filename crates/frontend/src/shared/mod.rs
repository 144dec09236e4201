pub mod api_utils;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod page_frame;
