pub mod api_utils;
pub mod gateway;
pub mod icons;
