//! Client-side route paths used by links, guards, and post-submit navigation.

pub const HOME: &str = "/";
pub const LOGIN: &str = "/login";
pub const REGISTER: &str = "/register";
pub const PROFILE: &str = "/profile";
