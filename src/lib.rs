pub mod angle;
pub mod celestial;
pub mod constants;
pub mod conversions;
pub mod coordinates;
pub mod interval;
pub mod models;
pub mod observed_sky;
pub mod polynomial;
pub mod projection;
pub mod rigel_errors;
pub mod sky_params;
pub mod time;
