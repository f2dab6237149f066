pub mod flight;
pub mod route;
