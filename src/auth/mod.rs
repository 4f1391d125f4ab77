pub mod extract;
pub mod jwt;
pub mod principal;

pub use principal::Principal;
