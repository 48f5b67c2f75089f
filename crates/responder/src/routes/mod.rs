pub mod fallback;
pub mod greeting;
pub mod health;
