//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `root` owns the liveness check and picks between `login` and `home`.
//! Pages hold presentation state only; auth behavior lives in `session`.

pub mod home;
pub mod login;
pub mod root;
