//! Domain layer - business logic and services

pub mod catalog;
pub mod ledger;
pub mod repository;
pub mod scheduler;
pub mod service;
pub mod validation;

pub use catalog::MovieCatalog;
pub use ledger::BookingLedger;
pub use repository::{BookingRepository, MovieRepository, RepoError, RepoResult, ShowtimeRepository};
pub use scheduler::ShowtimeScheduler;
pub use service::Service;
