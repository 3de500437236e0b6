pub mod application;
pub mod company;
pub mod intern;
pub mod job;
pub mod user;
