// Public job board and company-owned job management.

pub mod handlers;
pub mod queries;
