// Intern applications and the company-side review workflow.

pub mod handlers;
pub mod queries;
