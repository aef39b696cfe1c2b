// Profile API: one profile per authenticated user.

pub mod handlers;
