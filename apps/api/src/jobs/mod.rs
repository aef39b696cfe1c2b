// Job listings API and the sample catalog used for seeding.

pub mod handlers;
pub mod seed;
