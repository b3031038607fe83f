pub mod job;
pub mod resource;
pub mod roadmap;
pub mod skill;
pub mod user;
