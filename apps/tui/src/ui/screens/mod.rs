pub mod home;
pub mod meta;
pub mod projects;
