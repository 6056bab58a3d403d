pub mod certificates;
pub mod contact;
pub mod education;
pub mod home;
pub mod projects;
pub mod skills;
pub mod system;
