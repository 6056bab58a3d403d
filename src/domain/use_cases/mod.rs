pub mod certificate;
pub mod contact;
pub mod education;
pub mod project;
pub mod skill;
