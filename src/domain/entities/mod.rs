pub mod certificate;
pub mod contact;
pub mod education;
pub mod fields;
pub mod image;
pub mod project;
pub mod response;
pub mod skill;
