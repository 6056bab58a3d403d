pub mod cloudinary;
pub mod uploader;
