//! Page components for the credential gallery.

mod gallery;

pub use gallery::Gallery;
