pub mod contact;
pub mod doctor;
pub mod patient;

pub use contact::ContactMessage;
pub use doctor::Doctor;
pub use patient::Patient;
