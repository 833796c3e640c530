pub mod contact_repo;
pub mod doctor_repo;
pub mod patient_repo;
