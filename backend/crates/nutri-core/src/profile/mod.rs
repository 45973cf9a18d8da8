pub mod profile_lifecycle;
