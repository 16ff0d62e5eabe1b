pub mod ai_tools;
pub mod home;
