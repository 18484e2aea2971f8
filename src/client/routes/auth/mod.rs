pub mod dashboard;
pub mod enrollment;
pub mod finances;
pub mod personal_info;
pub mod services;

pub use dashboard::Dashboard;
pub use enrollment::Enrollment;
pub use finances::Finances;
pub use personal_info::PersonalInfo;
pub use services::Services;
