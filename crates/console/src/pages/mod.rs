mod dashboard;
mod login;
mod register;
mod security_config;

pub use dashboard::DashboardPage;
pub use login::LoginPage;
pub use register::RegisterPage;
pub use security_config::SecurityConfigPage;
