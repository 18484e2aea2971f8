pub mod guard;
pub mod loading;
pub mod notification;
pub mod page;
pub mod shell;
pub mod sidebar;
pub mod toast;

pub use guard::{ProtectedLayout, ProtectedRoute, PublicLayout, PublicRoute};
pub use loading::Loading;
pub use notification::NotificationButton;
pub use page::Page;
pub use shell::{PortalShell, Shell};
pub use sidebar::Sidebar;
pub use toast::ToastStack;
