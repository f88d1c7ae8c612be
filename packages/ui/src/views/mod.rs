mod modal_overlay;
pub use modal_overlay::{ConfirmDialog, ModalOverlay, PromptDialog};

mod user_management;
pub use user_management::UserManagementView;
