pub use super::application::Entity as Application;
pub use super::task::Entity as Task;
pub use super::window::Entity as Window;
