mod error_message;
mod field_error;
mod todo_info;
mod todo_list;
mod user_info;

pub use error_message::ErrorMessage;
pub use field_error::FieldError;
pub use todo_info::TodoInfo;
pub use todo_list::TodoList;
pub use user_info::UserInfo;
