mod add_todo_form;

pub use add_todo_form::AddTodoForm;
