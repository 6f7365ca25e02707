pub mod detail_window;
pub mod result_list;
pub mod search_form;
pub mod toasts;

pub use search_form::SearchFormState;
pub use toasts::Toasts;
