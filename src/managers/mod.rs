// Bookmark Saver UI state components
// Each manager owns the transient state of one piece of the screen: form, search bar, list.

pub mod add_bookmark_form;
pub mod bookmark_list;
pub mod search_bar;
