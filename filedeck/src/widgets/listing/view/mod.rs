pub(crate) mod context_menu;
pub(crate) mod delete_confirm;
pub(crate) mod name_prompt;
pub(crate) mod table;
pub(crate) mod toolbar;
