pub mod create;
pub mod delete;
pub mod list;
pub mod search;
pub mod show;
pub mod update;
pub mod utils;

// Re-export handler functions for use in routing
pub use create::post as beneficio_create;
pub use delete::delete as beneficio_delete;
pub use list::get as beneficio_list;
pub use search::get as beneficio_search;
pub use show::get as beneficio_show;
pub use update::put as beneficio_update;
