// topicdeck state managers
// Managers own the observable in-memory lists: history and favorites.

pub mod favorites_manager;
pub mod history_manager;
pub mod observable;
