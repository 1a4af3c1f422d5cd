// topicdeck services
// Services move state in and out of storage: the persistence adapter and the settings engine.

pub mod persistence;
pub mod settings_engine;
