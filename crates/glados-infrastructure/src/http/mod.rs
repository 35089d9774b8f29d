mod glados;

pub use glados::GladosClient;
