mod session;

pub use self::session::MemorySessionStore;
