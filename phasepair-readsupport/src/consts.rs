pub const READSUPPORT_CMD: &str = "readsupport";
