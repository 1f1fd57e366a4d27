pub trait ConfigProvider: Send + Sync {
    fn bind_addr(&self) -> &str;
    fn port(&self) -> u16;
    fn monitor_enabled(&self) -> bool;
}
