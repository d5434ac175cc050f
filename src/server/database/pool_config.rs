#[derive(Debug, Clone)]
pub(crate) struct PoolConfig {
    /// connection pool size
    size: usize,
    /// connection string
    conn_str: String,
}

impl PoolConfig {
    pub fn new(size: usize, conn_str: String) -> Self {
        Self { size, conn_str }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn conn_str(&self) -> &str {
        &self.conn_str
    }
}
