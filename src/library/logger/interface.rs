use std::sync::Arc;

pub trait Logger: Send + Sync {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    /// Diagnostic output. Callers decide whether diagnostics are enabled.
    fn debug(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.info(&format!("[debug] {}", message))
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync>;
}
