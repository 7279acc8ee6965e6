pub trait GetTechnologiesUseCase: Send + Sync {
    /// Deduplicated tags of the whole catalog, sorted.
    fn execute(&self) -> Vec<String>;
}
