#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Run the endpoint failover sequence for the given article references.
    StartSearch { starting: String, ending: String },
}
