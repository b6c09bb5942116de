#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    /// Open the PID prompt.
    PromptKill,
    Kill(i32),
    None,
}
