/// Control actions supported by the Brent solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the solver and return the candidate just evaluated.
    StopEarly,
}
