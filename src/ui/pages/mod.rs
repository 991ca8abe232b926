pub mod duty;
pub mod simulator;

pub use duty::DutyPage;
pub use simulator::SimulatorPage;
