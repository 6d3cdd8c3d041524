mod gym;

pub use gym::GymCommands;
