pub mod directory;

pub use directory::{ChannelDirectory, SerenityChannelDirectory};

#[cfg(test)]
mod test;
