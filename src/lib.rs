//! ReferralDesk command-line application: bootstrap and commands.

pub mod bootstrap;
pub mod cli;
