pub mod filter_preset;
