//! Weights for pallet-whitelist-token.
//!
//! Hand-estimated from storage access counts until the benchmarks in
//! `benchmarking.rs` are run against a reference machine.

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-whitelist-token.
pub trait WeightInfo {
    fn mint() -> Weight;
    fn burn() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
    fn add_to_whitelist() -> Weight;
    fn remove_from_whitelist() -> Weight;
    fn transfer_ownership() -> Weight;
    fn increase_allowance() -> Weight;
    fn decrease_allowance() -> Weight;
}

/// Weights for pallet-whitelist-token using the runtime's configured DB weights.
pub struct SubstrateWeight<T>(PhantomData<T>);

const BASE: u64 = 10_000_000;

impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    // Reads: Owner, Whitelist, Balances, TotalSupply. Writes: Balances, TotalSupply.
    fn mint() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(T::DbWeight::get().reads_writes(4, 2))
    }
    // Reads: Owner, Balances, TotalSupply. Writes: Balances, TotalSupply.
    fn burn() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(T::DbWeight::get().reads_writes(3, 2))
    }
    // Reads: Whitelist x2, Balances x2. Writes: Balances x2.
    fn transfer() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(T::DbWeight::get().reads_writes(4, 2))
    }
    // Reads: Whitelist x2. Writes: Allowances.
    fn approve() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    // Reads: Whitelist x3, Allowances, Balances x2. Writes: Allowances, Balances x2.
    fn transfer_from() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(T::DbWeight::get().reads_writes(6, 3))
    }
    // Reads: Owner, Whitelist. Writes: Whitelist.
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    // Reads: Owner, Whitelist. Writes: Whitelist.
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(T::DbWeight::get().reads_writes(2, 1))
    }
    // Reads: Owner, Whitelist. Writes: Owner, Whitelist.
    fn transfer_ownership() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(T::DbWeight::get().reads_writes(2, 2))
    }
    // Reads: Whitelist x2, Allowances. Writes: Allowances.
    fn increase_allowance() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(T::DbWeight::get().reads_writes(3, 1))
    }
    // Reads: Whitelist x2, Allowances. Writes: Allowances.
    fn decrease_allowance() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(T::DbWeight::get().reads_writes(3, 1))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn mint() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(4, 2))
    }
    fn burn() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 2))
    }
    fn transfer() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(4, 2))
    }
    fn approve() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(6, 3))
    }
    fn add_to_whitelist() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn remove_from_whitelist() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 1))
    }
    fn transfer_ownership() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(2, 2))
    }
    fn increase_allowance() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
    fn decrease_allowance() -> Weight {
        Weight::from_parts(BASE, 0).saturating_add(RocksDbWeight::get().reads_writes(3, 1))
    }
}
