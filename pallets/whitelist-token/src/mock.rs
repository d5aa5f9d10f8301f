use crate as pallet_whitelist_token;
use crate::Balance;
use frame_support::{
    derive_impl, parameter_types,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        WhitelistToken: pallet_whitelist_token,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_whitelist_token::Config for Test {
    type WeightInfo = ();
}

parameter_types! {
    pub const OwnerAccount: u64 = 1;
}

/// Zero account for `u64` ids.
pub const ZERO: u64 = 0;
/// Whitelisted holders funded at genesis by `new_test_ext`.
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
/// Never whitelisted at genesis.
pub const CHARLIE: u64 = 4;
pub const DAVE: u64 = 5;

pub const ALICE_GENESIS: u128 = 1_000_000;
pub const BOB_GENESIS: u128 = 500_000;

pub fn tokens(value: u128) -> Balance {
    Balance::from(value)
}

pub fn build_ext(genesis: pallet_whitelist_token::GenesisConfig<Test>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    genesis.assimilate_storage(&mut t).unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are not recorded in block 0.
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Owner plus two funded, whitelisted holders (ALICE, BOB).
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(pallet_whitelist_token::GenesisConfig::<Test> {
        owner: Some(OwnerAccount::get()),
        name: b"Test Token".to_vec(),
        symbol: b"TST".to_vec(),
        decimals: 6,
        whitelisted_accounts: vec![ALICE, BOB],
        initial_balances: vec![(ALICE, tokens(ALICE_GENESIS)), (BOB, tokens(BOB_GENESIS))],
    })
}

/// Freshly constructed ledger: default metadata, owner whitelisted, no supply.
pub fn new_bare_ext() -> sp_io::TestExternalities {
    build_ext(pallet_whitelist_token::GenesisConfig::<Test> {
        owner: Some(OwnerAccount::get()),
        ..Default::default()
    })
}
