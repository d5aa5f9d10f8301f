//! # Whitelist Token Pallet
//!
//! A fungible token whose transfers are restricted to a whitelist of
//! accounts, in the style of ERC-1404. A single owner account manages the
//! whitelist and controls supply through `mint` and `burn`.
//!
//! Every transfer-class call (`transfer`, `approve`, `transfer_from` and the
//! allowance adjusters) reads whitelist membership from storage at call time.
//! All checks run before the first storage write, so a rejected call leaves
//! balances, allowances, supply and the whitelist exactly as they were.

#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are still the public query surface of this pallet.
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use codec::Decode;
use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::TrailingZeroInput;
use sp_std::prelude::*;

pub use pallet::*;
pub use types::{Balance, RestrictionCode, UNKNOWN_RESTRICTION_MESSAGE};
pub use weights::WeightInfo;

mod types;
pub mod weights;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::whitelist-token";

/// Name used when the genesis config does not set one.
pub const DEFAULT_NAME: &[u8] = b"ERC1404";
/// Symbol used when the genesis config does not set one.
pub const DEFAULT_SYMBOL: &[u8] = b"WLT";
/// Decimals used when the genesis config does not set them.
pub const DEFAULT_DECIMALS: u8 = 18;

pub type MaxNameLen = ConstU32<64>;
pub type MaxSymbolLen = ConstU32<16>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// Weight information for extrinsics in this pallet.
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, MaxNameLen>, ValueQuery>;

    /// Token symbol
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, MaxSymbolLen>, ValueQuery>;

    #[pallet::storage]
    #[pallet::getter(fn decimals)]
    pub type Decimals<T> = StorageValue<_, u8, ValueQuery>;

    /// Sum of all balances.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, Balance, ValueQuery>;

    /// Account allowed to mint, burn and manage the whitelist.
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, Balance, ValueQuery>;

    /// Allowances, keyed by (holder, spender).
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        Balance,
        ValueQuery,
    >;

    /// Whitelisted accounts (can send/receive transfers)
    #[pallet::storage]
    #[pallet::getter(fn is_whitelisted)]
    pub type Whitelist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Value moved between accounts. Mints come from the zero account and
        /// burns go to it.
        Transfer { from: T::AccountId, to: T::AccountId, amount: Balance },
        /// Allowance of `spender` over `owner`'s balance set to `amount`.
        Approval { owner: T::AccountId, spender: T::AccountId, amount: Balance },
        /// Account added to whitelist
        Whitelisted { account: T::AccountId },
        /// Account removed from whitelist
        RemovedFromWhitelist { account: T::AccountId },
        /// Owner role moved to `new_owner`.
        OwnershipTransferred { previous_owner: T::AccountId, new_owner: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the owner.
        Unauthorized,
        /// Mint target is not whitelisted.
        NotWhitelisted,
        /// The zero account cannot be added to or removed from the whitelist.
        ZeroAddress,
        AlreadyWhitelisted,
        NotInWhitelist,
        /// Caller (or approving holder) is not whitelisted.
        SenderNotWhitelisted,
        /// Recipient (or spender, for approvals) is not whitelisted.
        RecipientNotWhitelisted,
        /// Holder whose funds `transfer_from` would move is not whitelisted.
        FromNotWhitelisted,
        InsufficientBalance,
        InsufficientAllowance,
        /// Supply, balance or allowance would exceed `U256::MAX`.
        Overflow,
        /// Total supply would drop below zero.
        Underflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Create `amount` new tokens on `account`. Owner only; `account` must
        /// be whitelisted.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::mint())]
        pub fn mint(origin: OriginFor<T>, account: T::AccountId, amount: Balance) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(Whitelist::<T>::get(&account), Error::<T>::NotWhitelisted);

            let new_supply =
                TotalSupply::<T>::get().checked_add(amount).ok_or(Error::<T>::Overflow)?;
            let new_balance =
                Balances::<T>::get(&account).checked_add(amount).ok_or(Error::<T>::Overflow)?;

            TotalSupply::<T>::put(new_supply);
            Balances::<T>::insert(&account, new_balance);

            log::debug!(target: LOG_TARGET, "minted {amount:?} to {account:?}");
            Self::deposit_event(Event::Transfer { from: Self::zero_account(), to: account, amount });
            Ok(())
        }

        /// Destroy `amount` tokens held by `account`. Owner only. The account
        /// does not need to be whitelisted.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::burn())]
        pub fn burn(origin: OriginFor<T>, account: T::AccountId, amount: Balance) -> DispatchResult {
            Self::ensure_owner(origin)?;

            let new_balance = Balances::<T>::get(&account)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientBalance)?;
            let new_supply =
                TotalSupply::<T>::get().checked_sub(amount).ok_or(Error::<T>::Underflow)?;

            Balances::<T>::insert(&account, new_balance);
            TotalSupply::<T>::put(new_supply);

            log::debug!(target: LOG_TARGET, "burned {amount:?} from {account:?}");
            Self::deposit_event(Event::Transfer { from: account, to: Self::zero_account(), amount });
            Ok(())
        }

        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, amount: Balance) -> DispatchResult {
            let sender = ensure_signed(origin)?;
            // Recipient first: a non-whitelisted recipient is always reported
            // as such, whatever the sender's status.
            ensure!(Whitelist::<T>::get(&to), Error::<T>::RecipientNotWhitelisted);
            ensure!(Whitelist::<T>::get(&sender), Error::<T>::SenderNotWhitelisted);

            Self::do_transfer(&sender, &to, amount)
        }

        /// Set the allowance of `spender` over the caller's balance to
        /// exactly `amount`.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, amount: Balance) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_approval_parties(&owner, &spender)?;

            Self::do_approve(owner, spender, amount);
            Ok(())
        }

        /// Move `amount` from `from` to `to`, spending the caller's allowance.
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            amount: Balance,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            ensure!(Whitelist::<T>::get(&spender), Error::<T>::SenderNotWhitelisted);
            ensure!(Whitelist::<T>::get(&from), Error::<T>::FromNotWhitelisted);
            ensure!(Whitelist::<T>::get(&to), Error::<T>::RecipientNotWhitelisted);

            let remaining = Allowances::<T>::get(&from, &spender)
                .checked_sub(amount)
                .ok_or(Error::<T>::InsufficientAllowance)?;

            Self::do_transfer(&from, &to, amount)?;
            Allowances::<T>::insert(&from, &spender, remaining);
            Ok(())
        }

        /// Owner only. The zero account is rejected.
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::add_to_whitelist())]
        pub fn add_to_whitelist(origin: OriginFor<T>, account: T::AccountId) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(account != Self::zero_account(), Error::<T>::ZeroAddress);
            ensure!(!Whitelist::<T>::get(&account), Error::<T>::AlreadyWhitelisted);

            Self::do_whitelist(account);
            Ok(())
        }

        /// Owner only. Existing balances and allowances of `account` are left
        /// in place; only future transfer-class calls touching it fail.
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::remove_from_whitelist())]
        pub fn remove_from_whitelist(
            origin: OriginFor<T>,
            account: T::AccountId,
        ) -> DispatchResult {
            Self::ensure_owner(origin)?;
            ensure!(account != Self::zero_account(), Error::<T>::ZeroAddress);
            ensure!(Whitelist::<T>::get(&account), Error::<T>::NotInWhitelist);

            Whitelist::<T>::remove(&account);
            log::debug!(target: LOG_TARGET, "removed {account:?} from whitelist");
            Self::deposit_event(Event::RemovedFromWhitelist { account });
            Ok(())
        }

        /// Hand the owner role to `new_owner`, whitelisting it if needed.
        #[pallet::call_index(7)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, new_owner: T::AccountId) -> DispatchResult {
            let previous_owner = Self::ensure_owner(origin)?;
            ensure!(new_owner != Self::zero_account(), Error::<T>::ZeroAddress);

            Owner::<T>::put(&new_owner);
            log::debug!(target: LOG_TARGET, "ownership moved from {previous_owner:?} to {new_owner:?}");
            Self::deposit_event(Event::OwnershipTransferred {
                previous_owner,
                new_owner: new_owner.clone(),
            });

            if !Whitelist::<T>::get(&new_owner) {
                Self::do_whitelist(new_owner);
            }
            Ok(())
        }

        #[pallet::call_index(8)]
        #[pallet::weight(T::WeightInfo::increase_allowance())]
        pub fn increase_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            added: Balance,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_approval_parties(&owner, &spender)?;

            let amount = Allowances::<T>::get(&owner, &spender)
                .checked_add(added)
                .ok_or(Error::<T>::Overflow)?;
            Self::do_approve(owner, spender, amount);
            Ok(())
        }

        #[pallet::call_index(9)]
        #[pallet::weight(T::WeightInfo::decrease_allowance())]
        pub fn decrease_allowance(
            origin: OriginFor<T>,
            spender: T::AccountId,
            subtracted: Balance,
        ) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            Self::ensure_approval_parties(&owner, &spender)?;

            let amount = Allowances::<T>::get(&owner, &spender)
                .checked_sub(subtracted)
                .ok_or(Error::<T>::InsufficientAllowance)?;
            Self::do_approve(owner, spender, amount);
            Ok(())
        }
    }

    #[pallet::genesis_config]
    pub struct GenesisConfig<T: Config> {
        /// Owner account, whitelisted automatically. Required.
        pub owner: Option<T::AccountId>,
        pub name: Vec<u8>,
        pub symbol: Vec<u8>,
        pub decimals: u8,
        /// Accounts to whitelist besides the owner
        pub whitelisted_accounts: Vec<T::AccountId>,
        /// Initial holdings (account, amount). Holders must be whitelisted.
        pub initial_balances: Vec<(T::AccountId, Balance)>,
    }

    impl<T: Config> Default for GenesisConfig<T> {
        fn default() -> Self {
            Self {
                owner: None,
                name: DEFAULT_NAME.to_vec(),
                symbol: DEFAULT_SYMBOL.to_vec(),
                decimals: DEFAULT_DECIMALS,
                whitelisted_accounts: Vec::new(),
                initial_balances: Vec::new(),
            }
        }
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            let name: BoundedVec<u8, MaxNameLen> =
                self.name.clone().try_into().expect("Token name too long (max 64 bytes)");
            TokenName::<T>::put(name);

            let symbol: BoundedVec<u8, MaxSymbolLen> =
                self.symbol.clone().try_into().expect("Token symbol too long (max 16 bytes)");
            TokenSymbol::<T>::put(symbol);

            Decimals::<T>::put(self.decimals);

            let zero = Pallet::<T>::zero_account();
            let owner = self.owner.as_ref().expect("Genesis owner must be set");
            assert!(owner != &zero, "Owner cannot be the zero account");
            Owner::<T>::put(owner);
            Whitelist::<T>::insert(owner, true);

            for account in &self.whitelisted_accounts {
                assert!(account != &zero, "Zero account cannot be whitelisted");
                Whitelist::<T>::insert(account, true);
            }

            let mut total = Balance::zero();
            for (account, amount) in &self.initial_balances {
                assert!(
                    Whitelist::<T>::get(account),
                    "Initial balance holder must be whitelisted"
                );
                Balances::<T>::mutate(account, |balance| {
                    *balance = balance.checked_add(*amount).expect("Initial balance overflow")
                });
                total = total.checked_add(*amount).expect("Initial total supply overflow");
            }
            TotalSupply::<T>::put(total);

            log::info!(
                target: LOG_TARGET,
                "genesis: {} whitelisted, {} funded, supply {total:?}",
                self.whitelisted_accounts.len() + 1,
                self.initial_balances.len(),
            );
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The reserved account used as counterparty of mint and burn events.
    pub fn zero_account() -> T::AccountId {
        T::AccountId::decode(&mut TrailingZeroInput::zeroes())
            .expect("infinite length input; no invalid inputs for type; qed")
    }

    /// ERC-1404 pre-flight check: the restriction a `transfer` of `amount`
    /// from `from` to `to` would hit, or `Success`.
    pub fn detect_transfer_restriction(
        from: &T::AccountId,
        to: &T::AccountId,
        amount: Balance,
    ) -> RestrictionCode {
        if !Whitelist::<T>::get(to) {
            RestrictionCode::RecipientNotWhitelisted
        } else if !Whitelist::<T>::get(from) {
            RestrictionCode::SenderNotWhitelisted
        } else if Balances::<T>::get(from) < amount {
            RestrictionCode::InsufficientBalance
        } else {
            RestrictionCode::Success
        }
    }

    /// Human readable text for a restriction code.
    pub fn message_for_transfer_restriction(code: u8) -> &'static str {
        RestrictionCode::try_from(code)
            .map(RestrictionCode::message)
            .unwrap_or(UNKNOWN_RESTRICTION_MESSAGE)
    }

    fn ensure_owner(origin: OriginFor<T>) -> Result<T::AccountId, DispatchError> {
        let who = ensure_signed(origin)?;
        ensure!(Owner::<T>::get().as_ref() == Some(&who), Error::<T>::Unauthorized);
        Ok(who)
    }

    fn ensure_approval_parties(owner: &T::AccountId, spender: &T::AccountId) -> DispatchResult {
        ensure!(Whitelist::<T>::get(owner), Error::<T>::SenderNotWhitelisted);
        ensure!(Whitelist::<T>::get(spender), Error::<T>::RecipientNotWhitelisted);
        Ok(())
    }

    /// Move `amount` between two balances. Whitelist checks are the caller's
    /// job; nothing is written unless both sides can be updated.
    fn do_transfer(from: &T::AccountId, to: &T::AccountId, amount: Balance) -> DispatchResult {
        let new_from = Balances::<T>::get(from)
            .checked_sub(amount)
            .ok_or(Error::<T>::InsufficientBalance)?;

        if from != to {
            let new_to =
                Balances::<T>::get(to).checked_add(amount).ok_or(Error::<T>::Overflow)?;
            Balances::<T>::insert(from, new_from);
            Balances::<T>::insert(to, new_to);
        }

        Self::deposit_event(Event::Transfer { from: from.clone(), to: to.clone(), amount });
        Ok(())
    }

    fn do_approve(owner: T::AccountId, spender: T::AccountId, amount: Balance) {
        Allowances::<T>::insert(&owner, &spender, amount);
        Self::deposit_event(Event::Approval { owner, spender, amount });
    }

    fn do_whitelist(account: T::AccountId) {
        Whitelist::<T>::insert(&account, true);
        log::debug!(target: LOG_TARGET, "whitelisted {account:?}");
        Self::deposit_event(Event::Whitelisted { account });
    }

    /// Ledger invariants: supply equals the sum of balances, and the zero
    /// account is never whitelisted.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), sp_runtime::TryRuntimeError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(Balance::zero(), |acc, balance| acc.checked_add(balance))
            .ok_or("sum of balances overflows")?;
        ensure!(sum == TotalSupply::<T>::get(), "total supply does not match sum of balances");
        ensure!(!Whitelist::<T>::get(Self::zero_account()), "zero account is whitelisted");
        Ok(())
    }
}
