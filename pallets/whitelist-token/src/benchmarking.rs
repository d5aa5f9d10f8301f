//! Benchmarking setup for pallet-whitelist-token

use super::*;

#[allow(unused)]
use crate::Pallet as WhitelistToken;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_core::U256;

/// Install `whitelisted_caller` as the whitelisted owner.
fn setup_owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = whitelisted_caller();
    Owner::<T>::put(&owner);
    Whitelist::<T>::insert(&owner, true);
    owner
}

/// Whitelist `account` and credit it with `amount`, keeping supply in step.
fn fund<T: Config>(account: &T::AccountId, amount: U256) {
    Whitelist::<T>::insert(account, true);
    Balances::<T>::insert(account, amount);
    TotalSupply::<T>::mutate(|supply| *supply = supply.saturating_add(amount));
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn mint() {
        let owner = setup_owner::<T>();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Whitelist::<T>::insert(&recipient, true);
        let amount = U256::from(1_000_000u64);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn burn() {
        let owner = setup_owner::<T>();
        let holder: T::AccountId = account("holder", 0, 0);
        fund::<T>(&holder, U256::from(10_000_000u64));

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), holder.clone(), U256::from(1_000_000u64));

        assert_eq!(Balances::<T>::get(&holder), U256::from(9_000_000u64));
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount = U256::from(1_000_000u64);

        fund::<T>(&caller, U256::from(10_000_000u64));
        Whitelist::<T>::insert(&recipient, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        let amount = U256::from(1_000_000u64);
        Whitelist::<T>::insert(&caller, true);
        Whitelist::<T>::insert(&spender, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), amount);

        assert_eq!(Allowances::<T>::get(&caller, &spender), amount);
    }

    #[benchmark]
    fn transfer_from() {
        let spender: T::AccountId = whitelisted_caller();
        let holder: T::AccountId = account("holder", 0, 0);
        let recipient: T::AccountId = account("recipient", 0, 0);
        let amount = U256::from(1_000_000u64);

        fund::<T>(&holder, U256::from(10_000_000u64));
        Whitelist::<T>::insert(&spender, true);
        Whitelist::<T>::insert(&recipient, true);
        Allowances::<T>::insert(&holder, &spender, amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), holder.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(Allowances::<T>::get(&holder, &spender), U256::zero());
    }

    #[benchmark]
    fn add_to_whitelist() {
        let owner = setup_owner::<T>();
        let account: T::AccountId = account("member", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), account.clone());

        assert_eq!(Whitelist::<T>::get(&account), true);
    }

    #[benchmark]
    fn remove_from_whitelist() {
        let owner = setup_owner::<T>();
        let account: T::AccountId = account("member", 0, 0);
        Whitelist::<T>::insert(&account, true);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), account.clone());

        assert_eq!(Whitelist::<T>::get(&account), false);
    }

    #[benchmark]
    fn transfer_ownership() {
        let owner = setup_owner::<T>();
        let new_owner: T::AccountId = account("new_owner", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), new_owner.clone());

        assert_eq!(Owner::<T>::get(), Some(new_owner.clone()));
        assert_eq!(Whitelist::<T>::get(&new_owner), true);
    }

    #[benchmark]
    fn increase_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        Whitelist::<T>::insert(&caller, true);
        Whitelist::<T>::insert(&spender, true);
        Allowances::<T>::insert(&caller, &spender, U256::from(1_000u64));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), U256::from(1_000u64));

        assert_eq!(Allowances::<T>::get(&caller, &spender), U256::from(2_000u64));
    }

    #[benchmark]
    fn decrease_allowance() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, 0);
        Whitelist::<T>::insert(&caller, true);
        Whitelist::<T>::insert(&spender, true);
        Allowances::<T>::insert(&caller, &spender, U256::from(2_000u64));

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), U256::from(1_000u64));

        assert_eq!(Allowances::<T>::get(&caller, &spender), U256::from(1_000u64));
    }

    impl_benchmark_test_suite!(WhitelistToken, crate::mock::new_test_ext(), crate::mock::Test);
}
