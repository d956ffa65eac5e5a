use crate::tests::test_utils::*;
use crate::*;
use near_sdk::PromiseOrValue;
use near_sdk::json_types::U128;
use near_sdk::test_utils::get_logs;
use near_sdk::testing_env;

/// Supply 3 sold out for 300 total.
fn funded_contract() -> Contract {
    let mut contract = new_contract_with(test_config(3, 2, 100));
    activate(&mut contract);
    buy(&mut contract, buyer(), 2, 200).unwrap();
    buy(&mut contract, second_buyer(), 1, 100).unwrap();
    contract
}

fn withdraw_as(
    contract: &mut Contract,
    who: AccountId,
) -> Result<PromiseOrValue<U128>, BlindBoxError> {
    testing_env!(context_with_deposit(who, 1).build());
    contract.withdraw()
}

#[test]
fn withdraw_zeroes_proceeds_and_marks_in_flight() {
    let mut contract = funded_contract();
    assert_eq!(contract.get_proceeds().0, 300);

    let result = withdraw_as(&mut contract, operator()).unwrap();
    assert!(matches!(result, PromiseOrValue::Promise(_)));
    assert_eq!(contract.get_proceeds().0, 0);
    assert!(contract.is_withdrawal_in_flight());
}

#[test]
fn second_withdraw_while_in_flight_fails() {
    let mut contract = funded_contract();
    let pending = withdraw_as(&mut contract, operator()).unwrap();
    assert!(matches!(pending, PromiseOrValue::Promise(_)));

    let err = withdraw_as(&mut contract, operator()).err().unwrap();
    assert!(matches!(err, BlindBoxError::ReentrancyDetected(_)));
    assert_eq!(contract.get_proceeds().0, 0);
}

#[test]
fn settled_withdraw_then_repeat_returns_zero() {
    let mut contract = funded_contract();
    let pending = withdraw_as(&mut contract, operator()).unwrap();
    assert!(matches!(pending, PromiseOrValue::Promise(_)));

    testing_env!(context(contract_account()).build());
    let swept = contract.settle_withdrawal(&operator(), &operator(), 300, true);
    assert_eq!(swept.0, 300);
    assert!(!contract.is_withdrawal_in_flight());
    assert!(get_logs().iter().any(|l| l.contains("\"withdraw\"")));

    let result = withdraw_as(&mut contract, operator()).unwrap();
    assert!(matches!(result, PromiseOrValue::Value(U128(0))));
    assert!(!contract.is_withdrawal_in_flight());
}

#[test]
fn failed_transfer_restores_proceeds() {
    let mut contract = funded_contract();
    let pending = withdraw_as(&mut contract, operator()).unwrap();
    assert!(matches!(pending, PromiseOrValue::Promise(_)));

    // No promise result in unit context: the callback takes the failure path.
    testing_env!(context(contract_account()).build());
    let swept = contract.on_withdraw(operator(), operator(), U128(300));

    assert_eq!(swept.0, 0);
    assert_eq!(contract.get_proceeds().0, 300);
    assert!(!contract.is_withdrawal_in_flight());
    assert!(get_logs().iter().any(|l| l.contains("withdraw_failed")));
}

#[test]
fn purchases_during_withdrawal_accumulate() {
    let mut contract = new_contract();
    activate(&mut contract);
    buy(&mut contract, buyer(), 1, 100).unwrap();
    let pending = withdraw_as(&mut contract, operator()).unwrap();
    assert!(matches!(pending, PromiseOrValue::Promise(_)));

    buy(&mut contract, second_buyer(), 1, 100).unwrap();
    assert_eq!(contract.get_proceeds().0, 100);

    testing_env!(context(contract_account()).build());
    contract.settle_withdrawal(&operator(), &operator(), 100, false);
    assert_eq!(contract.get_proceeds().0, 200);
}

#[test]
fn withdraw_with_nothing_held_returns_zero() {
    let mut contract = new_contract();
    let result = withdraw_as(&mut contract, operator()).unwrap();
    assert!(matches!(result, PromiseOrValue::Value(U128(0))));
    assert!(!contract.is_withdrawal_in_flight());
}

#[test]
fn withdraw_by_non_operator_fails() {
    let mut contract = funded_contract();
    let err = withdraw_as(&mut contract, buyer()).err().unwrap();
    assert!(matches!(err, BlindBoxError::Unauthorized(_)));
    assert_eq!(contract.get_proceeds().0, 300);
}

#[test]
fn withdraw_requires_yocto() {
    let mut contract = funded_contract();
    testing_env!(context(operator()).build());
    let err = contract.withdraw().err().unwrap();
    assert!(matches!(err, BlindBoxError::InsufficientDeposit(_)));
}

#[test]
fn withdraw_allowed_in_any_phase() {
    let mut contract = funded_contract();
    end_sale(&mut contract, "ipfs://x/");
    let result = withdraw_as(&mut contract, operator()).unwrap();
    assert!(matches!(result, PromiseOrValue::Promise(_)));
}
